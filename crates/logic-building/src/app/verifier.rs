//! Self-check execution
//!
//! Units share no state, so their checks can run on the rayon pool in any
//! order. Reports keep catalogue order either way.

use crate::app::catalogue::Unit;
use crate::error::CheckFailure;
use log::{debug, info, warn};
use rayon::prelude::*;

/// Outcome of running a set of self-checks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    /// Qualified names of units whose examples all matched
    pub passed: Vec<String>,
    /// Qualified names of failing units with the first mismatch
    pub failed: Vec<(String, CheckFailure)>,
}

impl VerificationReport {
    /// Total number of units checked
    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len()
    }

    /// True when no unit failed
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    fn from_outcomes(outcomes: Vec<(String, Result<(), CheckFailure>)>) -> Self {
        let mut report = Self::default();
        for (name, outcome) in outcomes {
            match outcome {
                Ok(()) => report.passed.push(name),
                Err(failure) => report.failed.push((name, failure)),
            }
        }
        info!(
            "Verified {} units: {} passed, {} failed",
            report.total(),
            report.passed.len(),
            report.failed.len()
        );
        report
    }
}

fn run_unit(unit: &Unit) -> (String, Result<(), CheckFailure>) {
    let name = unit.qualified_name();
    debug!("Checking {}", name);
    let outcome = (unit.check)();
    if let Err(ref failure) = outcome {
        warn!("{} failed: {}", name, failure);
    }
    (name, outcome)
}

/// Run the self-checks one after another
pub fn verify(units: &[Unit]) -> VerificationReport {
    VerificationReport::from_outcomes(units.iter().map(run_unit).collect())
}

/// Run the self-checks in parallel
pub fn verify_parallel(units: &[Unit]) -> VerificationReport {
    VerificationReport::from_outcomes(units.par_iter().map(run_unit).collect())
}
