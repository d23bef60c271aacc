//! logic-building - Self-verifying catalogue of small numeric and string algorithms
//!
//! This crate provides:
//! - Pure algorithm units, often in several interchangeable techniques per problem
//! - A catalogue of literal example checks attached to every unit
//! - A verifier that runs those checks sequentially or in parallel

pub mod constants;
pub mod error;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use app::catalogue::{Unit, catalogue, families, find};
pub use app::verifier::{VerificationReport, verify, verify_parallel};
pub use error::{CheckFailure, LogicError};
