//! Application layer - Self-check use cases
//!
//! This module attaches literal examples to every domain unit and runs them.

pub mod catalogue;
pub mod verifier;
