//! Infrastructure layer - Output handling
//!
//! The only I/O in the crate: emitting print-demonstration transcripts.

pub mod transcript;
