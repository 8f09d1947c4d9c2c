//! DIMENSA Test Harness - Scenario runs and law checking
//!
//! This crate provides:
//! - Literal conversion scenarios with a configurable tolerance
//! - Checkers for the algebraic laws of the unit algebra
//! - Seeded random conversion sweeps

pub mod scenario;
pub mod laws;
pub mod sweep;

pub use scenario::*;
pub use laws::*;
pub use sweep::*;
