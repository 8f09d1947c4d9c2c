//! DIMENSA Core - Exact unit algebra and conversion
//!
//! This crate defines the dimensional-analysis engine:
//! - Exact rational exponents (ExactRational)
//! - Dimension vectors over the seven SI base quantities
//! - Opaque, immutable units with linear scale and affine zero
//! - Compatibility-checked, affine-aware conversion

pub mod rational;
pub mod dimension;
pub mod unit;
pub mod convert;
pub mod error;

pub use rational::*;
pub use dimension::*;
pub use unit::*;
pub use convert::*;
pub use error::*;
