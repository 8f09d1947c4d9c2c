//! Unit conversion
//!
//! Conversion maps a quantity to its absolute physical magnitude in the
//! shared base dimension, then back into the target unit's numbering:
//!
//! ```text
//! to = ((q * from.prefix + from.zero) - to.zero) / to.prefix
//! ```
//!
//! The formula is evaluated in that order for every pair, so extreme
//! prefixes on both sides cancel instead of overflowing through their
//! ratio. A unit converted to an identical unit returns the quantity
//! unchanged. The dimension vectors must match exactly. No rounding and no
//! tolerance is applied.

use std::fmt;

use tracing::{debug, trace};

use crate::{DimensaError, DimensaResult, Unit};

/// Check if two units share conversion eligibility
#[inline]
pub fn is_compatible(a: &Unit, b: &Unit) -> bool {
    a.is_compatible(b)
}

/// Convert `quantity` from `from` to `to`, returning `None` if the units
/// are dimensionally incompatible
pub fn convert(quantity: f64, from: &Unit, to: &Unit) -> Option<f64> {
    try_convert(quantity, from, to).ok()
}

/// Convert `quantity` from `from` to `to`, reporting both dimension vectors
/// on mismatch
pub fn try_convert(quantity: f64, from: &Unit, to: &Unit) -> DimensaResult<f64> {
    if !from.is_compatible(to) {
        debug!(
            from = %from.dimension(),
            to = %to.dimension(),
            "rejected conversion between incompatible dimensions"
        );
        return Err(DimensaError::IncompatibleDimensions {
            from: from.dimension(),
            to: to.dimension(),
        });
    }

    if from.prefix() == to.prefix() && from.zero() == to.zero() {
        trace!(quantity, dimension = %from.dimension(), "identity conversion");
        return Ok(quantity);
    }

    let absolute = quantity * from.prefix() + from.zero();
    let result = (absolute - to.zero()) / to.prefix();
    trace!(quantity, result, dimension = %from.dimension(), "converted");
    Ok(result)
}

/// A scalar paired with the unit it is expressed in
#[derive(Clone, Copy, PartialEq)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Re-express in `unit`, or `None` if incompatible
    pub fn to(&self, unit: &Unit) -> Option<Quantity> {
        self.try_to(unit).ok()
    }

    /// Re-express in `unit`
    pub fn try_to(&self, unit: &Unit) -> DimensaResult<Quantity> {
        let value = try_convert(self.value, &self.unit, unit)?;
        Ok(Quantity::new(value, *unit))
    }
}

impl fmt::Debug for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity({} [{}])", self.value, self.unit.dimension())
    }
}
