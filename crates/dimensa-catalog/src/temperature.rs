//! Temperature scales
//!
//! Affine units relative to the kelvin. `zero` is the position of each
//! scale's numeric zero, in kelvin, above absolute zero.

use dimensa_core::{affine_unit, scale, Unit};

use crate::si::kelvin;

/// Degree Celsius (°C)
pub fn celsius() -> Unit {
    affine_unit(273.15, &kelvin())
}

/// Degree Fahrenheit (°F)
pub fn fahrenheit() -> Unit {
    affine_unit(255.372, &scale(5.0 / 9.0, &kelvin()))
}

/// Degree Rankine (°R) - Fahrenheit-sized degrees from absolute zero
pub fn rankine() -> Unit {
    scale(5.0 / 9.0, &kelvin())
}

/// Degree Réaumur (°Ré) - built on Celsius, keeps its zero
pub fn reaumur() -> Unit {
    scale(100.0 / 80.0, &celsius())
}
