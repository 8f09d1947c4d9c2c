//! Unit algebra
//!
//! A [`Unit`] is an immutable value made of:
//! - a dimension vector of exact exponents
//! - `prefix`: linear scale relative to the SI base combination
//! - `zero`: affine offset, in base units, of the unit's numeric zero
//!
//! Fields are private. Units are built from [`Unit::unity`] and the seven
//! base constructors, then composed with `scale`, `mul`, `inv`, `per`,
//! `pow` and `affine_unit`. Every operation returns a new value.

use std::fmt;
use std::ops::{Div, Mul};

use crate::{BaseDimension, Dimension, ExactRational};

/// Physical unit: dimension vector + linear scale + affine zero
#[derive(Clone, Copy, PartialEq)]
pub struct Unit {
    dimension: Dimension,
    prefix: f64,
    zero: f64,
}

impl Unit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Dimensionless identity: all-zero exponents, prefix 1, zero 0
    pub const fn unity() -> Self {
        Unit {
            dimension: Dimension::DIMENSIONLESS,
            prefix: 1.0,
            zero: 0.0,
        }
    }

    /// Primitive generator for one base quantity
    pub fn base(axis: BaseDimension) -> Self {
        Unit {
            dimension: Dimension::base(axis),
            prefix: 1.0,
            zero: 0.0,
        }
    }

    pub fn base_length() -> Self {
        Self::base(BaseDimension::Length)
    }

    pub fn base_time() -> Self {
        Self::base(BaseDimension::Time)
    }

    pub fn base_mass() -> Self {
        Self::base(BaseDimension::Mass)
    }

    pub fn base_temperature() -> Self {
        Self::base(BaseDimension::Temperature)
    }

    pub fn base_amount() -> Self {
        Self::base(BaseDimension::Amount)
    }

    pub fn base_current() -> Self {
        Self::base(BaseDimension::Current)
    }

    pub fn base_luminous_intensity() -> Self {
        Self::base(BaseDimension::LuminousIntensity)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Dimension vector (read-only)
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Check if two units measure the same kind of quantity
    #[inline]
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Whether the unit's numeric zero differs from physical zero
    #[inline]
    pub fn is_affine(&self) -> bool {
        self.zero != 0.0
    }

    #[inline]
    pub(crate) fn prefix(&self) -> f64 {
        self.prefix
    }

    #[inline]
    pub(crate) fn zero(&self) -> f64 {
        self.zero
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Multiply the linear scale by `factor`; dimension and zero are kept.
    ///
    /// A zero factor is accepted and yields a degenerate unit.
    pub fn scale(&self, factor: f64) -> Unit {
        Unit {
            dimension: self.dimension,
            prefix: self.prefix * factor,
            zero: self.zero,
        }
    }

    /// Product of two units. The affine zero is reset to 0.
    pub fn mul(&self, other: &Unit) -> Unit {
        Unit {
            dimension: self.dimension.mul(&other.dimension),
            prefix: self.prefix * other.prefix,
            zero: 0.0,
        }
    }

    /// Reciprocal unit. The affine zero is reset to 0; a zero prefix
    /// becomes infinite.
    pub fn inv(&self) -> Unit {
        Unit {
            dimension: self.dimension.recip(),
            prefix: 1.0 / self.prefix,
            zero: 0.0,
        }
    }

    /// Quotient `self / denominator`
    pub fn per(&self, denominator: &Unit) -> Unit {
        self.mul(&denominator.inv())
    }

    /// Raise to an exact rational power.
    ///
    /// Exponents are scaled exactly; `prefix` and `zero` are raised with
    /// `powf`. Raising `zero` has no clear physical meaning unless it is 0,
    /// and `0^0 = 1` makes `pow(u, 0)` carry `zero = 1`.
    pub fn pow(&self, power: ExactRational) -> Unit {
        let p = power.to_f64();
        Unit {
            dimension: self.dimension.pow(power),
            prefix: self.prefix.powf(p),
            zero: self.zero.powf(p),
        }
    }

    /// `n`-th root, i.e. `pow(1/n)`
    pub fn root(&self, n: i64) -> Unit {
        self.pow(ExactRational::over(1, n))
    }

    /// Same dimension and prefix, numeric zero placed `new_zero` base units
    /// above physical zero
    pub fn affine_unit(&self, new_zero: f64) -> Unit {
        Unit {
            dimension: self.dimension,
            prefix: self.prefix,
            zero: new_zero,
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::unity()
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("dimension", &self.dimension)
            .field("prefix", &self.prefix)
            .field("zero", &self.zero)
            .finish()
    }
}

impl Mul for Unit {
    type Output = Unit;

    #[inline]
    fn mul(self, rhs: Unit) -> Self::Output {
        Unit::mul(&self, &rhs)
    }
}

impl Mul<&Unit> for &Unit {
    type Output = Unit;

    #[inline]
    fn mul(self, rhs: &Unit) -> Self::Output {
        Unit::mul(self, rhs)
    }
}

impl Div for Unit {
    type Output = Unit;

    #[inline]
    fn div(self, rhs: Unit) -> Self::Output {
        self.per(&rhs)
    }
}

impl Div<&Unit> for &Unit {
    type Output = Unit;

    #[inline]
    fn div(self, rhs: &Unit) -> Self::Output {
        self.per(rhs)
    }
}

// ============================================================================
// Free-function API
// ============================================================================

/// Dimensionless identity unit
pub fn unity() -> Unit {
    Unit::unity()
}

pub fn base_length() -> Unit {
    Unit::base_length()
}

pub fn base_time() -> Unit {
    Unit::base_time()
}

pub fn base_mass() -> Unit {
    Unit::base_mass()
}

pub fn base_temperature() -> Unit {
    Unit::base_temperature()
}

pub fn base_amount() -> Unit {
    Unit::base_amount()
}

pub fn base_current() -> Unit {
    Unit::base_current()
}

pub fn base_luminous_intensity() -> Unit {
    Unit::base_luminous_intensity()
}

/// `factor` times `unit`
pub fn scale(factor: f64, unit: &Unit) -> Unit {
    unit.scale(factor)
}

pub fn mul(a: &Unit, b: &Unit) -> Unit {
    a.mul(b)
}

pub fn inv(unit: &Unit) -> Unit {
    unit.inv()
}

/// `numerator / denominator`
pub fn per(numerator: &Unit, denominator: &Unit) -> Unit {
    numerator.per(denominator)
}

pub fn pow(unit: &Unit, exponent: ExactRational) -> Unit {
    unit.pow(exponent)
}

/// `unit` with its numeric zero moved to `zero_offset` base units
pub fn affine_unit(zero_offset: f64, unit: &Unit) -> Unit {
    unit.affine_unit(zero_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn q(n: i64) -> ExactRational {
        ExactRational::from_int(n)
    }

    #[test]
    fn test_unity_is_identity() {
        let newton = base_mass() * base_length() / base_time().pow(q(2));
        assert_eq!(mul(&newton, &unity()), newton);
        assert_eq!(mul(&unity(), &newton), newton);
    }

    #[test]
    fn test_scale_keeps_dimension_and_zero() {
        let celsius = affine_unit(273.15, &base_temperature());
        let scaled = scale(1.25, &celsius);
        assert!(scaled.is_compatible(&celsius));
        assert_eq!(scaled.prefix(), 1.25);
        assert_eq!(scaled.zero(), 273.15);
    }

    #[test]
    fn test_mul_and_inv_reset_zero() {
        let celsius = affine_unit(273.15, &base_temperature());
        assert_eq!(mul(&celsius, &celsius).zero(), 0.0);
        assert_eq!(inv(&celsius).zero(), 0.0);
        assert_eq!(per(&celsius, &base_time()).zero(), 0.0);
    }

    #[test]
    fn test_inv_is_inverse() {
        let km = scale(1000.0, &base_length());
        let product = mul(&km, &inv(&km));
        assert!(product.dimension().is_dimensionless());
        assert_eq!(product.prefix(), 1.0);
    }

    #[test]
    fn test_inv_of_zero_prefix_is_infinite() {
        let degenerate = scale(0.0, &base_length());
        assert!(inv(&degenerate).prefix().is_infinite());
    }

    #[test]
    fn test_pow_identity_and_zero() {
        let litre = scale(0.001, &base_length().pow(q(3)));
        assert_eq!(pow(&litre, q(1)), litre);

        let none = pow(&litre, q(0));
        assert!(none.dimension().is_dimensionless());
        assert_eq!(none.prefix(), 1.0);
    }

    #[test]
    fn test_pow_zero_carries_powf_of_affine_zero() {
        // 0^0 == 1 under powf
        let m0 = pow(&base_length(), q(0));
        assert_eq!(m0.zero(), 1.0);
    }

    #[test]
    fn test_pow_raises_affine_zero() {
        let celsius = affine_unit(273.15, &base_temperature());
        let squared = pow(&celsius, q(2));
        assert_eq!(squared.zero(), 273.15f64.powf(2.0));
        assert_eq!(pow(&celsius, q(1)).zero(), 273.15);

        let below = affine_unit(-40.0, &base_temperature());
        assert!(pow(&below, ExactRational::over(1, 2)).zero().is_nan());
        assert_eq!(pow(&below, q(3)).zero(), (-40.0f64).powf(3.0));
    }

    #[test]
    fn test_square_root_unit() {
        let area = scale(4.0, &base_length().pow(q(2)));
        let side = area.root(2);
        assert_eq!(side.dimension(), base_length().dimension());
        assert_eq!(side.prefix(), 2.0);
    }

    #[test]
    fn test_cube_then_cube_root_cancels_exactly() {
        let m = base_length();
        let cubed = m.pow(q(3));
        let back = cubed.pow(ExactRational::over(1, 3));
        assert_eq!(back.dimension(), m.dimension());
        assert!(mul(&cubed, &inv(&cubed)).dimension().is_dimensionless());
    }

    #[test]
    fn test_affine_unit_replaces_zero() {
        let kelvin = base_temperature();
        let celsius = affine_unit(273.15, &kelvin);
        assert!(celsius.is_affine());
        assert!(!kelvin.is_affine());
        assert_eq!(celsius.prefix(), kelvin.prefix());
        assert_eq!(affine_unit(0.0, &celsius), kelvin);
    }

    fn arb_unit() -> impl Strategy<Value = Unit> {
        (
            prop::array::uniform7(-4i64..=4),
            prop::array::uniform7(1i64..=3),
            0.001f64..1000.0,
        )
            .prop_map(|(nums, dens, prefix)| {
                BaseDimension::all()
                    .iter()
                    .zip(nums.iter().zip(dens.iter()))
                    .fold(scale(prefix, &unity()), |acc, (&axis, (&n, &d))| {
                        mul(&acc, &pow(&Unit::base(axis), ExactRational::over(n, d)))
                    })
            })
    }

    proptest! {
        #[test]
        fn prop_mul_commutes_on_dimension(a in arb_unit(), b in arb_unit()) {
            prop_assert_eq!(mul(&a, &b).dimension(), mul(&b, &a).dimension());
        }

        #[test]
        fn prop_mul_associates_on_dimension(a in arb_unit(), b in arb_unit(), c in arb_unit()) {
            prop_assert_eq!(
                mul(&mul(&a, &b), &c).dimension(),
                mul(&a, &mul(&b, &c)).dimension()
            );
        }

        #[test]
        fn prop_inv_cancels_dimension(a in arb_unit()) {
            prop_assert!(mul(&a, &inv(&a)).dimension().is_dimensionless());
            prop_assert!(mul(&inv(&a), &a).dimension().is_dimensionless());
        }

        #[test]
        fn prop_pow_scales_exponents_exactly(
            a in arb_unit(), n in -5i64..=5, d in 1i64..=5,
        ) {
            let r = ExactRational::over(n, d);
            let powered = pow(&a, r);
            for &axis in BaseDimension::all() {
                prop_assert_eq!(
                    powered.dimension().exponent(axis),
                    a.dimension().exponent(axis) * r
                );
            }
        }

        #[test]
        fn prop_repeated_root_round_trip_has_no_drift(a in arb_unit(), n in 1i64..=7) {
            let mut acc = unity();
            let root = a.root(n);
            for _ in 0..n {
                acc = mul(&acc, &root);
            }
            prop_assert_eq!(acc.dimension(), a.dimension());
        }
    }
}
