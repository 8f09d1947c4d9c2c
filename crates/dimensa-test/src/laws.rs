//! Algebraic law checkers
//!
//! Each checker returns `Ok(())` when the law holds for the given units and
//! a [`LawViolation`] naming the law otherwise. Dimension vectors are
//! compared exactly; prefixes with the harness tolerance.

use dimensa_core::{affine_unit, convert, inv, mul, pow, unity, Dimension, ExactRational, Unit};
use thiserror::Error;

use crate::HarnessConfig;

/// A broken algebraic law
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LawViolation {
    #[error("compatibility is not reflexive for [{0}]")]
    NotReflexive(Dimension),

    #[error("compatibility is not symmetric between [{0}] and [{1}]")]
    NotSymmetric(Dimension, Dimension),

    #[error("compatibility is not transitive through [{0}]")]
    NotTransitive(Dimension),

    #[error("unity is not an identity for [{0}]")]
    IdentityBroken(Dimension),

    #[error("inverse does not cancel [{0}]")]
    InverseBroken(Dimension),

    #[error("mul is not commutative on dimensions")]
    NotCommutative,

    #[error("mul is not associative on dimensions")]
    NotAssociative,

    #[error("pow by {power} drifted: expected [{expected}], got [{actual}]")]
    PowerDrift {
        power: ExactRational,
        expected: Dimension,
        actual: Dimension,
    },

    #[error("convert(x, U, U) returned {actual:?} for x = {quantity}")]
    IdentityConversion { quantity: f64, actual: Option<f64> },
}

/// compatible(A,A); compatible(A,B) ⇔ compatible(B,A);
/// compatible(A,B) ∧ compatible(B,C) ⇒ compatible(A,C)
pub fn check_equivalence(a: &Unit, b: &Unit, c: &Unit) -> Result<(), LawViolation> {
    for u in [a, b, c] {
        if !u.is_compatible(u) {
            return Err(LawViolation::NotReflexive(u.dimension()));
        }
    }
    if a.is_compatible(b) != b.is_compatible(a) {
        return Err(LawViolation::NotSymmetric(a.dimension(), b.dimension()));
    }
    if a.is_compatible(b) && b.is_compatible(c) && !a.is_compatible(c) {
        return Err(LawViolation::NotTransitive(b.dimension()));
    }
    Ok(())
}

/// `mul(A, unity) == A == mul(unity, A)` on dimension and prefix.
/// `mul` resets the affine zero, so `A` is compared without it.
pub fn check_identity(a: &Unit, config: &HarnessConfig) -> Result<(), LawViolation> {
    let linear = affine_unit(0.0, a);
    for product in [mul(a, &unity()), mul(&unity(), a)] {
        if !same_linear_unit(&product, &linear, config) {
            return Err(LawViolation::IdentityBroken(a.dimension()));
        }
    }
    Ok(())
}

/// `mul(A, inv(A))` is dimensionless with prefix 1, from both sides
pub fn check_inverse(a: &Unit, config: &HarnessConfig) -> Result<(), LawViolation> {
    for product in [mul(a, &inv(a)), mul(&inv(a), a)] {
        if !same_linear_unit(&product, &unity(), config) {
            return Err(LawViolation::InverseBroken(a.dimension()));
        }
    }
    Ok(())
}

/// Commutativity and associativity of `mul` on dimension vectors
pub fn check_mul_laws(a: &Unit, b: &Unit, c: &Unit) -> Result<(), LawViolation> {
    if mul(a, b).dimension() != mul(b, a).dimension() {
        return Err(LawViolation::NotCommutative);
    }
    if mul(&mul(a, b), c).dimension() != mul(a, &mul(b, c)).dimension() {
        return Err(LawViolation::NotAssociative);
    }
    Ok(())
}

/// `pow(A, r)` scales every exponent by `r` exactly, and `pow(A, 1) == A`
pub fn check_power_linearity(a: &Unit, power: ExactRational) -> Result<(), LawViolation> {
    let expected = a.dimension().pow(power);
    let actual = pow(a, power).dimension();
    if actual != expected {
        return Err(LawViolation::PowerDrift {
            power,
            expected,
            actual,
        });
    }
    let once = pow(a, ExactRational::ONE);
    if once != *a {
        return Err(LawViolation::PowerDrift {
            power: ExactRational::ONE,
            expected: a.dimension(),
            actual: once.dimension(),
        });
    }
    Ok(())
}

/// `convert(x, U, U) == Some(x)` exactly for a linear unit
pub fn check_identity_conversion(quantity: f64, u: &Unit) -> Result<(), LawViolation> {
    let actual = convert(quantity, u, u);
    if u.is_affine() || actual == Some(quantity) {
        Ok(())
    } else {
        Err(LawViolation::IdentityConversion { quantity, actual })
    }
}

/// Same dimension, and one unit of `a` converts to one unit of `b`
fn same_linear_unit(a: &Unit, b: &Unit, config: &HarnessConfig) -> bool {
    convert(1.0, a, b).map_or(false, |v| config.approx_eq(v, 1.0))
}
