//! Exact rational numbers for dimension exponents
//!
//! Exponents must survive arbitrary chains of `mul`, `inv` and `pow`
//! without drift, so they are kept as reduced integer fractions:
//! - Denominator is always strictly positive
//! - Numerator and denominator are coprime
//! - Equality and hashing are structural on the canonical pair

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_rational::Ratio;

/// Exact fraction `numer / denom` in lowest terms
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExactRational(Ratio<i64>);

impl ExactRational {
    pub const ZERO: ExactRational = ExactRational(Ratio::new_raw(0, 1));
    pub const ONE: ExactRational = ExactRational(Ratio::new_raw(1, 1));

    /// Rational equal to `n / 1`
    #[inline]
    pub const fn from_int(n: i64) -> Self {
        ExactRational(Ratio::new_raw(n, 1))
    }

    /// Reduced fraction `numer / denom`.
    ///
    /// # Panics
    /// Panics if `denom == 0`. A zero denominator can only come from a
    /// malformed literal at the call site.
    pub fn over(numer: i64, denom: i64) -> Self {
        assert!(denom != 0, "ExactRational::over: zero denominator");
        ExactRational(Ratio::new(numer, denom))
    }

    #[inline]
    pub fn numer(self) -> i64 {
        *self.0.numer()
    }

    #[inline]
    pub fn denom(self) -> i64 {
        *self.0.denom()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.numer() == 0
    }

    #[inline]
    pub fn is_integer(self) -> bool {
        self.0.is_integer()
    }

    /// Exact sum
    pub fn add(self, rhs: Self) -> Self {
        ExactRational(self.0 + rhs.0)
    }

    /// Exact negation
    pub fn neg(self) -> Self {
        ExactRational(-self.0)
    }

    /// Exact product
    pub fn mul(self, rhs: Self) -> Self {
        ExactRational(self.0 * rhs.0)
    }

    /// Exact difference
    pub fn sub(self, rhs: Self) -> Self {
        ExactRational(self.0 - rhs.0)
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    /// Panics on zero, like `over(1, 0)`.
    pub fn recip(self) -> Self {
        assert!(!self.is_zero(), "ExactRational::recip: reciprocal of zero");
        ExactRational(self.0.recip())
    }

    /// Floating-point approximation, used only where an exponent drives `powf`
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.numer() as f64 / self.denom() as f64
    }
}

impl Default for ExactRational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for ExactRational {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl From<i32> for ExactRational {
    fn from(n: i32) -> Self {
        Self::from_int(n as i64)
    }
}

impl Add for ExactRational {
    type Output = ExactRational;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        ExactRational::add(self, rhs)
    }
}

impl Sub for ExactRational {
    type Output = ExactRational;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        ExactRational::sub(self, rhs)
    }
}

impl Mul for ExactRational {
    type Output = ExactRational;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        ExactRational::mul(self, rhs)
    }
}

impl Neg for ExactRational {
    type Output = ExactRational;

    #[inline]
    fn neg(self) -> Self::Output {
        ExactRational::neg(self)
    }
}

impl fmt::Debug for ExactRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q({}/{})", self.numer(), self.denom())
    }
}

impl fmt::Display for ExactRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}
