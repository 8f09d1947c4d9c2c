//! Dimension vectors
//!
//! Every unit carries the exponents of the seven SI base quantities:
//! - L: Length
//! - T: Time
//! - M: Mass
//! - Θ: Thermodynamic temperature
//! - N: Amount of substance
//! - I: Electric current
//! - J: Luminous intensity
//!
//! Exponents are [`ExactRational`], so compatibility is decided by exact
//! equality and never by a tolerance.

use std::fmt;

use crate::ExactRational;

/// One of the seven base quantities
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BaseDimension {
    Length = 0,
    Time = 1,
    Mass = 2,
    Temperature = 3,
    Amount = 4,
    Current = 5,
    LuminousIntensity = 6,
}

impl BaseDimension {
    /// Number of base quantities
    pub const COUNT: usize = 7;

    /// Get all base quantities in vector order
    pub fn all() -> &'static [BaseDimension; BaseDimension::COUNT] {
        &[
            BaseDimension::Length,
            BaseDimension::Time,
            BaseDimension::Mass,
            BaseDimension::Temperature,
            BaseDimension::Amount,
            BaseDimension::Current,
            BaseDimension::LuminousIntensity,
        ]
    }

    /// Dimension symbol
    pub fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Time => "T",
            BaseDimension::Mass => "M",
            BaseDimension::Temperature => "Θ",
            BaseDimension::Amount => "N",
            BaseDimension::Current => "I",
            BaseDimension::LuminousIntensity => "J",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// The seven-tuple of exact exponents identifying a physical kind
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    exponents: [ExactRational; BaseDimension::COUNT],
}

impl Dimension {
    /// All exponents zero (pure number)
    pub const DIMENSIONLESS: Dimension = Dimension {
        exponents: [ExactRational::ZERO; BaseDimension::COUNT],
    };

    /// Exponent 1 on `axis`, 0 elsewhere
    pub fn base(axis: BaseDimension) -> Self {
        let mut exponents = [ExactRational::ZERO; BaseDimension::COUNT];
        exponents[axis.index()] = ExactRational::ONE;
        Dimension { exponents }
    }

    /// Exponent of one base quantity
    #[inline]
    pub fn exponent(&self, axis: BaseDimension) -> ExactRational {
        self.exponents[axis.index()]
    }

    /// Check if dimensionless
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|e| e.is_zero())
    }

    /// Multiply dimensions (add exponents)
    pub fn mul(&self, other: &Dimension) -> Dimension {
        self.zip_with(other, |a, b| a + b)
    }

    /// Divide dimensions (subtract exponents)
    pub fn div(&self, other: &Dimension) -> Dimension {
        self.zip_with(other, |a, b| a - b)
    }

    /// Reciprocal (negate all exponents)
    pub fn recip(&self) -> Dimension {
        self.map(|e| -e)
    }

    /// Raise to a rational power (multiply all exponents exactly)
    pub fn pow(&self, power: ExactRational) -> Dimension {
        self.map(|e| e * power)
    }

    fn map(&self, f: impl Fn(ExactRational) -> ExactRational) -> Dimension {
        Dimension {
            exponents: self.exponents.map(f),
        }
    }

    fn zip_with(
        &self,
        other: &Dimension,
        f: impl Fn(ExactRational, ExactRational) -> ExactRational,
    ) -> Dimension {
        let mut exponents = self.exponents;
        for (e, o) in exponents.iter_mut().zip(other.exponents.iter()) {
            *e = f(*e, *o);
        }
        Dimension { exponents }
    }
}

impl fmt::Debug for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dim({})", self)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }

        let mut first = true;
        for &axis in BaseDimension::all() {
            let exp = self.exponent(axis);
            if exp.is_zero() {
                continue;
            }
            if !first {
                write!(f, "·")?;
            }
            first = false;
            if exp == ExactRational::ONE {
                write!(f, "{}", axis.symbol())?;
            } else if exp.is_integer() {
                write!(f, "{}^{}", axis.symbol(), exp)?;
            } else {
                write!(f, "{}^({})", axis.symbol(), exp)?;
            }
        }
        Ok(())
    }
}
