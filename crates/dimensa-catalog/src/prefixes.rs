//! SI metric prefixes
//!
//! A prefix is only a literal factor; applying it is `scale(factor, unit)`.

use dimensa_core::{scale, Unit};

/// SI decimal prefix, quecto (10⁻³⁰) through quetta (10³⁰)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prefix {
    Quecto,
    Ronto,
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
    Ronna,
    Quetta,
}

impl Prefix {
    /// Power of ten this prefix stands for
    pub fn exponent(self) -> i32 {
        match self {
            Prefix::Quecto => -30,
            Prefix::Ronto => -27,
            Prefix::Yocto => -24,
            Prefix::Zepto => -21,
            Prefix::Atto => -18,
            Prefix::Femto => -15,
            Prefix::Pico => -12,
            Prefix::Nano => -9,
            Prefix::Micro => -6,
            Prefix::Milli => -3,
            Prefix::Centi => -2,
            Prefix::Deci => -1,
            Prefix::Deca => 1,
            Prefix::Hecto => 2,
            Prefix::Kilo => 3,
            Prefix::Mega => 6,
            Prefix::Giga => 9,
            Prefix::Tera => 12,
            Prefix::Peta => 15,
            Prefix::Exa => 18,
            Prefix::Zetta => 21,
            Prefix::Yotta => 24,
            Prefix::Ronna => 27,
            Prefix::Quetta => 30,
        }
    }

    /// Linear factor, e.g. `1e3` for kilo
    pub fn factor(self) -> f64 {
        match self {
            Prefix::Quecto => 1e-30,
            Prefix::Ronto => 1e-27,
            Prefix::Yocto => 1e-24,
            Prefix::Zepto => 1e-21,
            Prefix::Atto => 1e-18,
            Prefix::Femto => 1e-15,
            Prefix::Pico => 1e-12,
            Prefix::Nano => 1e-9,
            Prefix::Micro => 1e-6,
            Prefix::Milli => 1e-3,
            Prefix::Centi => 1e-2,
            Prefix::Deci => 1e-1,
            Prefix::Deca => 1e1,
            Prefix::Hecto => 1e2,
            Prefix::Kilo => 1e3,
            Prefix::Mega => 1e6,
            Prefix::Giga => 1e9,
            Prefix::Tera => 1e12,
            Prefix::Peta => 1e15,
            Prefix::Exa => 1e18,
            Prefix::Zetta => 1e21,
            Prefix::Yotta => 1e24,
            Prefix::Ronna => 1e27,
            Prefix::Quetta => 1e30,
        }
    }

    /// SI symbol, e.g. `"k"` for kilo
    pub fn symbol(self) -> &'static str {
        match self {
            Prefix::Quecto => "q",
            Prefix::Ronto => "r",
            Prefix::Yocto => "y",
            Prefix::Zepto => "z",
            Prefix::Atto => "a",
            Prefix::Femto => "f",
            Prefix::Pico => "p",
            Prefix::Nano => "n",
            Prefix::Micro => "μ",
            Prefix::Milli => "m",
            Prefix::Centi => "c",
            Prefix::Deci => "d",
            Prefix::Deca => "da",
            Prefix::Hecto => "h",
            Prefix::Kilo => "k",
            Prefix::Mega => "M",
            Prefix::Giga => "G",
            Prefix::Tera => "T",
            Prefix::Peta => "P",
            Prefix::Exa => "E",
            Prefix::Zetta => "Z",
            Prefix::Yotta => "Y",
            Prefix::Ronna => "R",
            Prefix::Quetta => "Q",
        }
    }

    /// Prefixed unit, `factor × unit`
    pub fn apply(self, unit: &Unit) -> Unit {
        scale(self.factor(), unit)
    }

    /// Get all prefixes, smallest first
    pub fn all() -> &'static [Prefix] {
        &[
            Prefix::Quecto,
            Prefix::Ronto,
            Prefix::Yocto,
            Prefix::Zepto,
            Prefix::Atto,
            Prefix::Femto,
            Prefix::Pico,
            Prefix::Nano,
            Prefix::Micro,
            Prefix::Milli,
            Prefix::Centi,
            Prefix::Deci,
            Prefix::Deca,
            Prefix::Hecto,
            Prefix::Kilo,
            Prefix::Mega,
            Prefix::Giga,
            Prefix::Tera,
            Prefix::Peta,
            Prefix::Exa,
            Prefix::Zetta,
            Prefix::Yotta,
            Prefix::Ronna,
            Prefix::Quetta,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::si::{gram, kilogram, meter};
    use dimensa_core::convert;
    use proptest::prelude::*;

    #[test]
    fn test_factor_literals() {
        assert_eq!(Prefix::Kilo.factor(), 1e3);
        assert_eq!(Prefix::Milli.factor(), 1e-3);
        assert_eq!(Prefix::Micro.factor(), 1e-6);
        assert_eq!(Prefix::Quetta.factor(), 1e30);
    }

    #[test]
    fn test_prefixes_strictly_increasing() {
        for pair in Prefix::all().windows(2) {
            assert!(pair[0].exponent() < pair[1].exponent());
            assert!(pair[0].factor() < pair[1].factor());
        }
    }

    #[test]
    fn test_kilo_gram_is_kilogram() {
        let kg = Prefix::Kilo.apply(&gram());
        let v = convert(2.0, &kg, &kilogram()).unwrap();
        assert!((v - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_millimeter() {
        let mm = Prefix::Milli.apply(&meter());
        let v = convert(1234.0, &mm, &meter()).unwrap();
        assert!((v - 1.234).abs() < 1e-12);
    }

    #[test]
    fn test_symbols_are_distinct() {
        assert_eq!(Prefix::Kilo.symbol(), "k");
        assert_eq!(Prefix::Micro.symbol(), "μ");
        assert_eq!(Prefix::Deca.symbol(), "da");
        let mut seen = std::collections::HashSet::new();
        for p in Prefix::all() {
            assert!(seen.insert(p.symbol()), "duplicate symbol {}", p.symbol());
        }
    }

    fn arb_prefix() -> impl Strategy<Value = Prefix> {
        (0..Prefix::all().len()).prop_map(|i| Prefix::all()[i])
    }

    proptest! {
        #[test]
        fn prop_prefixed_round_trip(p in arb_prefix(), x in -1.0e6f64..1.0e6) {
            let prefixed = p.apply(&meter());
            let base = convert(x, &prefixed, &meter()).unwrap();
            let back = convert(base, &meter(), &prefixed).unwrap();
            prop_assert!((back - x).abs() <= 1e-9 * x.abs().max(1.0), "{} -> {} -> {}", x, base, back);
        }

        #[test]
        fn prop_prefixed_factor_in_base_units(p in arb_prefix()) {
            let v = convert(1.0, &p.apply(&gram()), &gram()).unwrap();
            prop_assert!((v - p.factor()).abs() <= 1e-12 * p.factor(), "{:?}: {}", p, v);
        }
    }
}
