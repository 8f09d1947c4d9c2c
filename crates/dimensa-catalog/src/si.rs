//! SI base and derived units
//!
//! Base units are the core generators themselves (prefix 1). The kilogram,
//! not the gram, is the mass base.

use dimensa_core::{
    base_amount, base_current, base_length, base_luminous_intensity, base_mass, base_temperature,
    base_time, inv, mul, per, pow, scale, ExactRational, Unit,
};

// =============================================================================
// Base Units
// =============================================================================

/// Metre (m)
pub fn meter() -> Unit {
    base_length()
}

/// Second (s)
pub fn second() -> Unit {
    base_time()
}

/// Kilogram (kg)
pub fn kilogram() -> Unit {
    base_mass()
}

/// Kelvin (K)
pub fn kelvin() -> Unit {
    base_temperature()
}

/// Mole (mol)
pub fn mole() -> Unit {
    base_amount()
}

/// Ampere (A)
pub fn ampere() -> Unit {
    base_current()
}

/// Candela (cd)
pub fn candela() -> Unit {
    base_luminous_intensity()
}

// =============================================================================
// Scaled Base Units
// =============================================================================

/// Gram (g) - 10⁻³ kg
pub fn gram() -> Unit {
    scale(1e-3, &kilogram())
}

/// Minute (min)
pub fn minute() -> Unit {
    scale(60.0, &second())
}

/// Hour (h)
pub fn hour() -> Unit {
    scale(3600.0, &second())
}

/// Day (d)
pub fn day() -> Unit {
    scale(86_400.0, &second())
}

// =============================================================================
// Derived Units
// =============================================================================

/// Square metre (m²)
pub fn square_meter() -> Unit {
    pow(&meter(), ExactRational::from_int(2))
}

/// Cubic metre (m³)
pub fn cubic_meter() -> Unit {
    pow(&meter(), ExactRational::from_int(3))
}

/// Litre (L) - 10⁻³ m³
pub fn liter() -> Unit {
    scale(1e-3, &cubic_meter())
}

/// Metre per second (m/s)
pub fn meter_per_second() -> Unit {
    per(&meter(), &second())
}

/// Kilometre per hour (km/h)
pub fn kilometer_per_hour() -> Unit {
    per(&scale(1e3, &meter()), &hour())
}

/// Hertz (Hz) - s⁻¹
pub fn hertz() -> Unit {
    inv(&second())
}

/// Newton (N) - kg·m·s⁻²
pub fn newton() -> Unit {
    per(&mul(&kilogram(), &meter()), &pow(&second(), ExactRational::from_int(2)))
}

/// Pascal (Pa) - N·m⁻²
pub fn pascal() -> Unit {
    per(&newton(), &square_meter())
}

/// Joule (J) - N·m
pub fn joule() -> Unit {
    mul(&newton(), &meter())
}

/// Watt (W) - J·s⁻¹
pub fn watt() -> Unit {
    per(&joule(), &second())
}

/// Coulomb (C) - A·s
pub fn coulomb() -> Unit {
    mul(&ampere(), &second())
}

/// Volt (V) - W·A⁻¹
pub fn volt() -> Unit {
    per(&watt(), &ampere())
}

/// Ohm (Ω) - V·A⁻¹
pub fn ohm() -> Unit {
    per(&volt(), &ampere())
}

/// Molar concentration (mol/L)
pub fn molar() -> Unit {
    per(&mole(), &liter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimensa_core::{convert, BaseDimension};

    #[test]
    fn test_gram_to_kilogram() {
        let kg = convert(1500.0, &gram(), &kilogram()).unwrap();
        assert!((kg - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_joule_dimension() {
        let j = joule().dimension();
        assert_eq!(j.exponent(BaseDimension::Mass), ExactRational::from_int(1));
        assert_eq!(j.exponent(BaseDimension::Length), ExactRational::from_int(2));
        assert_eq!(j.exponent(BaseDimension::Time), ExactRational::from_int(-2));
    }

    #[test]
    fn test_ohm_equals_volt_per_ampere_composition() {
        // Ω = kg·m²·s⁻³·A⁻²
        let expected = per(
            &mul(&kilogram(), &pow(&meter(), ExactRational::from_int(2))),
            &mul(
                &pow(&second(), ExactRational::from_int(3)),
                &pow(&ampere(), ExactRational::from_int(2)),
            ),
        );
        assert!(ohm().is_compatible(&expected));
    }

    #[test]
    fn test_speed_conversion() {
        let ms = convert(36.0, &kilometer_per_hour(), &meter_per_second()).unwrap();
        assert!((ms - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_hertz_incompatible_with_second() {
        assert!(convert(1.0, &hertz(), &second()).is_none());
    }

    #[test]
    fn test_pascal_times_cubic_meter_is_joule() {
        assert!(mul(&pascal(), &cubic_meter()).is_compatible(&joule()));
        assert!(mul(&watt(), &second()).is_compatible(&joule()));
        assert!(coulomb().is_compatible(&mul(&second(), &ampere())));
    }

    #[test]
    fn test_molar_dimension() {
        let m = molar().dimension();
        assert_eq!(m.exponent(BaseDimension::Amount), ExactRational::ONE);
        assert_eq!(m.exponent(BaseDimension::Length), ExactRational::from_int(-3));
        assert!(candela().is_compatible(&candela()));
    }
}
