//! Imperial and international length units

use dimensa_core::{base_length, scale, Unit};

fn meter() -> Unit {
    base_length()
}

/// International inch (in)
pub fn inch() -> Unit {
    scale(0.0254, &meter())
}

/// International foot (ft)
pub fn foot() -> Unit {
    scale(0.3048, &meter())
}

/// International yard (yd)
pub fn yard() -> Unit {
    scale(0.9144, &meter())
}

/// Statute mile (mi)
pub fn mile() -> Unit {
    scale(1609.34, &meter())
}

/// Nautical mile (nmi)
pub fn nautical_mile() -> Unit {
    scale(1852.0, &meter())
}

/// Fathom
pub fn fathom() -> Unit {
    scale(1.8288, &meter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimensa_core::convert;

    #[test]
    fn test_six_feet() {
        let m = convert(6.0, &foot(), &meter()).unwrap();
        assert!(m > 6.0 * 0.3047 && m < 6.0 * 0.3049);
    }

    #[test]
    fn test_foot_is_twelve_inches() {
        let inches = convert(1.0, &foot(), &inch()).unwrap();
        assert!((inches - 12.0).abs() < 1e-9);
        let feet = convert(1.0, &yard(), &foot()).unwrap();
        assert!((feet - 3.0).abs() < 1e-9);
        let yards = convert(1.0, &fathom(), &yard()).unwrap();
        assert!((yards - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_nautical_mile_longer_than_mile() {
        let mi = convert(1.0, &nautical_mile(), &mile()).unwrap();
        assert!(mi > 1.15 && mi < 1.151);
    }
}
