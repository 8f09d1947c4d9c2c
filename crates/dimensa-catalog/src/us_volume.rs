//! US customary liquid volume

use dimensa_core::{base_length, pow, scale, ExactRational, Unit};

fn cubic_meter() -> Unit {
    pow(&base_length(), ExactRational::from_int(3))
}

/// US liquid gallon (gal) - 231 in³
pub fn gallon() -> Unit {
    scale(0.00378541178, &cubic_meter())
}

/// US liquid quart (qt)
pub fn quart() -> Unit {
    scale(0.25, &gallon())
}

/// US liquid pint (pt)
pub fn pint() -> Unit {
    scale(0.5, &quart())
}

/// US customary cup
pub fn cup() -> Unit {
    scale(0.5, &pint())
}

/// US fluid ounce (fl oz)
pub fn fluid_ounce() -> Unit {
    scale(0.125, &cup())
}

/// US tablespoon (tbsp)
pub fn tablespoon() -> Unit {
    scale(0.5, &fluid_ounce())
}

/// US teaspoon (tsp)
pub fn teaspoon() -> Unit {
    scale(1.0 / 3.0, &tablespoon())
}
