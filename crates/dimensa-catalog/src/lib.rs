//! DIMENSA Catalog - Named units built from the core algebra
//!
//! Each catalogue is a module of constructors, every one a call or two into
//! `dimensa_core` with a literal factor:
//! - `si`: base and derived SI units, plus metric prefixes
//! - `temperature`: Celsius, Fahrenheit, Rankine, Réaumur
//! - `imperial`: imperial and international length units
//! - `us_volume`: US customary liquid volume
//!
//! Catalogues share no state; each builds its own values from the seven
//! base constructors.

#[cfg(feature = "si")]
pub mod prefixes;
#[cfg(feature = "si")]
pub mod si;
#[cfg(feature = "temperature")]
pub mod temperature;
#[cfg(feature = "imperial")]
pub mod imperial;
#[cfg(feature = "us-volume")]
pub mod us_volume;

#[cfg(feature = "si")]
pub use prefixes::Prefix;
