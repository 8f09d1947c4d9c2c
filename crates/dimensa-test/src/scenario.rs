//! Conversion scenarios
//!
//! A scenario is one literal conversion with an expected outcome. The
//! engine itself has no tolerance; [`HarnessConfig`] is where callers pick
//! their epsilon.

use dimensa_catalog::{imperial, si, temperature, us_volume};
use dimensa_core::{convert, per, scale, Unit};
use tracing::{debug, warn};

/// Harness configuration
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// Allowed error relative to the expected magnitude
    pub relative_tolerance: f64,
    /// Allowed error near zero
    pub absolute_tolerance: f64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            relative_tolerance: 1e-3,
            absolute_tolerance: 1e-9,
        }
    }
}

impl HarnessConfig {
    /// Near machine precision, for round trips through a single unit
    pub fn strict() -> Self {
        HarnessConfig {
            relative_tolerance: 1e-12,
            absolute_tolerance: 1e-12,
        }
    }

    /// Loose enough for published constants rounded to a few digits
    pub fn lenient() -> Self {
        HarnessConfig {
            relative_tolerance: 1e-2,
            absolute_tolerance: 1e-6,
        }
    }

    /// Check `actual` against `expected` under this configuration
    pub fn approx_eq(&self, actual: f64, expected: f64) -> bool {
        let diff = (actual - expected).abs();
        diff <= self.absolute_tolerance || diff <= self.relative_tolerance * expected.abs()
    }
}

/// What a scenario expects from `convert`
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Expectation {
    /// Result approximately equal to the value under the harness tolerance
    Approx(f64),
    /// Result strictly inside the open interval
    Within { low: f64, high: f64 },
    /// No value: the units are dimensionally incompatible
    Incompatible,
}

/// One literal conversion
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub quantity: f64,
    pub from: Unit,
    pub to: Unit,
    pub expect: Expectation,
}

impl Scenario {
    pub fn new(
        name: &'static str,
        quantity: f64,
        from: Unit,
        to: Unit,
        expect: Expectation,
    ) -> Self {
        Scenario {
            name,
            quantity,
            from,
            to,
            expect,
        }
    }

    /// Run the conversion and judge it
    pub fn run(&self, config: &HarnessConfig) -> ScenarioOutcome {
        let actual = convert(self.quantity, &self.from, &self.to);
        let passed = match (self.expect, actual) {
            (Expectation::Approx(expected), Some(v)) => config.approx_eq(v, expected),
            (Expectation::Within { low, high }, Some(v)) => v > low && v < high,
            (Expectation::Incompatible, None) => true,
            _ => false,
        };

        if passed {
            debug!(scenario = self.name, ?actual, "scenario passed");
        } else {
            warn!(scenario = self.name, ?actual, expect = ?self.expect, "scenario failed");
        }

        ScenarioOutcome {
            name: self.name,
            actual,
            expect: self.expect,
            passed,
        }
    }
}

/// Result of one scenario run
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub actual: Option<f64>,
    pub expect: Expectation,
    pub passed: bool,
}

/// Results of a batch of scenarios
#[derive(Clone, Debug, Default)]
pub struct ScenarioReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl ScenarioReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }
}

/// The reference scenarios: linear, affine in both directions, affine built
/// on affine, compound derived units, and an incompatible pair
pub fn standard_scenarios() -> Vec<Scenario> {
    let meter = si::meter();
    let kelvin = si::kelvin();
    let foot = imperial::foot();
    let mile = imperial::mile();
    let celsius = temperature::celsius();
    let fahrenheit = temperature::fahrenheit();
    let reaumur = temperature::reaumur();
    let mpg = per(&mile, &us_volume::gallon());
    let kmpl = per(&scale(1000.0, &meter), &scale(0.001, &si::cubic_meter()));

    vec![
        Scenario::new(
            "six feet in metres",
            6.0,
            foot,
            meter,
            Expectation::Within {
                low: 6.0 * 0.3047,
                high: 6.0 * 0.3049,
            },
        ),
        Scenario::new(
            "300 K in Fahrenheit",
            300.0,
            kelvin,
            fahrenheit,
            Expectation::Approx(80.33),
        ),
        Scenario::new(
            "80.33 °F in kelvin",
            80.33,
            fahrenheit,
            kelvin,
            Expectation::Approx(300.0),
        ),
        Scenario::new(
            "-30 °Ré in Celsius",
            -30.0,
            reaumur,
            celsius,
            Expectation::Approx(-37.5),
        ),
        Scenario::new(
            "-30 °Ré in Fahrenheit",
            -30.0,
            reaumur,
            fahrenheit,
            Expectation::Approx(-35.5),
        ),
        Scenario::new(
            "30 mpg in km/L",
            30.0,
            mpg,
            kmpl,
            Expectation::Approx(12.754),
        ),
        Scenario::new(
            "miles to cubic metres",
            5.0,
            mile,
            si::cubic_meter(),
            Expectation::Incompatible,
        ),
    ]
}

/// Run every scenario under `config`
pub fn run_scenarios(scenarios: &[Scenario], config: &HarnessConfig) -> ScenarioReport {
    ScenarioReport {
        outcomes: scenarios.iter().map(|s| s.run(config)).collect(),
    }
}
