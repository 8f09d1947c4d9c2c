//! DIMENSA Demo Application
//!
//! Demonstrates the conversion engine:
//! - Reference scenarios (linear, affine, compound, incompatible)
//! - A temperature table across four scales
//! - A table of prefixed metres
//! - A seeded round-trip sweep
//!
//! Logging is controlled with `RUST_LOG` (default `info`).

use dimensa_catalog::{imperial, si, temperature, us_volume, Prefix};
use dimensa_core::{per, try_convert, DimensaResult, Quantity};
use dimensa_test::{run_scenarios, run_sweep, standard_scenarios, HarnessConfig, SweepConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║           DIMENSA - Unit Conversion Demo                   ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();

    // Reference scenarios
    let report = run_scenarios(&standard_scenarios(), &HarnessConfig::default());
    for outcome in &report.outcomes {
        let mark = if outcome.passed { "ok " } else { "FAIL" };
        match outcome.actual {
            Some(v) => println!("[{}] {:<28} {:>12.4}", mark, outcome.name, v),
            None => println!("[{}] {:<28} {:>12}", mark, outcome.name, "incompatible"),
        }
    }
    println!();

    temperature_table()?;
    prefix_table()?;
    fuel_economy()?;

    // Round-trip sweep
    let pool = vec![
        si::meter(),
        si::kelvin(),
        si::liter(),
        temperature::celsius(),
        temperature::fahrenheit(),
        imperial::mile(),
        us_volume::gallon(),
        Prefix::Kilo.apply(&si::meter()),
    ];
    let sweep = run_sweep(&pool, &SweepConfig::default());
    info!(?sweep, "sweep complete");

    if !report.all_passed() || !sweep.is_clean() {
        error!(failed = report.failed().count(), "demo found failures");
        std::process::exit(1);
    }

    Ok(())
}

fn temperature_table() -> DimensaResult<()> {
    let kelvin = si::kelvin();
    let scales = [
        ("°C", temperature::celsius()),
        ("°F", temperature::fahrenheit()),
        ("°R", temperature::rankine()),
        ("°Ré", temperature::reaumur()),
    ];

    let mut header = format!("{:>8} |", "K");
    for (label, _) in &scales {
        header.push_str(&format!(" {:>9}", label));
    }
    println!("{}", header);
    for k in [0.0, 233.15, 273.15, 300.0, 373.15] {
        let mut row = format!("{:>8.2} |", k);
        for (_, unit) in &scales {
            row.push_str(&format!(" {:>9.2}", try_convert(k, &kelvin, unit)?));
        }
        println!("{}", row);
    }
    println!();
    Ok(())
}

fn prefix_table() -> DimensaResult<()> {
    let meter = si::meter();
    let length = 1500.0;
    for prefix in [Prefix::Nano, Prefix::Micro, Prefix::Milli, Prefix::Centi, Prefix::Kilo, Prefix::Mega] {
        let unit = prefix.apply(&meter);
        let v = try_convert(length, &meter, &unit)?;
        println!("{:>8} m = {:>14.6e} {}m", length, v, prefix.symbol());
    }
    println!();
    Ok(())
}

fn fuel_economy() -> DimensaResult<()> {
    let mpg = per(&imperial::mile(), &us_volume::gallon());
    let kmpl = per(&Prefix::Kilo.apply(&si::meter()), &si::liter());

    for v in [20.0, 30.0, 40.0] {
        let q = Quantity::new(v, mpg).try_to(&kmpl)?;
        println!("{:>5.1} mpg = {:>7.3} km/L", v, q.value());
    }
    println!();
    Ok(())
}
