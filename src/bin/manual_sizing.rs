//! One-shot sizing run with fixed constants, printed as a table instead of
//! drawn interactively. Handy for sanity-checking a design from the terminal:
//!
//! ```text
//! cargo run --bin manual_sizing
//! ```

use anyhow::{Context, Result};
use chute_sizer::sizing::{
    compute, AltitudeBand, DensitySource, SizingRequest, DEFAULT_MASS_SAMPLES,
};

fn main() -> Result<()> {
    env_logger::init();

    let request = SizingRequest {
        min_mass_kg: 2.5,
        max_mass_kg: 10.0,
        descent_velocity_mps: 10.0,
        drag_coefficient: 2.2,
        density_source: DensitySource::Band(AltitudeBand::Km6),
        samples: DEFAULT_MASS_SAMPLES,
    };

    let result = compute(&request).context("sizing the parachute")?;
    let (lo, hi) = result.diameter_bounds();

    println!(
        "Descent at {} m/s, Cd {}, air density {:.4} kg/m³",
        request.descent_velocity_mps, request.drag_coefficient, result.air_density_kgpm3
    );
    println!(
        "Mass {:.1}–{:.1} kg needs a canopy of {:.3}–{:.3} m",
        request.min_mass_kg, request.max_mass_kg, lo, hi
    );

    if result.matching_sizes.is_empty() {
        println!("No catalog sizes fall in that range.");
    } else {
        println!("Catalog sizes in range:");
        for entry in &result.matching_sizes {
            println!("  {:>6}  ({:.4} m)", entry.label(), entry.diameter_m);
        }
    }

    println!();
    println!("{:>10}  {:>12}", "Mass [kg]", "Diameter [m]");
    for (mass, diameter) in result.masses_kg.iter().zip(result.diameters_m.iter()) {
        println!("{mass:>10.3}  {diameter:>12.4}");
    }

    Ok(())
}
