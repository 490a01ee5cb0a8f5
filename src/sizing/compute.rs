use std::f64::consts::PI;

use super::atmosphere::{DensitySource, GRAVITY};
use super::catalog::{self, CatalogEntry};
use super::error::SizingError;

/// Mass samples per sweep unless the request says otherwise.
pub const DEFAULT_MASS_SAMPLES: usize = 100;

// ---------------------------------------------------------------------------
// Request / result
// ---------------------------------------------------------------------------

/// Inputs of one sizing computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingRequest {
    pub min_mass_kg: f64,
    pub max_mass_kg: f64,
    pub descent_velocity_mps: f64,
    pub drag_coefficient: f64,
    pub density_source: DensitySource,
    /// Number of evenly spaced mass samples across the range.
    pub samples: usize,
}

impl SizingRequest {
    /// Reject inputs for which the drag balance is undefined. A degenerate
    /// mass range (min ≥ max) is allowed and collapses to a near-point curve.
    fn validate(&self) -> Result<(), SizingError> {
        let positive = [
            ("minimum mass", self.min_mass_kg),
            ("maximum mass", self.max_mass_kg),
            ("descent velocity", self.descent_velocity_mps),
            ("drag coefficient", self.drag_coefficient),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(SizingError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}

/// Outputs of one sizing computation. `masses_kg` and `diameters_m` are
/// parallel ordered sequences; `matching_sizes` preserves catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingResult {
    pub masses_kg: Vec<f64>,
    pub diameters_m: Vec<f64>,
    pub air_density_kgpm3: f64,
    pub matching_sizes: Vec<CatalogEntry>,
}

impl SizingResult {
    /// True min/max of the diameter sweep (no monotonicity assumed).
    pub fn diameter_bounds(&self) -> (f64, f64) {
        let lo = self.diameters_m.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = self
            .diameters_m
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        (lo, hi)
    }
}

// ---------------------------------------------------------------------------
// The drag/weight balance
// ---------------------------------------------------------------------------

/// Parachute diameter at which drag balances weight at terminal velocity:
///
/// ```text
/// m·g = ½·ρ·v²·Cd·π·r²   ⇒   r = sqrt(2·m·g / (Cd·ρ·π·v²)),  d = 2·r
/// ```
///
/// All inputs must be positive; [`compute`] validates before calling.
pub fn calculate_diameter(
    mass_kg: f64,
    drag_coefficient: f64,
    descent_velocity_mps: f64,
    air_density_kgpm3: f64,
) -> f64 {
    let radius = ((2.0 * mass_kg * GRAVITY)
        / (drag_coefficient * air_density_kgpm3 * PI * descent_velocity_mps.powi(2)))
    .sqrt();
    2.0 * radius
}

/// `n` evenly spaced values across `[start, end]`, endpoints included.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Run the full sizing pipeline: validate, resolve the density term, sweep
/// the mass range through the drag balance, and filter the size catalog to
/// the resulting diameter range. Pure; identical requests give identical
/// results.
pub fn compute(request: &SizingRequest) -> Result<SizingResult, SizingError> {
    request.validate()?;

    let air_density_kgpm3 = request.density_source.resolve();
    if !(air_density_kgpm3 > 0.0) {
        return Err(SizingError::NonPositiveDensity(air_density_kgpm3));
    }

    let masses_kg = linspace(request.min_mass_kg, request.max_mass_kg, request.samples);
    let diameters_m: Vec<f64> = masses_kg
        .iter()
        .map(|&m| {
            calculate_diameter(
                m,
                request.drag_coefficient,
                request.descent_velocity_mps,
                air_density_kgpm3,
            )
        })
        .collect();

    let lo = diameters_m.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = diameters_m.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let matching_sizes = catalog::entries_in_range(lo, hi);

    Ok(SizingResult {
        masses_kg,
        diameters_m,
        air_density_kgpm3,
        matching_sizes,
    })
}
