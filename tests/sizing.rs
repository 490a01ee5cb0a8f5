use approx::assert_relative_eq;
use chute_sizer::sizing::{
    compute, AltitudeBand, DensitySource, SizingRequest, DEFAULT_MASS_SAMPLES,
};

fn interactive_defaults() -> SizingRequest {
    // The form's default values.
    SizingRequest {
        min_mass_kg: 40.0,
        max_mass_kg: 80.0,
        descent_velocity_mps: 9.0,
        drag_coefficient: 2.2,
        density_source: DensitySource::Band(AltitudeBand::Km9),
        samples: DEFAULT_MASS_SAMPLES,
    }
}

#[test]
fn test_full_pipeline_with_band_lookup() {
    let result = compute(&interactive_defaults()).expect("default request must size");

    assert_eq!(result.masses_kg.len(), DEFAULT_MASS_SAMPLES);
    assert_eq!(result.diameters_m.len(), DEFAULT_MASS_SAMPLES);
    assert_relative_eq!(result.masses_kg[0], 40.0);
    assert_relative_eq!(result.masses_kg[DEFAULT_MASS_SAMPLES - 1], 80.0);
    assert_relative_eq!(result.air_density_kgpm3, 0.467);

    // The curve endpoints follow the closed form d = 2·sqrt(2mg/(Cd·ρ·π·v²)).
    assert_relative_eq!(result.diameters_m[0], 3.4651, epsilon = 1e-3);
    assert_relative_eq!(
        result.diameters_m[DEFAULT_MASS_SAMPLES - 1],
        3.4651 * 2.0_f64.sqrt(),
        epsilon = 1e-3
    );

    // Every annotation sits inside the computed diameter range, ascending.
    let (lo, hi) = result.diameter_bounds();
    for pair in result.matching_sizes.windows(2) {
        assert!(pair[0].nominal_in < pair[1].nominal_in);
    }
    for entry in &result.matching_sizes {
        assert!(lo <= entry.diameter_m && entry.diameter_m <= hi);
    }
}

#[test]
fn test_full_pipeline_with_barometric_model() {
    let mut request = interactive_defaults();
    request.density_source = DensitySource::Altitude(0.0);
    let at_sea_level = compute(&request).expect("sea-level request must size");
    assert_relative_eq!(at_sea_level.air_density_kgpm3, 1.225);

    request.density_source = DensitySource::Altitude(9_000.0);
    let at_apogee = compute(&request).expect("9 km request must size");
    assert!(at_apogee.air_density_kgpm3 < at_sea_level.air_density_kgpm3);

    // Thinner air needs a bigger canopy everywhere along the sweep.
    for (thin, dense) in at_apogee
        .diameters_m
        .iter()
        .zip(at_sea_level.diameters_m.iter())
    {
        assert!(thin > dense);
    }
}

#[test]
fn test_compute_is_idempotent_across_calls() {
    let request = interactive_defaults();
    let first = compute(&request).unwrap();
    let second = compute(&request).unwrap();
    assert_eq!(first, second);
}
