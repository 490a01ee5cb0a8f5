use crate::sizing::{
    self, AltitudeBand, DensitySource, SizingRequest, SizingResult, DEFAULT_MASS_SAMPLES,
};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which atmospheric model feeds the density term of the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityModel {
    /// Fixed lookup at a tabulated apogee band.
    FixedBand,
    /// Barometric formula at a free altitude.
    Barometric,
}

/// One successful computation, kept until the next successful update so the
/// chart never shows a half-drawn state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub request: SizingRequest,
    pub result: SizingResult,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Free-text form buffers; parsed only when an update is requested.
    pub min_mass_text: String,
    pub max_mass_text: String,
    pub velocity_text: String,
    pub drag_coef_text: String,

    /// Active atmospheric model.
    pub density_model: DensityModel,
    /// Selected band for [`DensityModel::FixedBand`].
    pub altitude_band: AltitudeBand,
    /// Altitude in metres for [`DensityModel::Barometric`].
    pub altitude_m: f64,

    /// Last successful computation driving the chart.
    pub chart: Option<ChartData>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            min_mass_text: "40.0".to_owned(),
            max_mass_text: "80.0".to_owned(),
            velocity_text: "9.0".to_owned(),
            drag_coef_text: "2.2".to_owned(),
            density_model: DensityModel::FixedBand,
            altitude_band: AltitudeBand::Km9,
            altitude_m: 3_000.0,
            chart: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// The density source the form currently describes.
    pub fn density_source(&self) -> DensitySource {
        match self.density_model {
            DensityModel::FixedBand => DensitySource::Band(self.altitude_band),
            DensityModel::Barometric => DensitySource::Altitude(self.altitude_m),
        }
    }

    /// Parse the form and run one full recompute cycle. On any failure the
    /// previous chart stays untouched and only the status message changes.
    pub fn recompute(&mut self) {
        let parsed = (
            self.min_mass_text.trim().parse::<f64>(),
            self.max_mass_text.trim().parse::<f64>(),
            self.velocity_text.trim().parse::<f64>(),
            self.drag_coef_text.trim().parse::<f64>(),
        );
        let (Ok(min_mass_kg), Ok(max_mass_kg), Ok(descent_velocity_mps), Ok(drag_coefficient)) =
            parsed
        else {
            log::warn!("recompute rejected: non-numeric form input");
            self.status_message =
                Some("Invalid input, please enter valid numeric values.".to_owned());
            return;
        };

        let request = SizingRequest {
            min_mass_kg,
            max_mass_kg,
            descent_velocity_mps,
            drag_coefficient,
            density_source: self.density_source(),
            samples: DEFAULT_MASS_SAMPLES,
        };

        match sizing::compute(&request) {
            Ok(result) => {
                log::info!(
                    "sized {:.1}–{:.1} kg at {} m/s: d ∈ [{:.3}, {:.3}] m, {} catalog matches",
                    request.min_mass_kg,
                    request.max_mass_kg,
                    request.descent_velocity_mps,
                    result.diameter_bounds().0,
                    result.diameter_bounds().1,
                    result.matching_sizes.len()
                );
                self.chart = Some(ChartData { request, result });
                self.status_message = None;
            }
            Err(e) => {
                log::error!("sizing failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
