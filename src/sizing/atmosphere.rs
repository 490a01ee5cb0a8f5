use super::error::SizingError;

// ---------------------------------------------------------------------------
// Standard-atmosphere constants (troposphere)
// ---------------------------------------------------------------------------

/// Sea-level air density (kg/m³).
pub const SEA_LEVEL_DENSITY: f64 = 1.225;
/// Sea-level temperature (K).
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15;
/// Tropospheric temperature lapse rate (K/m).
pub const LAPSE_RATE: f64 = 0.0065;
/// Specific gas constant of dry air (J/(kg·K)).
pub const GAS_CONSTANT_AIR: f64 = 287.05;
/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;
/// Top of the troposphere (m); the barometric model only holds below this.
pub const TROPOPAUSE_ALTITUDE: f64 = 11_000.0;

// ---------------------------------------------------------------------------
// Fixed apogee-band lookup
// ---------------------------------------------------------------------------

/// Apogee altitude bands with tabulated air densities, matching the bands the
/// original sizing charts were drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltitudeBand {
    Km9,
    Km6,
    Km3,
}

impl AltitudeBand {
    /// All bands, in the order they appear in the selector.
    pub const ALL: [AltitudeBand; 3] = [AltitudeBand::Km9, AltitudeBand::Km6, AltitudeBand::Km3];

    /// Selector label for this band.
    pub fn label(self) -> &'static str {
        match self {
            AltitudeBand::Km9 => "9 km",
            AltitudeBand::Km6 => "6 km",
            AltitudeBand::Km3 => "3 km",
        }
    }

    /// Parse a selector label. An unrecognised label is a hard error, never a
    /// silent default.
    pub fn from_label(label: &str) -> Result<Self, SizingError> {
        match label {
            "9 km" => Ok(AltitudeBand::Km9),
            "6 km" => Ok(AltitudeBand::Km6),
            "3 km" => Ok(AltitudeBand::Km3),
            other => Err(SizingError::UnknownAltitudeBand(other.to_string())),
        }
    }

    /// Tabulated air density at this band (kg/m³).
    pub fn density(self) -> f64 {
        match self {
            AltitudeBand::Km9 => 0.467,
            AltitudeBand::Km6 => 0.6601,
            AltitudeBand::Km3 => 0.9093,
        }
    }
}

// ---------------------------------------------------------------------------
// Barometric formula
// ---------------------------------------------------------------------------

/// Air density at a continuous altitude from the standard-atmosphere
/// barometric formula:
///
/// ```text
/// T = T0 − L·h
/// P = ρ0·R·T0·(1 − L·h/T0)^(g/(R·L))
/// ρ = P/(R·T)
/// ```
///
/// Valid in the troposphere; clamped to 0 where the expression leaves its
/// domain (T ≤ 0). Callers should keep `altitude_m` below
/// [`TROPOPAUSE_ALTITUDE`].
pub fn barometric_density(altitude_m: f64) -> f64 {
    let temperature = SEA_LEVEL_TEMPERATURE - LAPSE_RATE * altitude_m;
    let base = 1.0 - LAPSE_RATE * altitude_m / SEA_LEVEL_TEMPERATURE;
    if temperature <= 0.0 || base <= 0.0 {
        return 0.0;
    }
    let pressure = SEA_LEVEL_DENSITY
        * GAS_CONSTANT_AIR
        * SEA_LEVEL_TEMPERATURE
        * base.powf(GRAVITY / (GAS_CONSTANT_AIR * LAPSE_RATE));
    (pressure / (GAS_CONSTANT_AIR * temperature)).max(0.0)
}

// ---------------------------------------------------------------------------
// DensitySource – where the density term of a request comes from
// ---------------------------------------------------------------------------

/// Density term of a sizing request: either a fixed band lookup or the
/// barometric formula at a continuous altitude in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DensitySource {
    Band(AltitudeBand),
    Altitude(f64),
}

impl DensitySource {
    /// Resolve to an air density in kg/m³.
    pub fn resolve(self) -> f64 {
        match self {
            DensitySource::Band(band) => band.density(),
            DensitySource::Altitude(h) => barometric_density(h),
        }
    }
}
