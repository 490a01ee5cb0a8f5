// ---------------------------------------------------------------------------
// Rocketman parachute size catalog
// ---------------------------------------------------------------------------

/// Metres per inch.
pub const INCH_TO_M: f64 = 0.0254;

/// Nominal Rocketman parachute sizes in inches, ascending.
const SIZES_IN: [u32; 17] = [
    24, 30, 36, 48, 60, 72, 84, 96, 108, 120, 144, 168, 192, 216, 240, 288, 360,
];

/// One commercially available parachute size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    /// Nominal size in inches, as sold.
    pub nominal_in: u32,
    /// Physical canopy diameter in metres.
    pub diameter_m: f64,
}

impl CatalogEntry {
    /// Annotation label for the chart.
    pub fn label(&self) -> String {
        format!("{} in", self.nominal_in)
    }
}

/// The full catalog, ascending by size.
pub fn catalog() -> [CatalogEntry; 17] {
    SIZES_IN.map(|nominal_in| CatalogEntry {
        nominal_in,
        diameter_m: f64::from(nominal_in) * INCH_TO_M,
    })
}

/// Catalog entries whose diameter lies within `[lo, hi]` metres, preserving
/// ascending order. Empty when nothing qualifies or when `lo > hi`.
pub fn entries_in_range(lo: f64, hi: f64) -> Vec<CatalogEntry> {
    catalog()
        .into_iter()
        .filter(|e| lo <= e.diameter_m && e.diameter_m <= hi)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_catalog_is_ascending() {
        let entries = catalog();
        assert_eq!(entries.len(), 17);
        for pair in entries.windows(2) {
            assert!(pair[0].nominal_in < pair[1].nominal_in);
            assert!(pair[0].diameter_m < pair[1].diameter_m);
        }
    }

    #[test]
    fn test_inch_to_metre_round_trip() {
        for entry in catalog() {
            let recovered = entry.diameter_m / INCH_TO_M;
            assert_relative_eq!(recovered, f64::from(entry.nominal_in), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_entries_in_range_selects_exactly_the_in_range_sizes() {
        // 1.0 m .. 2.0 m covers 48 in (1.2192 m), 60 in (1.524 m), 72 in (1.8288 m).
        let matched = entries_in_range(1.0, 2.0);
        let nominals: Vec<u32> = matched.iter().map(|e| e.nominal_in).collect();
        assert_eq!(nominals, vec![48, 60, 72]);
    }

    #[test]
    fn test_entries_in_range_bounds_are_inclusive() {
        let d48 = 48.0 * INCH_TO_M;
        let d72 = 72.0 * INCH_TO_M;
        let nominals: Vec<u32> = entries_in_range(d48, d72)
            .iter()
            .map(|e| e.nominal_in)
            .collect();
        assert_eq!(nominals, vec![48, 60, 72]);
    }

    #[test]
    fn test_entries_in_range_empty_cases() {
        assert!(entries_in_range(0.0, 0.1).is_empty());
        assert!(entries_in_range(10.0, 20.0).is_empty());
        // Inverted range selects nothing rather than erroring.
        assert!(entries_in_range(2.0, 1.0).is_empty());
    }
}
