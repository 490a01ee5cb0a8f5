/// Sizing core: density models, the drag/weight balance, and the size catalog.
///
/// Architecture:
/// ```text
///   SizingRequest
///        │
///        ▼
///   ┌────────────┐
///   │ atmosphere  │  DensitySource → air density (kg/m³)
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │  compute    │  mass sweep → parallel diameter sweep
///   └────────────┘
///        │
///        ▼
///   ┌────────────┐
///   │  catalog    │  diameter range → matching commercial sizes
///   └────────────┘
/// ```
pub mod atmosphere;
pub mod catalog;
pub mod compute;
pub mod error;

pub use atmosphere::{AltitudeBand, DensitySource};
pub use catalog::CatalogEntry;
pub use compute::{compute, SizingRequest, SizingResult, DEFAULT_MASS_SAMPLES};
pub use error::SizingError;
