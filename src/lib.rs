pub mod app;
pub mod sizing;
pub mod state;
pub mod ui;

pub use sizing::{compute, AltitudeBand, DensitySource, SizingError, SizingRequest, SizingResult};
pub use state::AppState;
