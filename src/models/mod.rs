pub mod conversion;
pub mod dms;
pub mod grid;
pub mod objective;

pub use conversion::Conversion;
pub use dms::Dms;
pub use grid::{GridCoordinate, ProjectedPoint};
pub use objective::{builtin_objectives, Objective};
