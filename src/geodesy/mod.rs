pub mod crs;
pub mod definition;
pub mod ellipsoid;
pub mod epsg;
pub mod helmert;
pub mod tmerc;
mod transformation;

pub use crs::{AreaOfUse, Crs, Datum, Projection};
pub use definition::parse_definition;
pub use ellipsoid::{Ellipsoid, Geocentric};
pub use helmert::Helmert;
pub use tmerc::{TmercParams, TransverseMercator};
pub use transformation::{shift_datum, to_wgs84, transform};
