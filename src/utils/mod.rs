pub mod constants;
pub mod coordinates;
pub mod logging;

pub use constants::*;
pub use coordinates::{
    decimal_to_dms, distance_along_latitude, dms_to_decimal, parse_coordinate, parse_dms,
};
pub use logging::init_logging;
