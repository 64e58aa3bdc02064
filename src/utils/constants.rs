/// Datum names used by the built-in objectives and default settings
pub const DATUM_WGS84: &str = "wgs84";
pub const DATUM_SK42: &str = "sk42";

/// Projection definitions
pub const WGS84_DEFINITION: &str = "+init=EPSG:4326";
/// Pulkovo 1942 / 3-degree Gauss-Kruger zone 26, covering 76.5E to 79.5E
pub const PULKOVO_ZONE_26_DEFINITION: &str = "EPSG:2542";
/// SK-42 transverse Mercator with its own seven-parameter shift to WGS84
pub const SK42_DEFINITION: &str = "+proj=tmerc +lat_0=0 +lon_0=135 +k=1 +x_0=500000 +y_0=0 \
     +ellps=krass +towgs84=24.0,-123.0,-94.0,0.02,-0.25,-0.13,1.1 +units=m +no_defs";

/// Length of one degree of longitude at the equator, in metres
pub const METRES_PER_DEGREE_AT_EQUATOR: f64 = 111_321.0;

/// Output defaults
pub const DEFAULT_GRID_PRECISION: usize = 3;

/// Environment variable prefix for settings overrides
pub const ENV_PREFIX: &str = "KG_COORDS";
