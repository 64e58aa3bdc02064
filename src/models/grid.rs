use serde::{Deserialize, Serialize};

/// Easting/northing in the native units (metres) of a projected CRS
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub easting: f64,
    pub northing: f64,
}

impl ProjectedPoint {
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }
}

/// Kilometre grid reference as printed on the margins of a paper map.
///
/// Map grid labels repeat every 100 km in the northing direction and drop the
/// leading digits, so `grid_y` keeps only the position within that band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub grid_x: f64,
    pub grid_y: f64,
}

impl GridCoordinate {
    /// `grid_x = easting / 1000`, `grid_y = (northing / 1000) mod 100`.
    ///
    /// The modulo is a floor modulo: the result is in `[0, 100)` for every
    /// northing, so -1 km maps to 99 km.
    pub fn from_projected(point: ProjectedPoint) -> Self {
        Self {
            grid_x: point.easting / 1000.0,
            grid_y: wrap_band(point.northing / 1000.0),
        }
    }
}

impl From<ProjectedPoint> for GridCoordinate {
    fn from(point: ProjectedPoint) -> Self {
        Self::from_projected(point)
    }
}

fn wrap_band(km: f64) -> f64 {
    const BAND_KM: f64 = 100.0;

    let wrapped = km.rem_euclid(BAND_KM);
    // tiny negative inputs round up to exactly the band width
    if wrapped >= BAND_KM {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(easting: f64, northing: f64) -> GridCoordinate {
        GridCoordinate::from_projected(ProjectedPoint::new(easting, northing))
    }

    #[test]
    fn test_strips_leading_northing_digits() {
        let g = grid(26_574_211.9, 4_663_000.6);
        assert!((g.grid_x - 26_574.2119).abs() < 1e-9);
        assert!((g.grid_y - 63.0006).abs() < 1e-9);
    }

    #[test]
    fn test_grid_x_is_linear() {
        for easting in [0.0, 1.0, -2_500.5, 26_574_211.914_8, 1e9] {
            assert_eq!(grid(easting, 0.0).grid_x, easting / 1000.0);
        }
    }

    #[test]
    fn test_grid_y_band_for_positive_northing() {
        for northing in [0.0, 999.9, 99_999.999, 100_000.0, 4_663_000.6, 8_216_047.461] {
            let g = grid(0.0, northing);
            assert!((0.0..100.0).contains(&g.grid_y), "{} -> {}", northing, g.grid_y);
        }
        assert_eq!(grid(0.0, 100_000.0).grid_y, 0.0);
    }

    #[test]
    fn test_negative_northing_uses_floor_modulo() {
        assert!((grid(0.0, -1_000.0).grid_y - 99.0).abs() < 1e-9);
        assert!((grid(0.0, -250_000.0).grid_y - 50.0).abs() < 1e-9);
        assert_eq!(grid(0.0, -100_000.0).grid_y, 0.0);
        assert_eq!(grid(0.0, -1e-14).grid_y, 0.0);
    }
}
