use serde::{Deserialize, Serialize};

use super::grid::{GridCoordinate, ProjectedPoint};
use super::objective::Objective;

/// Result of converting one objective; flat so it serialises to a CSV row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub name: String,
    pub datum: String,
    pub latitude: f64,
    pub longitude: f64,
    pub easting: f64,
    pub northing: f64,
    pub grid_x: f64,
    pub grid_y: f64,
}

impl Conversion {
    pub fn new(objective: &Objective, projected: ProjectedPoint) -> Self {
        let grid = GridCoordinate::from_projected(projected);
        Self {
            name: objective.name.clone(),
            datum: objective.datum.clone(),
            latitude: objective.decimal_latitude(),
            longitude: objective.decimal_longitude(),
            easting: projected.easting,
            northing: projected.northing,
            grid_x: grid.grid_x,
            grid_y: grid.grid_y,
        }
    }

    pub fn projected(&self) -> ProjectedPoint {
        ProjectedPoint::new(self.easting, self.northing)
    }

    pub fn grid(&self) -> GridCoordinate {
        GridCoordinate {
            grid_x: self.grid_x,
            grid_y: self.grid_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_conversion_carries_grid() {
        let objective = Objective::new("Hill", (42.0, 0.0, 0.0), (78.0, 30.0, 0.0), "wgs84");
        let conversion = Conversion::new(&objective, ProjectedPoint::new(26_541_000.0, 4_650_500.0));

        assert_eq!(conversion.name, "Hill");
        assert_eq!(conversion.longitude, 78.5);
        assert_eq!(
            conversion.grid(),
            GridCoordinate {
                grid_x: 26_541.0,
                grid_y: 50.5
            }
        );
        assert_eq!(conversion.projected(), ProjectedPoint::new(26_541_000.0, 4_650_500.0));
    }
}
