use serde::{Deserialize, Serialize};
use validator::Validate;

use super::dms::Dms;
use crate::utils::constants::{DATUM_SK42, DATUM_WGS84};

/// A named point of interest given in degrees, minutes and seconds on a source datum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Objective {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(nested)]
    pub latitude: Dms,

    #[validate(nested)]
    pub longitude: Dms,

    /// Name of an entry in the configured datum table
    #[validate(length(min = 1))]
    pub datum: String,
}

impl Objective {
    pub fn new(
        name: impl Into<String>,
        latitude: impl Into<Dms>,
        longitude: impl Into<Dms>,
        datum: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            datum: datum.into(),
        }
    }

    pub fn decimal_latitude(&self) -> f64 {
        self.latitude.to_decimal()
    }

    pub fn decimal_longitude(&self) -> f64 {
        self.longitude.to_decimal()
    }
}

/// Objectives around the K-44 sheet in eastern Kyrgyzstan
pub fn builtin_objectives() -> Vec<Objective> {
    vec![
        Objective::new(
            "Objective A",
            (42.0, 5.0, 54.0),
            (78.0, 53.0, 47.83),
            DATUM_WGS84,
        ),
        Objective::new(
            "Objective B",
            (42.0, 5.0, 23.92),
            (78.0, 52.0, 44.85),
            DATUM_WGS84,
        ),
        Objective::new(
            "Objective C",
            (42.0, 7.0, 2.34),
            (78.0, 54.0, 44.85),
            DATUM_WGS84,
        ),
        Objective::new(
            "Objective D",
            (42.0, 6.0, 58.28),
            (78.0, 52.0, 37.21),
            DATUM_WGS84,
        ),
        Objective::new(
            "Centre point of map",
            (42.0, 5.0, 0.0),
            (78.0, 52.0, 30.0),
            DATUM_SK42,
        ),
    ]
}
