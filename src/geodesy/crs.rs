use std::fmt;
use std::str::FromStr;

use crate::error::{ConversionError, Result};

use super::definition::parse_definition;
use super::ellipsoid::Ellipsoid;
use super::helmert::Helmert;
use super::tmerc::TransverseMercator;

/// Geodetic datum: an ellipsoid plus its shift to WGS84
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    pub ellipsoid: Ellipsoid,
    pub to_wgs84: Helmert,
}

impl Datum {
    pub const WGS84: Datum = Datum {
        ellipsoid: Ellipsoid::WGS84,
        to_wgs84: Helmert::IDENTITY,
    };

    /// Pulkovo 1942 with the shift registered for the former Soviet Union
    pub const PULKOVO_1942: Datum = Datum {
        ellipsoid: Ellipsoid::KRASSOWSKY,
        to_wgs84: Helmert {
            dx: 23.92,
            dy: -141.27,
            dz: -80.9,
            rx: 0.0,
            ry: 0.35,
            rz: 0.82,
            scale_ppm: -0.12,
        },
    };

    pub fn new(ellipsoid: Ellipsoid, to_wgs84: Helmert) -> Self {
        Self {
            ellipsoid,
            to_wgs84,
        }
    }
}

/// Geographic bounding box (degrees) a CRS is intended for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaOfUse {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl AreaOfUse {
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        (self.west..=self.east).contains(&lon) && (self.south..=self.north).contains(&lat)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// Longitude/latitude in degrees
    Geographic,
    TransverseMercator(TransverseMercator),
}

/// Coordinate reference system: a datum and a way of expressing points on it.
///
/// Built once from a definition string and then shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Crs {
    name: String,
    datum: Datum,
    projection: Projection,
    area_of_use: Option<AreaOfUse>,
}

impl Crs {
    pub fn new(name: impl Into<String>, datum: Datum, projection: Projection) -> Self {
        Self {
            name: name.into(),
            datum,
            projection,
            area_of_use: None,
        }
    }

    pub fn with_area_of_use(mut self, area: AreaOfUse) -> Self {
        self.area_of_use = Some(area);
        self
    }

    pub fn wgs84() -> Self {
        Self::new("WGS 84", Datum::WGS84, Projection::Geographic)
    }

    /// Parse a proj-style definition such as `+proj=tmerc +lon_0=135 +ellps=krass`
    /// or a registered code such as `EPSG:2542`
    pub fn parse(definition: &str) -> Result<Self> {
        parse_definition(definition)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn datum(&self) -> &Datum {
        &self.datum
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn area_of_use(&self) -> Option<&AreaOfUse> {
        self.area_of_use.as_ref()
    }

    pub fn is_geographic(&self) -> bool {
        matches!(self.projection, Projection::Geographic)
    }

    /// Express geographic degrees on this CRS's datum in its native units
    pub fn project(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        match &self.projection {
            Projection::Geographic => Ok((lon, lat)),
            Projection::TransverseMercator(tmerc) => tmerc.forward(lon, lat),
        }
    }

    /// Recover geographic degrees (lon, lat) on this CRS's datum from native units
    pub fn unproject(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        match &self.projection {
            Projection::Geographic => {
                if (-90.0..=90.0).contains(&y) {
                    Ok((x, y))
                } else {
                    Err(ConversionError::out_of_domain(format!(
                        "latitude {} is outside [-90, 90]",
                        y
                    )))
                }
            }
            Projection::TransverseMercator(tmerc) => tmerc.inverse(x, y),
        }
    }
}

impl FromStr for Crs {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
