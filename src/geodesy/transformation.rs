use tracing::{debug, warn};

use crate::error::{ConversionError, Result};
use crate::models::ProjectedPoint;

use super::crs::{Crs, Datum};

/// Transform a geographic point on the source CRS's datum into the target CRS.
///
/// `lon` and `lat` are decimal degrees. When `source` is a projected CRS the
/// point is still read as geographic coordinates on its datum; only the datum
/// of the source matters. The result is in the target's native units.
pub fn transform(source: &Crs, target: &Crs, lon: f64, lat: f64) -> Result<ProjectedPoint> {
    check_geographic(lon, lat)?;
    warn_outside_area(source, lon, lat);

    let (target_lon, target_lat) = shift_datum(source.datum(), target.datum(), lon, lat);
    warn_outside_area(target, target_lon, target_lat);

    let (easting, northing) = target.project(target_lon, target_lat)?;
    debug!(
        source = %source,
        target = %target,
        lon,
        lat,
        easting,
        northing,
        "transformed point"
    );

    Ok(ProjectedPoint::new(easting, northing))
}

/// Move geographic degrees from one datum to another through WGS84 geocentric space.
///
/// Heights are taken as zero on the source ellipsoid and dropped afterwards.
pub fn shift_datum(from: &Datum, to: &Datum, lon: f64, lat: f64) -> (f64, f64) {
    if from == to {
        return (lon, lat);
    }

    let local = from
        .ellipsoid
        .geodetic_to_geocentric(lon.to_radians(), lat.to_radians(), 0.0);
    let shifted = to.to_wgs84.from_wgs84(from.to_wgs84.to_wgs84(local));
    let (lon, lat, _) = to.ellipsoid.geocentric_to_geodetic(shifted);

    (lon.to_degrees(), lat.to_degrees())
}

/// Unproject native coordinates of `crs` and express them as WGS84 degrees (lon, lat)
pub fn to_wgs84(crs: &Crs, x: f64, y: f64) -> Result<(f64, f64)> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ConversionError::out_of_domain(format!(
            "({}, {}) is not a finite coordinate",
            x, y
        )));
    }
    let (lon, lat) = crs.unproject(x, y)?;
    Ok(shift_datum(crs.datum(), &Datum::WGS84, lon, lat))
}

fn check_geographic(lon: f64, lat: f64) -> Result<()> {
    if !lon.is_finite() || !lat.is_finite() {
        return Err(ConversionError::out_of_domain(format!(
            "({}, {}) is not a finite coordinate",
            lon, lat
        )));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(ConversionError::out_of_domain(format!(
            "latitude {} is outside [-90, 90]",
            lat
        )));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(ConversionError::out_of_domain(format!(
            "longitude {} is outside [-180, 180]",
            lon
        )));
    }
    Ok(())
}

fn warn_outside_area(crs: &Crs, lon: f64, lat: f64) {
    if let Some(area) = crs.area_of_use() {
        if !area.contains(lon, lat) {
            warn!(crs = %crs, lon, lat, "point lies outside the area of use");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::epsg;

    const SK42: &str = "+proj=tmerc +lat_0=0 +lon_0=135 +k=1 +x_0=500000 +y_0=0 +ellps=krass \
                        +towgs84=24.0,-123.0,-94.0,0.02,-0.25,-0.13,1.1 +units=m +no_defs";

    fn zone_26() -> Crs {
        epsg::lookup(2542).unwrap()
    }

    #[test]
    fn test_objective_a_wgs84_to_zone_26() {
        let lat = 42.0 + 5.0 / 60.0 + 54.0 / 3600.0;
        let lon = 78.0 + 53.0 / 60.0 + 47.83 / 3600.0;

        let point = transform(&Crs::wgs84(), &zone_26(), lon, lat).unwrap();
        assert!((point.easting - 26_574_211.915).abs() < 0.01);
        assert!((point.northing - 4_663_000.615).abs() < 0.01);
    }

    #[test]
    fn test_sk42_source_uses_its_own_datum() {
        let sk42 = Crs::parse(SK42).unwrap();
        let point = transform(&sk42, &zone_26(), 78.875, 42.0 + 5.0 / 60.0).unwrap();
        assert!((point.easting - 26_572_395.105).abs() < 0.01);
        assert!((point.northing - 4_661_328.267).abs() < 0.01);
    }

    #[test]
    fn test_datum_shift_is_tens_of_metres() {
        let (lon, lat) = shift_datum(&Datum::WGS84, &Datum::PULKOVO_1942, 78.9, 42.1);
        let d_lon_m = (lon - 78.9) * 111_321.0 * 42.1_f64.to_radians().cos();
        let d_lat_m = (lat - 42.1) * 111_000.0;
        assert!(d_lon_m.abs() > 1.0 && d_lon_m.abs() < 200.0);
        assert!(d_lat_m.abs() > 1.0 && d_lat_m.abs() < 200.0);
    }

    #[test]
    fn test_same_datum_is_untouched() {
        assert_eq!(
            shift_datum(&Datum::PULKOVO_1942, &Datum::PULKOVO_1942, 78.9, 42.1),
            (78.9, 42.1)
        );
    }

    #[test]
    fn test_to_wgs84_inverts_transform() {
        let point = transform(&Crs::wgs84(), &zone_26(), 78.8966, 42.0983).unwrap();
        let (lon, lat) = to_wgs84(&zone_26(), point.easting, point.northing).unwrap();
        assert!((lon - 78.8966).abs() < 1e-8);
        assert!((lat - 42.0983).abs() < 1e-8);
    }

    #[test]
    fn test_to_wgs84_rejects_northing_off_the_grid() {
        assert!(matches!(
            to_wgs84(&zone_26(), 26_500_000.0, 1e12),
            Err(ConversionError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn test_geographic_target_returns_degrees() {
        let point = transform(&Crs::wgs84(), &Crs::wgs84(), 78.5, 42.25).unwrap();
        assert_eq!(point, ProjectedPoint::new(78.5, 42.25));
    }

    #[test]
    fn test_out_of_domain() {
        let target = zone_26();
        assert!(transform(&Crs::wgs84(), &target, 78.0, 91.0).is_err());
        assert!(transform(&Crs::wgs84(), &target, 181.0, 42.0).is_err());
        assert!(transform(&Crs::wgs84(), &target, f64::NAN, 42.0).is_err());
        assert!(matches!(
            transform(&Crs::wgs84(), &target, -100.0, 42.0),
            Err(ConversionError::OutOfDomain { .. })
        ));
    }
}
