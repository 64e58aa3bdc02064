use validator::Validate;

use crate::error::{ConversionError, Result};
use crate::models::Dms;
use crate::utils::constants::METRES_PER_DEGREE_AT_EQUATOR;

/// Parse DMS text (`DD:MM:SS`, optionally with a leading `-`) without range checks
pub fn parse_dms(dms: &str) -> Result<Dms> {
    let trimmed = dms.trim();
    let parts: Vec<&str> = trimmed.split(':').map(|s| s.trim()).collect();

    if parts.len() != 3 {
        return Err(ConversionError::InvalidCoordinate(format!(
            "Invalid DMS format: '{}'. Expected format: 'DD:MM:SS'",
            dms
        )));
    }

    let degrees = parts[0].parse::<f64>().map_err(|_| {
        ConversionError::InvalidCoordinate(format!("Invalid degrees value: '{}'", parts[0]))
    })?;

    let minutes = parts[1].parse::<f64>().map_err(|_| {
        ConversionError::InvalidCoordinate(format!("Invalid minutes value: '{}'", parts[1]))
    })?;

    let seconds = parts[2].parse::<f64>().map_err(|_| {
        ConversionError::InvalidCoordinate(format!("Invalid seconds value: '{}'", parts[2]))
    })?;

    // "-0:07:39" parses degrees as -0.0, which keeps the sign
    Ok(Dms::new(degrees, minutes, seconds))
}

/// Convert DMS (Degrees:Minutes:Seconds) text to decimal degrees
///
/// # Examples
/// ```
/// use kg_coords::utils::dms_to_decimal;
///
/// let decimal = dms_to_decimal("42:05:54").unwrap();
/// assert!((decimal - 42.098333).abs() < 0.000001);
/// ```
pub fn dms_to_decimal(dms: &str) -> Result<f64> {
    let parsed = parse_dms(dms)?;
    parsed.validate().map_err(|e| {
        ConversionError::InvalidCoordinate(format!(
            "Minutes and seconds must be in [0, 60) in '{}': {}",
            dms, e
        ))
    })?;
    Ok(parsed.to_decimal())
}

/// Convert decimal degrees to DMS format
///
/// Seconds are rounded to hundredths before formatting and carried into
/// minutes and degrees, so the text never shows 60 seconds or minutes.
pub fn decimal_to_dms(decimal: f64) -> String {
    let dms = Dms::from_decimal(decimal);
    let sign = if dms.degrees.is_sign_negative() { "-" } else { "" };

    let mut degrees = dms.degrees.abs();
    let mut minutes = dms.minutes;
    let mut seconds = (dms.seconds * 100.0).round() / 100.0;
    if seconds >= 60.0 {
        seconds -= 60.0;
        minutes += 1.0;
    }
    if minutes >= 60.0 {
        minutes -= 60.0;
        degrees += 1.0;
    }

    format!("{}{}:{:02}:{:05.2}", sign, degrees, minutes, seconds)
}

/// Parse a coordinate that might be in DMS or decimal format
pub fn parse_coordinate(coord_str: &str) -> Result<Dms> {
    let trimmed = coord_str.trim();

    if !trimmed.contains(':') {
        let decimal = trimmed.parse::<f64>().map_err(|_| {
            ConversionError::InvalidCoordinate(format!("Invalid coordinate value: '{}'", coord_str))
        })?;
        Ok(Dms::new(decimal, 0.0, 0.0))
    } else {
        parse_dms(trimmed)
    }
}

/// Approximate east-west ground distance in metres between two longitudes along a
/// parallel, `(lng1 - lng2) * 111321 * cos(latitude)`.
///
/// This follows the line of constant latitude using a fixed equatorial degree
/// length on a sphere. It is not a great-circle distance and ignores the
/// ellipsoid, so treat it as a rough estimate. The result is signed: positive
/// when `lng1` is east of `lng2`.
pub fn distance_along_latitude(latitude: f64, lng1: f64, lng2: f64) -> f64 {
    (lng1 - lng2) * METRES_PER_DEGREE_AT_EQUATOR * latitude.to_radians().cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dms_to_decimal() {
        assert!((dms_to_decimal("42:05:54").unwrap() - 42.098_333).abs() < 0.000_001);
        assert!((dms_to_decimal("78:53:47.83").unwrap() - 78.896_619).abs() < 0.000_001);

        // -0:07:39 = -(7/60 + 39/3600) = -0.1275
        let result = dms_to_decimal("-0:07:39").unwrap();
        assert!((result + 0.1275).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_dms_format() {
        assert!(dms_to_decimal("42:05").is_err());
        assert!(dms_to_decimal("42:70:15").is_err()); // Invalid minutes
        assert!(dms_to_decimal("42:30:70").is_err()); // Invalid seconds
        assert!(dms_to_decimal("4x:30:10").is_err());
    }

    #[test]
    fn test_parse_dms_keeps_out_of_range_parts() {
        let dms = parse_dms("42:70:15").unwrap();
        assert_eq!(dms.minutes, 70.0);
        assert!(dms.validate().is_err());
    }

    #[test]
    fn test_decimal_to_dms() {
        assert_eq!(decimal_to_dms(42.098_333_333_333_33), "42:05:54.00");
        assert_eq!(decimal_to_dms(-0.1275), "-0:07:39.00");
    }

    #[test]
    fn test_decimal_to_dms_carries_rounded_seconds() {
        assert_eq!(decimal_to_dms(78.516_666_666_666), "78:31:00.00");
        assert_eq!(decimal_to_dms(42.999_999_9), "43:00:00.00");
        assert_eq!(decimal_to_dms(-42.999_999_9), "-43:00:00.00");
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("42.0983").unwrap().to_decimal(), 42.0983);
        assert!((parse_coordinate("42:05:54").unwrap().to_decimal() - 42.098_333).abs() < 0.000_001);
        assert_eq!(parse_coordinate(" -0.1278 ").unwrap().to_decimal(), -0.1278);
        assert!(parse_coordinate("north").is_err());
    }

    #[test]
    fn test_zero_span_is_zero_distance() {
        for (lat, lng) in [(0.0, 0.0), (42.1, 78.9), (-60.0, -120.5), (89.0, 179.0)] {
            assert_eq!(distance_along_latitude(lat, lng, lng), 0.0);
        }
    }

    #[test]
    fn test_distance_is_antisymmetric() {
        let forward = distance_along_latitude(42.1, 78.91, 78.87);
        let backward = distance_along_latitude(42.1, 78.87, 78.91);
        assert_eq!(forward, -backward);
        assert!(forward > 0.0);
    }

    #[test]
    fn test_distance_values() {
        assert_eq!(distance_along_latitude(0.0, 1.0, 0.0), 111_321.0);
        // one degree at 60N is half the equatorial length
        assert!((distance_along_latitude(60.0, 1.0, 0.0) - 55_660.5).abs() < 1e-6);
    }
}
