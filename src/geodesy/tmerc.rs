use crate::error::{ConversionError, Result};

use super::ellipsoid::Ellipsoid;

/// Transverse Mercator parameters as they appear in a projection definition (degrees, metres)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TmercParams {
    pub lat_0: f64,
    pub lon_0: f64,
    pub k_0: f64,
    pub x_0: f64,
    pub y_0: f64,
}

impl Default for TmercParams {
    fn default() -> Self {
        Self {
            lat_0: 0.0,
            lon_0: 0.0,
            k_0: 1.0,
            x_0: 0.0,
            y_0: 0.0,
        }
    }
}

impl TmercParams {
    /// Universal Transverse Mercator zone (1-60)
    pub fn utm(zone: u8, south: bool) -> Self {
        Self {
            lat_0: 0.0,
            lon_0: f64::from(zone) * 6.0 - 183.0,
            k_0: 0.9996,
            x_0: 500_000.0,
            y_0: if south { 10_000_000.0 } else { 0.0 },
        }
    }

    /// Pulkovo 1942 Gauss-Kruger zone with the zone number prefixed to the easting
    pub fn gauss_kruger(central_meridian: f64, zone: u32) -> Self {
        Self {
            lat_0: 0.0,
            lon_0: central_meridian,
            k_0: 1.0,
            x_0: f64::from(zone) * 1_000_000.0 + 500_000.0,
            y_0: 0.0,
        }
    }
}

/// Ellipsoidal transverse Mercator using the 6th order Krueger series in the third flattening.
///
/// Accurate to well under a millimetre within several degrees of the central meridian,
/// which covers every Gauss-Kruger and UTM zone.
#[derive(Debug, Clone, PartialEq)]
pub struct TransverseMercator {
    params: TmercParams,
    eccentricity: f64,
    /// `k_0` times the rectifying radius
    radius: f64,
    alpha: [f64; 6],
    beta: [f64; 6],
    /// Projected northing of `lat_0` on the central meridian before false northing
    origin_northing: f64,
}

impl TransverseMercator {
    pub fn new(ellipsoid: &Ellipsoid, params: TmercParams) -> Self {
        let n = ellipsoid.third_flattening();
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;
        let n5 = n4 * n;
        let n6 = n5 * n;

        let rectifying_radius =
            ellipsoid.a / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0 + n6 / 256.0);

        let alpha = [
            n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0 + 41.0 * n4 / 180.0 - 127.0 * n5 / 288.0
                + 7891.0 * n6 / 37800.0,
            13.0 * n2 / 48.0 - 3.0 * n3 / 5.0 + 557.0 * n4 / 1440.0 + 281.0 * n5 / 630.0
                - 1_983_433.0 * n6 / 1_935_360.0,
            61.0 * n3 / 240.0 - 103.0 * n4 / 140.0 + 15061.0 * n5 / 26880.0
                + 167_603.0 * n6 / 181_440.0,
            49561.0 * n4 / 161_280.0 - 179.0 * n5 / 168.0 + 6_601_661.0 * n6 / 7_257_600.0,
            34729.0 * n5 / 80640.0 - 3_418_889.0 * n6 / 1_995_840.0,
            212_378_941.0 * n6 / 319_334_400.0,
        ];

        let beta = [
            n / 2.0 - 2.0 * n2 / 3.0 + 37.0 * n3 / 96.0 - n4 / 360.0 - 81.0 * n5 / 512.0
                + 96199.0 * n6 / 604_800.0,
            n2 / 48.0 + n3 / 15.0 - 437.0 * n4 / 1440.0 + 46.0 * n5 / 105.0
                - 1_118_711.0 * n6 / 3_870_720.0,
            17.0 * n3 / 480.0 - 37.0 * n4 / 840.0 - 209.0 * n5 / 4480.0 + 5569.0 * n6 / 90720.0,
            4397.0 * n4 / 161_280.0 - 11.0 * n5 / 504.0 - 830_251.0 * n6 / 7_257_600.0,
            4583.0 * n5 / 161_280.0 - 108_847.0 * n6 / 3_991_680.0,
            20_648_693.0 * n6 / 638_668_800.0,
        ];

        let mut projection = Self {
            params,
            eccentricity: ellipsoid.eccentricity(),
            radius: params.k_0 * rectifying_radius,
            alpha,
            beta,
            origin_northing: 0.0,
        };
        let (_, northing) = projection.gauss_krueger(params.lat_0.to_radians(), 0.0);
        projection.origin_northing = projection.radius * northing;
        projection
    }

    pub fn params(&self) -> &TmercParams {
        &self.params
    }

    /// Normalised (unscaled) Gauss-Krueger coordinates for a latitude and a longitude
    /// offset from the central meridian, both in radians.
    fn gauss_krueger(&self, lat: f64, lam: f64) -> (f64, f64) {
        let e = self.eccentricity;
        let sin_lat = lat.sin();
        let t = (sin_lat.atanh() - e * (e * sin_lat).atanh()).sinh();

        let xi = t.atan2(lam.cos());
        let eta = (lam.sin() / (1.0 + t * t).sqrt()).atanh();

        let mut x = eta;
        let mut y = xi;
        for (j, a) in self.alpha.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            x += a * (k * xi).cos() * (k * eta).sinh();
            y += a * (k * xi).sin() * (k * eta).cosh();
        }
        (x, y)
    }

    /// Project geographic degrees on this projection's ellipsoid to easting/northing metres
    pub fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        let lam = wrap_longitude(lon - self.params.lon_0).to_radians();
        if lam.cos() <= 0.0 {
            return Err(ConversionError::out_of_domain(format!(
                "longitude {} is 90 degrees or more from central meridian {}",
                lon, self.params.lon_0
            )));
        }

        let (x, y) = self.gauss_krueger(lat.to_radians(), lam);
        let easting = self.params.x_0 + self.radius * x;
        let northing = self.params.y_0 + self.radius * y - self.origin_northing;

        if !easting.is_finite() || !northing.is_finite() {
            return Err(ConversionError::out_of_domain(format!(
                "({}, {}) has no finite transverse Mercator image",
                lon, lat
            )));
        }
        Ok((easting, northing))
    }

    /// Unproject easting/northing metres back to geographic degrees (lon, lat)
    pub fn inverse(&self, easting: f64, northing: f64) -> Result<(f64, f64)> {
        let xi = (northing - self.params.y_0 + self.origin_northing) / self.radius;
        let eta = (easting - self.params.x_0) / self.radius;
        if !xi.is_finite() || xi.abs() > std::f64::consts::FRAC_PI_2 || !eta.is_finite() {
            return Err(ConversionError::out_of_domain(format!(
                "({}, {}) lies beyond the poles of the transverse Mercator grid",
                easting, northing
            )));
        }

        let mut xi_p = xi;
        let mut eta_p = eta;
        for (j, b) in self.beta.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            xi_p -= b * (k * xi).sin() * (k * eta).cosh();
            eta_p -= b * (k * xi).cos() * (k * eta).sinh();
        }

        let chi = (xi_p.sin() / eta_p.cosh()).asin();
        let lam = eta_p.sinh().atan2(xi_p.cos());
        if !chi.is_finite() || !lam.is_finite() {
            return Err(ConversionError::out_of_domain(format!(
                "({}, {}) is outside the transverse Mercator domain",
                easting, northing
            )));
        }

        let lat = self.latitude_from_conformal(chi);
        let lon = wrap_longitude(self.params.lon_0 + lam.to_degrees());
        Ok((lon, lat.to_degrees()))
    }

    fn latitude_from_conformal(&self, chi: f64) -> f64 {
        const MAX_ITERATIONS: usize = 15;
        const TOLERANCE: f64 = 1e-14;

        let e = self.eccentricity;
        let k = (std::f64::consts::FRAC_PI_4 + chi / 2.0).tan();
        let mut lat = chi;
        for _ in 0..MAX_ITERATIONS {
            let es = e * lat.sin();
            let next = 2.0 * (k * ((1.0 + es) / (1.0 - es)).powf(e / 2.0)).atan()
                - std::f64::consts::FRAC_PI_2;
            let delta = (next - lat).abs();
            lat = next;
            if delta < TOLERANCE {
                break;
            }
        }
        lat
    }
}

/// Wrap a longitude difference into [-180, 180)
pub(crate) fn wrap_longitude(lon: f64) -> f64 {
    if (-180.0..180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone_26() -> TransverseMercator {
        TransverseMercator::new(
            &Ellipsoid::KRASSOWSKY,
            TmercParams::gauss_kruger(78.0, 26),
        )
    }

    #[test]
    fn test_central_meridian_equator() {
        let (x, y) = zone_26().forward(78.0, 0.0).unwrap();
        assert!((x - 26_500_000.0).abs() < 1e-6);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn test_central_meridian_is_meridian_arc() {
        // Krassowsky meridian arc from the equator to 42N
        let (x, y) = zone_26().forward(78.0, 42.0).unwrap();
        assert!((x - 26_500_000.0).abs() < 1e-6);
        assert!((y - 4_651_719.054).abs() < 0.005);
    }

    #[test]
    fn test_symmetry_about_central_meridian() {
        let projection = zone_26();
        let (east_x, east_y) = projection.forward(79.2, 41.0).unwrap();
        let (west_x, west_y) = projection.forward(76.8, 41.0).unwrap();
        assert!(((east_x - 26_500_000.0) + (west_x - 26_500_000.0)).abs() < 1e-6);
        assert!((east_y - west_y).abs() < 1e-6);
    }

    #[test]
    fn test_utm_reference_point() {
        let projection = TransverseMercator::new(&Ellipsoid::WGS84, TmercParams::utm(31, false));
        let (x, y) = projection.forward(4.0, 51.0).unwrap();
        assert!((x - 570_168.862).abs() < 0.005);
        assert!((y - 5_650_300.787).abs() < 0.005);
    }

    #[test]
    fn test_southern_false_northing() {
        let projection = TransverseMercator::new(&Ellipsoid::WGS84, TmercParams::utm(34, true));
        let (_, y) = projection.forward(21.0, -33.9).unwrap();
        assert!(y > 6_000_000.0 && y < 10_000_000.0);
    }

    #[test]
    fn test_latitude_of_origin() {
        let params = TmercParams {
            lat_0: 30.0,
            ..TmercParams::default()
        };
        let projection = TransverseMercator::new(&Ellipsoid::KRASSOWSKY, params);
        let (_, y) = projection.forward(0.0, 30.0).unwrap();
        assert!(y.abs() < 1e-6);
        let (_, y) = projection.forward(0.0, 0.0).unwrap();
        assert!((y + 3_320_172.407).abs() < 0.005);
    }

    #[test]
    fn test_inverse_recovers_point() {
        let projection = zone_26();
        let (x, y) = projection.forward(78.8966, 42.0983).unwrap();
        let (lon, lat) = projection.inverse(x, y).unwrap();
        assert!((lon - 78.8966).abs() < 1e-9);
        assert!((lat - 42.0983).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_far_side_of_globe() {
        assert!(matches!(
            zone_26().forward(-102.0, 10.0),
            Err(ConversionError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn test_inverse_rejects_northing_beyond_pole() {
        for northing in [1e12, -1e12, 2.1e7, f64::NAN] {
            assert!(matches!(
                zone_26().inverse(26_500_000.0, northing),
                Err(ConversionError::OutOfDomain { .. })
            ));
        }
        let (_, lat) = zone_26().inverse(26_500_000.0, 9_000_000.0).unwrap();
        assert!(lat > 80.0 && lat < 90.0);
    }

    #[test]
    fn test_wrap_longitude() {
        assert_eq!(wrap_longitude(10.0), 10.0);
        assert_eq!(wrap_longitude(190.0), -170.0);
        assert_eq!(wrap_longitude(-190.0), 170.0);
        assert_eq!(wrap_longitude(180.0), -180.0);
    }
}
