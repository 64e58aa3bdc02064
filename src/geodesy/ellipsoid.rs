/// Reference ellipsoid defined by its semi-major axis and inverse flattening
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub a: f64,
    pub inverse_flattening: f64,
}

/// Earth-centred, earth-fixed cartesian coordinates in metres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geocentric {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 298.257_223_563);
    pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 298.257_222_101);
    /// Krassowsky 1940, the ellipsoid of Pulkovo 1942 (SK-42)
    pub const KRASSOWSKY: Ellipsoid = Ellipsoid::new(6_378_245.0, 298.3);
    pub const INTERNATIONAL: Ellipsoid = Ellipsoid::new(6_378_388.0, 297.0);
    pub const BESSEL: Ellipsoid = Ellipsoid::new(6_377_397.155, 299.152_812_8);

    pub const fn new(a: f64, inverse_flattening: f64) -> Self {
        Self {
            a,
            inverse_flattening,
        }
    }

    /// Look up an ellipsoid by its proj-style `+ellps=` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "wgs84" => Some(Self::WGS84),
            "grs80" => Some(Self::GRS80),
            "krass" => Some(Self::KRASSOWSKY),
            "intl" => Some(Self::INTERNATIONAL),
            "bessel" => Some(Self::BESSEL),
            _ => None,
        }
    }

    pub fn flattening(&self) -> f64 {
        1.0 / self.inverse_flattening
    }

    /// First eccentricity squared
    pub fn e2(&self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }

    pub fn eccentricity(&self) -> f64 {
        self.e2().sqrt()
    }

    /// Third flattening `n = f / (2 - f)`, the expansion parameter of the Krueger series
    pub fn third_flattening(&self) -> f64 {
        let f = self.flattening();
        f / (2.0 - f)
    }

    /// Radius of curvature in the prime vertical at a latitude given in radians
    fn prime_vertical_radius(&self, lat: f64) -> f64 {
        self.a / (1.0 - self.e2() * lat.sin().powi(2)).sqrt()
    }

    /// Convert geodetic longitude/latitude (radians) and ellipsoidal height to geocentric
    pub fn geodetic_to_geocentric(&self, lon: f64, lat: f64, height: f64) -> Geocentric {
        let n = self.prime_vertical_radius(lat);
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        Geocentric {
            x: (n + height) * cos_lat * cos_lon,
            y: (n + height) * cos_lat * sin_lon,
            z: (n * (1.0 - self.e2()) + height) * sin_lat,
        }
    }

    /// Convert geocentric coordinates back to geodetic longitude/latitude (radians) and height.
    ///
    /// Iterates on latitude until it settles below 1e-14 rad; converges in a handful
    /// of steps everywhere except on the polar axis, which is handled directly.
    pub fn geocentric_to_geodetic(&self, point: Geocentric) -> (f64, f64, f64) {
        const MAX_ITERATIONS: usize = 30;
        const TOLERANCE: f64 = 1e-14;

        let e2 = self.e2();
        let p = point.x.hypot(point.y);
        let lon = point.y.atan2(point.x);

        if p < 1e-9 {
            let b = self.a * (1.0 - self.flattening());
            let lat = std::f64::consts::FRAC_PI_2.copysign(point.z);
            return (lon, lat, point.z.abs() - b);
        }

        let mut lat = point.z.atan2(p * (1.0 - e2));
        let mut height = 0.0;
        for _ in 0..MAX_ITERATIONS {
            let n = self.prime_vertical_radius(lat);
            height = p / lat.cos() - n;
            let next = point.z.atan2(p * (1.0 - e2 * n / (n + height)));
            let delta = (next - lat).abs();
            lat = next;
            if delta < TOLERANCE {
                break;
            }
        }

        (lon, lat, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattening_parameters() {
        let wgs84 = Ellipsoid::WGS84;
        assert!((wgs84.e2() - 0.006_694_379_990_14).abs() < 1e-12);
        assert!((Ellipsoid::KRASSOWSKY.e2() - 0.006_693_421_622_97).abs() < 1e-12);
        assert!((wgs84.third_flattening() - 0.001_679_220_386_38).abs() < 1e-12);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Ellipsoid::from_name("krass"), Some(Ellipsoid::KRASSOWSKY));
        assert_eq!(Ellipsoid::from_name("WGS84"), Some(Ellipsoid::WGS84));
        assert_eq!(Ellipsoid::from_name("clrk80ign"), None);
    }

    #[test]
    fn test_equator_prime_meridian() {
        let p = Ellipsoid::WGS84.geodetic_to_geocentric(0.0, 0.0, 0.0);
        assert!((p.x - 6_378_137.0).abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        assert!(p.z.abs() < 1e-6);
    }

    #[test]
    fn test_geocentric_round_trip() {
        let ellipsoid = Ellipsoid::KRASSOWSKY;
        let lon = 78.896_619_f64.to_radians();
        let lat = 42.098_333_f64.to_radians();

        let p = ellipsoid.geodetic_to_geocentric(lon, lat, 1500.0);
        let (lon2, lat2, h2) = ellipsoid.geocentric_to_geodetic(p);

        assert!((lon2 - lon).abs() < 1e-12);
        assert!((lat2 - lat).abs() < 1e-12);
        assert!((h2 - 1500.0).abs() < 1e-6);
    }

    #[test]
    fn test_pole() {
        let ellipsoid = Ellipsoid::WGS84;
        let p = ellipsoid.geodetic_to_geocentric(0.0, -std::f64::consts::FRAC_PI_2, 0.0);
        let (_, lat, h) = ellipsoid.geocentric_to_geodetic(p);
        assert!((lat + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(h.abs() < 1e-6);
    }
}
