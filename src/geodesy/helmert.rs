use super::ellipsoid::Geocentric;

const ARC_SECONDS_TO_RADIANS: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Seven-parameter Helmert (Bursa-Wolf) shift from a local datum to WGS84.
///
/// Uses the position vector convention of the proj `+towgs84` parameter:
/// translations in metres, rotations in arc-seconds, scale in parts per million.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Helmert {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    pub scale_ppm: f64,
}

impl Helmert {
    pub const IDENTITY: Helmert = Helmert {
        dx: 0.0,
        dy: 0.0,
        dz: 0.0,
        rx: 0.0,
        ry: 0.0,
        rz: 0.0,
        scale_ppm: 0.0,
    };

    /// Build from the values of a `+towgs84=` list; three values mean translation only
    pub fn from_towgs84(values: &[f64]) -> Option<Self> {
        match *values {
            [dx, dy, dz] => Some(Self {
                dx,
                dy,
                dz,
                ..Self::IDENTITY
            }),
            [dx, dy, dz, rx, ry, rz, scale_ppm] => Some(Self {
                dx,
                dy,
                dz,
                rx,
                ry,
                rz,
                scale_ppm,
            }),
            _ => None,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    fn rotations(&self) -> (f64, f64, f64) {
        (
            self.rx * ARC_SECONDS_TO_RADIANS,
            self.ry * ARC_SECONDS_TO_RADIANS,
            self.rz * ARC_SECONDS_TO_RADIANS,
        )
    }

    fn scale(&self) -> f64 {
        1.0 + self.scale_ppm * 1e-6
    }

    /// Shift a geocentric point from the local datum to WGS84
    pub fn to_wgs84(&self, p: Geocentric) -> Geocentric {
        if self.is_identity() {
            return p;
        }
        let (rx, ry, rz) = self.rotations();
        let m = self.scale();

        Geocentric {
            x: m * (p.x - rz * p.y + ry * p.z) + self.dx,
            y: m * (rz * p.x + p.y - rx * p.z) + self.dy,
            z: m * (-ry * p.x + rx * p.y + p.z) + self.dz,
        }
    }

    /// Shift a geocentric WGS84 point into the local datum.
    ///
    /// Applies the transposed rotation, which is exact to first order in the
    /// rotation angles; for realistic datum rotations the residual is well below
    /// a millimetre.
    pub fn from_wgs84(&self, p: Geocentric) -> Geocentric {
        if self.is_identity() {
            return p;
        }
        let (rx, ry, rz) = self.rotations();
        let m = self.scale();

        let x = (p.x - self.dx) / m;
        let y = (p.y - self.dy) / m;
        let z = (p.z - self.dz) / m;

        Geocentric {
            x: x + rz * y - ry * z,
            y: -rz * x + y + rx * z,
            z: ry * x - rx * y + z,
        }
    }
}
