use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// An angle in degrees, minutes and seconds.
///
/// The sign of `degrees` (including `-0.0`) applies to the whole angle, so
/// `-0° 7' 39"` is written `Dms::new(-0.0, 7.0, 39.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Dms {
    pub degrees: f64,

    #[validate(range(min = 0.0, exclusive_max = 60.0))]
    pub minutes: f64,

    #[validate(range(min = 0.0, exclusive_max = 60.0))]
    pub seconds: f64,
}

impl Dms {
    pub const fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Decimal degrees: `degrees + minutes/60 + seconds/3600`, signed by `degrees`
    pub fn to_decimal(&self) -> f64 {
        let magnitude = self.degrees.abs() + self.minutes / 60.0 + self.seconds / 3600.0;
        if self.degrees.is_sign_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    pub fn from_decimal(decimal: f64) -> Self {
        let magnitude = decimal.abs();
        let degrees = magnitude.trunc();
        let minutes_decimal = (magnitude - degrees) * 60.0;
        let minutes = minutes_decimal.trunc();
        let seconds = (minutes_decimal - minutes) * 60.0;

        Self {
            degrees: if decimal.is_sign_negative() {
                -degrees
            } else {
                degrees
            },
            minutes,
            seconds,
        }
    }
}

impl From<(f64, f64, f64)> for Dms {
    fn from((degrees, minutes, seconds): (f64, f64, f64)) -> Self {
        Self::new(degrees, minutes, seconds)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.degrees.is_sign_negative() { "-" } else { "" };
        write!(
            f,
            "{}{}°{}'{}\"",
            sign,
            self.degrees.abs(),
            self.minutes,
            self.seconds
        )
    }
}
