use crate::error::{ConversionError, Result};

use super::crs::{Crs, Datum, Projection};
use super::ellipsoid::Ellipsoid;
use super::epsg;
use super::helmert::Helmert;
use super::tmerc::{TmercParams, TransverseMercator};

/// Flags accepted for compatibility that carry no meaning here
const IGNORED_FLAGS: [&str; 3] = ["no_defs", "wktext", "type"];

/// Parse a projection definition into a [`Crs`].
///
/// Accepts `EPSG:<code>`, `+init=EPSG:<code>` and proj-style parameter lists with
/// `+proj=longlat`, `+proj=tmerc` or `+proj=utm`. Unknown parameters are rejected
/// rather than ignored so a typo cannot silently change the result.
pub fn parse_definition(definition: &str) -> Result<Crs> {
    let trimmed = definition.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::invalid_definition(
            definition,
            "definition is empty",
        ));
    }

    if let Some(code) = strip_epsg(trimmed) {
        return registered(definition, code);
    }

    let mut params = Parameters::parse(definition, trimmed)?;
    for flag in IGNORED_FLAGS {
        params.discard(flag);
    }

    if let Some(init) = params.take_value("init")? {
        let code = strip_epsg(init).ok_or_else(|| {
            ConversionError::invalid_definition(
                definition,
                format!("+init expects EPSG:<code>, found '{}'", init),
            )
        })?;
        if let Some(key) = params.remaining_key() {
            return Err(ConversionError::invalid_definition(
                definition,
                format!("+init cannot be combined with +{}", key),
            ));
        }
        return registered(definition, code);
    }

    let proj = params.take_value("proj")?.ok_or_else(|| {
        ConversionError::invalid_definition(definition, "missing +proj parameter")
    })?;

    let datum = params.datum()?;

    if let Some(units) = params.take_value("units")? {
        if units != "m" {
            return Err(ConversionError::invalid_definition(
                definition,
                format!("unsupported units '{}', only metres are supported", units),
            ));
        }
    }

    let projection = match proj {
        "longlat" | "latlong" | "lonlat" | "latlon" => Projection::Geographic,
        "tmerc" => {
            let defaults = TmercParams::default();
            let k_0 = match params.take_f64("k")? {
                Some(k) => Some(k),
                None => params.take_f64("k_0")?,
            };
            let tmerc_params = TmercParams {
                lat_0: params.take_f64("lat_0")?.unwrap_or(defaults.lat_0),
                lon_0: params.take_f64("lon_0")?.unwrap_or(defaults.lon_0),
                k_0: k_0.unwrap_or(defaults.k_0),
                x_0: params.take_f64("x_0")?.unwrap_or(defaults.x_0),
                y_0: params.take_f64("y_0")?.unwrap_or(defaults.y_0),
            };
            params.check_tmerc(&tmerc_params)?;
            Projection::TransverseMercator(TransverseMercator::new(&datum.ellipsoid, tmerc_params))
        }
        "utm" => {
            let zone = params.take_f64("zone")?.ok_or_else(|| {
                ConversionError::invalid_definition(definition, "+proj=utm requires +zone")
            })?;
            if zone.fract() != 0.0 || !(1.0..=60.0).contains(&zone) {
                return Err(ConversionError::invalid_definition(
                    definition,
                    format!("UTM zone must be an integer from 1 to 60, found {}", zone),
                ));
            }
            let south = params.take_flag("south")?;
            Projection::TransverseMercator(TransverseMercator::new(
                &datum.ellipsoid,
                TmercParams::utm(zone as u8, south),
            ))
        }
        other => {
            return Err(ConversionError::invalid_definition(
                definition,
                format!("unsupported projection '{}'", other),
            ))
        }
    };

    if let Some(key) = params.remaining_key() {
        return Err(ConversionError::invalid_definition(
            definition,
            format!("unsupported parameter '+{}' for +proj={}", key, proj),
        ));
    }

    Ok(Crs::new(trimmed, datum, projection))
}

fn strip_epsg(text: &str) -> Option<&str> {
    let (authority, code) = text.split_once(':')?;
    authority.eq_ignore_ascii_case("epsg").then_some(code)
}

fn registered(definition: &str, code: &str) -> Result<Crs> {
    let number = code.trim().parse::<u32>().map_err(|_| {
        ConversionError::invalid_definition(definition, format!("invalid EPSG code '{}'", code))
    })?;
    epsg::lookup(number).ok_or_else(|| {
        ConversionError::invalid_definition(
            definition,
            format!("EPSG:{} is not in the built-in registry", number),
        )
    })
}

/// `+key[=value]` pairs of a definition, consumed as they are interpreted
struct Parameters<'a> {
    definition: &'a str,
    entries: Vec<(&'a str, Option<&'a str>)>,
}

impl<'a> Parameters<'a> {
    fn parse(definition: &'a str, trimmed: &'a str) -> Result<Self> {
        let mut entries: Vec<(&str, Option<&str>)> = Vec::new();

        for token in trimmed.split_whitespace() {
            let body = token.strip_prefix('+').ok_or_else(|| {
                ConversionError::invalid_definition(
                    definition,
                    format!("expected '+key=value', found '{}'", token),
                )
            })?;
            let (key, value) = match body.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (body, None),
            };
            if key.is_empty() {
                return Err(ConversionError::invalid_definition(
                    definition,
                    format!("empty parameter name in '{}'", token),
                ));
            }
            if entries.iter().any(|(existing, _)| *existing == key) {
                return Err(ConversionError::invalid_definition(
                    definition,
                    format!("parameter '+{}' given more than once", key),
                ));
            }
            entries.push((key, value));
        }

        Ok(Self {
            definition,
            entries,
        })
    }

    fn error(&self, reason: String) -> ConversionError {
        ConversionError::invalid_definition(self.definition, reason)
    }

    fn take(&mut self, key: &str) -> Option<Option<&'a str>> {
        let index = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(index).1)
    }

    fn discard(&mut self, key: &str) {
        self.take(key);
    }

    fn take_value(&mut self, key: &str) -> Result<Option<&'a str>> {
        match self.take(key) {
            None => Ok(None),
            Some(Some(value)) if !value.is_empty() => Ok(Some(value)),
            Some(_) => Err(self.error(format!("+{} requires a value", key))),
        }
    }

    fn take_flag(&mut self, key: &str) -> Result<bool> {
        match self.take(key) {
            None => Ok(false),
            Some(None) => Ok(true),
            Some(Some(value)) => Err(self.error(format!(
                "+{} is a flag and takes no value, found '{}'",
                key, value
            ))),
        }
    }

    fn take_f64(&mut self, key: &str) -> Result<Option<f64>> {
        match self.take_value(key)? {
            None => Ok(None),
            Some(text) => parse_number(text)
                .map(Some)
                .ok_or_else(|| self.error(format!("+{} expects a number, found '{}'", key, text))),
        }
    }

    fn remaining_key(&self) -> Option<&'a str> {
        self.entries.first().map(|(key, _)| *key)
    }

    fn datum(&mut self) -> Result<Datum> {
        let named_datum = self.take_value("datum")?;
        let ellps = self.take_value("ellps")?;
        let a = self.take_f64("a")?;
        let rf = self.take_f64("rf")?;
        let towgs84 = self.take_value("towgs84")?;

        let mut datum = match named_datum {
            Some(name) if name.eq_ignore_ascii_case("wgs84") => Datum::WGS84,
            Some(name) => return Err(self.error(format!("unsupported datum '{}'", name))),
            None => Datum::WGS84,
        };

        match (ellps, a, rf) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(self.error("+ellps cannot be combined with +a/+rf".to_string()));
            }
            (Some(name), None, None) => {
                datum.ellipsoid = Ellipsoid::from_name(name)
                    .ok_or_else(|| self.error(format!("unknown ellipsoid '{}'", name)))?;
            }
            (None, Some(a), Some(rf)) => {
                if !(a > 0.0 && rf > 1.0) {
                    return Err(self.error(format!("implausible ellipsoid a={} rf={}", a, rf)));
                }
                datum.ellipsoid = Ellipsoid::new(a, rf);
            }
            (None, Some(_), None) | (None, None, Some(_)) => {
                return Err(self.error("+a and +rf must be given together".to_string()));
            }
            (None, None, None) => {}
        }

        if named_datum.is_some() && (ellps.is_some() || a.is_some()) {
            return Err(self.error("+datum cannot be combined with an ellipsoid".to_string()));
        }

        if let Some(list) = towgs84 {
            let values = list
                .split(',')
                .map(|v| parse_number(v.trim()))
                .collect::<Option<Vec<f64>>>()
                .ok_or_else(|| self.error(format!("+towgs84 has a non-numeric value in '{}'", list)))?;
            datum.to_wgs84 = Helmert::from_towgs84(&values).ok_or_else(|| {
                self.error(format!(
                    "+towgs84 expects 3 or 7 values, found {}",
                    values.len()
                ))
            })?;
        }

        Ok(datum)
    }

    fn check_tmerc(&self, params: &TmercParams) -> Result<()> {
        if !(params.k_0 > 0.0) {
            return Err(self.error(format!("scale factor must be positive, found {}", params.k_0)));
        }
        if !(-90.0..=90.0).contains(&params.lat_0) {
            return Err(self.error(format!("+lat_0={} is outside [-90, 90]", params.lat_0)));
        }
        Ok(())
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
