use std::collections::BTreeMap;
use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::utils::constants::{
    DATUM_SK42, DATUM_WGS84, DEFAULT_GRID_PRECISION, ENV_PREFIX, PULKOVO_ZONE_26_DEFINITION,
    SK42_DEFINITION, WGS84_DEFINITION,
};

/// What to do when a single objective cannot be converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failing objective
    #[default]
    Abort,
    /// Report the failure and carry on with the remaining objectives
    Continue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Projection definition every objective is converted into
    pub target: String,
    /// Datum assumed for objectives that do not name one
    pub default_datum: String,
    /// Source datums by name
    pub datums: BTreeMap<String, String>,
    /// Decimal places of printed grid values
    pub precision: usize,
    pub on_error: FailurePolicy,
    /// Reject minutes or seconds outside [0, 60)
    pub validate_dms: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let mut datums = BTreeMap::new();
        datums.insert(DATUM_WGS84.to_string(), WGS84_DEFINITION.to_string());
        datums.insert(DATUM_SK42.to_string(), SK42_DEFINITION.to_string());

        Self {
            target: PULKOVO_ZONE_26_DEFINITION.to_string(),
            default_datum: DATUM_WGS84.to_string(),
            datums,
            precision: DEFAULT_GRID_PRECISION,
            on_error: FailurePolicy::Abort,
            validate_dms: true,
        }
    }
}

impl Settings {
    /// Load settings from built-in defaults, an optional config file and
    /// `KG_COORDS_*` environment variables, later sources taking precedence.
    ///
    /// Nested keys use a double underscore, e.g. `KG_COORDS_DATUMS__LOCAL`.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(path) = config_file {
            tracing::debug!(path = %path.display(), "loading settings file");
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
