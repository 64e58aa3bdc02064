use std::collections::BTreeMap;

use tracing::{debug, info, warn};
use validator::Validate;

use crate::error::{ConversionError, Result};
use crate::geodesy::{transform, Crs};
use crate::models::{Conversion, Objective};
use crate::settings::{FailurePolicy, Settings};

/// An objective that could not be converted
#[derive(Debug)]
pub struct ConversionFailure {
    pub name: String,
    pub error: ConversionError,
}

#[derive(Debug, Default)]
pub struct ConversionReport {
    pub conversions: Vec<Conversion>,
    pub failures: Vec<ConversionFailure>,
}

impl ConversionReport {
    pub fn total(&self) -> usize {
        self.conversions.len() + self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn a report with skipped objectives into an error once its output is written
    pub fn into_result(self) -> Result<Vec<Conversion>> {
        if self.is_complete() {
            Ok(self.conversions)
        } else {
            Err(ConversionError::PartialFailure {
                failed: self.failures.len(),
                total: self.total(),
            })
        }
    }
}

/// Converts objectives from their source datums into one target CRS.
///
/// All CRS values are parsed up front; a bad definition fails construction
/// instead of surfacing halfway through a run.
pub struct ObjectiveConverter {
    target: Crs,
    datums: BTreeMap<String, Crs>,
    failure_policy: FailurePolicy,
    validate_dms: bool,
}

impl ObjectiveConverter {
    pub fn new(target: Crs) -> Self {
        Self {
            target,
            datums: BTreeMap::new(),
            failure_policy: FailurePolicy::Abort,
            validate_dms: true,
        }
    }

    /// Register a source datum; names are case-insensitive
    pub fn with_datum(mut self, name: impl Into<String>, crs: Crs) -> Self {
        self.datums.insert(name.into().to_lowercase(), crs);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_dms_validation(mut self, validate: bool) -> Self {
        self.validate_dms = validate;
        self
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut converter = Self::new(Crs::parse(&settings.target)?)
            .with_failure_policy(settings.on_error)
            .with_dms_validation(settings.validate_dms);

        for (name, definition) in &settings.datums {
            let crs = Crs::parse(definition)?;
            debug!(datum = %name, crs = %crs, "registered source datum");
            converter = converter.with_datum(name.clone(), crs);
        }

        if converter.datum(&settings.default_datum).is_none() {
            return Err(ConversionError::UnknownDatum(settings.default_datum.clone()));
        }

        Ok(converter)
    }

    pub fn target(&self) -> &Crs {
        &self.target
    }

    pub fn datum(&self, name: &str) -> Option<&Crs> {
        self.datums.get(&name.to_lowercase())
    }

    /// Convert one objective; errors name the objective
    pub fn convert(&self, objective: &Objective) -> Result<Conversion> {
        self.convert_unnamed(objective)
            .map_err(|error| ConversionError::Objective {
                name: objective.name.clone(),
                source: Box::new(error),
            })
    }

    fn convert_unnamed(&self, objective: &Objective) -> Result<Conversion> {
        if self.validate_dms {
            objective.validate()?;
        }

        let source = self
            .datum(&objective.datum)
            .ok_or_else(|| ConversionError::UnknownDatum(objective.datum.clone()))?;

        let projected = transform(
            source,
            &self.target,
            objective.decimal_longitude(),
            objective.decimal_latitude(),
        )?;

        Ok(Conversion::new(objective, projected))
    }

    /// Convert objectives in order, applying the failure policy
    pub fn convert_all(&self, objectives: &[Objective]) -> Result<ConversionReport> {
        let mut report = ConversionReport::default();

        for objective in objectives {
            match self.convert(objective) {
                Ok(conversion) => report.conversions.push(conversion),
                Err(error) => match self.failure_policy {
                    FailurePolicy::Abort => return Err(error),
                    FailurePolicy::Continue => {
                        warn!(objective = %objective.name, error = %error, "skipping objective");
                        report.failures.push(ConversionFailure {
                            name: objective.name.clone(),
                            error,
                        });
                    }
                },
            }
        }

        info!(
            converted = report.conversions.len(),
            failed = report.failures.len(),
            target = %self.target,
            "conversion finished"
        );

        Ok(report)
    }
}
