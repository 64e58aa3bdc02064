use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid projection definition '{definition}': {reason}")]
    InvalidDefinition { definition: String, reason: String },

    #[error("Unknown datum '{0}'")]
    UnknownDatum(String),

    #[error("Coordinate out of domain: {reason}")]
    OutOfDomain { reason: String },

    #[error("Invalid coordinate format: {0}")]
    InvalidCoordinate(String),

    #[error("Objective '{name}' failed: {source}")]
    Objective {
        name: String,
        #[source]
        source: Box<ConversionError>,
    },

    #[error("{failed} of {total} objectives failed to convert")]
    PartialFailure { failed: usize, total: usize },
}

impl ConversionError {
    pub fn invalid_definition(definition: &str, reason: impl Into<String>) -> Self {
        ConversionError::InvalidDefinition {
            definition: definition.to_string(),
            reason: reason.into(),
        }
    }

    pub fn out_of_domain(reason: impl Into<String>) -> Self {
        ConversionError::OutOfDomain {
            reason: reason.into(),
        }
    }
}
