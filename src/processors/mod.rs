pub mod converter;

pub use converter::{ConversionFailure, ConversionReport, ObjectiveConverter};
