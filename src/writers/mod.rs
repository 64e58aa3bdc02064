pub mod report_writer;

pub use report_writer::{OutputFormat, ReportWriter};
