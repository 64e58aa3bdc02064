use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Conversion;
use crate::utils::constants::DEFAULT_GRID_PRECISION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Four lines per objective: name, position, grid reference, blank
    #[default]
    Text,
    Json,
    Csv,
}

pub struct ReportWriter {
    format: OutputFormat,
    precision: usize,
}

impl ReportWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            precision: DEFAULT_GRID_PRECISION,
        }
    }

    /// Decimal places for grid values in text output
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn write<W: Write>(&self, conversions: &[Conversion], out: W) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.write_text(conversions, out),
            OutputFormat::Json => Self::write_json(conversions, out),
            OutputFormat::Csv => Self::write_csv(conversions, out),
        }
    }

    fn write_text<W: Write>(&self, conversions: &[Conversion], mut out: W) -> Result<()> {
        for conversion in conversions {
            writeln!(out, "{}", conversion.name)?;
            writeln!(out, "{} N {} E", conversion.latitude, conversion.longitude)?;
            writeln!(
                out,
                "{:.prec$} {:.prec$}",
                conversion.grid_x,
                conversion.grid_y,
                prec = self.precision
            )?;
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }

    fn write_json<W: Write>(conversions: &[Conversion], mut out: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, conversions)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    fn write_csv<W: Write>(conversions: &[Conversion], out: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        for conversion in conversions {
            writer.serialize(conversion)?;
        }
        writer.flush()?;
        Ok(())
    }
}
