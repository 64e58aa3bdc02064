use std::io;

use tracing::info;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::geodesy::{to_wgs84, Crs};
use crate::models::builtin_objectives;
use crate::processors::ObjectiveConverter;
use crate::readers::ObjectiveReader;
use crate::settings::{FailurePolicy, Settings};
use crate::utils::coordinates::{decimal_to_dms, distance_along_latitude};
use crate::utils::logging::init_logging;
use crate::writers::ReportWriter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let mut settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            objectives,
            target,
            format,
            precision,
            keep_going,
            no_validate,
        } => {
            if let Some(target) = target {
                settings.target = target;
            }
            if let Some(precision) = precision {
                settings.precision = precision;
            }
            if keep_going {
                settings.on_error = FailurePolicy::Continue;
            }
            if no_validate {
                settings.validate_dms = false;
            }

            let converter = ObjectiveConverter::from_settings(&settings)?;

            let objectives = match objectives {
                Some(path) => {
                    info!(path = %path.display(), "reading objectives");
                    ObjectiveReader::new(settings.default_datum.as_str()).read_objectives(&path)?
                }
                None => builtin_objectives(),
            };

            // skipped objectives are already logged by the converter
            let report = converter.convert_all(&objectives)?;

            let writer = ReportWriter::new(format).with_precision(settings.precision);
            writer.write(&report.conversions, io::stdout().lock())?;

            report.into_result()?;
        }

        Commands::Inverse {
            easting,
            northing,
            crs,
        } => {
            let crs = Crs::parse(crs.as_deref().unwrap_or(settings.target.as_str()))?;
            let (lon, lat) = to_wgs84(&crs, easting, northing)?;

            println!("{} N {} E", lat, lon);
            println!("{} N {} E", decimal_to_dms(lat), decimal_to_dms(lon));
        }

        Commands::Distance { latitude, from, to } => {
            let metres = distance_along_latitude(latitude, from, to);
            println!("{:.1} m", metres);
        }
    }

    Ok(())
}
