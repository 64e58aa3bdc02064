use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::writers::OutputFormat;

#[derive(Parser)]
#[command(name = "kg-coords")]
#[command(about = "Convert objectives to Pulkovo 1942 Gauss-Kruger map grid references")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Settings file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert objectives to kilometre grid references
    Convert {
        #[arg(
            short,
            long,
            help = "CSV file with name,latitude,longitude,datum [default: built-in objectives]"
        )]
        objectives: Option<PathBuf>,

        #[arg(short, long, help = "Target projection definition [default: EPSG:2542]")]
        target: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[arg(short, long, help = "Decimal places of grid values [default: 3]")]
        precision: Option<usize>,

        #[arg(long, help = "Report failing objectives and continue with the rest")]
        keep_going: bool,

        #[arg(long, help = "Accept minutes and seconds outside [0, 60)")]
        no_validate: bool,
    },

    /// Convert projected coordinates back to WGS84 latitude/longitude
    Inverse {
        #[arg(long, allow_hyphen_values = true)]
        easting: f64,

        #[arg(long, allow_hyphen_values = true)]
        northing: f64,

        #[arg(long, help = "Projection of the input [default: the configured target]")]
        crs: Option<String>,
    },

    /// Approximate east-west distance in metres between two longitudes along a parallel
    Distance {
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        #[arg(long, allow_hyphen_values = true)]
        from: f64,

        #[arg(long, allow_hyphen_values = true)]
        to: f64,
    },
}
