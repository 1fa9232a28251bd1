//! excel-to-csv - export the solar system spreadsheet to CSV.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use realm_tools::convert::{run_conversion, ConvertConfig};
use realm_tools::error::ConvertError;
use realm_tools::logging;

/// Export columns A-Z of the solar system spreadsheet to CSV with canonical headers.
#[derive(Parser, Debug)]
#[command(name = "excel-to-csv")]
#[command(about = "Export the solar system spreadsheet to CSV with canonical headers")]
#[command(version)]
struct Cli {
    /// Project root containing the data/ directory
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Spreadsheet to read (default: data/solar_system_data 1.xlsx under the root)
    #[arg(long)]
    input: Option<PathBuf>,

    /// CSV file to write (default: data/solar_system_data.csv under the root)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Worksheet name (default: first worksheet)
    #[arg(long)]
    sheet: Option<String>,
}

impl Cli {
    fn into_config(self) -> ConvertConfig {
        let mut config = ConvertConfig::for_root(&self.root);
        if let Some(input) = self.input {
            config.input = self.root.join(input);
        }
        if let Some(output) = self.output {
            config.output = self.root.join(output);
        }
        config.sheet = self.sheet;
        config
    }
}

fn main() -> ExitCode {
    logging::init();

    let config = Cli::parse().into_config();

    match run_conversion(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e @ ConvertError::InputNotFound(_)) => {
            println!("Error: {}", e);
            ExitCode::from(1)
        }
        Err(e) => {
            println!("Error processing file: {}", e);
            ExitCode::from(1)
        }
    }
}
