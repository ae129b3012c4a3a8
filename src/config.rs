use std::path::PathBuf;

use crate::cli::Cli;

pub const DEFAULT_DATABASE: &str = "tournament.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
	#[default]
	Text,
	Csv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
	pub database: PathBuf,
	/// Standard output when unset.
	pub output: Option<PathBuf>,
	pub format: OutputFormat,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			database: PathBuf::from(DEFAULT_DATABASE),
			output: None,
			format: OutputFormat::default(),
		}
	}
}

impl From<&Cli> for AppConfig {
	fn from(cli: &Cli) -> Self {
		Self {
			database: cli.database.clone(),
			output: cli.output.clone(),
			format: if cli.csv {
				OutputFormat::Csv
			} else {
				OutputFormat::Text
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn test_defaults_match_cli_without_flags() {
		let cli = Cli::try_parse_from(["swiss", "count", "-d", DEFAULT_DATABASE]).unwrap();

		assert_eq!(AppConfig::from(&cli), AppConfig::default());
	}

	#[test]
	fn test_csv_flag_selects_csv() {
		let cli = Cli::try_parse_from(["swiss", "standings", "--csv", "-o", "out.csv"]).unwrap();
		let config = AppConfig::from(&cli);

		assert_eq!(config.format, OutputFormat::Csv);
		assert_eq!(config.output, Some(PathBuf::from("out.csv")));
	}
}
