//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and subcommands using the
//! [clap](https://docs.rs/clap/) library. Helper methods accept a
//! [`FileConfig`] reference so that config-file values act as defaults that
//! CLI arguments can override (layered config).

use clap::{Args, Parser, Subcommand};

use bytefmt::config::FileConfig;
use bytefmt::{FormatOptions, ParseOptions};

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "bytefmt")]
#[command(about = "Convert between human-readable byte-size strings and raw byte counts")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output the result as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output is suppressed and a single
    /// JSON document is printed to stdout.
    #[arg(long, global = true)]
    pub json: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse a byte-size string ("50 KB", "1.5 MiB", "5 Megabytes") into a raw byte count
    Parse {
        /// The size string to parse
        value: String,

        /// Shared base/locale options
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Format a raw byte count into a human-readable, localized string
    Format {
        /// The byte count to format
        #[arg(allow_negative_numbers = true)]
        bytes: f64,

        /// Shared base/locale options
        #[command(flatten)]
        config: ConfigArgs,

        /// Number of decimals to include in the output
        #[arg(short, long)]
        decimals: Option<u32>,

        /// Force a specific unit by short code (e.g. "KB") instead of
        /// auto-scaling to the closest unit
        #[arg(short, long)]
        unit: Option<String>,

        /// Use the long form of the unit ("Kilobytes" instead of "KB")
        #[arg(short, long)]
        long: bool,
    },

    /// Inspect the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Print the path to the config file
    Path,
}

/// Base/locale options shared by `parse` and `format`.
#[derive(Args)]
pub struct ConfigArgs {
    /// Unit base: 2 (KB = 1024 bytes) or 10 (KB = 1000 bytes)
    #[arg(short, long)]
    pub base: Option<u32>,

    /// Locale used for numeral separators (e.g. "en-US", "de-DE")
    #[arg(short = 'L', long)]
    pub locale: Option<String>,
}

impl ConfigArgs {
    /// Build parser options from CLI args and config file.
    ///
    /// Priority per field: CLI argument > config file > library default.
    #[must_use]
    pub fn parse_options(&self, config: &FileConfig) -> ParseOptions {
        ParseOptions {
            base: self.base.or(config.base),
            locale: self.locale.clone().or_else(|| config.locale.clone()),
        }
    }

    /// Build formatter options from CLI args and config file.
    ///
    /// Priority per field: CLI argument > config file > library default.
    /// The `long` flag is sticky: either source can enable it.
    #[must_use]
    pub fn format_options(
        &self,
        decimals: Option<u32>,
        unit: Option<&str>,
        long: bool,
        config: &FileConfig,
    ) -> FormatOptions {
        FormatOptions {
            base: self.base.or(config.base),
            locale: self.locale.clone().or_else(|| config.locale.clone()),
            decimals: decimals.or(config.decimals),
            unit: unit.map(str::to_string),
            long: Some(long || config.long.unwrap_or(false)),
            ..FormatOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_layering_prefers_arguments_over_file() {
        let args = Cli::parse_from(["bytefmt", "parse", "50 KB", "--base", "2"]);
        let file = FileConfig {
            base: Some(10),
            locale: Some("de-DE".to_string()),
            ..FileConfig::default()
        };

        let Commands::Parse { config, .. } = &args.command else {
            panic!("expected parse subcommand");
        };
        let options = config.parse_options(&file);
        assert_eq!(options.base, Some(2));
        assert_eq!(options.locale.as_deref(), Some("de-DE"));
    }

    #[test]
    fn test_format_options_layering() {
        let args = Cli::parse_from(["bytefmt", "format", "51200", "--decimals", "1"]);
        let file = FileConfig {
            decimals: Some(3),
            long: Some(true),
            ..FileConfig::default()
        };

        let Commands::Format {
            config,
            decimals,
            unit,
            long,
            ..
        } = &args.command
        else {
            panic!("expected format subcommand");
        };
        let options = config.format_options(*decimals, unit.as_deref(), *long, &file);
        assert_eq!(options.decimals, Some(1));
        assert_eq!(options.long, Some(true));
        assert_eq!(options.base, None);
    }
}
