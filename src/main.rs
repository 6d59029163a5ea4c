//! # bytefmt CLI
//!
//! A small command-line front end over the `bytefmt` library: convert
//! human-readable byte-size strings into raw byte counts and back.
//!
//! ## Usage
//!
//! ```bash
//! # Parse a size string into bytes
//! bytefmt parse "50 KB"
//!
//! # Decimal base and a German locale
//! bytefmt parse "50.000,5 KB" --base 10 --locale de-DE
//!
//! # Format a byte count
//! bytefmt format 52848230.4 --decimals 2
//!
//! # JSON output for scripting
//! bytefmt parse "1.5 MiB" --json
//! ```
//!
//! Persistent defaults live in `~/.config/bytefmt/config.toml`; CLI
//! arguments override them.

mod cli;

use std::process::exit;

use anyhow::{Result, bail};
use bytefmt::config::FileConfig;
use bytefmt::{DEFAULT_BASE, DEFAULT_LOCALE, bytes, format_bytes};
use clap::Parser;
use cli::{Cli, Commands, ConfigArgs, ConfigCommand};
use colored::Colorize;
use serde::Serialize;

/// Entry point for the bytefmt CLI.
///
/// Handles all errors by calling [`inner_main`] and printing them to stderr
/// before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err}", "Error:".red().bold());

        exit(1);
    }
}

/// Main application logic that can return errors.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let file_config = load_config(args.json);

    match &args.command {
        Commands::Parse { value, config } => run_parse(value, config, &file_config, args.json),
        Commands::Format {
            bytes,
            config,
            decimals,
            unit,
            long,
        } => run_format(
            *bytes,
            config,
            *decimals,
            unit.as_deref(),
            *long,
            &file_config,
            args.json,
        ),
        Commands::Config { command } => handle_config_command(command),
    }
}

/// Load the config file, falling back to defaults (with a warning on stderr
/// unless JSON mode is active) when it cannot be read.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(err) => {
            if !json_mode {
                eprintln!("{} {err:#}", "Warning:".yellow().bold());
            }
            FileConfig::default()
        }
    }
}

/// JSON document emitted by `bytefmt parse --json`.
///
/// A byte count of `null` means the input did not match the size grammar
/// (the library's NaN result).
#[derive(Serialize)]
struct ParseOutput<'a> {
    /// The input string as given.
    input: &'a str,

    /// The parsed byte count.
    bytes: f64,
}

/// JSON document emitted by `bytefmt format --json`.
#[derive(Serialize)]
struct FormatOutput<'a> {
    /// The input byte count as given.
    bytes: f64,

    /// The formatted, localized size string.
    formatted: &'a str,
}

/// Run the `parse` subcommand.
fn run_parse(value: &str, config: &ConfigArgs, file: &FileConfig, json: bool) -> Result<()> {
    let options = config.parse_options(file);
    let parsed = bytes(value, &options)?;

    if json {
        let output = ParseOutput {
            input: value,
            bytes: parsed,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{parsed}");
    }

    Ok(())
}

/// Run the `format` subcommand.
fn run_format(
    value: f64,
    config: &ConfigArgs,
    decimals: Option<u32>,
    unit: Option<&str>,
    long: bool,
    file: &FileConfig,
    json: bool,
) -> Result<()> {
    let options = config.format_options(decimals, unit, long, file);
    let formatted = format_bytes(value, &options)?;

    if json {
        let output = FormatOutput {
            bytes: value,
            formatted: &formatted,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{formatted}");
    }

    Ok(())
}

// ── Config subcommand ────────────────────────────────────────────────

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    fn show_u32(val: Option<u32>, default: u32) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(
            || format!("\"{default}\"  (default)"),
            |v| format!("\"{v}\""),
        )
    }
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }

    println!();
    println!("base     = {}", show_u32(config.base, DEFAULT_BASE));
    println!("locale   = {}", show_str(config.locale.as_deref(), DEFAULT_LOCALE));
    println!("decimals = {}", show_u32(config.decimals, 0));
    println!("long     = {}", show_bool(config.long, false));

    Ok(())
}
