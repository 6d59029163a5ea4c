//! # bytefmt
//!
//! Convert between human-readable byte-size strings (`"50 KB"`,
//! `"5 Megabytes"`, `"1.5 MiB"`) and raw numeric byte counts, and format
//! byte counts back into localized, unit-scaled strings.
//!
//! ## Features
//!
//! - Tolerant parsing: short codes (`KB`), IEC binary codes (`KiB`),
//!   spelled-out names (`Kilobytes`, `kibibytes`), mixed case, optional
//!   whitespace
//! - Binary (1024) and decimal (1000) unit bases
//! - Locale-aware numerals: thousand and decimal separators follow the
//!   configured locale in both directions (`"50.000,5 KB"` parses under
//!   `de-DE`)
//! - Per-unit conversion helpers (`kilobytes` .. `yottabytes`) and a
//!   factory ([`create_bytes`]) binding default base/locale configuration
//!
//! ## Usage
//!
//! ```
//! use bytefmt::{bytes, format_bytes, FormatOptions, ParseOptions};
//!
//! let n = bytes("50 KB", &ParseOptions::default()).unwrap();
//! assert_eq!(n, 51_200.0);
//!
//! let s = format_bytes(51_200.0, &FormatOptions::default()).unwrap();
//! assert_eq!(s, "50 KB");
//! ```
//!
//! All computation is synchronous, allocation-light, and free of shared
//! state; every entry point is safe to call concurrently.

pub mod config;
mod convert;
pub mod error;
mod format;
mod locale;
pub mod options;
mod parse;
pub mod unit;

pub use convert::{
    ByteUtilities, create_bytes, exabytes, gigabytes, kilobytes, megabytes, petabytes, terabytes,
    yottabytes, zettabytes,
};
pub use error::ValidationError;
pub use format::format_bytes;
pub use options::{
    ByteFormatConfig, ConvertOptions, DEFAULT_BASE, DEFAULT_LOCALE, FormatOptions,
    NumeralFormatOptions, ParseOptions, SignDisplay,
};
pub use parse::{bytes, parse_bytes};
