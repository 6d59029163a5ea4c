//! Per-unit conversion helpers and the configuration-bound factory.

use crate::error::ValidationError;
use crate::options::{
    ByteFormatConfig, ConvertOptions, FormatOptions, ParseOptions, base_factor,
};

/// Multiply a count by `factor^level` for a fixed scale level.
fn scale(value: f64, level: i32, options: &ConvertOptions) -> Result<f64, ValidationError> {
    Ok(value * base_factor(options.resolved_base())?.powi(level))
}

/// Convert a kilobyte count to bytes (`value * factor^1`).
///
/// # Errors
///
/// [`ValidationError::UnsupportedBase`] if the configured base is neither 2
/// nor 10. The same applies to every helper below.
pub fn kilobytes(value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
    scale(value, 1, options)
}

/// Convert a megabyte count to bytes (`value * factor^2`).
pub fn megabytes(value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
    scale(value, 2, options)
}

/// Convert a gigabyte count to bytes (`value * factor^3`).
pub fn gigabytes(value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
    scale(value, 3, options)
}

/// Convert a terabyte count to bytes (`value * factor^4`).
pub fn terabytes(value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
    scale(value, 4, options)
}

/// Convert a petabyte count to bytes (`value * factor^5`).
pub fn petabytes(value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
    scale(value, 5, options)
}

/// Convert an exabyte count to bytes (`value * factor^6`).
pub fn exabytes(value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
    scale(value, 6, options)
}

/// Convert a zettabyte count to bytes (`value * factor^7`).
pub fn zettabytes(value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
    scale(value, 7, options)
}

/// Convert a yottabyte count to bytes (`value * factor^8`).
pub fn yottabytes(value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
    scale(value, 8, options)
}

/// An immutable bundle of the parsing, formatting, and conversion entry
/// points, bound to a default base and locale.
///
/// Per-call options still take precedence over the bundle's defaults.
/// Independent bundles never interfere; the captured configuration cannot
/// change for the bundle's lifetime.
#[derive(Debug, Clone)]
pub struct ByteUtilities {
    config: ByteFormatConfig,
}

/// Bind a default base/locale configuration into a reusable bundle.
///
/// # Examples
///
/// ```
/// # use bytefmt::{create_bytes, ByteFormatConfig, ParseOptions};
/// let decimal = create_bytes(ByteFormatConfig {
///     base: Some(10),
///     locale: Some("de-DE".to_string()),
/// });
/// assert_eq!(decimal.bytes("50 KB", &ParseOptions::default()).unwrap(), 50_000.0);
/// ```
#[must_use]
pub fn create_bytes(config: ByteFormatConfig) -> ByteUtilities {
    ByteUtilities { config }
}

impl ByteUtilities {
    /// Parse a byte-size string with the bundle's defaults. See
    /// [`crate::bytes`].
    ///
    /// # Errors
    ///
    /// Same as [`crate::bytes`].
    pub fn bytes(&self, value: &str, options: &ParseOptions) -> Result<f64, ValidationError> {
        crate::parse::bytes(value, &options.merged(&self.config))
    }

    /// Alias of [`ByteUtilities::bytes`]; both names share one
    /// implementation.
    ///
    /// # Errors
    ///
    /// Same as [`crate::bytes`].
    pub fn parse_bytes(&self, value: &str, options: &ParseOptions) -> Result<f64, ValidationError> {
        self.bytes(value, options)
    }

    /// Format a byte count with the bundle's defaults. See
    /// [`crate::format_bytes`].
    ///
    /// # Errors
    ///
    /// Same as [`crate::format_bytes`].
    pub fn format_bytes(
        &self,
        value: f64,
        options: &FormatOptions,
    ) -> Result<String, ValidationError> {
        crate::format::format_bytes(value, &options.merged(&self.config))
    }

    /// See [`kilobytes`].
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnsupportedBase`] on a bad effective base, as for
    /// every helper below.
    pub fn kilobytes(&self, value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
        kilobytes(value, &options.merged(&self.config))
    }

    /// See [`megabytes`].
    pub fn megabytes(&self, value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
        megabytes(value, &options.merged(&self.config))
    }

    /// See [`gigabytes`].
    pub fn gigabytes(&self, value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
        gigabytes(value, &options.merged(&self.config))
    }

    /// See [`terabytes`].
    pub fn terabytes(&self, value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
        terabytes(value, &options.merged(&self.config))
    }

    /// See [`petabytes`].
    pub fn petabytes(&self, value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
        petabytes(value, &options.merged(&self.config))
    }

    /// See [`exabytes`].
    pub fn exabytes(&self, value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
        exabytes(value, &options.merged(&self.config))
    }

    /// See [`zettabytes`].
    pub fn zettabytes(&self, value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
        zettabytes(value, &options.merged(&self.config))
    }

    /// See [`yottabytes`].
    pub fn yottabytes(&self, value: f64, options: &ConvertOptions) -> Result<f64, ValidationError> {
        yottabytes(value, &options.merged(&self.config))
    }
}
