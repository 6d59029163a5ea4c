//! Call options and default configuration.
//!
//! All option structs use `Option` fields with an explicit merge step, so
//! per-call options override bundle defaults which override the built-in
//! defaults — the same layering the CLI applies between arguments, config
//! file, and hardcoded values. Everything here is plain immutable data.

use crate::error::ValidationError;
use crate::locale::FractionDigits;

/// The default unit base (binary: adjacent levels differ by 1024).
pub const DEFAULT_BASE: u32 = 2;

/// The default locale tag used for numeral parsing and rendering.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Shared base/locale configuration for parsing and formatting.
///
/// Unset fields fall back to [`DEFAULT_BASE`] / [`DEFAULT_LOCALE`] at the
/// point of use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteFormatConfig {
    /// The unit base: 2 (factor 1024) or 10 (factor 1000).
    ///
    /// Any other value fails with [`ValidationError::UnsupportedBase`].
    pub base: Option<u32>,

    /// Locale tag controlling thousand/decimal separators, e.g. `"de-DE"`.
    pub locale: Option<String>,
}

impl ByteFormatConfig {
    /// Layer this configuration over `defaults`: set fields win, unset
    /// fields are taken from `defaults`.
    #[must_use]
    pub fn merged(&self, defaults: &ByteFormatConfig) -> ByteFormatConfig {
        ByteFormatConfig {
            base: self.base.or(defaults.base),
            locale: self.locale.clone().or_else(|| defaults.locale.clone()),
        }
    }

    /// The effective base, applying the built-in default.
    #[must_use]
    pub fn resolved_base(&self) -> u32 {
        self.base.unwrap_or(DEFAULT_BASE)
    }

    /// The effective locale tag, applying the built-in default.
    #[must_use]
    pub fn resolved_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }
}

/// Options for [`crate::bytes`] / [`crate::parse_bytes`].
///
/// Identical to [`ByteFormatConfig`]; the parser needs nothing more.
pub type ParseOptions = ByteFormatConfig;

/// Options for the per-unit conversion helpers (`kilobytes`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// The unit base: 2 (factor 1024) or 10 (factor 1000).
    pub base: Option<u32>,
}

impl ConvertOptions {
    /// Layer this configuration over bundle `defaults`.
    #[must_use]
    pub fn merged(&self, defaults: &ByteFormatConfig) -> ConvertOptions {
        ConvertOptions {
            base: self.base.or(defaults.base),
        }
    }

    /// The effective base, applying the built-in default.
    #[must_use]
    pub fn resolved_base(&self) -> u32 {
        self.base.unwrap_or(DEFAULT_BASE)
    }
}

/// How the sign of a formatted numeral is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignDisplay {
    /// Sign only on negative numbers (including negative zero).
    #[default]
    Auto,

    /// Sign on every number.
    Always,

    /// Sign on everything except zero.
    ExceptZero,

    /// No sign, ever.
    Never,
}

/// Passthrough numeral-rendering options for [`crate::format_bytes`].
///
/// If either fraction-digit bound is set, `FormatOptions::decimals` is
/// ignored entirely; the absent bound defaults to 0 (minimum) or
/// `max(3, minimum)` (maximum).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumeralFormatOptions {
    /// Lower bound on rendered fraction digits (trailing zeros are kept up
    /// to this count).
    pub minimum_fraction_digits: Option<u32>,

    /// Upper bound on rendered fraction digits (the value is rounded here).
    pub maximum_fraction_digits: Option<u32>,

    /// Whether to group integer digits with the locale's thousand
    /// separator. Defaults to `true`.
    pub use_grouping: Option<bool>,

    /// Sign display policy. Defaults to [`SignDisplay::Auto`].
    pub sign_display: Option<SignDisplay>,
}

/// Options for [`crate::format_bytes`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatOptions {
    /// The unit base: 2 (factor 1024) or 10 (factor 1000).
    pub base: Option<u32>,

    /// Locale tag controlling numeral rendering, e.g. `"de-DE"`.
    pub locale: Option<String>,

    /// Number of decimals to include in the output. Defaults to 0.
    ///
    /// Ignored when either bound in [`FormatOptions::numeral`] is set.
    pub decimals: Option<u32>,

    /// Explicit short unit code (e.g. `"KB"`), bypassing auto-detection.
    ///
    /// Unknown codes fall back to auto-detection.
    pub unit: Option<String>,

    /// Use the long form of the unit (`"Kilobytes"` instead of `"KB"`).
    /// Defaults to `false`.
    pub long: Option<bool>,

    /// Passthrough numeral-rendering options.
    pub numeral: NumeralFormatOptions,
}

impl FormatOptions {
    /// Layer the base/locale fields over bundle `defaults`; the remaining
    /// fields have no bundle-level counterpart and pass through unchanged.
    #[must_use]
    pub fn merged(&self, defaults: &ByteFormatConfig) -> FormatOptions {
        FormatOptions {
            base: self.base.or(defaults.base),
            locale: self.locale.clone().or_else(|| defaults.locale.clone()),
            ..self.clone()
        }
    }

    /// The effective base, applying the built-in default.
    #[must_use]
    pub fn resolved_base(&self) -> u32 {
        self.base.unwrap_or(DEFAULT_BASE)
    }

    /// The effective locale tag, applying the built-in default.
    #[must_use]
    pub fn resolved_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    /// Resolve the effective fraction-digit bounds.
    ///
    /// Explicit bounds in [`FormatOptions::numeral`] take precedence over
    /// `decimals`; otherwise both bounds equal `decimals` (default 0).
    pub(crate) fn fraction_digits(&self) -> FractionDigits {
        let numeral = &self.numeral;

        if numeral.minimum_fraction_digits.is_some() || numeral.maximum_fraction_digits.is_some() {
            let min = numeral.minimum_fraction_digits.unwrap_or(0);
            let max = numeral.maximum_fraction_digits.unwrap_or(min.max(3));
            FractionDigits { min, max }
        } else {
            let decimals = self.decimals.unwrap_or(0);
            FractionDigits {
                min: decimals,
                max: decimals,
            }
        }
    }
}

/// Translate a configured base (2 or 10) into its scaling factor.
pub(crate) fn base_factor(base: u32) -> Result<f64, ValidationError> {
    match base {
        2 => Ok(1024.0),
        10 => Ok(1000.0),
        other => Err(ValidationError::UnsupportedBase(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ByteFormatConfig::default();
        assert_eq!(config.resolved_base(), 2);
        assert_eq!(config.resolved_locale(), "en-US");
    }

    #[test]
    fn test_merged_prefers_set_fields() {
        let defaults = ByteFormatConfig {
            base: Some(10),
            locale: Some("de-DE".to_string()),
        };
        let overrides = ByteFormatConfig {
            base: Some(2),
            locale: None,
        };

        let merged = overrides.merged(&defaults);
        assert_eq!(merged.base, Some(2));
        assert_eq!(merged.locale.as_deref(), Some("de-DE"));
    }

    #[test]
    fn test_format_options_merged_keeps_call_fields() {
        let defaults = ByteFormatConfig {
            base: Some(10),
            locale: Some("de-DE".to_string()),
        };
        let options = FormatOptions {
            decimals: Some(2),
            unit: Some("KB".to_string()),
            ..FormatOptions::default()
        };

        let merged = options.merged(&defaults);
        assert_eq!(merged.resolved_base(), 10);
        assert_eq!(merged.resolved_locale(), "de-DE");
        assert_eq!(merged.decimals, Some(2));
        assert_eq!(merged.unit.as_deref(), Some("KB"));
    }

    #[test]
    fn test_fraction_digits_from_decimals() {
        let options = FormatOptions {
            decimals: Some(2),
            ..FormatOptions::default()
        };
        let digits = options.fraction_digits();
        assert_eq!((digits.min, digits.max), (2, 2));
    }

    #[test]
    fn test_fraction_overrides_ignore_decimals_entirely() {
        let options = FormatOptions {
            decimals: Some(6),
            numeral: NumeralFormatOptions {
                maximum_fraction_digits: Some(1),
                ..NumeralFormatOptions::default()
            },
            ..FormatOptions::default()
        };
        let digits = options.fraction_digits();
        assert_eq!((digits.min, digits.max), (0, 1));

        let options = FormatOptions {
            decimals: Some(6),
            numeral: NumeralFormatOptions {
                minimum_fraction_digits: Some(4),
                ..NumeralFormatOptions::default()
            },
            ..FormatOptions::default()
        };
        let digits = options.fraction_digits();
        assert_eq!((digits.min, digits.max), (4, 4));
    }

    #[test]
    fn test_base_factor() {
        assert_eq!(base_factor(2).unwrap(), 1024.0);
        assert_eq!(base_factor(10).unwrap(), 1000.0);
        assert!(matches!(
            base_factor(3),
            Err(ValidationError::UnsupportedBase(3))
        ));
    }
}
