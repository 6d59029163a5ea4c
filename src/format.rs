//! Formatting of raw byte counts into localized, unit-scaled strings.

use crate::error::ValidationError;
use crate::locale::format_localized_number;
use crate::options::{FormatOptions, base_factor};
use crate::unit::{BYTE_UNITS, level_for_short};

/// Format a raw byte count into a human-readable string.
///
/// By default the closest unit is chosen: the largest level whose scaled
/// magnitude is at least 1, capped at Yottabytes. An explicit `unit` option
/// naming a known short code bypasses that selection entirely, even when it
/// produces a value below 1 or an enormous numeral. Negative values select
/// their unit by absolute value but keep their sign in the output.
///
/// # Errors
///
/// - [`ValidationError::NotANumber`] if `bytes` is NaN or infinite
/// - [`ValidationError::UnsupportedBase`] if the configured base is neither
///   2 nor 10
///
/// # Examples
///
/// ```
/// # use bytefmt::{format_bytes, FormatOptions};
/// let options = FormatOptions::default();
/// assert_eq!(format_bytes(50.0 * 1024.0 * 1024.0, &options).unwrap(), "50 MB");
/// assert_eq!(format_bytes(-50.0, &options).unwrap(), "-50 Bytes");
/// ```
pub fn format_bytes(bytes: f64, options: &FormatOptions) -> Result<String, ValidationError> {
    if !bytes.is_finite() {
        return Err(ValidationError::NotANumber(bytes));
    }

    let factor = base_factor(options.resolved_base())?;

    let level = options
        .unit
        .as_deref()
        .and_then(level_for_short)
        .unwrap_or_else(|| auto_level(bytes.abs(), factor));

    let entry = &BYTE_UNITS[level];
    let label = if options.long.unwrap_or(false) {
        entry.long
    } else {
        entry.short
    };

    let scaled = bytes / factor.powi(level as i32);
    let numeral = format_localized_number(
        scaled,
        options.resolved_locale(),
        &options.fraction_digits(),
        &options.numeral,
    );

    Ok(format!("{numeral} {label}"))
}

/// The largest scale level whose scaled magnitude stays at least 1, clamped
/// to the table bounds.
///
/// A magnitude of 0 drives the logarithm to negative infinity; the clamp
/// lands it (and every sub-1 magnitude) on level 0.
fn auto_level(magnitude: f64, factor: f64) -> usize {
    let raw = (magnitude.ln() / factor.ln()).floor();

    raw.clamp(0.0, (BYTE_UNITS.len() - 1) as f64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::NumeralFormatOptions;

    const SAMPLE: f64 = 50.4 * 1024.0 * 1024.0;

    fn defaults() -> FormatOptions {
        FormatOptions::default()
    }

    #[test]
    fn test_closest_unit_short_form_no_decimals() {
        assert_eq!(format_bytes(SAMPLE, &defaults()).unwrap(), "50 MB");
    }

    #[test]
    fn test_base_10() {
        let options = FormatOptions {
            base: Some(10),
            decimals: Some(2),
            ..defaults()
        };
        assert_eq!(format_bytes(SAMPLE, &options).unwrap(), "52.85 MB");
    }

    #[test]
    fn test_explicit_unit_bypasses_auto_scaling() {
        let options = FormatOptions {
            unit: Some("KB".to_string()),
            ..defaults()
        };
        assert_eq!(format_bytes(SAMPLE, &options).unwrap(), "51,610 KB");
        assert_eq!(
            format_bytes(50.0 * 1024.0 * 1024.0, &options).unwrap(),
            "51,200 KB"
        );
    }

    #[test]
    fn test_unknown_explicit_unit_falls_back_to_auto() {
        let options = FormatOptions {
            unit: Some("kb".to_string()),
            ..defaults()
        };
        assert_eq!(format_bytes(SAMPLE, &options).unwrap(), "50 MB");
    }

    #[test]
    fn test_decimals() {
        let options = FormatOptions {
            decimals: Some(2),
            ..defaults()
        };
        assert_eq!(format_bytes(SAMPLE, &options).unwrap(), "50.40 MB");
    }

    #[test]
    fn test_long_form() {
        let options = FormatOptions {
            long: Some(true),
            ..defaults()
        };
        assert_eq!(format_bytes(SAMPLE, &options).unwrap(), "50 Megabytes");
    }

    #[test]
    fn test_locale_decimals_and_unit() {
        let options = FormatOptions {
            locale: Some("de-DE".to_string()),
            decimals: Some(2),
            unit: Some("KB".to_string()),
            ..defaults()
        };
        assert_eq!(format_bytes(SAMPLE, &options).unwrap(), "51.609,60 KB");
    }

    #[test]
    fn test_all_options() {
        let options = FormatOptions {
            locale: Some("de-DE".to_string()),
            decimals: Some(2),
            unit: Some("KB".to_string()),
            long: Some(true),
            ..defaults()
        };
        assert_eq!(format_bytes(SAMPLE, &options).unwrap(), "51.609,60 Kilobytes");
    }

    #[test]
    fn test_level_selection_boundaries() {
        assert_eq!(format_bytes(1024.0, &defaults()).unwrap(), "1 KB");
        assert_eq!(format_bytes(1023.0, &defaults()).unwrap(), "1023 Bytes");
        assert_eq!(
            format_bytes(1024.0 * 1024.0, &defaults()).unwrap(),
            "1 MB"
        );
    }

    #[test]
    fn test_zero_and_sub_one_magnitudes_are_bytes() {
        assert_eq!(format_bytes(0.0, &defaults()).unwrap(), "0 Bytes");
        assert_eq!(format_bytes(0.4, &defaults()).unwrap(), "0 Bytes");
    }

    #[test]
    fn test_negative_values_keep_their_sign() {
        assert_eq!(format_bytes(-50.0, &defaults()).unwrap(), "-50 Bytes");
        assert_eq!(
            format_bytes(-50.0 * 1024.0, &defaults()).unwrap(),
            "-50 KB"
        );
    }

    #[test]
    fn test_enormous_values_cap_at_yottabytes() {
        let options = FormatOptions {
            decimals: Some(0),
            ..defaults()
        };
        let huge = 1024f64.powi(9);
        assert_eq!(format_bytes(huge, &options).unwrap(), "1024 YB");
    }

    #[test]
    fn test_fraction_overrides_take_precedence_over_decimals() {
        let options = FormatOptions {
            decimals: Some(6),
            numeral: NumeralFormatOptions {
                maximum_fraction_digits: Some(1),
                ..NumeralFormatOptions::default()
            },
            ..defaults()
        };
        assert_eq!(format_bytes(SAMPLE, &options).unwrap(), "50.4 MB");
    }

    #[test]
    fn test_non_finite_input_is_an_error() {
        assert!(matches!(
            format_bytes(f64::NAN, &defaults()),
            Err(ValidationError::NotANumber(_))
        ));
        assert!(matches!(
            format_bytes(f64::INFINITY, &defaults()),
            Err(ValidationError::NotANumber(_))
        ));
    }

    #[test]
    fn test_unsupported_base_is_an_error() {
        let options = FormatOptions {
            base: Some(3),
            ..defaults()
        };
        assert!(matches!(
            format_bytes(50.0, &options),
            Err(ValidationError::UnsupportedBase(3))
        ));
    }
}
