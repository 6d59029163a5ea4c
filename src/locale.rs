//! Locale-aware numeral parsing and rendering.
//!
//! Backed by [`num_format`], which carries CLDR-derived per-locale symbol
//! data (grouping separator, decimal separator, minus sign, grouping rule).
//! Parsing strips the locale's separators and defers to the standard
//! floating-point literal parser; rendering rounds to a fixed number of
//! fraction digits and reassembles the digits with the locale's symbols.

use num_format::{Grouping, Locale};

use crate::options::{NumeralFormatOptions, SignDisplay};

/// Grouping is applied only once the integer part reaches this many digits,
/// so `1023` renders ungrouped while `51610` renders as `51,610`.
const MIN_GROUPING_DIGITS: usize = 5;

/// Effective fraction-digit bounds for one formatting call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FractionDigits {
    /// Trailing zeros are kept up to this count.
    pub(crate) min: u32,

    /// The value is rounded to this count.
    pub(crate) max: u32,
}

/// Resolve a BCP-47-style tag (`"de-DE"`) to a [`Locale`].
///
/// Tries the full tag (normalized to underscores), then the primary subtag,
/// and finally falls back to `en`. Resolution never fails, mirroring a host
/// formatter's default-locale fallback.
pub(crate) fn resolve_locale(tag: &str) -> Locale {
    let name = tag.replace('-', "_");

    Locale::from_name(&name)
        .or_else(|_| Locale::from_name(name.split('_').next().unwrap_or_default()))
        .unwrap_or(Locale::en)
}

/// Parse a numeral written in the given locale's convention into a float.
///
/// Strips every occurrence of the locale's grouping separator, replaces the
/// first occurrence of the locale's decimal separator with `.`, and parses
/// the result as a standard floating-point literal. Returns [`f64::NAN`]
/// when the cleaned text is not a valid number — callers decide whether
/// that matters.
pub(crate) fn parse_localized_number(text: &str, locale_tag: &str) -> f64 {
    let locale = resolve_locale(locale_tag);
    let group = locale.separator();
    let decimal = locale.decimal();

    let mut cleaned = if group.is_empty() {
        text.to_owned()
    } else {
        text.replace(group, "")
    };

    if !decimal.is_empty() && decimal != "." {
        if let Some(pos) = cleaned.find(decimal) {
            cleaned.replace_range(pos..pos + decimal.len(), ".");
        }
    }

    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}

/// Render a float in the given locale's convention.
///
/// The value is rounded to `digits.max` fraction digits, trailing zeros are
/// trimmed down to `digits.min`, and the integer digits are grouped per the
/// locale's grouping rule (subject to `numeral.use_grouping` and the
/// minimum-grouping-digits threshold).
pub(crate) fn format_localized_number(
    value: f64,
    locale_tag: &str,
    digits: &FractionDigits,
    numeral: &NumeralFormatOptions,
) -> String {
    let locale = resolve_locale(locale_tag);
    let max = digits.max.max(digits.min);

    let fixed = format!("{value:.prec$}", prec = max as usize);
    let negative = fixed.starts_with('-');
    let unsigned = fixed.trim_start_matches('-');

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };

    let fraction = trim_fraction(frac_part, digits.min as usize);
    let integer = if numeral.use_grouping.unwrap_or(true) {
        group_digits(int_part, &locale)
    } else {
        int_part.to_owned()
    };

    let is_zero =
        int_part.bytes().all(|b| b == b'0') && frac_part.bytes().all(|b| b == b'0');
    let sign = sign_prefix(
        negative,
        is_zero,
        numeral.sign_display.unwrap_or_default(),
        &locale,
    );

    let mut out = String::with_capacity(sign.len() + integer.len() + 1 + fraction.len());
    out.push_str(sign);
    out.push_str(&integer);
    if !fraction.is_empty() {
        out.push_str(locale.decimal());
        out.push_str(fraction);
    }

    out
}

/// Drop trailing zeros from a fraction rendered at maximum width, keeping at
/// least `min` digits.
fn trim_fraction(fraction: &str, min: usize) -> &str {
    let kept = fraction.trim_end_matches('0').len().max(min);
    &fraction[..kept.min(fraction.len())]
}

/// Insert the locale's grouping separator into a run of integer digits.
fn group_digits(digits: &str, locale: &Locale) -> String {
    if locale.separator().is_empty()
        || digits.len() < MIN_GROUPING_DIGITS
        || matches!(locale.grouping(), Grouping::Posix)
    {
        return digits.to_owned();
    }

    // The rightmost group takes three digits; subsequent groups take three,
    // or two under Indian grouping.
    let secondary = match locale.grouping() {
        Grouping::Indian => 2,
        _ => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut remaining = digits;
    let mut size = 3;

    loop {
        if remaining.len() <= size {
            groups.push(remaining);
            break;
        }
        let split = remaining.len() - size;
        groups.push(&remaining[split..]);
        remaining = &remaining[..split];
        size = secondary;
    }

    groups.reverse();
    groups.join(locale.separator())
}

/// The sign prefix for a rendered numeral.
fn sign_prefix(
    negative: bool,
    is_zero: bool,
    display: SignDisplay,
    locale: &Locale,
) -> &'static str {
    match display {
        SignDisplay::Never => "",
        SignDisplay::Auto => {
            if negative {
                locale.minus_sign()
            } else {
                ""
            }
        }
        SignDisplay::Always => {
            if negative {
                locale.minus_sign()
            } else {
                "+"
            }
        }
        SignDisplay::ExceptZero => {
            if is_zero {
                ""
            } else if negative {
                locale.minus_sign()
            } else {
                "+"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(min: u32, max: u32) -> FractionDigits {
        FractionDigits { min, max }
    }

    #[test]
    fn test_resolve_locale_full_tag_and_primary_subtag() {
        assert_eq!(resolve_locale("en-US").decimal(), ".");
        assert_eq!(resolve_locale("de-DE").decimal(), ",");
        assert_eq!(resolve_locale("de-DE").separator(), ".");
    }

    #[test]
    fn test_resolve_locale_unknown_falls_back_to_en() {
        assert_eq!(resolve_locale("zz-ZZ").decimal(), ".");
        assert_eq!(resolve_locale("").separator(), ",");
    }

    #[test]
    fn test_parse_en_us() {
        assert_eq!(parse_localized_number("50", "en-US"), 50.0);
        assert_eq!(parse_localized_number("50,000.5", "en-US"), 50_000.5);
        assert_eq!(parse_localized_number("-1,234", "en-US"), -1234.0);
    }

    #[test]
    fn test_parse_de_de() {
        assert_eq!(parse_localized_number("50.000,5", "de-DE"), 50_000.5);
        assert_eq!(parse_localized_number("1,5", "de-DE"), 1.5);
    }

    #[test]
    fn test_parse_invalid_is_nan_not_error() {
        assert!(parse_localized_number("", "en-US").is_nan());
        assert!(parse_localized_number("1.2.3", "en-US").is_nan());
        assert!(parse_localized_number("abc", "en-US").is_nan());
    }

    #[test]
    fn test_format_rounds_and_groups() {
        let numeral = NumeralFormatOptions::default();
        assert_eq!(
            format_localized_number(51_609.6, "en-US", &digits(0, 0), &numeral),
            "51,610"
        );
        assert_eq!(
            format_localized_number(51_609.6, "de-DE", &digits(2, 2), &numeral),
            "51.609,60"
        );
    }

    #[test]
    fn test_format_grouping_threshold() {
        let numeral = NumeralFormatOptions::default();
        assert_eq!(
            format_localized_number(1023.0, "en-US", &digits(0, 0), &numeral),
            "1023"
        );
        assert_eq!(
            format_localized_number(10_234.0, "en-US", &digits(0, 0), &numeral),
            "10,234"
        );
    }

    #[test]
    fn test_format_trims_to_minimum_fraction_digits() {
        let numeral = NumeralFormatOptions::default();
        assert_eq!(
            format_localized_number(50.4, "en-US", &digits(0, 3), &numeral),
            "50.4"
        );
        assert_eq!(
            format_localized_number(50.0, "en-US", &digits(2, 4), &numeral),
            "50.00"
        );
    }

    #[test]
    fn test_format_without_grouping() {
        let numeral = NumeralFormatOptions {
            use_grouping: Some(false),
            ..NumeralFormatOptions::default()
        };
        assert_eq!(
            format_localized_number(51_610.0, "en-US", &digits(0, 0), &numeral),
            "51610"
        );
    }

    #[test]
    fn test_format_sign_display() {
        let always = NumeralFormatOptions {
            sign_display: Some(SignDisplay::Always),
            ..NumeralFormatOptions::default()
        };
        assert_eq!(
            format_localized_number(50.0, "en-US", &digits(0, 0), &always),
            "+50"
        );

        let never = NumeralFormatOptions {
            sign_display: Some(SignDisplay::Never),
            ..NumeralFormatOptions::default()
        };
        assert_eq!(
            format_localized_number(-50.0, "en-US", &digits(0, 0), &never),
            "50"
        );

        let except_zero = NumeralFormatOptions {
            sign_display: Some(SignDisplay::ExceptZero),
            ..NumeralFormatOptions::default()
        };
        assert_eq!(
            format_localized_number(0.0, "en-US", &digits(0, 0), &except_zero),
            "0"
        );
        assert_eq!(
            format_localized_number(-2.0, "en-US", &digits(0, 0), &except_zero),
            "-2"
        );
    }

    #[test]
    fn test_format_negative() {
        let numeral = NumeralFormatOptions::default();
        assert_eq!(
            format_localized_number(-50.0, "en-US", &digits(0, 0), &numeral),
            "-50"
        );
    }
}
