//! Parsing of combined numeral+unit strings into raw byte counts.
//!
//! The grammar is a single anchored, case-insensitive regex accepting an
//! optionally signed, locale-style numeral followed by an optional unit:
//! short SI codes (`kb`..`yb`), IEC binary codes (`kib`..`yib`), spelled-out
//! names (`kilobytes`, `kibibytes`, ...), bare `b`/`byte`/`bytes`, or
//! nothing at all (implying Bytes).
//!
//! The grammar is deliberately permissive: input that does not match at all
//! yields `NaN` rather than an error. Only the input-shape checks (empty,
//! over-long) and an unsupported base are errors.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::locale::parse_localized_number;
use crate::options::{ParseOptions, base_factor};
use crate::unit::level_for_initial;

/// Maximum accepted input length, in characters.
const MAX_INPUT_LEN: usize = 100;

/// IEC binary-prefix spellings and their SI canonical forms.
const BINARY_PREFIXES: [(&str, &str); 8] = [
    ("KIBI", "KILO"),
    ("MIBI", "MEGA"),
    ("GIBI", "GIGA"),
    ("TEBI", "TERA"),
    ("PEBI", "PETA"),
    ("EXBI", "EXA"),
    ("ZEBI", "ZETTA"),
    ("YIBI", "YOTTA"),
];

/// The size-string grammar: `<signed numeral> <optional unit>`.
///
/// The numeral admits locale-style grouping and either `.` or `,` as the
/// decimal mark; which one actually is the decimal mark is decided later by
/// the locale-aware numeral parser.
static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<value>-?(?:\d+(?:[.,]\d+)*)?[.,]?\d+) *(?P<unit>bytes?|b|kb|kib|mb|mib|gb|gib|tb|tib|pb|pib|eb|eib|zb|zib|yb|yib|(?:kilo|kibi|mega|mebi|giga|gibi|tera|tebi|peta|pebi|exa|exbi|zetta|zebi|yotta|yobi)?bytes)?$",
    )
    .expect("size pattern is valid")
});

/// Parse a byte-size string into a raw byte count.
///
/// The numeral is interpreted in the configured locale's convention, the
/// unit resolves to a scale level, and the result is
/// `numeral * factor^level` with factor 1024 (base 2) or 1000 (base 10).
///
/// Input that does not match the grammar returns `Ok(f64::NAN)`. This check
/// runs before base validation, so malformed text never reports a base
/// error.
///
/// # Errors
///
/// - [`ValidationError::EmptyValue`] if `value` is empty
/// - [`ValidationError::ValueTooLong`] if `value` exceeds 100 characters
/// - [`ValidationError::UnsupportedBase`] if the configured base is neither
///   2 nor 10 (and the input matched the grammar)
///
/// # Examples
///
/// ```
/// # use bytefmt::{bytes, ParseOptions};
/// let options = ParseOptions::default();
/// assert_eq!(bytes("50 KB", &options).unwrap(), 50.0 * 1024.0);
/// assert_eq!(bytes("50 Kilobytes", &options).unwrap(), 50.0 * 1024.0);
/// assert!(bytes("not a size", &options).unwrap().is_nan());
/// ```
pub fn bytes(value: &str, options: &ParseOptions) -> Result<f64, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue);
    }

    let length = value.chars().count();
    if length > MAX_INPUT_LEN {
        return Err(ValidationError::ValueTooLong(length));
    }

    let Some(captures) = SIZE_PATTERN.captures(value) else {
        return Ok(f64::NAN);
    };

    let numeral = captures
        .name("value")
        .map(|m| parse_localized_number(m.as_str(), options.resolved_locale()))
        .unwrap_or(f64::NAN);

    let token = canonical_unit(captures.name("unit").map_or("Bytes", |m| m.as_str()));
    let Some(level) = level_for_initial(&token) else {
        return Ok(f64::NAN);
    };

    let factor = base_factor(options.resolved_base())?;

    Ok(numeral * factor.powi(level as i32))
}

/// Alias of [`bytes`] — the same function item under its other name.
pub use self::bytes as parse_bytes;

/// Uppercase a matched unit token and canonicalize IEC binary spellings to
/// their SI equivalents (`"KiB"` -> `"KB"`, `"kibibytes"` -> `"KILOBYTES"`),
/// so that the first letter alone identifies the scale level.
fn canonical_unit(token: &str) -> String {
    let mut unit = token.to_uppercase();

    for (binary, si) in BINARY_PREFIXES {
        if let Some(rest) = unit.strip_prefix(binary) {
            unit = format!("{si}{rest}");
            break;
        }
    }

    // Collapse the 3-letter binary codes: KIB -> KB, ..., YIB -> YB.
    if unit.len() == 3 && unit.ends_with("IB") {
        unit.replace_range(1..2, "");
    }

    unit
}
