//! The fixed byte-unit scale table.
//!
//! Nine entries indexed by scale level, from Bytes (level 0) to Yottabytes
//! (level 8). Adjacent levels differ by one factor of the active base
//! (1024 or 1000). The table is `const` and never mutated.

/// One entry in the byte-unit scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteUnit {
    /// Abbreviated label, e.g. `"KB"`.
    pub short: &'static str,

    /// Spelled-out label, e.g. `"Kilobytes"`.
    pub long: &'static str,
}

/// The nine scale levels, indexed by level (0 = Bytes, .. 8 = Yottabytes).
///
/// Level 0 has no binary/decimal distinction; both forms are `"Bytes"`.
pub const BYTE_UNITS: [ByteUnit; 9] = [
    ByteUnit {
        short: "Bytes",
        long: "Bytes",
    },
    ByteUnit {
        short: "KB",
        long: "Kilobytes",
    },
    ByteUnit {
        short: "MB",
        long: "Megabytes",
    },
    ByteUnit {
        short: "GB",
        long: "Gigabytes",
    },
    ByteUnit {
        short: "TB",
        long: "Terabytes",
    },
    ByteUnit {
        short: "PB",
        long: "Petabytes",
    },
    ByteUnit {
        short: "EB",
        long: "Exabytes",
    },
    ByteUnit {
        short: "ZB",
        long: "Zettabytes",
    },
    ByteUnit {
        short: "YB",
        long: "Yottabytes",
    },
];

/// Resolve a short code to its scale level by exact match.
///
/// Used by the formatter's explicit `unit` override, which is deliberately
/// strict: `"KB"` resolves, `"kb"` does not.
#[must_use]
pub fn level_for_short(code: &str) -> Option<usize> {
    BYTE_UNITS.iter().position(|unit| unit.short == code)
}

/// Resolve a normalized unit token to its scale level by matching its first
/// letter against the short codes, case-insensitively.
///
/// The initials are unique across the table (B K M G T P E Z Y), which is
/// what makes the parser's fuzzy unit resolution sound.
#[must_use]
pub fn level_for_initial(token: &str) -> Option<usize> {
    let initial = token.chars().next()?.to_ascii_uppercase();

    BYTE_UNITS.iter().position(|unit| {
        unit.short
            .chars()
            .next()
            .is_some_and(|c| c.to_ascii_uppercase() == initial)
    })
}
