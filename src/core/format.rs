//! Pure code point to display string conversions.
//!
//! Hex-based forms pad to four digits but widen past four for code points
//! beyond U+FFFF; nothing is ever truncated.

/// Decimal digits, e.g. `65` for U+0041.
pub fn to_decimal(cp: u32) -> String {
    cp.to_string()
}

/// Octal digits without a prefix, e.g. `101` for U+0041.
pub fn to_octal(cp: u32) -> String {
    format!("{cp:o}")
}

/// Uppercase hex, zero-padded to at least four digits, e.g. `0041`.
pub fn to_hex4(cp: u32) -> String {
    format!("{cp:04X}")
}

/// `U+XXXX` notation, e.g. `U+0041`.
pub fn to_unicode_notation(cp: u32) -> String {
    format!("U+{}", to_hex4(cp))
}

/// Decimal HTML entity, e.g. `&#65;`.
pub fn to_html_entity(cp: u32) -> String {
    format!("&#{cp};")
}

/// CSS escape, e.g. `\0041`.
pub fn to_css_escape(cp: u32) -> String {
    format!("\\{}", to_hex4(cp))
}

/// The character itself, replacement character when the code point is not
/// a Unicode scalar value (only reachable through stale persisted data).
pub fn glyph(cp: u32) -> char {
    char::from_u32(cp).unwrap_or('\u{FFFD}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_for_latin_capital_a() {
        assert_eq!(to_decimal(65), "65");
        assert_eq!(to_octal(65), "101");
        assert_eq!(to_hex4(65), "0041");
        assert_eq!(to_unicode_notation(65), "U+0041");
        assert_eq!(to_html_entity(65), "&#65;");
        assert_eq!(to_css_escape(65), "\\0041");
    }

    #[test]
    fn test_hex_pads_small_code_points() {
        assert_eq!(to_hex4(0x20), "0020");
        assert_eq!(to_unicode_notation(0x7), "U+0007");
    }

    #[test]
    fn test_hex_widens_rather_than_truncates() {
        assert_eq!(to_hex4(0x1F600), "1F600");
        assert_eq!(to_unicode_notation(0x10FFFF), "U+10FFFF");
        assert_eq!(to_css_escape(0x1F600), "\\1F600");
    }

    #[test]
    fn test_glyph() {
        assert_eq!(glyph(65), 'A');
        assert_eq!(glyph(8364), '€');
        // Surrogate range is not a scalar value.
        assert_eq!(glyph(0xD800), '\u{FFFD}');
    }
}
