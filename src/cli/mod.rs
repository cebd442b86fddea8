use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use crate::core::prefs::FilePrefs;

pub mod browse;
pub mod favorites;
pub mod table;

/// Opens the preference store scoped to the current project directory.
///
/// Resolution order: explicit `--prefs-file` (or its environment variable),
/// then the config file, then the per-user default location.
pub fn open_project_prefs(config: &Config, prefs_file: Option<PathBuf>) -> Result<FilePrefs> {
    let path = prefs_file.unwrap_or_else(|| config.get_prefs_file());
    let project = std::env::current_dir().context("Failed to resolve current directory")?;
    FilePrefs::open(path, &project)
}

/// Parses a symbol argument.
///
/// Accepts a literal glyph (`€`), `U+XXXX` notation, or a multi-digit
/// decimal code point. A single digit is taken as its glyph (`"5"` is
/// U+0035), since that is what a pasted character looks like.
pub fn parse_symbol(input: &str) -> Result<u32> {
    let trimmed = input.trim();

    if let Some(hex) = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
    {
        let cp = u32::from_str_radix(hex, 16)
            .with_context(|| format!("Invalid code point notation '{trimmed}'"))?;
        return ensure_code_point(cp);
    }

    let mut chars = trimmed.chars();
    if let (Some(glyph), None) = (chars.next(), chars.next()) {
        return Ok(glyph as u32);
    }

    if !trimmed.is_empty() && trimmed.chars().all(|digit| digit.is_ascii_digit()) {
        let cp = trimmed
            .parse::<u32>()
            .with_context(|| format!("Invalid decimal code point '{trimmed}'"))?;
        return ensure_code_point(cp);
    }

    bail!("'{input}' is not a glyph, U+XXXX notation, or decimal code point");
}

fn ensure_code_point(cp: u32) -> Result<u32> {
    if cp > 0x10FFFF {
        bail!("U+{cp:X} is outside the Unicode code point range");
    }
    Ok(cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_glyph() {
        assert_eq!(parse_symbol("A").unwrap(), 65);
        assert_eq!(parse_symbol("€").unwrap(), 8364);
        assert_eq!(parse_symbol("★").unwrap(), 9733);
        // A single digit is the digit's glyph, not a decimal value.
        assert_eq!(parse_symbol("5").unwrap(), 53);
    }

    #[test]
    fn test_parse_unicode_notation() {
        assert_eq!(parse_symbol("U+0041").unwrap(), 65);
        assert_eq!(parse_symbol("u+20ac").unwrap(), 8364);
        assert_eq!(parse_symbol("U+41").unwrap(), 65);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_symbol("65").unwrap(), 65);
        assert_eq!(parse_symbol("10003").unwrap(), 10003);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_symbol("").is_err());
        assert!(parse_symbol("hello").is_err());
        assert!(parse_symbol("U+ZZZZ").is_err());
        assert!(parse_symbol("U+110000").is_err());
        assert!(parse_symbol("99999999999").is_err());
    }
}
