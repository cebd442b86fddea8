use anyhow::Result;
use clap::ValueEnum;
use serde_json::json;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::cli::{open_project_prefs, parse_symbol};
use crate::config::Config;
use crate::core::catalog::SymbolCatalog;
use crate::core::category::CategoryId;
use crate::core::clipboard::{Clipboard, SystemClipboard};
use crate::core::favorites::FavoritesStore;
use crate::core::format;
use crate::core::style::{ColorStyle, COLOR_STYLES};

/// Output format for `show`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Which representation `copy` puts on the clipboard
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CopyAs {
    Glyph,
    Unicode,
    Decimal,
    Octal,
    Hex,
    Html,
    Css,
}

/// List every category with its symbol count
pub fn handle_categories(config: &Config, prefs_file: Option<PathBuf>) -> Result<()> {
    let catalog = SymbolCatalog::new();
    let prefs = open_project_prefs(config, prefs_file)?;
    let favorites = FavoritesStore::load(&prefs);

    println!("Categories:");
    for category in CategoryId::SELECTABLE {
        let count = if category == CategoryId::Favorites {
            favorites.len()
        } else {
            // Favorites is the only derived view the catalog refuses.
            catalog.count(category).unwrap_or_default()
        };

        let value = category
            .to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default();
        println!("  {value:<20} {:<20} {count:>4}", category.label());
    }

    Ok(())
}

/// Print the ordered symbols of one category
pub fn handle_table(
    category: Option<CategoryId>,
    config: &Config,
    prefs_file: Option<PathBuf>,
) -> Result<()> {
    let catalog = SymbolCatalog::new();
    let prefs = open_project_prefs(config, prefs_file)?;
    let favorites = FavoritesStore::load(&prefs);
    let category = category.unwrap_or_else(|| config.get_default_category());

    let entries: Vec<(u32, Option<&str>)> = if category == CategoryId::Favorites {
        favorites
            .symbols()
            .iter()
            .map(|&cp| (cp, catalog.name(CategoryId::All, cp).ok()))
            .collect()
    } else {
        catalog
            .entries(category)?
            .into_iter()
            .map(|(cp, name)| (cp, Some(name)))
            .collect()
    };

    println!("{} ({})", category.label(), entries.len());
    for (cp, name) in entries {
        println!(
            "  {}  {:<8} {}",
            format::glyph(cp),
            format::to_unicode_notation(cp),
            name.unwrap_or("")
        );
    }

    Ok(())
}

/// Show every representation of one symbol
pub fn handle_show(symbol: &str, output: OutputFormat) -> Result<()> {
    let catalog = SymbolCatalog::new();
    let cp = parse_symbol(symbol)?;
    // Stale or exotic code points have no catalog entry; the name line is
    // simply left blank.
    let name = catalog.name(CategoryId::All, cp).ok();

    match output {
        OutputFormat::Text => {
            println!("Symbol: {}", format::glyph(cp));
            println!("Name: {}", name.unwrap_or(""));
            println!("Unicode Number: {}", format::to_unicode_notation(cp));
            println!("Decimal: {}", format::to_decimal(cp));
            println!("Hexadecimal: {}", format::to_hex4(cp));
            println!("Octal: {}", format::to_octal(cp));
            println!("HTML Code: {}", format::to_html_entity(cp));
            println!("CSS Code: {}", format::to_css_escape(cp));
        }
        OutputFormat::Json => {
            let value = json!({
                "symbol": format::glyph(cp).to_string(),
                "name": name,
                "unicode": format::to_unicode_notation(cp),
                "decimal": cp,
                "hexadecimal": format::to_hex4(cp),
                "octal": format::to_octal(cp),
                "html": format::to_html_entity(cp),
                "css": format::to_css_escape(cp),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

/// Resolve one representation of a symbol and place it on the clipboard
pub fn handle_copy(symbol: &str, representation: CopyAs, config: &Config) -> Result<()> {
    let cp = parse_symbol(symbol)?;
    let text = match representation {
        CopyAs::Glyph => format::glyph(cp).to_string(),
        CopyAs::Unicode => format::to_unicode_notation(cp),
        CopyAs::Decimal => format::to_decimal(cp),
        CopyAs::Octal => format::to_octal(cp),
        CopyAs::Hex => format::to_hex4(cp),
        CopyAs::Html => format::to_html_entity(cp),
        CopyAs::Css => format::to_css_escape(cp),
    };

    match SystemClipboard::detect(config.get_clipboard_tool().as_deref()) {
        Some(clipboard) => {
            clipboard.write(&text)?;
            info!("📋 '{text}' copied!");
        }
        None => {
            // No copy tool on this machine; printing keeps the command
            // usable in a pipe.
            println!("{text}");
            warn!("No clipboard tool found; printed to stdout instead");
        }
    }

    Ok(())
}

/// Show the color style swatches, or persist a new preferred index
pub fn handle_style(
    set: Option<usize>,
    config: &Config,
    prefs_file: Option<PathBuf>,
) -> Result<()> {
    let mut prefs = open_project_prefs(config, prefs_file)?;
    let mut style = ColorStyle::load(&prefs);

    if let Some(index) = set {
        if style.set(&mut prefs, index)? {
            info!("Preferred color style set to {index} ({})", style.hex());
        } else {
            warn!(
                "Color style {index} is out of range (0-{})",
                COLOR_STYLES.len() - 1
            );
        }
        return Ok(());
    }

    println!("Color styles (preferred: {}):", style.index());
    for (index, hex) in COLOR_STYLES.iter().enumerate() {
        let marker = if index == style.index() { "●" } else { " " };
        println!("  {marker} {index:>2}  {hex}");
    }

    Ok(())
}
