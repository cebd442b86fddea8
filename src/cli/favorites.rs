use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::{open_project_prefs, parse_symbol};
use crate::config::Config;
use crate::core::catalog::SymbolCatalog;
use crate::core::category::CategoryId;
use crate::core::favorites::{FavoritesStore, ToggleOutcome, MAX_FAVORITES};
use crate::core::format;

#[derive(Parser)]
pub enum FavoritesCommands {
    /// List favorited symbols
    List,
    /// Add a symbol to ★ Favorites
    Add {
        /// A glyph, U+XXXX notation, or decimal code point
        symbol: String,
    },
    /// Remove a symbol from ★ Favorites
    Remove {
        /// A glyph, U+XXXX notation, or decimal code point
        symbol: String,
    },
    /// Add the symbol when absent, remove it when present
    Toggle {
        /// A glyph, U+XXXX notation, or decimal code point
        symbol: String,
    },
    /// Delete all symbols from ★ Favorites
    Clear,
}

/// Handle favorites subcommands
pub fn handle_favorites_command(
    command: FavoritesCommands,
    config: &Config,
    prefs_file: Option<PathBuf>,
) -> Result<()> {
    let mut prefs = open_project_prefs(config, prefs_file)?;
    let mut favorites = FavoritesStore::load(&prefs);

    match command {
        FavoritesCommands::List => {
            let catalog = SymbolCatalog::new();
            println!("★ Favorites ({}/{MAX_FAVORITES})", favorites.len());
            for &cp in favorites.symbols() {
                println!(
                    "  {}  {:<8} {}",
                    format::glyph(cp),
                    format::to_unicode_notation(cp),
                    catalog.name(CategoryId::All, cp).unwrap_or("")
                );
            }
        }
        FavoritesCommands::Add { symbol } => {
            let cp = parse_symbol(&symbol)?;
            if favorites.add(&mut prefs, cp)? {
                info!("★ {} added to Favorites!", format::glyph(cp));
            } else {
                // Duplicate or at capacity; rejected adds are silent no-ops.
                debug!("Add of U+{cp:04X} rejected");
            }
        }
        FavoritesCommands::Remove { symbol } => {
            let cp = parse_symbol(&symbol)?;
            if favorites.remove(&mut prefs, cp)? {
                info!("★ {} removed from Favorites!", format::glyph(cp));
            } else {
                debug!("Remove of U+{cp:04X} rejected");
            }
        }
        FavoritesCommands::Toggle { symbol } => {
            let cp = parse_symbol(&symbol)?;
            match favorites.toggle(&mut prefs, cp)? {
                ToggleOutcome::Added => {
                    info!("★ {} added to Favorites!", format::glyph(cp));
                }
                ToggleOutcome::Removed => {
                    info!("★ {} removed from Favorites!", format::glyph(cp));
                }
                ToggleOutcome::Rejected => {
                    debug!("Toggle of U+{cp:04X} rejected");
                }
            }
        }
        FavoritesCommands::Clear => {
            favorites.clear(&mut prefs)?;
            info!("All ★ Favorites symbols deleted!");
        }
    }

    Ok(())
}
