use anyhow::Result;
use clap::ValueEnum;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

use crate::cli::{open_project_prefs, parse_symbol};
use crate::config::Config;
use crate::core::catalog::SymbolCatalog;
use crate::core::category::CategoryId;
use crate::core::clipboard::{Clipboard, SystemClipboard};
use crate::core::favorites::{FavoritesStore, ToggleOutcome};
use crate::core::format;
use crate::core::selection::SelectionState;

const BROWSE_HELP: &str = "\
Commands:
  n              next symbol
  p              previous symbol
  g <symbol>     jump to a symbol in this category
  cat <name>     switch category (e.g. 'cat math', 'cat favorites')
  f              toggle ★ Favorite for the current symbol
  c              copy the current symbol to the clipboard
  i              show all representations of the current symbol
  q              quit";

/// Interactive line-mode symbol browser.
///
/// A thin read-eval loop over the selection state; every command maps to
/// one state-model operation and reprints the preview line.
pub fn handle_browse(
    category: Option<CategoryId>,
    config: &Config,
    prefs_file: Option<PathBuf>,
) -> Result<()> {
    let catalog = SymbolCatalog::new();
    let mut prefs = open_project_prefs(config, prefs_file)?;
    let mut favorites = FavoritesStore::load(&prefs);
    let clipboard = SystemClipboard::detect(config.get_clipboard_tool().as_deref());

    let category = category.unwrap_or_else(|| config.get_default_category());
    let mut state = SelectionState::new(category, &catalog, &favorites);

    println!("{BROWSE_HELP}");
    print_preview(&state, &catalog, &favorites);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        let (command, argument) = match input.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (input, ""),
        };

        match command {
            "" => continue,
            "q" | "quit" => break,
            "help" | "?" => println!("{BROWSE_HELP}"),
            "n" | "next" => state.next(),
            "p" | "prev" | "previous" => state.previous(),
            "g" | "goto" => match parse_symbol(argument) {
                Ok(cp) => {
                    if state.select_by_code_point(cp).is_err() {
                        println!(
                            "{} is not in {}",
                            format::to_unicode_notation(cp),
                            state.category().label()
                        );
                    }
                }
                Err(error) => println!("{error}"),
            },
            "cat" | "category" => match CategoryId::from_str(argument, true) {
                Ok(next_category) => {
                    state.set_category(next_category, &catalog, &favorites);
                }
                Err(_) => println!("Unknown category '{argument}'"),
            },
            "f" | "fav" => {
                if let Some(cp) = state.selected_code_point() {
                    match favorites.toggle(&mut prefs, cp)? {
                        ToggleOutcome::Added => {
                            println!("★ {} added to Favorites!", format::glyph(cp));
                        }
                        ToggleOutcome::Removed => {
                            println!("★ {} removed from Favorites!", format::glyph(cp));
                        }
                        ToggleOutcome::Rejected => {
                            println!("★ Favorites is full");
                        }
                    }
                    // The favorites view re-derives from the store.
                    if state.category() == CategoryId::Favorites {
                        state.set_category(CategoryId::Favorites, &catalog, &favorites);
                    }
                }
            }
            "c" | "copy" => {
                if let Some(cp) = state.selected_code_point() {
                    let text = format::glyph(cp).to_string();
                    match &clipboard {
                        Some(clipboard) => {
                            clipboard.write(&text)?;
                            println!("📋 '{text}' copied!");
                        }
                        None => {
                            println!("{text}");
                            warn!("No clipboard tool found; printed to stdout instead");
                        }
                    }
                }
            }
            "i" | "info" => {
                if let Some(cp) = state.selected_code_point() {
                    println!("Symbol: {}", format::glyph(cp));
                    println!(
                        "Name: {}",
                        catalog.name(CategoryId::All, cp).unwrap_or("")
                    );
                    println!("Unicode Number: {}", format::to_unicode_notation(cp));
                    println!("Decimal: {}", format::to_decimal(cp));
                    println!("Hexadecimal: {}", format::to_hex4(cp));
                    println!("Octal: {}", format::to_octal(cp));
                    println!("HTML Code: {}", format::to_html_entity(cp));
                    println!("CSS Code: {}", format::to_css_escape(cp));
                }
            }
            _ => println!("Unknown command '{command}' (try 'help')"),
        }

        print_preview(&state, &catalog, &favorites);
    }

    Ok(())
}

fn print_preview(state: &SelectionState, catalog: &SymbolCatalog, favorites: &FavoritesStore) {
    match (state.selected_index(), state.selected_code_point()) {
        (Some(index), Some(cp)) => {
            let star = if favorites.contains(cp) { "★" } else { " " };
            println!(
                "[{}] {}/{} {star} {}  {:<8} {}",
                state.category().label(),
                index + 1,
                state.symbols().len(),
                format::glyph(cp),
                format::to_unicode_notation(cp),
                catalog.name(CategoryId::All, cp).unwrap_or("")
            );
        }
        _ => println!("[{}] empty", state.category().label()),
    }
}
