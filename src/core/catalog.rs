use std::collections::HashMap;

use crate::core::category::CategoryId;
use crate::core::error::CatalogError;
use crate::core::tables::{self, Table};

/// Returns the literal table backing a concrete category.
fn table_for(category: CategoryId) -> Option<Table> {
    match category {
        CategoryId::Ascii => Some(tables::ASCII_PRINTABLE),
        CategoryId::Currency => Some(tables::CURRENCY),
        CategoryId::GreekLetters => Some(tables::GREEK_LETTERS),
        CategoryId::RomanNumerals => Some(tables::ROMAN_NUMERALS),
        CategoryId::Punctuation => Some(tables::PUNCTUATION),
        CategoryId::Math => Some(tables::MATH),
        CategoryId::Arrows => Some(tables::ARROWS),
        CategoryId::Zodiac => Some(tables::ZODIAC),
        CategoryId::Planets => Some(tables::PLANETS),
        CategoryId::PlayingCardSuits => Some(tables::PLAYING_CARD_SUITS),
        CategoryId::Musical => Some(tables::MUSICAL),
        CategoryId::Other => Some(tables::OTHER),
        CategoryId::All | CategoryId::Favorites => None,
    }
}

/// Immutable registry of symbol names, partitioned by category.
///
/// Constructed once and injected wherever names are needed. The `All` view
/// is built eagerly at construction by merging the concrete tables in
/// [`CategoryId::CONCRETE`] order; the first category to claim a code point
/// wins, so U+0024 resolves to ASCII's "Dollar Sign" even though Currency
/// also lists it.
pub struct SymbolCatalog {
    all: Vec<(u32, &'static str)>,
    merged: HashMap<u32, &'static str>,
}

impl SymbolCatalog {
    pub fn new() -> Self {
        let mut all = Vec::new();
        let mut merged = HashMap::new();

        for category in CategoryId::CONCRETE {
            if let Some(table) = table_for(category) {
                for &(cp, name) in table {
                    if let std::collections::hash_map::Entry::Vacant(slot) = merged.entry(cp) {
                        slot.insert(name);
                        all.push((cp, name));
                    }
                }
            }
        }

        Self { all, merged }
    }

    /// Looks up the display name of a code point within a category.
    ///
    /// Absence is an error, not a blank: a stale favorite can reference a
    /// code point the catalog no longer carries, and callers decide how to
    /// present that.
    pub fn name(&self, category: CategoryId, cp: u32) -> Result<&'static str, CatalogError> {
        match category {
            CategoryId::All => self
                .merged
                .get(&cp)
                .copied()
                .ok_or(CatalogError::NotFound(cp)),
            CategoryId::Favorites => Err(CatalogError::Derived(category)),
            _ => table_for(category)
                .and_then(|table| {
                    table
                        .iter()
                        .find(|(candidate, _)| *candidate == cp)
                        .map(|(_, name)| *name)
                })
                .ok_or(CatalogError::NotFound(cp)),
        }
    }

    /// Returns the code points of a category in declaration order.
    ///
    /// For `All` the order is the union-construction order. `Favorites` is
    /// not resolvable here; it lives in the favorites store.
    pub fn ordered_symbols(&self, category: CategoryId) -> Result<Vec<u32>, CatalogError> {
        match category {
            CategoryId::All => Ok(self.all.iter().map(|(cp, _)| *cp).collect()),
            CategoryId::Favorites => Err(CatalogError::Derived(category)),
            _ => {
                let table = table_for(category).ok_or(CatalogError::Derived(category))?;
                Ok(table.iter().map(|(cp, _)| *cp).collect())
            }
        }
    }

    /// Returns `(code point, name)` pairs of a category in declaration order.
    pub fn entries(&self, category: CategoryId) -> Result<Vec<(u32, &'static str)>, CatalogError> {
        match category {
            CategoryId::All => Ok(self.all.clone()),
            CategoryId::Favorites => Err(CatalogError::Derived(category)),
            _ => {
                let table = table_for(category).ok_or(CatalogError::Derived(category))?;
                Ok(table.to_vec())
            }
        }
    }

    /// Number of symbols in a category.
    pub fn count(&self, category: CategoryId) -> Result<usize, CatalogError> {
        match category {
            CategoryId::All => Ok(self.all.len()),
            CategoryId::Favorites => Err(CatalogError::Derived(category)),
            _ => {
                let table = table_for(category).ok_or(CatalogError::Derived(category))?;
                Ok(table.len())
            }
        }
    }
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self::new()
    }
}
