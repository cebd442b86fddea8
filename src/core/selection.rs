use crate::core::catalog::SymbolCatalog;
use crate::core::category::CategoryId;
use crate::core::error::CatalogError;
use crate::core::favorites::FavoritesStore;

/// Tracks which category and which symbol are currently active.
///
/// The ordered symbol list is re-derived whenever the category changes
/// (from the catalog, or the favorites store for the favorites view), and
/// the selected index is clamped into the new list. Navigation clamps at
/// the ends rather than wrapping, and is a no-op on an empty list.
/// No persistence happens here.
pub struct SelectionState {
    category: CategoryId,
    ordered: Vec<u32>,
    selected: Option<usize>,
}

impl SelectionState {
    pub fn new(
        category: CategoryId,
        catalog: &SymbolCatalog,
        favorites: &FavoritesStore,
    ) -> Self {
        let mut state = Self {
            category,
            ordered: Vec::new(),
            selected: None,
        };
        state.set_category(category, catalog, favorites);
        state
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn symbols(&self) -> &[u32] {
        &self.ordered
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_code_point(&self) -> Option<u32> {
        self.selected.map(|index| self.ordered[index])
    }

    /// Switches category, recomputing the symbol list and clamping the
    /// selection into it (or clearing it when the category is empty).
    pub fn set_category(
        &mut self,
        category: CategoryId,
        catalog: &SymbolCatalog,
        favorites: &FavoritesStore,
    ) {
        self.category = category;
        self.ordered = if category == CategoryId::Favorites {
            favorites.symbols().to_vec()
        } else {
            // Only Favorites is unresolvable through the catalog, and it
            // is handled above.
            catalog.ordered_symbols(category).unwrap_or_default()
        };

        self.selected = if self.ordered.is_empty() {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(self.ordered.len() - 1))
        };
    }

    /// Selects a symbol the caller took from [`Self::symbols`]. Absence is
    /// a caller bug and surfaces as an error.
    pub fn select_by_code_point(&mut self, cp: u32) -> Result<(), CatalogError> {
        match self.ordered.iter().position(|&existing| existing == cp) {
            Some(index) => {
                self.selected = Some(index);
                Ok(())
            }
            None => Err(CatalogError::NotFound(cp)),
        }
    }

    /// Moves the selection forward, clamped to the last symbol.
    pub fn next(&mut self) {
        if let Some(index) = self.selected {
            self.selected = Some((index + 1).min(self.ordered.len() - 1));
        }
    }

    /// Moves the selection backward, clamped to the first symbol.
    pub fn previous(&mut self) {
        if let Some(index) = self.selected {
            self.selected = Some(index.saturating_sub(1));
        }
    }
}
