use thiserror::Error;

use crate::core::category::CategoryId;

/// Errors surfaced by catalog and selection lookups.
///
/// Lookups fail loudly rather than defaulting: a favorite persisted by an
/// older catalog may reference a code point no table knows anymore, and the
/// caller decides whether that is a display blank or a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The code point has no entry in the resolved table.
    #[error("no entry for U+{0:04X}")]
    NotFound(u32),

    /// The category is a derived view the catalog cannot resolve;
    /// favorites are answered by the favorites store.
    #[error("category '{}' is not backed by a catalog table", .0.label())]
    Derived(CategoryId),
}
