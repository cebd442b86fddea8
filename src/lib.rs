// Library interface for glyphtable
pub mod cli;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::core::catalog::SymbolCatalog;
pub use crate::core::category::CategoryId;
pub use crate::core::error::CatalogError;
pub use crate::core::favorites::{FavoritesStore, MAX_FAVORITES};
pub use crate::core::prefs::{FilePrefs, PreferenceAdapter};
pub use crate::core::selection::SelectionState;
