use anyhow::Result;
use tracing::debug;

use crate::core::prefs::PreferenceAdapter;

/// Upper bound on favorited symbols.
pub const MAX_FAVORITES: usize = 50;

/// Persisted key for the favorite at `index`. The on-disk layout depends on
/// this exact format, so it is part of the public contract.
pub fn favorite_symbol_key(index: usize) -> String {
    format!("Favorite Symbol[{index}]")
}

/// What a [`FavoritesStore::toggle`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The add side was rejected (store already at capacity).
    Rejected,
}

/// Bounded, ordered, persisted list of favorited code points.
///
/// The in-memory list is the source of truth; the persisted keys
/// `Favorite Symbol[0]..Favorite Symbol[count-1]` are a dense projection of
/// it, re-derived after every removal. Rejected operations (duplicates,
/// capacity, absent removals) are silent no-ops, not errors.
pub struct FavoritesStore {
    symbols: Vec<u32>,
}

impl FavoritesStore {
    /// Restores the list by scanning persisted indices `0..MAX_FAVORITES`.
    ///
    /// Index holes are skipped, not treated as the end of the list: a store
    /// written by an older version of this tool can legitimately contain
    /// gaps, and those entries still count. Non-positive values are
    /// discarded; they cannot name a symbol.
    pub fn load(prefs: &dyn PreferenceAdapter) -> Self {
        let mut symbols = Vec::new();

        for index in 0..MAX_FAVORITES {
            let key = favorite_symbol_key(index);
            if !prefs.has_key(&key) {
                continue;
            }

            let value = prefs.get_int_or(&key, 0);
            if value <= 0 {
                continue;
            }

            symbols.push(value as u32);
        }

        debug!("Loaded {} favorite symbol(s)", symbols.len());
        Self { symbols }
    }

    /// Starts an empty list without touching the store.
    pub fn empty() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Favorited code points in insertion order.
    pub fn symbols(&self) -> &[u32] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, cp: u32) -> bool {
        self.symbols.contains(&cp)
    }

    /// Appends a favorite; `Ok(false)` when rejected (duplicate or full).
    pub fn add(&mut self, prefs: &mut dyn PreferenceAdapter, cp: u32) -> Result<bool> {
        if self.contains(cp) || self.symbols.len() == MAX_FAVORITES {
            return Ok(false);
        }

        prefs.set_int(&favorite_symbol_key(self.symbols.len()), cp as i32)?;
        self.symbols.push(cp);

        Ok(true)
    }

    /// Removes a favorite; `Ok(false)` when rejected (absent or empty).
    ///
    /// Removal deletes the entry's key, then re-keys every remaining
    /// favorite to a dense `0..count` range. The pass is not transactional;
    /// an interruption mid-pass can leave a partial persisted state until
    /// the next mutation rewrites the full range.
    pub fn remove(&mut self, prefs: &mut dyn PreferenceAdapter, cp: u32) -> Result<bool> {
        if self.symbols.is_empty() || !self.contains(cp) {
            return Ok(false);
        }

        if let Some(position) = self.symbols.iter().position(|&existing| existing == cp) {
            prefs.delete_key(&favorite_symbol_key(position))?;
            self.symbols.remove(position);
            self.reassign_keys(prefs)?;
        }

        Ok(true)
    }

    /// Removes the symbol when present, adds it otherwise.
    pub fn toggle(&mut self, prefs: &mut dyn PreferenceAdapter, cp: u32) -> Result<ToggleOutcome> {
        if self.contains(cp) {
            self.remove(prefs, cp)?;
            Ok(ToggleOutcome::Removed)
        } else if self.add(prefs, cp)? {
            Ok(ToggleOutcome::Added)
        } else {
            Ok(ToggleOutcome::Rejected)
        }
    }

    /// Removes every favorite, one removal at a time.
    pub fn clear(&mut self, prefs: &mut dyn PreferenceAdapter) -> Result<()> {
        for cp in self.symbols.clone() {
            self.remove(prefs, cp)?;
        }
        Ok(())
    }

    /// Rewrites the persisted projection: delete every favorite key that
    /// exists, then write the surviving list back densely from index 0.
    fn reassign_keys(&self, prefs: &mut dyn PreferenceAdapter) -> Result<()> {
        for index in 0..MAX_FAVORITES {
            let key = favorite_symbol_key(index);
            if !prefs.has_key(&key) {
                continue;
            }
            prefs.delete_key(&key)?;
        }

        for (index, &cp) in self.symbols.iter().enumerate() {
            prefs.set_int(&favorite_symbol_key(index), cp as i32)?;
        }

        Ok(())
    }
}
