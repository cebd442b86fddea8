use anyhow::Result;

use crate::core::prefs::PreferenceAdapter;

/// Selectable accent colors, in swatch order.
pub const COLOR_STYLES: [&str; 18] = [
    "#ff3838", "#ff512e", "#ff852e", "#00a81a", "#0062ff", "#b22eff", "#ff006a", "#00a9ff",
    "#75523f", "#b978ff", "#6f00ff", "#1d8a7d", "#5a8f00", "#b08a64", "#68768a", "#486860",
    "#847545", "#767676",
];

pub const PREFERRED_COLOR_STYLE_KEY: &str = "Preferred Color Style";

/// Palette index used until the user picks one.
pub const DEFAULT_COLOR_STYLE: usize = 4;

/// The persisted accent-color preference. Cosmetic; the only behavioral
/// contract is that the chosen index round-trips through the store.
pub struct ColorStyle {
    index: usize,
}

impl ColorStyle {
    /// Reads the preferred index, falling back to the default when unset
    /// or out of palette range.
    pub fn load(prefs: &dyn PreferenceAdapter) -> Self {
        let stored = prefs.get_int_or(PREFERRED_COLOR_STYLE_KEY, DEFAULT_COLOR_STYLE as i32);
        let index = usize::try_from(stored)
            .ok()
            .filter(|index| *index < COLOR_STYLES.len())
            .unwrap_or(DEFAULT_COLOR_STYLE);
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn hex(&self) -> &'static str {
        COLOR_STYLES[self.index]
    }

    /// Persists a new preferred index; `Ok(false)` when out of range.
    pub fn set(&mut self, prefs: &mut dyn PreferenceAdapter, index: usize) -> Result<bool> {
        if index >= COLOR_STYLES.len() {
            return Ok(false);
        }

        self.index = index;
        prefs.set_int(PREFERRED_COLOR_STYLE_KEY, index as i32)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prefs::FilePrefs;
    use std::path::Path;
    use tempfile::TempDir;

    fn open_prefs(dir: &TempDir) -> FilePrefs {
        FilePrefs::open(dir.path().join("prefs.toml"), Path::new("/project")).unwrap()
    }

    #[test]
    fn test_default_style() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let prefs = open_prefs(&temp_dir);

        let style = ColorStyle::load(&prefs);
        assert_eq!(style.index(), DEFAULT_COLOR_STYLE);
        assert_eq!(style.hex(), "#0062ff");

        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut prefs = open_prefs(&temp_dir);

        let mut style = ColorStyle::load(&prefs);
        assert!(style.set(&mut prefs, 11)?);
        assert_eq!(style.hex(), "#1d8a7d");

        let reloaded = ColorStyle::load(&prefs);
        assert_eq!(reloaded.index(), 11);

        Ok(())
    }

    #[test]
    fn test_out_of_range_set_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut prefs = open_prefs(&temp_dir);

        let mut style = ColorStyle::load(&prefs);
        assert!(!style.set(&mut prefs, COLOR_STYLES.len())?);
        assert_eq!(style.index(), DEFAULT_COLOR_STYLE);

        Ok(())
    }

    #[test]
    fn test_garbage_persisted_index_falls_back() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut prefs = open_prefs(&temp_dir);
        prefs.set_int(PREFERRED_COLOR_STYLE_KEY, -2)?;

        let style = ColorStyle::load(&prefs);
        assert_eq!(style.index(), DEFAULT_COLOR_STYLE);

        Ok(())
    }
}
