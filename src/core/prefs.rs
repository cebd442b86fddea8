use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Namespaced key-value preference store.
///
/// Typed get/set/delete under string keys, scoped per project so the same
/// logical key never collides across projects. Getters return `None` for
/// missing keys; `*_or` variants apply a default. Every mutation persists
/// synchronously.
pub trait PreferenceAdapter {
    fn has_key(&self, key: &str) -> bool;

    fn get_string(&self, key: &str) -> Option<String>;
    fn get_int(&self, key: &str) -> Option<i32>;
    fn get_bool(&self, key: &str) -> Option<bool>;
    fn get_float(&self, key: &str) -> Option<f64>;

    fn set_string(&mut self, key: &str, value: &str) -> Result<()>;
    fn set_int(&mut self, key: &str, value: i32) -> Result<()>;
    fn set_bool(&mut self, key: &str, value: bool) -> Result<()>;
    fn set_float(&mut self, key: &str, value: f64) -> Result<()>;

    fn delete_key(&mut self, key: &str) -> Result<()>;

    fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or_else(|| default.to_string())
    }

    fn get_int_or(&self, key: &str, default: i32) -> i32 {
        self.get_int(key).unwrap_or(default)
    }

    fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }

    fn get_float_or(&self, key: &str, default: f64) -> f64 {
        self.get_float(key).unwrap_or(default)
    }
}

/// Stable namespace prefix for a project path: SHA-256 hex plus `-`.
pub fn project_namespace(project_path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(project_path.to_string_lossy().as_bytes());
    format!("{:x}-", hasher.finalize())
}

/// TOML-backed [`PreferenceAdapter`].
///
/// One flat document of `"<namespace><key>" = value` pairs shared by every
/// project; the namespace prefix keeps projects apart. Writes rewrite the
/// whole file, so concurrent writers are last-write-wins.
pub struct FilePrefs {
    path: PathBuf,
    namespace: String,
    values: BTreeMap<String, toml::Value>,
}

impl FilePrefs {
    /// Opens (or starts) the preference document at `path`, scoped to
    /// `project_path`.
    pub fn open(path: PathBuf, project_path: &Path) -> Result<Self> {
        let values = if path.exists() {
            let content = fs::read_to_string(&path).with_context(|| {
                format!("Failed to read preference file {}", path.display())
            })?;
            toml::from_str(&content).with_context(|| {
                format!("Failed to parse preference file {}", path.display())
            })?
        } else {
            BTreeMap::new()
        };

        debug!(
            "Opened preference store {} ({} keys)",
            path.display(),
            values.len()
        );

        Ok(Self {
            path,
            namespace: project_namespace(project_path),
            values,
        })
    }

    fn scoped(&self, key: &str) -> String {
        format!("{}{}", self.namespace, key)
    }

    fn flush(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.values)
            .context("Failed to serialize preferences to TOML")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create preference directory")?;
        }

        fs::write(&self.path, content).with_context(|| {
            format!("Failed to write preference file {}", self.path.display())
        })?;

        Ok(())
    }

    fn set_value(&mut self, key: &str, value: toml::Value) -> Result<()> {
        self.values.insert(self.scoped(key), value);
        self.flush()
    }
}

impl PreferenceAdapter for FilePrefs {
    fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(&self.scoped(key))
    }

    fn get_string(&self, key: &str) -> Option<String> {
        match self.values.get(&self.scoped(key)) {
            Some(toml::Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn get_int(&self, key: &str) -> Option<i32> {
        match self.values.get(&self.scoped(key)) {
            Some(toml::Value::Integer(i)) => i32::try_from(*i).ok(),
            _ => None,
        }
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(&self.scoped(key)) {
            Some(toml::Value::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    fn get_float(&self, key: &str) -> Option<f64> {
        match self.values.get(&self.scoped(key)) {
            Some(toml::Value::Float(f)) => Some(*f),
            _ => None,
        }
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, toml::Value::String(value.to_string()))
    }

    fn set_int(&mut self, key: &str, value: i32) -> Result<()> {
        self.set_value(key, toml::Value::Integer(i64::from(value)))
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.set_value(key, toml::Value::Boolean(value))
    }

    fn set_float(&mut self, key: &str, value: f64) -> Result<()> {
        self.set_value(key, toml::Value::Float(value))
    }

    fn delete_key(&mut self, key: &str) -> Result<()> {
        if self.values.remove(&self.scoped(key)).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_prefs(dir: &TempDir, project: &str) -> FilePrefs {
        FilePrefs::open(dir.path().join("prefs.toml"), Path::new(project)).unwrap()
    }

    #[test]
    fn test_typed_round_trips() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut prefs = open_prefs(&temp_dir, "/project/a");

        prefs.set_string("name", "glyph")?;
        prefs.set_int("count", -7)?;
        prefs.set_bool("enabled", true)?;
        prefs.set_float("scale", 1.5)?;

        assert_eq!(prefs.get_string("name").as_deref(), Some("glyph"));
        assert_eq!(prefs.get_int("count"), Some(-7));
        assert_eq!(prefs.get_bool("enabled"), Some(true));
        assert_eq!(prefs.get_float("scale"), Some(1.5));

        Ok(())
    }

    #[test]
    fn test_missing_keys_and_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let prefs = open_prefs(&temp_dir, "/project/a");

        assert!(!prefs.has_key("absent"));
        assert_eq!(prefs.get_int("absent"), None);
        assert_eq!(prefs.get_int_or("absent", 4), 4);
        assert_eq!(prefs.get_string_or("absent", "fallback"), "fallback");

        Ok(())
    }

    #[test]
    fn test_delete_key() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut prefs = open_prefs(&temp_dir, "/project/a");

        prefs.set_int("doomed", 1)?;
        assert!(prefs.has_key("doomed"));

        prefs.delete_key("doomed")?;
        assert!(!prefs.has_key("doomed"));

        // Deleting an absent key is a no-op.
        prefs.delete_key("doomed")?;

        Ok(())
    }

    #[test]
    fn test_mutations_survive_reopen() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut prefs = open_prefs(&temp_dir, "/project/a");
        prefs.set_int("Favorite Symbol[0]", 9733)?;
        prefs.set_string("label", "Black Star")?;

        let reopened = open_prefs(&temp_dir, "/project/a");
        assert_eq!(reopened.get_int("Favorite Symbol[0]"), Some(9733));
        assert_eq!(reopened.get_string("label").as_deref(), Some("Black Star"));

        Ok(())
    }

    #[test]
    fn test_projects_are_namespaced_apart() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut prefs_a = open_prefs(&temp_dir, "/project/a");
        prefs_a.set_int("count", 3)?;

        // Same file, different project: the key is invisible.
        let prefs_b = open_prefs(&temp_dir, "/project/b");
        assert!(!prefs_b.has_key("count"));

        // Same project sees it again.
        let prefs_a2 = open_prefs(&temp_dir, "/project/a");
        assert_eq!(prefs_a2.get_int("count"), Some(3));

        Ok(())
    }

    #[test]
    fn test_namespace_is_stable() {
        let ns = project_namespace(Path::new("/some/project"));
        assert_eq!(ns, project_namespace(Path::new("/some/project")));
        assert!(ns.ends_with('-'));
        assert_eq!(ns.len(), 65); // 64 hex chars plus separator
        assert_ne!(ns, project_namespace(Path::new("/other/project")));
    }

    #[test]
    fn test_wrong_type_reads_as_none() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut prefs = open_prefs(&temp_dir, "/project/a");
        prefs.set_string("count", "three")?;

        assert_eq!(prefs.get_int("count"), None);
        assert_eq!(prefs.get_int_or("count", 9), 9);

        Ok(())
    }
}
