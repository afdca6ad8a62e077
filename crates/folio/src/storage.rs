//! Persisted view preferences.
//!
//! A flat string-to-string store behind a small get/set trait, so the
//! controllers that persist through it can run against an in-memory fake
//! in tests. All disk access is best-effort: a missing or unreadable file
//! falls back to defaults and a failed write is logged, never surfaced.

use std::collections::BTreeMap;
use std::path::PathBuf;

const FILENAME: &str = "state.yaml";
const APP_DIR: &str = "folio";

pub const DARK_MODE_KEY: &str = "dark_mode";

pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Store backed by `~/.config/folio/state.yaml`.
///
/// The full map is rewritten on every set. With one writer per session and
/// a handful of keys that is plenty.
pub struct FileStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open_default() -> Self {
        let path = dirs::config_dir().map(|d| d.join(APP_DIR).join(FILENAME));
        Self::open(path)
    }

    pub fn open(path: Option<PathBuf>) -> Self {
        let entries = path
            .as_deref()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|contents| serde_yaml::from_str(&contents).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    fn flush(&self) {
        let Some(path) = &self.path else { return };
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        match serde_yaml::to_string(&self.entries) {
            Ok(yaml) => {
                if let Err(e) = std::fs::write(path, yaml) {
                    eprintln!("folio: could not save {}: {e}", path.display());
                }
            }
            Err(e) => eprintln!("folio: could not serialize state: {e}"),
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

/// The persisted dark-mode choice.
///
/// Dark iff the stored value is exactly the string `"true"`; anything else,
/// including absence, means light. Every toggle writes the new value back
/// through the store before returning, so the palette swap and the persisted
/// entry can never disagree within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    dark: bool,
}

impl ThemePreference {
    pub fn load(store: &dyn KvStore) -> Self {
        let dark = store.get(DARK_MODE_KEY).as_deref() == Some("true");
        Self { dark }
    }

    /// Session-only override (`--theme`); nothing is persisted until the
    /// user actually toggles.
    pub fn with_dark(dark: bool) -> Self {
        Self { dark }
    }

    pub fn is_dark(self) -> bool {
        self.dark
    }

    pub fn toggle(&mut self, store: &mut dyn KvStore) -> bool {
        self.dark = !self.dark;
        self.persist(store);
        self.dark
    }

    pub fn persist(self, store: &mut dyn KvStore) {
        store.set(DARK_MODE_KEY, if self.dark { "true" } else { "false" });
    }
}

#[cfg(test)]
pub mod memory {
    use super::KvStore;
    use std::collections::BTreeMap;

    /// In-memory stand-in for the disk store.
    #[derive(Default)]
    pub struct MemoryStore {
        entries: BTreeMap<String, String>,
    }

    impl KvStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.entries.insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn empty_store_means_light() {
        let store = MemoryStore::default();
        assert!(!ThemePreference::load(&store).is_dark());
    }

    #[test]
    fn only_the_exact_string_true_means_dark() {
        for (value, expect_dark) in [
            ("true", true),
            ("false", false),
            ("TRUE", false),
            ("1", false),
            ("yes", false),
            (" true", false),
        ] {
            let mut store = MemoryStore::default();
            store.set(DARK_MODE_KEY, value);
            assert_eq!(
                ThemePreference::load(&store).is_dark(),
                expect_dark,
                "stored {value:?}"
            );
        }
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut store = MemoryStore::default();
        for start_dark in [false, true] {
            if start_dark {
                store.set(DARK_MODE_KEY, "true");
            } else {
                store.set(DARK_MODE_KEY, "false");
            }
            let mut pref = ThemePreference::load(&store);
            pref.toggle(&mut store);
            pref.toggle(&mut store);
            assert_eq!(pref.is_dark(), start_dark);
        }
    }

    #[test]
    fn toggle_persists_through_the_store() {
        let mut store = MemoryStore::default();
        let mut pref = ThemePreference::load(&store);
        pref.toggle(&mut store);
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("true"));

        // A fresh load sees the toggled value.
        assert!(ThemePreference::load(&store).is_dark());

        pref.toggle(&mut store);
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("false"));
        assert!(!ThemePreference::load(&store).is_dark());
    }

    #[test]
    fn file_store_without_a_path_stays_in_memory() {
        let mut store = FileStore::open(None);
        assert_eq!(store.get(DARK_MODE_KEY), None);
        store.set(DARK_MODE_KEY, "true");
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("true"));
    }
}
