//! Preference store implementations
//!
//! One fixed slot, loaded on mount and overwritten wholesale on save.
//! Malformed stored data is discarded with a warning so the caller falls
//! back to defaults instead of failing the whole load.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use eyre::{Context, Result};
use tracing::{debug, warn};

use crate::record::PreferencesRecord;

/// Storage contract for the single preferences slot
pub trait PrefStore {
    /// Read the persisted slot; `None` if no record was ever saved
    fn load(&self) -> Result<Option<PreferencesRecord>>;

    /// Serialize the full record and replace any prior slot value
    fn save(&self, record: &PreferencesRecord) -> Result<()>;
}

/// File-backed store: one JSON document in a fixed slot under a directory
pub struct JsonFileStore {
    slot_path: PathBuf,
}

impl JsonFileStore {
    /// Open or create a store rooted at the given directory
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).context("Failed to create store directory")?;
        let slot_path = dir.join(format!("{}.json", crate::STORAGE_KEY));
        debug!(?slot_path, "Opened preference store");
        Ok(Self { slot_path })
    }

    /// Path of the one storage slot
    pub fn slot_path(&self) -> &Path {
        &self.slot_path
    }
}

impl PrefStore for JsonFileStore {
    fn load(&self) -> Result<Option<PreferencesRecord>> {
        if !self.slot_path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.slot_path)
            .context(format!("Failed to read {}", self.slot_path.display()))?;

        match serde_json::from_str(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!(error = %e, "Stored preferences are malformed, falling back to defaults");
                Ok(None)
            }
        }
    }

    fn save(&self, record: &PreferencesRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.slot_path, json)
            .context(format!("Failed to write {}", self.slot_path.display()))?;
        debug!(path = %self.slot_path.display(), "Saved preferences");
        Ok(())
    }
}

/// In-memory store with the same slot semantics, for tests and embedding
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryStore {
    fn load(&self) -> Result<Option<PreferencesRecord>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| eyre::eyre!("Preference slot mutex poisoned"))?;

        let Some(raw) = slot.as_ref() else {
            return Ok(None);
        };

        match serde_json::from_str(raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!(error = %e, "Stored preferences are malformed, falling back to defaults");
                Ok(None)
            }
        }
    }

    fn save(&self, record: &PreferencesRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| eyre::eyre!("Preference slot mutex poisoned"))?;
        *slot = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tempfile::TempDir;

    use super::*;
    use crate::record::Frequency;

    #[test]
    fn test_load_without_prior_save() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp.path()).unwrap();

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp.path()).unwrap();

        let mut record = PreferencesRecord::default();
        record.email = "a@b.com".to_string();
        record.set_source("nzz", true);
        record.add_interest("Climate");
        record.frequency = Some(Frequency::Weekly);

        store.save(&record).unwrap();
        let loaded = store.load().unwrap().expect("record should exist");

        assert_eq!(loaded, record);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp.path()).unwrap();

        let mut first = PreferencesRecord::default();
        first.add_interest("Climate");
        first.add_interest("Markets");
        store.save(&first).unwrap();

        let mut second = PreferencesRecord::default();
        second.email = "new@example.com".to_string();
        store.save(&second).unwrap();

        let loaded = store.load().unwrap().expect("record should exist");
        assert_eq!(loaded, second);
    }

    #[test]
    fn test_malformed_slot_falls_back_to_none() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp.path()).unwrap();

        fs::write(store.slot_path(), "{not valid json").unwrap();

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let mut record = PreferencesRecord::default();
        record.email = "m@n.o".to_string();
        store.save(&record).unwrap();

        assert_eq!(store.load().unwrap().expect("record should exist"), record);
    }

    fn arb_record() -> impl Strategy<Value = PreferencesRecord> {
        (
            "[a-z0-9.@]{0,20}",
            prop::collection::vec(prop::sample::select(vec!["nzz", "economist"]), 0..3),
            prop::collection::vec("[A-Za-z][A-Za-z ]{0,11}", 0..5),
            prop::option::of(prop::sample::select(&Frequency::ALL[..])),
        )
            .prop_map(|(email, sources, interests, frequency)| {
                let mut record = PreferencesRecord {
                    email,
                    selected_sources: Vec::new(),
                    interests: Vec::new(),
                    frequency,
                };
                // Route through the insertion paths so invariants hold
                for source in sources {
                    record.set_source(source, true);
                }
                for interest in &interests {
                    record.add_interest(interest);
                }
                record
            })
    }

    proptest! {
        #[test]
        fn prop_any_valid_record_round_trips(record in arb_record()) {
            let temp = TempDir::new().unwrap();
            let store = JsonFileStore::open(temp.path()).unwrap();

            store.save(&record).unwrap();
            let loaded = store.load().unwrap().expect("record should exist");

            prop_assert_eq!(loaded, record);
        }
    }
}
