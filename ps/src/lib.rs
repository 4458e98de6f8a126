//! PrefStore - persistence for newsletter subscription preferences
//!
//! Keeps a single JSON-serialized preferences record (email, selected news
//! sources, interest tags, delivery frequency) in one fixed storage slot.
//! The slot is loaded once when an editor mounts and overwritten wholesale
//! on every explicit save; there are no partial updates and no merging.
//!
//! # Layout
//!
//! ```text
//! <store-dir>/
//! └── newsletterPreferences.json   # the one slot
//! ```
//!
//! # Example
//!
//! ```ignore
//! use prefstore::{JsonFileStore, PrefStore};
//!
//! let store = JsonFileStore::open("~/.local/share/newsprefs")?;
//! let mut record = store.load()?.unwrap_or_default();
//! record.add_interest("Climate");
//! store.save(&record)?;
//! ```

pub mod cli;
pub mod config;
mod record;
mod store;

pub use record::{Frequency, PreferencesRecord, SOURCE_CATALOG, Source, is_known_source};
pub use store::{JsonFileStore, MemoryStore, PrefStore};

/// Fixed name of the one storage slot
pub const STORAGE_KEY: &str = "newsletterPreferences";

/// Seed tag present in a fresh interests list
pub const DEFAULT_INTEREST: &str = "Technology";
