//! Menu module
//!
//! The dish list: toggleable items, persisted to a key-value slot on every
//! change, with migration of older persisted shapes on load.

mod bulk;
mod defaults;
mod menu_item;
mod menu_store;
mod migration;
mod storage;

pub use bulk::split_bulk_text;
pub use defaults::DEFAULT_FOODS;
pub use menu_item::{MenuItem, generate_id};
pub use menu_store::{MenuStore, STORAGE_KEY};
pub use migration::{LegacyItem, MigrationError, PersistedMenu};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError, storage_path};
