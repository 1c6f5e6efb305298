//! Menu Store
//!
//! Owns the ordered list of dishes. Every mutation writes the whole list
//! back to the key-value slot. Persistence failures are logged and otherwise
//! ignored; the in-memory menu stays authoritative for the session.

use std::collections::{HashMap, HashSet};

use rand::Rng;

use super::defaults::DEFAULT_FOODS;
use super::menu_item::{MenuItem, generate_id};
use super::migration::PersistedMenu;
use super::storage::KeyValueStore;

/// Slot the serialized menu lives under
pub const STORAGE_KEY: &str = "chisha_items";

pub struct MenuStore {
    items: Vec<MenuItem>,
    storage: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for MenuStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuStore")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl MenuStore {
    /// Load the menu from storage
    ///
    /// Absent, unreadable or unrecognizable values fall back to the default
    /// list without surfacing an error. The loaded menu is written back so the
    /// slot always holds the current shape.
    pub fn load(storage: Box<dyn KeyValueStore>) -> Self {
        let mut rng = rand::thread_rng();

        let items = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => match PersistedMenu::parse(&raw) {
                Ok(persisted) => persisted.migrate(&mut rng),
                Err(e) => {
                    log::warn!("Failed to load saved menu, using defaults: {}", e);
                    default_items(&mut rng)
                }
            },
            Ok(None) => default_items(&mut rng),
            Err(e) => {
                log::warn!("Failed to read menu storage, using defaults: {}", e);
                default_items(&mut rng)
            }
        };

        let mut store = Self { items, storage };
        store.persist();
        store
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items that take part in the spin
    pub fn active_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| item.active)
    }

    pub fn active_count(&self) -> usize {
        self.active_items().count()
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Backend the menu is persisted to
    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    /// Append a new active item unless the exact name is already present
    ///
    /// Returns true when the menu changed.
    pub fn add(&mut self, name: &str) -> bool {
        if name.trim().is_empty() || self.contains_name(name) {
            return false;
        }

        let id = self.fresh_id(&mut rand::thread_rng());
        self.items.push(MenuItem::new(id, name));
        self.persist();
        true
    }

    /// Delete the item with this id, if any
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Flip whether the item takes part in the spin
    pub fn toggle_active(&mut self, id: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.active = !item.active;
        self.persist();
        true
    }

    /// Replace the whole menu with `names`
    ///
    /// Duplicate names keep their first position. Names already on the menu
    /// keep their id and active flag; new names become active items; items
    /// whose name is not listed are dropped.
    pub fn bulk_replace<S: AsRef<str>>(&mut self, names: &[S]) {
        let mut rng = rand::thread_rng();

        let mut existing: HashMap<&str, &MenuItem> = HashMap::new();
        for item in &self.items {
            existing.entry(item.name.as_str()).or_insert(item);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut taken_ids: HashSet<String> =
            self.items.iter().map(|item| item.id.clone()).collect();
        let mut replaced = Vec::with_capacity(names.len());

        for name in names.iter().map(AsRef::as_ref) {
            if name.trim().is_empty() || !seen.insert(name) {
                continue;
            }

            match existing.get(name) {
                Some(item) => replaced.push((*item).clone()),
                None => {
                    let id = unique_id(&taken_ids, &mut rng);
                    taken_ids.insert(id.clone());
                    replaced.push(MenuItem::new(id, name));
                }
            }
        }

        self.items = replaced;
        self.persist();
    }

    /// Replace the menu with the default list, all active, fresh ids
    ///
    /// Destroys the current menu, so callers must pass the user's explicit
    /// confirmation. Returns false (and changes nothing) when unconfirmed.
    pub fn reset_to_default(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        self.items = default_items(&mut rand::thread_rng());
        self.persist();
        true
    }

    fn fresh_id<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let taken: HashSet<String> = self.items.iter().map(|item| item.id.clone()).collect();
        unique_id(&taken, rng)
    }

    fn persist(&mut self) {
        let serialized = match serde_json::to_string(&self.items) {
            Ok(s) => s,
            Err(e) => {
                log::error!("Failed to serialize menu: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(STORAGE_KEY, &serialized) {
            log::error!("Failed to persist menu: {}", e);
        }
    }
}

fn unique_id<R: Rng + ?Sized>(taken: &HashSet<String>, rng: &mut R) -> String {
    loop {
        let id = generate_id(rng);
        if !taken.contains(&id) {
            return id;
        }
    }
}

fn default_items<R: Rng + ?Sized>(rng: &mut R) -> Vec<MenuItem> {
    let mut taken = HashSet::new();
    DEFAULT_FOODS
        .iter()
        .map(|name| {
            let id = unique_id(&taken, rng);
            taken.insert(id.clone());
            MenuItem::new(id, *name)
        })
        .collect()
}

#[cfg(test)]
#[path = "menu_store_tests.rs"]
mod menu_store_tests;
