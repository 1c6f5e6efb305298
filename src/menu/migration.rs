//! Persisted menu shapes and their migration
//!
//! Older releases stored either a bare list of names or items without the
//! `active` flag. The stored JSON carries no version field, so the shape is
//! classified structurally first and then migrated per variant.

use std::collections::HashSet;

use rand::Rng;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::menu_item::{MenuItem, generate_id};

/// Item shape from before items could be disabled
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LegacyItem {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// A classified persisted menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistedMenu {
    /// `["火锅", "烧烤"]`
    LegacyNameList(Vec<String>),
    /// `[{"id": "..", "name": ".."}]` with no `active` anywhere
    LegacyItemsNoActive(Vec<LegacyItem>),
    /// `[{"id": "..", "name": "..", "active": true}]`
    Current(Vec<MenuItem>),
}

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Expected a JSON array, found {0}")]
    NotAnArray(&'static str),

    #[error("Unrecognized menu entry shape: {0}")]
    UnrecognizedShape(String),
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl PersistedMenu {
    /// Parse and classify a raw stored value
    pub fn parse(raw: &str) -> Result<Self, MigrationError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| MigrationError::InvalidJson(e.to_string()))?;
        Self::classify(value)
    }

    /// Classify already-parsed JSON into one of the known shapes
    pub fn classify(value: Value) -> Result<Self, MigrationError> {
        let entries = match value {
            Value::Array(entries) => entries,
            other => return Err(MigrationError::NotAnArray(kind_of(&other))),
        };

        if entries.is_empty() {
            return Ok(PersistedMenu::Current(Vec::new()));
        }

        if entries.iter().all(Value::is_string) {
            let names = entries
                .into_iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect();
            return Ok(PersistedMenu::LegacyNameList(names));
        }

        if !entries.iter().all(Value::is_object) {
            return Err(MigrationError::UnrecognizedShape(
                "mixed strings and objects".to_string(),
            ));
        }

        let has_active = entries
            .iter()
            .any(|entry| entry.get("active").is_some());

        let entries = Value::Array(entries);
        if has_active {
            serde_json::from_value(entries)
                .map(PersistedMenu::Current)
                .map_err(|e| MigrationError::UnrecognizedShape(e.to_string()))
        } else {
            serde_json::from_value(entries)
                .map(PersistedMenu::LegacyItemsNoActive)
                .map_err(|e| MigrationError::UnrecognizedShape(e.to_string()))
        }
    }

    /// Convert to current items, repairing blank names and duplicate ids
    pub fn migrate<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<MenuItem> {
        let items: Vec<MenuItem> = match self {
            PersistedMenu::LegacyNameList(names) => names
                .into_iter()
                .map(|name| MenuItem::new(String::new(), name))
                .collect(),
            PersistedMenu::LegacyItemsNoActive(items) => items
                .into_iter()
                .map(|item| MenuItem::new(item.id.unwrap_or_default(), item.name))
                .collect(),
            PersistedMenu::Current(items) => items,
        };

        normalize(items, rng)
    }
}

fn normalize<R: Rng + ?Sized>(items: Vec<MenuItem>, rng: &mut R) -> Vec<MenuItem> {
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut result = Vec::with_capacity(items.len());

    for mut item in items {
        if item.name.trim().is_empty() {
            continue;
        }

        if item.id.is_empty() || seen_ids.contains(&item.id) {
            let mut id = generate_id(rng);
            while seen_ids.contains(&id) {
                id = generate_id(rng);
            }
            item.id = id;
        }

        seen_ids.insert(item.id.clone());
        result.push(item);
    }

    result
}

#[cfg(test)]
#[path = "migration_tests.rs"]
mod migration_tests;
