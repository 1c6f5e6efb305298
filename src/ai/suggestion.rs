//! AI suggestion values and response parsing
//!
//! The model is asked for JSON, but only output that deserializes into the
//! expected shape is trusted. Anything else is a schema mismatch that the
//! gateway turns into the fixed fallback.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::provider::AiError;

pub const FALLBACK_NAME: &str = "西北风";
pub const FALLBACK_REASON: &str = "AI 似乎饿晕了，暂时无法思考。不如喝点西北风冷静一下？";

/// Offered when dish generation fails
pub const FALLBACK_DISHES: &[&str] = &["红烧肉", "糖醋排骨", "宫保鸡丁", "鱼香肉丝", "水煮鱼"];

/// A recommended dish and the reason for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSuggestion {
    pub name: String,
    pub reason: String,
}

pub fn fallback_suggestion() -> AiSuggestion {
    AiSuggestion {
        name: FALLBACK_NAME.to_string(),
        reason: FALLBACK_REASON.to_string(),
    }
}

pub fn fallback_dishes() -> Vec<String> {
    FALLBACK_DISHES.iter().map(|s| s.to_string()).collect()
}

/// Both accepted shapes of a generated dish list
#[derive(Deserialize)]
#[serde(untagged)]
enum DishList {
    Bare(Vec<String>),
    Wrapped { items: Vec<String> },
}

/// Drop a surrounding markdown code fence, if the model added one
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Skip the info string ("json") on the opening line
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}

/// Parse `{"name": string, "reason": string}`
pub fn parse_suggestion(text: &str) -> Result<AiSuggestion, AiError> {
    let suggestion: AiSuggestion = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| AiError::Schema(e.to_string()))?;

    let name = suggestion.name.trim();
    if name.is_empty() {
        return Err(AiError::Schema("empty dish name".to_string()));
    }

    Ok(AiSuggestion {
        name: name.to_string(),
        reason: suggestion.reason.trim().to_string(),
    })
}

/// Parse a string array, bare or wrapped as `{"items": [...]}`
pub fn parse_dish_list(text: &str) -> Result<Vec<String>, AiError> {
    match serde_json::from_str::<DishList>(strip_code_fence(text)) {
        Ok(DishList::Bare(items)) | Ok(DishList::Wrapped { items }) => Ok(items),
        Err(e) => Err(AiError::Schema(e.to_string())),
    }
}

/// Keep at most `count` trimmed, non-blank names that are not on the menu
pub fn filter_new_dishes(candidates: Vec<String>, existing: &[String], count: usize) -> Vec<String> {
    let mut seen: HashSet<String> = existing.iter().cloned().collect();
    candidates
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty() && seen.insert(name.clone()))
        .take(count)
        .collect()
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
