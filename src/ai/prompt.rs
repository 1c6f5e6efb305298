//! Prompt templates and response schemas for the Gemini requests

use serde_json::{Value, json};

/// How many existing names are quoted in the dish generation prompt
const MAX_EXISTING_IN_PROMPT: usize = 20;

/// Prompt asking for one dish from `menu`, optionally steered by `preference`
///
/// A blank preference is treated as none.
pub fn build_recommendation_prompt(menu: &[String], preference: Option<&str>) -> String {
    let menu_list = menu.join(", ");
    match preference.map(str::trim).filter(|p| !p.is_empty()) {
        Some(preference) => format!(
            "用户想吃：{}。请从以下菜单中选择最合适的一道菜，或者如果菜单里没有合适的，推荐一道菜单外的新菜。菜单列表：{}。请用幽默风趣的语气解释原因。",
            preference, menu_list
        ),
        None => format!(
            "请从以下菜单中随机推荐一道菜，并给出一个无法拒绝的理由（可以是幽默的、天气的、心情的理由）。菜单列表：{}。",
            menu_list
        ),
    }
}

/// Prompt asking for `count` common dishes not on the menu
pub fn build_new_dishes_prompt(existing: &[String], count: usize) -> String {
    let quoted: Vec<&str> = existing
        .iter()
        .take(MAX_EXISTING_IN_PROMPT)
        .map(String::as_str)
        .collect();
    format!(
        "请推荐 {} 个这一列表中没有的常见中国午餐或晚餐菜品名称。只返回菜名数组。现有列表：{}...",
        count,
        quoted.join(", ")
    )
}

/// Response schema for a recommendation: `{name, reason}`
pub fn recommendation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING", "description": "Recommended dish name" },
            "reason": { "type": "STRING", "description": "Reason for recommendation" }
        },
        "required": ["name", "reason"]
    })
}

/// Response schema for generated dishes: an array of names
pub fn dish_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" }
    })
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
