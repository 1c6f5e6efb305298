//! AI module
//!
//! Recommendation Gateway over a text-generation service, the background
//! worker that runs it, and the AI chef panel.

pub mod ai_events;
pub mod ai_render;
pub mod ai_state;
mod gateway;
mod prompt;
pub mod provider;
mod suggestion;
pub mod worker;

pub use ai_events::AiAction;
pub use ai_state::{AiRequest, AiResponse, AiState};
pub use gateway::{GenerationService, RecommendationGateway};
pub use prompt::{
    build_new_dishes_prompt, build_recommendation_prompt, dish_list_schema,
    recommendation_schema,
};
pub use suggestion::{
    AiSuggestion, FALLBACK_DISHES, FALLBACK_NAME, FALLBACK_REASON, fallback_dishes,
    fallback_suggestion, filter_new_dishes, parse_dish_list, parse_suggestion,
};

/// Number of dishes requested by the menu editor's generate action
pub const DEFAULT_NEW_DISH_COUNT: usize = 5;
