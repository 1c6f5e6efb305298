//! Recommendation Gateway
//!
//! Stateless façade over a text-generation service. Each call makes a single
//! attempt; any failure is logged and replaced by a fixed fallback, so
//! callers never see an error.

use std::future::Future;

use serde_json::Value;

use super::prompt::{
    build_new_dishes_prompt, build_recommendation_prompt, dish_list_schema, recommendation_schema,
};
use super::provider::AiError;
use super::suggestion::{
    AiSuggestion, fallback_dishes, fallback_suggestion, filter_new_dishes, parse_dish_list,
    parse_suggestion,
};

/// A service that answers a prompt with JSON text matching `schema`
pub trait GenerationService {
    fn generate_json(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> impl Future<Output = Result<String, AiError>>;
}

#[derive(Debug)]
pub struct RecommendationGateway<S> {
    service: S,
}

impl<S: GenerationService> RecommendationGateway<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Suggest one dish for `menu`, steered by an optional free-text preference
    ///
    /// An empty menu is still sent; the model may suggest something off-menu.
    pub async fn recommend(&self, menu: &[String], preference: Option<&str>) -> AiSuggestion {
        let prompt = build_recommendation_prompt(menu, preference);
        let result = self
            .service
            .generate_json(&prompt, &recommendation_schema())
            .await
            .and_then(|text| parse_suggestion(&text));

        match result {
            Ok(suggestion) => {
                log::debug!("AI recommended {}", suggestion.name);
                suggestion
            }
            Err(e) => {
                log::error!("AI recommendation failed: {}", e);
                fallback_suggestion()
            }
        }
    }

    /// Ask for up to `count` dishes that are not in `existing`
    pub async fn generate_new_dishes(&self, existing: &[String], count: usize) -> Vec<String> {
        let prompt = build_new_dishes_prompt(existing, count);
        let result = self
            .service
            .generate_json(&prompt, &dish_list_schema())
            .await
            .and_then(|text| parse_dish_list(&text));

        match result {
            Ok(candidates) => filter_new_dishes(candidates, existing, count),
            Err(e) => {
                log::error!("AI dish generation failed: {}", e);
                fallback_dishes()
            }
        }
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod gateway_tests;
