//! Tests for ai_state

use std::sync::mpsc;

use super::*;
use crate::ai::suggestion::{FALLBACK_DISHES, FALLBACK_NAME};

fn connected_state() -> (AiState, mpsc::Receiver<AiRequest>, mpsc::Sender<AiResponse>) {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let mut state = AiState::new(true);
    state.connect(request_tx, response_rx);
    (state, request_rx, response_tx)
}

fn suggestion(name: &str) -> AiSuggestion {
    AiSuggestion {
        name: name.to_string(),
        reason: "好吃".to_string(),
    }
}

#[test]
fn test_new_state_is_hidden_and_idle() {
    let state = AiState::new(false);
    assert!(!state.visible);
    assert!(!state.configured);
    assert!(!state.loading);
    assert!(state.suggestion.is_none());
    assert_eq!(state.current_request_id(), 0);
}

#[test]
fn test_preference_text_is_trimmed_and_blank_is_none() {
    let mut state = AiState::new(true);
    assert_eq!(state.preference_text(), None);

    state.preference.insert_str("   ");
    assert_eq!(state.preference_text(), None);

    state.preference.insert_str("想吃辣的 ");
    assert_eq!(state.preference_text(), Some("想吃辣的".to_string()));
}

#[test]
fn test_request_recommendation_sends_menu_and_preference() {
    let (mut state, request_rx, _response_tx) = connected_state();
    state.preference.insert_str("清淡");

    state.request_recommendation(vec!["火锅".to_string(), "烧烤".to_string()]);

    assert!(state.loading);
    match request_rx.try_recv().unwrap() {
        AiRequest::Recommend {
            menu,
            preference,
            request_id,
        } => {
            assert_eq!(menu, vec!["火锅", "烧烤"]);
            assert_eq!(preference.as_deref(), Some("清淡"));
            assert_eq!(request_id, state.current_request_id());
        }
        other => panic!("unexpected request: {:?}", other),
    }
}

#[test]
fn test_matching_response_sets_suggestion() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.request_recommendation(vec!["火锅".to_string()]);

    response_tx
        .send(AiResponse::Recommendation {
            suggestion: suggestion("火锅"),
            request_id: state.current_request_id(),
        })
        .unwrap();
    state.poll_responses();

    assert!(!state.loading);
    assert_eq!(state.suggestion, Some(suggestion("火锅")));
}

#[test]
fn test_superseded_response_is_discarded() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.request_recommendation(vec!["火锅".to_string()]);
    let first = state.current_request_id();
    state.request_recommendation(vec!["火锅".to_string()]);

    response_tx
        .send(AiResponse::Recommendation {
            suggestion: suggestion("过期"),
            request_id: first,
        })
        .unwrap();
    state.poll_responses();

    assert!(state.loading);
    assert!(state.suggestion.is_none());
}

#[test]
fn test_response_after_close_is_discarded() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.open();
    state.request_recommendation(vec!["火锅".to_string()]);
    let id = state.current_request_id();
    state.close();

    response_tx
        .send(AiResponse::Recommendation {
            suggestion: suggestion("火锅"),
            request_id: id,
        })
        .unwrap();
    state.poll_responses();

    assert!(!state.visible);
    assert!(!state.loading);
    assert!(state.suggestion.is_none());
}

#[test]
fn test_without_worker_recommendation_falls_back_immediately() {
    let mut state = AiState::new(false);
    state.request_recommendation(vec!["火锅".to_string()]);

    assert!(!state.loading);
    assert_eq!(state.suggestion.as_ref().unwrap().name, FALLBACK_NAME);
}

#[test]
fn test_without_worker_new_dishes_fall_back() {
    let mut state = AiState::new(false);
    assert!(state.request_new_dishes(vec![], 5));

    assert!(!state.generating);
    assert_eq!(state.take_new_dishes().unwrap(), FALLBACK_DISHES.to_vec());
    assert!(state.take_new_dishes().is_none());
}

#[test]
fn test_new_dishes_ignored_while_generating() {
    let (mut state, request_rx, _response_tx) = connected_state();
    assert!(state.request_new_dishes(vec!["火锅".to_string()], 5));
    assert!(!state.request_new_dishes(vec!["火锅".to_string()], 5));

    assert!(request_rx.try_recv().is_ok());
    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_new_dishes_response_is_delivered_once() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.request_new_dishes(vec![], 2);

    response_tx
        .send(AiResponse::NewDishes {
            names: vec!["麻婆豆腐".to_string(), "酸菜鱼".to_string()],
            request_id: state.current_request_id(),
        })
        .unwrap();
    state.poll_responses();

    assert!(!state.generating);
    assert_eq!(
        state.take_new_dishes(),
        Some(vec!["麻婆豆腐".to_string(), "酸菜鱼".to_string()])
    );
    assert_eq!(state.take_new_dishes(), None);
}

#[test]
fn test_worker_disconnect_falls_back_for_pending_requests() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.request_recommendation(vec!["火锅".to_string()]);
    drop(response_tx);

    state.poll_responses();

    assert!(!state.loading);
    assert_eq!(state.suggestion.as_ref().unwrap().name, FALLBACK_NAME);
    assert!(state.request_tx.is_none());
    assert!(state.response_rx.is_none());
}

#[test]
fn test_accept_returns_name_and_closes() {
    let mut state = AiState::new(true);
    state.open();
    state.suggestion = Some(suggestion("酸菜鱼"));

    assert_eq!(state.accept(), Some("酸菜鱼".to_string()));
    assert!(!state.visible);
    assert!(state.suggestion.is_none());
}

#[test]
fn test_accept_without_suggestion_keeps_panel_open() {
    let mut state = AiState::new(true);
    state.open();

    assert_eq!(state.accept(), None);
    assert!(state.visible);
}

#[test]
fn test_clear_suggestion_keeps_preference() {
    let mut state = AiState::new(true);
    state.preference.insert_str("辣");
    state.suggestion = Some(suggestion("火锅"));

    state.clear_suggestion();

    assert!(state.suggestion.is_none());
    assert_eq!(state.preference_text(), Some("辣".to_string()));
}
