//! AI chef panel state
//!
//! Tracks panel visibility, the preference input, and the request in flight.
//! Responses carry the id of the request that produced them; anything that
//! does not match the current in-flight id is stale and dropped.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use super::suggestion::{AiSuggestion, fallback_dishes, fallback_suggestion};

/// Request messages sent to the AI worker thread
#[derive(Debug)]
pub enum AiRequest {
    /// Ask for one dish from the menu
    Recommend {
        menu: Vec<String>,
        preference: Option<String>,
        request_id: u64,
    },
    /// Ask for dishes that are not on the menu yet
    GenerateDishes {
        existing: Vec<String>,
        count: usize,
        request_id: u64,
    },
}

/// Response messages received from the AI worker thread
#[derive(Debug)]
pub enum AiResponse {
    Recommendation {
        suggestion: AiSuggestion,
        request_id: u64,
    },
    NewDishes {
        names: Vec<String>,
        request_id: u64,
    },
}

/// AI chef panel state
pub struct AiState {
    /// Whether the panel is visible
    pub visible: bool,
    /// Whether an API key is available; without one every answer is the fallback
    pub configured: bool,
    /// Free-text taste preference
    pub preference: TextArea<'static>,
    /// Waiting for a recommendation
    pub loading: bool,
    /// Latest accepted recommendation, shown until closed or superseded
    pub suggestion: Option<AiSuggestion>,
    /// Waiting for generated dishes
    pub generating: bool,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<Sender<AiRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<AiResponse>>,
    request_id: u64,
    in_flight_recommendation: Option<u64>,
    in_flight_dishes: Option<u64>,
    ready_dishes: Option<Vec<String>>,
}

fn preference_input() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 今天想吃点什么口味？(选填) ")
            .border_style(Style::default().fg(Color::Magenta)),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("例如：想吃辣的、不想吃面食、心情不好想吃甜的...");
    textarea
}

impl AiState {
    pub fn new(configured: bool) -> Self {
        Self {
            visible: false,
            configured,
            preference: preference_input(),
            loading: false,
            suggestion: None,
            generating: false,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_recommendation: None,
            in_flight_dishes: None,
            ready_dishes: None,
        }
    }

    /// Attach the worker channels
    pub fn connect(&mut self, request_tx: Sender<AiRequest>, response_rx: Receiver<AiResponse>) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Hide the panel and forget the suggestion
    ///
    /// A recommendation still in flight is abandoned; its late response
    /// will be discarded.
    pub fn close(&mut self) {
        self.visible = false;
        self.loading = false;
        self.suggestion = None;
        self.in_flight_recommendation = None;
    }

    /// Trimmed preference text, `None` when blank
    pub fn preference_text(&self) -> Option<String> {
        let text = self.preference.lines().join("\n");
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    fn next_request_id(&mut self) -> u64 {
        self.request_id = self.request_id.wrapping_add(1);
        self.request_id
    }

    /// Ask for a recommendation, superseding any pending one
    pub fn request_recommendation(&mut self, menu: Vec<String>) {
        let request_id = self.next_request_id();
        self.suggestion = None;
        self.loading = true;
        self.in_flight_recommendation = Some(request_id);

        let request = AiRequest::Recommend {
            menu,
            preference: self.preference_text(),
            request_id,
        };
        if !self.send(request) {
            self.finish_recommendation(fallback_suggestion());
        }
    }

    /// Ask for `count` new dishes. Ignored while a generation is pending.
    pub fn request_new_dishes(&mut self, existing: Vec<String>, count: usize) -> bool {
        if self.generating {
            return false;
        }
        let request_id = self.next_request_id();
        self.generating = true;
        self.in_flight_dishes = Some(request_id);

        let request = AiRequest::GenerateDishes {
            existing,
            count,
            request_id,
        };
        if !self.send(request) {
            self.finish_dishes(fallback_dishes());
        }
        true
    }

    fn send(&self, request: AiRequest) -> bool {
        match &self.request_tx {
            Some(tx) => match tx.send(request) {
                Ok(()) => true,
                Err(e) => {
                    log::error!("AI worker unavailable: {}", e);
                    false
                }
            },
            None => {
                log::error!("AI worker not running");
                false
            }
        }
    }

    fn finish_recommendation(&mut self, suggestion: AiSuggestion) {
        self.suggestion = Some(suggestion);
        self.loading = false;
        self.in_flight_recommendation = None;
    }

    fn finish_dishes(&mut self, names: Vec<String>) {
        self.ready_dishes = Some(names);
        self.generating = false;
        self.in_flight_dishes = None;
    }

    /// Drain worker responses, dropping stale ones
    pub fn poll_responses(&mut self) {
        let Some(rx) = self.response_rx.take() else {
            return;
        };

        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(response) => self.apply_response(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if disconnected {
            log::error!("AI worker disconnected");
            self.request_tx = None;
            if self.in_flight_recommendation.is_some() {
                self.finish_recommendation(fallback_suggestion());
            }
            if self.in_flight_dishes.is_some() {
                self.finish_dishes(fallback_dishes());
            }
        } else {
            self.response_rx = Some(rx);
        }
    }

    fn apply_response(&mut self, response: AiResponse) {
        match response {
            AiResponse::Recommendation {
                suggestion,
                request_id,
            } => {
                if self.in_flight_recommendation == Some(request_id) {
                    self.finish_recommendation(suggestion);
                } else {
                    log::debug!("Discarding stale recommendation {}", request_id);
                }
            }
            AiResponse::NewDishes { names, request_id } => {
                if self.in_flight_dishes == Some(request_id) {
                    self.finish_dishes(names);
                } else {
                    log::debug!("Discarding stale dish list {}", request_id);
                }
            }
        }
    }

    /// Generated dishes that arrived since the last call
    pub fn take_new_dishes(&mut self) -> Option<Vec<String>> {
        self.ready_dishes.take()
    }

    /// Drop the shown suggestion to ask again
    pub fn clear_suggestion(&mut self) {
        self.suggestion = None;
    }

    /// Take the suggested dish name and close the panel
    pub fn accept(&mut self) -> Option<String> {
        let name = self.suggestion.take().map(|s| s.name);
        if name.is_some() {
            self.close();
        }
        name
    }
}

#[cfg(test)]
#[path = "ai_state_tests.rs"]
mod ai_state_tests;
