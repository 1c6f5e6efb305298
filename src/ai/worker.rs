//! AI Worker Thread
//!
//! Runs gateway calls in a background thread so the UI never waits on the
//! network. Requests arrive over a channel; each one is driven to completion
//! on a current-thread tokio runtime and answered with the same request id.
//! The gateway never fails, so every request gets exactly one response.

use std::sync::mpsc::{Receiver, Sender};

use tokio::runtime::Runtime;

use super::ai_state::{AiRequest, AiResponse};
use super::gateway::RecommendationGateway;
use super::provider::{AiError, AiProvider};
use super::suggestion::{fallback_dishes, fallback_suggestion};
use crate::config::AiConfig;

/// Spawn the AI worker thread
///
/// # Arguments
/// * `config` - AI configuration (for creating the provider)
/// * `request_rx` - Channel to receive requests from the main thread
/// * `response_tx` - Channel to send responses to the main thread
pub fn spawn_worker(
    config: &AiConfig,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let provider_result = AiProvider::from_config(config);

    std::thread::spawn(move || {
        worker_loop(provider_result, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    provider_result: Result<AiProvider, AiError>,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let gateway = match provider_result {
        Ok(provider) => Some(RecommendationGateway::new(provider)),
        Err(e) => {
            log::debug!("AI provider not configured: {}", e);
            None
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => Some(runtime),
        Err(e) => {
            log::error!("Failed to start AI runtime: {}", e);
            None
        }
    };

    let backend = gateway.as_ref().zip(runtime.as_ref());

    while let Ok(request) = request_rx.recv() {
        let response = handle_request(backend, request);
        if response_tx.send(response).is_err() {
            // Main thread disconnected
            break;
        }
    }

    log::debug!("AI worker thread shutting down");
}

fn handle_request(
    backend: Option<(&RecommendationGateway<AiProvider>, &Runtime)>,
    request: AiRequest,
) -> AiResponse {
    match request {
        AiRequest::Recommend {
            menu,
            preference,
            request_id,
        } => {
            let suggestion = match backend {
                Some((gateway, runtime)) => {
                    runtime.block_on(gateway.recommend(&menu, preference.as_deref()))
                }
                None => {
                    log::error!("AI recommendation unavailable: provider not configured");
                    fallback_suggestion()
                }
            };
            AiResponse::Recommendation {
                suggestion,
                request_id,
            }
        }
        AiRequest::GenerateDishes {
            existing,
            count,
            request_id,
        } => {
            let names = match backend {
                Some((gateway, runtime)) => {
                    runtime.block_on(gateway.generate_new_dishes(&existing, count))
                }
                None => {
                    log::error!("AI dish generation unavailable: provider not configured");
                    fallback_dishes()
                }
            };
            AiResponse::NewDishes { names, request_id }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
