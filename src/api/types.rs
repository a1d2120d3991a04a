//! Shared state for the API layer.

use std::sync::Arc;

use crate::advisory::LlmClient;
use crate::directory::Roster;

/// Shared context for all API routes.
///
/// The roster is read-only and the LLM client keeps no per-request state,
/// so concurrent requests share both without locking.
#[derive(Clone)]
pub struct ApiContext {
    pub roster: Arc<Roster>,
    pub llm: Arc<dyn LlmClient>,
    /// Model name passed to every generation call.
    pub model: String,
}

impl ApiContext {
    pub fn new(roster: Arc<Roster>, llm: Arc<dyn LlmClient>, model: String) -> Self {
        Self { roster, llm, model }
    }
}
