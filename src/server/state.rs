//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone.

use serenity::interactions_endpoint::Verifier;
use std::sync::Arc;

use crate::server::service::{chat::ChatClient, schedule::SchedulingRegistry};

#[derive(Clone)]
pub struct AppState {
    /// Owner of every live ping timer.
    pub registry: SchedulingRegistry,

    /// Chat client used for guild lookups outside of scheduled pings.
    pub chat: Arc<dyn ChatClient>,

    /// Verifier for interaction request signatures, built from the application's
    /// public key.
    pub verifier: Arc<Verifier>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `registry` - Scheduling registry, already reconciled
    /// - `chat` - Chat client shared with the registry
    /// - `verifier` - Interaction signature verifier
    pub fn new(
        registry: SchedulingRegistry,
        chat: Arc<dyn ChatClient>,
        verifier: Arc<Verifier>,
    ) -> Self {
        Self {
            registry,
            chat,
            verifier,
        }
    }
}
