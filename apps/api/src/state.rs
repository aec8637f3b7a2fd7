use std::sync::Arc;

use tokio::sync::Mutex;

use crate::applications::models::JobApplication;
use crate::config::Config;
use crate::llm_client::CompletionClient;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: `OpenAiClient`.
    pub llm: Arc<dyn CompletionClient>,
    /// The one interview session this process serves. Handlers hold the lock
    /// for their whole run, so actions are applied one at a time.
    pub session: Arc<Mutex<Session>>,
    /// Job applications recorded since startup, oldest first.
    pub applications: Arc<Mutex<Vec<JobApplication>>>,
    pub config: Config,
}

impl AppState {
    pub fn new(llm: Arc<dyn CompletionClient>, config: Config) -> Self {
        Self {
            llm,
            session: Arc::new(Mutex::new(Session::new())),
            applications: Arc::new(Mutex::new(Vec::new())),
            config,
        }
    }
}
