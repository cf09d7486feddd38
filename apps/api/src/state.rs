use sqlx::PgPool;

use crate::config::Config;
use crate::generation::playbook::Playbook;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Kept for handlers that need runtime settings beyond startup wiring.
    #[allow(dead_code)]
    pub config: Config,
    /// Resolved at startup: either the PLAYBOOK_PATH file or the built-in
    /// default. Immutable for the life of the process.
    pub playbook: Playbook,
}
