pub mod commands;
pub mod config;
pub mod fallback;
pub mod models;
pub mod search;

use std::io::{Read, Write};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub use fallback::orchestrator::{handle_fallback, FallbackOrchestrator};
pub use fallback::tables::FallbackTables;
pub use models::{ConversationHistory, FallbackStrategy, Message, MessageRole};
pub use search::{resolve_reply, Reply, SearchResult};

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Tables(#[from] fallback::FallbackError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request: {0}")]
    Request(#[from] serde_json::Error),
}

/// Read one JSON request from stdin and print the reply JSON to stdout.
pub fn run() -> Result<(), RunError> {
    // Initialize tracing; stdout is reserved for the reply
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let tables = fallback::tables::load_configured()?;

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let request: commands::ChatRequest = serde_json::from_str(&input)?;

    let response = commands::handle_request(&request, &tables);

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &response)?;
    writeln!(stdout)?;
    Ok(())
}
