//! myfeed panel
//!
//! Fetches a grounded news summary for the topics in `interests.txt` and
//! shows it in a "My Feed" panel on the terminal.
//!
//! Configuration comes from the environment (or a `.env` file):
//! - GEMINI_API_KEY: Gemini API key (required)
//! - GEMINI_MODEL, GEMINI_API_URL, GEMINI_TIMEOUT_SECS: client overrides
//! - MYFEED_HOME: directory holding `interests.txt` (default `.`)
//! - MYFEED_PANEL_WIDTH: panel width in columns

mod panel;
mod view;

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::{Context, Result};
use myfeed::render::Style;
use myfeed::{Config, FeedService, FileInterestSource, GeminiClient};
use panel::TerminalPanel;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout is the panel
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,myfeed=debug,myfeed_panel=debug".into()),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting myfeed panel");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    let client = GeminiClient::from_config(&config).context("Failed to build Gemini client")?;
    let interests = FileInterestSource::in_dir(&config.home_dir);
    tracing::debug!(path = %interests.path().display(), "Interest source");

    let service = FeedService::new(Arc::new(client), Arc::new(interests), config.model.clone());

    let stdout = io::stdout();
    let style = if stdout.is_terminal() {
        Style::Ansi
    } else {
        Style::Plain
    };
    let mut panel = TerminalPanel::new(stdout.lock(), config.panel_width, style);

    view::show_feed(&service, &mut panel).await
}
