//! textify - Text summarization, headlining, and custom rewriting via the Gemini API
//!
//! Entry point for the text-processing CLI.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scribe::cli::{commands, TextArgs};
use scribe::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let args = TextArgs::parse();
    let settings = Settings::load()?;

    let failed = commands::run_text(&settings, &args).await?;
    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
