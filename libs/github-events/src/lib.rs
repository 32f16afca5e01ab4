use std::{io::Write, path::Path};

mod client;
pub mod config;
pub mod events;
mod render;
mod response;

pub use client::Client;
pub use config::{load_config, Config, SECRETS_FILE};
pub use render::render_table;
use reqwest::StatusCode;
use response::IntoResponse;
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
pub enum GithubEventsError {
    #[error("Usage: github-activity <GITHUB_USERNAME>")]
    Usage,
    #[error("Error: GITHUB_USERNAME is required")]
    EmptyUsername,
    #[error("Error loading secrets: {message}")]
    Config { message: String },
    #[error("Error building request: {message}")]
    Request { message: String },
    #[error("Error fetching events: {message}: {source}")]
    Transport {
        source: reqwest::Error,
        message: String,
    },
    #[error("Error fetching events: {status_code}")]
    FailedStatusCode { status_code: StatusCode },
    #[error("Error decoding events: {message}: {source}")]
    Decode {
        source: serde_json::Error,
        message: String,
    },
    #[error("Error writing output: {message}: {source}")]
    Output {
        source: std::io::Error,
        message: String,
    },
}

/// Fetches the events of the user named by the first argument and prints
/// them as a table to `out`. Returns the number of printed events.
///
/// Stops at the first failure. A missing or empty username is rejected
/// before the secrets file is read or any request is made.
pub async fn run<W: Write>(
    args: &[String],
    secrets_path: &Path,
    out: &mut W,
) -> Result<usize, GithubEventsError> {
    let Some(username) = args.first() else {
        return Err(GithubEventsError::Usage);
    };
    if username.is_empty() {
        return Err(GithubEventsError::EmptyUsername);
    }

    info!(task = "start github activity", username = username.as_str());

    let config = load_config(secrets_path)?;

    let client = Client::new(&config)?;

    let events = client.fetch_events(username).await?;
    info!(
        task = "fetch events",
        username = username.as_str(),
        count = events.len()
    );

    render_table(&events, out).into_response("failed to print events")?;

    Ok(events.len())
}

/// Writes the terminal message of a failed run to `out`. A successful run
/// has already printed its table, so nothing is written for it.
pub fn report<W: Write>(
    result: &Result<usize, GithubEventsError>,
    out: &mut W,
) -> std::io::Result<()> {
    if let Err(e) = result {
        error!(task = "github activity", err = e.to_string());
        writeln!(out, "{}", e)?;
    }

    Ok(())
}
