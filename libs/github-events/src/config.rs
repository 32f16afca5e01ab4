use std::path::Path;

use toml::{map::Map, Value};

use crate::{response::IntoResponse, GithubEventsError};

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const SECRETS_FILE: &str = "Secrets.toml";

static USER_AGENT: &str = "github-activity";

/// Settings resolved once at startup and handed to the client.
#[derive(Clone, Debug)]
pub struct Config {
    pub token: String,
    pub base_url: String,
    pub user_agent: String,
}

impl Config {
    pub fn from_secrets(
        secrets: &Map<String, Value>,
    ) -> Result<Self, GithubEventsError> {
        let token = secrets
            .get("GITHUB_USER_TOKEN")
            .into_response("GITHUB_USER_TOKEN was not found")?
            .as_str()
            .into_response("GITHUB_USER_TOKEN is not a string")?
            .to_string();

        let base_url = match secrets.get("GITHUB_API_BASE_URL") {
            Some(value) => value
                .as_str()
                .into_response("GITHUB_API_BASE_URL is not a string")?
                .trim_end_matches('/')
                .to_string(),
            None => DEFAULT_BASE_URL.to_string(),
        };

        Ok(Self {
            token,
            base_url,
            user_agent: USER_AGENT.to_string(),
        })
    }
}

pub fn load_config(path: &Path) -> Result<Config, GithubEventsError> {
    let secrets = util::load_env(path).into_response("invalid settings file")?;

    Config::from_secrets(&secrets)
}
