use reqwest::{
    header::{
        HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT,
    },
    Request, StatusCode,
};
use tracing::debug;
use url::Url;

use crate::{
    config::Config,
    events::{decode_events, Event},
    response::IntoResponse,
    GithubEventsError,
};

static API_VERSION: &str = "2022-11-28";
static GITHUB_JSON: &str = "application/vnd.github+json";

#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    headers: HeaderMap,
    client: reqwest::Client,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self, GithubEventsError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        headers.insert(
            HeaderName::from_static("x-github-api-version"),
            HeaderValue::from_static(API_VERSION),
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(format!("Bearer {}", config.token).as_str())
                .into_response("invalid bearer token")?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .into_response("invalid user agent")?,
        );

        let client = reqwest::ClientBuilder::new()
            .build()
            .into_response("failed to build http client")?;

        Ok(Self {
            base_url: config.base_url.clone(),
            headers,
            client,
        })
    }

    pub fn events_request(
        &self,
        username: &str,
    ) -> Result<Request, GithubEventsError> {
        if username.is_empty() {
            return Err(GithubEventsError::EmptyUsername);
        }
        // Dot segments would be dropped or resolved and leave `/users/`.
        if username == "." || username == ".." || username.contains('/') {
            return Err(GithubEventsError::Request {
                message: format!("invalid username: {:?}", username),
            });
        }

        let mut url = Url::parse(&self.base_url)
            .into_response("invalid base url")?;
        url.path_segments_mut()
            .map_err(|_| GithubEventsError::Request {
                message: format!("invalid base url: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(["users", username, "events"]);

        self.client
            .get(url)
            .headers(self.headers.clone())
            .build()
            .into_response("invalid events url")
    }

    /// Sends the events request once and decodes a `200 OK` body.
    ///
    /// Any other status is returned as an error without reading the body.
    pub async fn fetch_events(
        &self,
        username: &str,
    ) -> Result<Vec<Event>, GithubEventsError> {
        let request = self.events_request(username)?;
        debug!(task = "fetch events", url = request.url().as_str());

        let response = self
            .client
            .execute(request)
            .await
            .into_response("failed to send")?;

        let status = response.status();
        debug!(task = "fetch events", status = status.as_u16());

        if status != StatusCode::OK {
            return Err(GithubEventsError::FailedStatusCode {
                status_code: status,
            });
        }

        let text = response.text().await.into_response("failed to get text")?;

        decode_events(&text)
    }
}
