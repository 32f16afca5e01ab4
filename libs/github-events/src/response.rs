use reqwest::header::InvalidHeaderValue;

use crate::GithubEventsError;

type Response<T> = Result<T, GithubEventsError>;

pub trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, std::io::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| GithubEventsError::Output {
            source: e,
            message: message.to_string(),
        })
    }
}

impl<T> IntoResponse<T> for Result<T, anyhow::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| GithubEventsError::Config {
            message: format!("{}: {:#}", message, e),
        })
    }
}

impl<T> IntoResponse<T> for Result<T, InvalidHeaderValue> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| GithubEventsError::Request {
            message: format!("{}: {}", message, e),
        })
    }
}

impl<T> IntoResponse<T> for Result<T, url::ParseError> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| GithubEventsError::Request {
            message: format!("{}: {}", message, e),
        })
    }
}

impl<T> IntoResponse<T> for Result<T, reqwest::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| {
            if e.is_builder() {
                GithubEventsError::Request {
                    message: format!("{}: {}", message, e),
                }
            } else {
                GithubEventsError::Transport {
                    source: e,
                    message: message.to_string(),
                }
            }
        })
    }
}

impl<T> IntoResponse<T> for Result<T, serde_json::Error> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| GithubEventsError::Decode {
            source: e,
            message: message.to_string(),
        })
    }
}

impl<T> IntoResponse<T> for Option<T> {
    fn into_response(self, message: &str) -> Response<T> {
        self.ok_or_else(|| GithubEventsError::Config {
            message: message.to_string(),
        })
    }
}
