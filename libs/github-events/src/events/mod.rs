pub use self::response::{Actor, Event, Payload, Repo};
use crate::{response::IntoResponse, GithubEventsError};

mod response;

/// Decodes the `/users/{username}/events` body, keeping the upstream order.
pub fn decode_events(text: &str) -> Result<Vec<Event>, GithubEventsError> {
    serde_json::from_str::<Vec<Event>>(text)
        .into_response("failed to deserialize events")
}
