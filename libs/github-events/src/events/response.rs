use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};

#[serde_as]
#[derive(Deserialize, Debug, Default, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct Event {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub r#type: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub actor: Actor,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub repo: Repo,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub payload: Payload,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub public: bool,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created_at: String,
}

#[serde_as]
#[derive(Deserialize, Debug, Default, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct Actor {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub login: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub display_login: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub gravatar_id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub url: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub avatar_url: String,
}

#[serde_as]
#[derive(Deserialize, Debug, Default, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct Repo {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub url: String,
}

#[serde_as]
#[derive(Deserialize, Debug, Default, Eq, PartialEq, Clone)]
#[serde(default)]
pub struct Payload {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub action: String,
}
