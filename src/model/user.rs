use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::api::deserialize_id;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// User listing as returned by `/auth/getUsers`.
///
/// Older deployments answer with a bare array instead of the `{ users, total }`
/// envelope; both decode into this shape.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(from = "UsersPayload")]
pub struct UsersResponseDto {
    pub users: Vec<UserDto>,
    pub total: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UsersPayload {
    Wrapped {
        #[serde(default)]
        users: Vec<UserDto>,
        #[serde(default)]
        total: Option<u64>,
    },
    Bare(Vec<UserDto>),
}

impl From<UsersPayload> for UsersResponseDto {
    fn from(payload: UsersPayload) -> Self {
        match payload {
            UsersPayload::Wrapped { users, total } => Self { users, total },
            UsersPayload::Bare(users) => Self { users, total: None },
        }
    }
}
