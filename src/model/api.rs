use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Error envelope returned by the backend on non-2xx responses.
///
/// The backend is inconsistent about which key carries the text, so both are
/// optional and `errorMessage` wins when both are present. A key holding
/// anything other than a string reads as absent without affecting the other.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBodyDto {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub error_message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub message: Option<String>,
}

impl ErrorBodyDto {
    /// First non-empty message, `errorMessage` before `message`.
    pub fn into_message(self) -> Option<String> {
        self.error_message
            .filter(|m| !m.is_empty())
            .or(self.message.filter(|m| !m.is_empty()))
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

/// Reply for endpoints that only acknowledge the request.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MessageResponseDto {
    #[serde(default)]
    pub message: Option<String>,
}

/// Accepts ids sent either as JSON numbers or as numeric strings.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text.trim().parse::<i64>().map_err(D::Error::custom),
    }
}

pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "deserialize_id")] i64);

    Option::<Wrapper>::deserialize(deserializer).map(|id| id.map(|Wrapper(id)| id))
}
