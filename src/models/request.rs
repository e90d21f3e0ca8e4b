use serde::{self, Deserialize, Deserializer, Serialize};

use super::ChatMessage;

/// `"history": null` is accepted and means no prior turns.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ChatMessage>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ChatMessage>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatRequest {
    pub subject: String,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub context: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub history: Vec<ChatMessage>,
}
