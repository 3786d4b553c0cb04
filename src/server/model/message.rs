//! Messages as returned by the provider's messages API.
//!
//! Only the fields rendered by the inbox view are modelled, everything else in the provider's
//! payload is ignored. Fields the provider may omit or send as `null` deserialize to `None` or
//! to an empty value.

use serde::{Deserialize, Deserializer, Serialize};

/// A single email message.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Senders of the message, usually exactly one
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: Vec<Participant>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Sender or recipient of a message.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// Deserialize an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
