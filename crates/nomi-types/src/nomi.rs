//! Conversation targets and the listing endpoint envelope.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The remote counterpart of a chat session.
///
/// Resolved once from a human-readable name before the session starts and
/// never changed afterwards. `id` is opaque to the client and only used to
/// build the chat endpoint path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTarget {
    pub id: String,
    pub name: String,
}

impl ConversationTarget {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ConversationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One entry of the `GET /nomis` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NomiSummary {
    pub uuid: String,
    pub name: String,
}

impl From<&NomiSummary> for ConversationTarget {
    fn from(summary: &NomiSummary) -> Self {
        ConversationTarget::new(summary.uuid.clone(), summary.name.clone())
    }
}

/// Response body of the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NomiListing {
    #[serde(default)]
    pub nomis: Vec<NomiSummary>,
}
