//! Wire types for the Factbus broker protocol

use serde::Deserialize;

/// Broker reply to a subscribe request
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SubscribeResponse {
    /// Server-issued id for the new subscription cursor
    pub subscription_id: String,

    /// Absolute URL of the subscription resource. Informational; the client
    /// builds its own paths from the topic name and subscription id.
    #[serde(default)]
    pub retrieval_url: Option<String>,
}
