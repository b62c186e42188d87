//! Broker endpoint paths
//!
//! Paths are built by plain interpolation, so names that carry
//! path-meaningful characters are rejected up front instead of being
//! escaped into a topic the caller never named.

use crate::error::{FactbusError, Result};

pub(crate) fn subscriptions(topic: &str) -> String {
    format!("/topics/{topic}/subscriptions")
}

pub(crate) fn next_fact(topic: &str, subscription_id: &str) -> String {
    format!("/topics/{topic}/subscriptions/{subscription_id}/next")
}

pub(crate) fn facts(topic: &str) -> String {
    format!("/topics/{topic}/facts")
}

/// Reject empty topic names and names that would change the request path
pub(crate) fn validate_topic(topic: &str) -> Result<()> {
    if topic.is_empty() || has_path_meaningful_chars(topic) {
        return Err(FactbusError::InvalidTopic(topic.to_string()));
    }
    Ok(())
}

/// Same character rules as topics, applied to server-issued ids so a
/// malformed subscribe reply cannot smuggle path segments into later requests
pub(crate) fn validate_subscription_id(subscription_id: &str) -> Result<()> {
    if subscription_id.is_empty() || has_path_meaningful_chars(subscription_id) {
        return Err(FactbusError::InvalidSubscriptionId(
            subscription_id.to_string(),
        ));
    }
    Ok(())
}

fn has_path_meaningful_chars(name: &str) -> bool {
    name.chars()
        .any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace())
}
