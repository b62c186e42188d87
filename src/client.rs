//! Factbus client implementation

use std::sync::Arc;

use futures::Stream;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::codec;
use crate::config::FactbusConfig;
use crate::error::{FactbusError, Result};
use crate::messages::SubscribeResponse;
use crate::paths;
use crate::subscription::{DecodeFn, Subscription};
use crate::transport::HttpTransport;

/// Factbus HTTP client
///
/// Publishes facts to topics and opens subscriptions over the broker's REST
/// API. Configuration is immutable after construction; independent
/// subscriptions share the underlying transport and may be driven
/// concurrently from separate tasks.
pub struct FactbusClient {
    transport: Arc<HttpTransport>,
    config: FactbusConfig,
}

impl FactbusClient {
    /// Create a new Factbus client with the given configuration
    pub fn new(config: FactbusConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self { transport, config })
    }

    /// Subscribe to a topic, decoding each fact as JSON into `T`
    pub async fn subscribe<T>(&self, topic: &str) -> Result<Subscription<T>>
    where
        T: DeserializeOwned + 'static,
    {
        self.subscribe_with(topic, Box::new(|body| codec::decode(body)))
            .await
    }

    /// Subscribe to a topic, yielding each fact body as raw text
    pub async fn subscribe_raw(&self, topic: &str) -> Result<Subscription<String>> {
        self.subscribe_with(topic, Box::new(|body| Ok(body.to_string())))
            .await
    }

    /// Subscribe to a topic and consume it as a stream of facts.
    ///
    /// Convenience for [`subscribe`](Self::subscribe) followed by
    /// [`Subscription::into_stream`]; use `subscribe` directly to keep the
    /// subscription id or a [`CancelHandle`](crate::CancelHandle).
    pub async fn facts<T>(&self, topic: &str) -> Result<impl Stream<Item = Result<T>>>
    where
        T: DeserializeOwned + 'static,
    {
        Ok(self.subscribe::<T>(topic).await?.into_stream())
    }

    /// Publish a fact to a topic as JSON.
    ///
    /// Fire-and-forget: the response body is discarded and no retries are
    /// attempted. A `String` fact is published as a JSON string (quoted);
    /// use [`publish_raw`](Self::publish_raw) to send text verbatim.
    pub async fn publish<T: Serialize>(&self, topic: &str, fact: &T) -> Result<()> {
        paths::validate_topic(topic)?;

        let body = codec::encode(fact)?;
        self.transport.post(&paths::facts(topic), body).await?;
        Ok(())
    }

    /// Publish a pre-encoded or plain-text fact verbatim
    pub async fn publish_raw(&self, topic: &str, fact: &str) -> Result<()> {
        paths::validate_topic(topic)?;

        self.transport
            .post(&paths::facts(topic), fact.to_string())
            .await?;
        Ok(())
    }

    async fn subscribe_with<T>(&self, topic: &str, decode: DecodeFn<T>) -> Result<Subscription<T>> {
        paths::validate_topic(topic)?;

        let response = self
            .transport
            .post(&paths::subscriptions(topic), String::new())
            .await?;

        let body = response.body.ok_or_else(|| {
            FactbusError::Protocol("no content in reply to a subscribe request".to_string())
        })?;

        let reply: SubscribeResponse = codec::decode(&body)?;
        paths::validate_subscription_id(&reply.subscription_id)?;

        debug!(
            topic,
            subscription_id = %reply.subscription_id,
            status = response.status.as_u16(),
            "subscribed"
        );

        Ok(Subscription::new(
            self.transport.clone(),
            topic.to_string(),
            reply.subscription_id,
            decode,
            &self.config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> FactbusClient {
        // Unroutable address: these tests must fail before any request
        FactbusClient::new(FactbusConfig::new("http://127.0.0.1:1")).unwrap()
    }

    #[tokio::test]
    async fn test_publish_to_empty_topic_fails_fast() {
        let result = client().publish("", &serde_json::json!({"n": 1})).await;
        assert!(matches!(result, Err(FactbusError::InvalidTopic(_))));
    }

    #[tokio::test]
    async fn test_publish_raw_to_invalid_topic_fails_fast() {
        let result = client().publish_raw("a/b", "fact").await;
        assert!(matches!(result, Err(FactbusError::InvalidTopic(_))));
    }

    #[tokio::test]
    async fn test_subscribe_to_empty_topic_fails_fast() {
        let result = client().subscribe::<serde_json::Value>("").await;
        assert!(matches!(result, Err(FactbusError::InvalidTopic(_))));
    }

    #[tokio::test]
    async fn test_subscribe_raw_to_invalid_topic_fails_fast() {
        let result = client().subscribe_raw("a b").await;
        assert!(matches!(result, Err(FactbusError::InvalidTopic(_))));
    }

    #[tokio::test]
    async fn test_facts_to_invalid_topic_fails_fast() {
        let result = client().facts::<serde_json::Value>("a?b").await;
        assert!(matches!(result, Err(FactbusError::InvalidTopic(_))));
    }
}
