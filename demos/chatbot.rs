//! Chat bot demo: greets everyone who posts to the chat topic.
//!
//! Run against a broker:
//!
//! ```sh
//! cargo run --example chatbot -- http://localhost:8080
//! ```

use factbus_client::{FactbusClient, FactbusConfig, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CHAT_TOPIC: &str = "chat";
const NAME: &str = "chat-bot";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    who: String,
    says: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    let client = FactbusClient::new(FactbusConfig::new(base_url))?;
    let mut subscription = client.subscribe::<ChatMessage>(CHAT_TOPIC).await?;
    info!(
        topic = CHAT_TOPIC,
        subscription_id = subscription.subscription_id(),
        "listening"
    );

    loop {
        let message = subscription.next().await?;
        if message.who == NAME {
            continue;
        }

        let reply = ChatMessage {
            who: NAME.to_string(),
            says: format!("Hello {}, you said '{}'", message.who, message.says),
        };
        client.publish(CHAT_TOPIC, &reply).await?;
    }
}
