//! Factbus Rust Client
//!
//! An HTTP client for the Factbus fact broker: publish typed facts to named
//! topics and consume them through a subscribe-then-poll subscription stream.
//! The broker's stateless request/response API is surfaced as a pull-based
//! sequence of decoded facts.
//!
//! # Example
//!
//! ```no_run
//! use factbus_client::{FactbusClient, FactbusConfig};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Reading {
//!     sensor: String,
//!     value: f64,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FactbusConfig::new("https://factbus.example.com");
//!     let client = FactbusClient::new(config)?;
//!
//!     // Publish a fact
//!     let reading = Reading { sensor: "t-1".into(), value: 21.5 };
//!     client.publish("sensor.readings", &reading).await?;
//!
//!     // Consume facts until the broker fails or the caller stops pulling
//!     let mut subscription = client.subscribe::<Reading>("sensor.readings").await?;
//!     loop {
//!         match subscription.next().await {
//!             Ok(reading) => println!("{}: {}", reading.sensor, reading.value),
//!             Err(err) => {
//!                 eprintln!("subscription ended: {err}");
//!                 break;
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod codec;
mod config;
mod error;
mod messages;
mod paths;
mod subscription;
mod transport;

pub use client::FactbusClient;
pub use config::FactbusConfig;
pub use error::{FactbusError, Result};
pub use messages::SubscribeResponse;
pub use subscription::{CancelHandle, Subscription};
