//! Subscription polling stream
//!
//! A [`Subscription`] owns one server-side cursor over a topic's fact
//! stream. Every [`next`](Subscription::next) call polls the broker until a
//! fact arrives, waiting between empty polls with bounded exponential
//! backoff. The cursor advances server-side on every delivered fact, so the
//! sequence is not restartable.

use std::cmp;
use std::sync::Arc;
use std::time::Duration;

use futures::Stream;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::debug;

use crate::config::FactbusConfig;
use crate::error::{FactbusError, Result};
use crate::paths;
use crate::transport::HttpTransport;

/// Decode capability injected at subscribe time. Typed subscriptions parse
/// JSON; raw subscriptions pass the body through unchanged.
pub(crate) type DecodeFn<T> = Box<dyn Fn(&str) -> Result<T> + Send + Sync>;

/// An active subscription to a topic
pub struct Subscription<T> {
    topic: String,
    subscription_id: String,
    transport: Arc<HttpTransport>,
    decode: DecodeFn<T>,
    poll_delay: Duration,
    max_poll_delay: Duration,
    cancel_tx: Arc<watch::Sender<bool>>,
    cancel_rx: watch::Receiver<bool>,
}

/// Cancels a [`Subscription`] from another task.
///
/// Cancellation is cooperative: an in-flight request is not aborted, but a
/// sleeping or subsequent [`Subscription::next`] call returns
/// [`FactbusError::Cancelled`].
#[derive(Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    /// Cancel the subscription this handle was taken from
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

impl<T> Subscription<T> {
    pub(crate) fn new(
        transport: Arc<HttpTransport>,
        topic: String,
        subscription_id: String,
        decode: DecodeFn<T>,
        config: &FactbusConfig,
    ) -> Self {
        let (cancel_tx, cancel_rx) = watch::channel(false);

        Self {
            topic,
            subscription_id,
            transport,
            decode,
            poll_delay: config.poll_delay,
            max_poll_delay: config.max_poll_delay,
            cancel_tx: Arc::new(cancel_tx),
            cancel_rx,
        }
    }

    /// Get the topic this subscription consumes from
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Get the server-issued subscription id
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Get a handle that cancels this subscription
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            tx: self.cancel_tx.clone(),
        }
    }

    /// Pull the next fact from the subscription.
    ///
    /// Polls the broker until it answers with a fact. A 204 No Content reply
    /// is not an error; the poll is retried after the configured delay, which
    /// doubles on every consecutive empty reply up to the configured maximum
    /// and resets on the next call. Transport and decode failures propagate
    /// immediately and are the expected way a consuming loop terminates.
    pub async fn next(&mut self) -> Result<T> {
        let mut delay = self.poll_delay;

        loop {
            if *self.cancel_rx.borrow() {
                return Err(FactbusError::Cancelled);
            }

            let path = paths::next_fact(&self.topic, &self.subscription_id);
            let response = self.transport.get(&path).await?;

            match response.body {
                Some(body) => return (self.decode)(&body),
                None => {
                    debug!(
                        topic = %self.topic,
                        delay_ms = delay.as_millis() as u64,
                        "no fact available"
                    );

                    if !delay.is_zero() {
                        // Wake early if the subscription is cancelled mid-wait;
                        // the top of the loop turns that into Err(Cancelled).
                        tokio::select! {
                            _ = sleep(delay) => {}
                            _ = self.cancel_rx.changed() => {}
                        }
                    }

                    delay = next_delay(delay, self.max_poll_delay);
                }
            }
        }
    }

    /// Convert the subscription into an infinite stream of facts.
    ///
    /// The stream yields `Ok` facts until the first error (transport failure
    /// or cancellation), yields that error once, then ends.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        futures::stream::unfold(Some(self), |state| async move {
            let mut subscription = state?;
            match subscription.next().await {
                Ok(fact) => Some((Ok(fact), Some(subscription))),
                Err(err) => Some((Err(err), None)),
            }
        })
    }
}

fn next_delay(current: Duration, max: Duration) -> Duration {
    cmp::min(current.saturating_mul(2), max)
}
