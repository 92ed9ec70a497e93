//! Event publishing abstraction (mechanics only).
//!
//! The publisher is intentionally **lightweight** and makes minimal
//! assumptions:
//!
//! - **Transport-agnostic**: works with in-memory channels, Kafka, message
//!   queues, etc.
//! - **Fire-and-forget**: callers do not await acknowledgement; a failed
//!   publish never rolls back the state change that triggered it.
//! - **At-least-once delivery**: messages may be delivered multiple times;
//!   consumers must be idempotent.
//! - **No ordering guarantees**: two publishes from concurrent calls may
//!   arrive in either order.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A message together with the topic it was published on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published<M> {
    pub topic: String,
    pub message: M,
}

/// A subscription to the published message stream.
///
/// Each subscription gets a copy of every message published after it was
/// created (broadcast semantics). Designed for single-threaded consumption.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<Published<M>>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<Published<M>>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<Published<M>, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<Published<M>, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(
        &self,
        timeout: Duration,
    ) -> Result<Published<M>, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Topic-addressed, fire-and-forget event publisher.
///
/// `publish()` can fail (e.g. broker unreachable). Callers treat publication
/// as best-effort: failures are logged and otherwise discarded, and the
/// already-persisted state change stands.
pub trait EventPublisher<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, topic: &str, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, P> EventPublisher<M> for Arc<P>
where
    P: EventPublisher<M> + ?Sized,
{
    type Error = P::Error;

    fn publish(&self, topic: &str, message: M) -> Result<(), Self::Error> {
        (**self).publish(topic, message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
