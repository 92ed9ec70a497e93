//! In-memory event publisher for tests/dev.

use std::sync::{Mutex, mpsc};

use crate::publisher::{EventPublisher, Published, Subscription};

#[derive(Debug)]
pub enum InMemoryPublishError {
    /// Publish failed due to internal lock poisoning.
    Poisoned,
}

/// In-memory broadcast publisher.
///
/// - No IO / no async
/// - Best-effort fan-out
/// - At-least-once acceptable (subscribers must be idempotent)
#[derive(Debug)]
pub struct InMemoryEventPublisher<M> {
    subscribers: Mutex<Vec<mpsc::Sender<Published<M>>>>,
}

impl<M> InMemoryEventPublisher<M> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M> Default for InMemoryEventPublisher<M> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<M> EventPublisher<M> for InMemoryEventPublisher<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryPublishError;

    fn publish(&self, topic: &str, message: M) -> Result<(), Self::Error> {
        let mut subs = self
            .subscribers
            .lock()
            .map_err(|_| InMemoryPublishError::Poisoned)?;

        let published = Published {
            topic: topic.to_string(),
            message,
        };

        // Drop any dead subscribers while publishing.
        subs.retain(|tx| tx.send(published.clone()).is_ok());

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        // If the lock is poisoned, we still return a subscription;
        // it just won't receive messages until the process restarts.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_each_receive_published_messages() {
        let publisher: InMemoryEventPublisher<u32> = InMemoryEventPublisher::new();
        let first = publisher.subscribe();
        let second = publisher.subscribe();

        publisher.publish("catalog.test", 7).unwrap();

        let got = first.try_recv().unwrap();
        assert_eq!(got.topic, "catalog.test");
        assert_eq!(got.message, 7);

        let got = second.try_recv().unwrap();
        assert_eq!(got.message, 7);
    }

    #[test]
    fn dropped_subscribers_do_not_block_publishing() {
        let publisher: InMemoryEventPublisher<u32> = InMemoryEventPublisher::new();
        drop(publisher.subscribe());

        publisher.publish("catalog.test", 1).unwrap();

        let live = publisher.subscribe();
        publisher.publish("catalog.test", 2).unwrap();
        assert_eq!(live.try_recv().unwrap().message, 2);
    }

    #[test]
    fn subscription_only_sees_messages_after_subscribe() {
        let publisher: InMemoryEventPublisher<u32> = InMemoryEventPublisher::new();
        publisher.publish("catalog.test", 1).unwrap();

        let sub = publisher.subscribe();
        assert!(sub.try_recv().is_err());
    }
}
