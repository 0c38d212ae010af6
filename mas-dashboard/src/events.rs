//! Opt-in notifications about result list modifications.
//!
//! Views that change results elsewhere (the assessment editor, the result overview)
//! publish a [`ResultListModified`] event; dashboards that want to stay current
//! subscribe explicitly and hold a [`Subscription`] whose lifetime is bounded by a
//! [`CancellationToken`].

use mas_core::models::ResultListModified;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio_util::sync::CancellationToken;
use tracing::{Level, event};

/// Publisher side of result list modification events.
///
/// Cloning yields another handle to the same channel.
#[derive(Clone, Debug)]
pub struct ResultListEvents {
    sender: broadcast::Sender<ResultListModified>,
}

impl ResultListEvents {
    /// Create a channel buffering up to `capacity` undelivered events per subscriber
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Announce a modification, returning the number of subscribers reached
    pub fn publish(&self, event: ResultListModified) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Subscribe until `token` is cancelled
    pub fn subscribe(&self, token: CancellationToken) -> Subscription {
        Subscription {
            receiver: self.sender.subscribe(),
            token,
        }
    }
}

impl Default for ResultListEvents {
    fn default() -> Self {
        Self::new(16)
    }
}

/// Receiving side of [`ResultListEvents`].
pub struct Subscription {
    receiver: broadcast::Receiver<ResultListModified>,
    token: CancellationToken,
}

impl Subscription {
    /// Wait for the next event.
    ///
    /// Resolves to `None` once the token is cancelled or every publisher is gone. If the
    /// subscriber fell behind, the missed events are collapsed into a single unscoped event.
    pub async fn next(&mut self) -> Option<ResultListModified> {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            received = self.receiver.recv() => match received {
                Ok(event) => Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    event!(Level::WARN, skipped, "result list subscription lagged");
                    Some(ResultListModified::default())
                }
                Err(RecvError::Closed) => None,
            },
        }
    }

    /// The token ending this subscription
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// End the subscription
    pub fn cancel(&self) {
        self.token.cancel();
    }
}
