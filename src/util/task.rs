// src/util/task.rs

//! Simulated-latency tasks.
//!
//! A [`DelayedTask`] sleeps for a fixed delay on the tokio runtime and then
//! delivers one message to a channel. The handle owns a [`CancellationToken`]:
//! cancelling it, or dropping the handle, guarantees the message is never sent,
//! so a pending result cannot land after its owner is gone.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub struct DelayedTask {
    label: &'static str,
    token: CancellationToken,
}

impl DelayedTask {
    /// Spawn a task that sends `message` on `sender` once `delay` has elapsed.
    pub fn spawn<T>(
        label: &'static str,
        delay: Duration,
        sender: mpsc::UnboundedSender<T>,
        message: T,
    ) -> Self
    where
        T: Send + 'static,
    {
        let token = CancellationToken::new();
        let child = token.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = child.cancelled() => {
                    tracing::debug!(task = label, "delayed task cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    // A cancel racing the timer still wins.
                    if child.is_cancelled() {
                        return;
                    }
                    if sender.send(message).is_err() {
                        tracing::debug!(task = label, "receiver gone, dropping result");
                    } else {
                        tracing::debug!(task = label, delay_ms = delay.as_millis() as u64, "delayed task fired");
                    }
                }
            }
        });

        Self { label, token }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
