//! Idle-probe (PING) responder.

use super::LineWriter;
use crate::error::SessionResult;
use slirc_proto::Command;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Count of probes answered, shared by every responder of one session.
#[derive(Clone, Debug, Default)]
pub struct ProbeCounter(Arc<AtomicU64>);

impl ProbeCounter {
    /// Increment and return the new value.
    pub fn increment(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Answers `PING :<token>` with `PONG <token>`.
///
/// Cheap to clone and `Send + 'static`, so each probe can be answered from
/// its own task while the receive loop keeps reading.
#[derive(Clone, Debug)]
pub struct ProbeResponder {
    writer: LineWriter,
    counter: ProbeCounter,
}

impl ProbeResponder {
    pub(super) fn new(writer: LineWriter, counter: ProbeCounter) -> Self {
        Self { writer, counter }
    }

    /// Reply to a probe. Performs exactly one write and no reads.
    ///
    /// Returns the probe count after this probe.
    pub async fn respond(&self, token: &str) -> SessionResult<u64> {
        let count = self.counter.increment();
        info!(count, token, "PONG");
        self.writer
            .send_command(&Command::PONG(token.to_string()))
            .await?;
        Ok(count)
    }

    pub fn count(&self) -> u64 {
        self.counter.get()
    }
}
