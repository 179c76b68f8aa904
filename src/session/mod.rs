//! Session - a single client connection to an IRC server.
//!
//! ```text
//! Session::new(config)
//!    ↓
//! connect(): resolve → dial → banner → NICK → USER → registration read
//!            → identify (optional) → JOIN + hello per channel
//!    ↓
//! caller loop: receive() ──▶ Inbound::parse_all ──▶ Probe → ProbeResponder (spawned)
//!    ↓
//! disconnect(): QUIT, stream torn down, Terminated
//! ```
//!
//! The session never spawns tasks. Concurrency is up to the caller: the read
//! half is owned by the session and driven by `receive`, while the write half
//! sits behind a cloneable [`LineWriter`] so probe replies can be sent from
//! other tasks without waiting for the next read to complete.

mod handshake;
mod probe;
mod transport;

pub use probe::{ProbeCounter, ProbeResponder};
pub use transport::{LineWriter, Received};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use std::time::Duration;
use tokio::net::tcp::OwnedReadHalf;
use tracing::{debug, info, warn};

/// Buffer size for a single read.
pub const READ_CHUNK: usize = 4096;

/// Pass as `max_bytes` to [`Session::receive`] to read until the peer closes.
pub const READ_ALL: usize = 0;

/// Deadline for a non-blocking [`Session::receive`].
pub const READ_TIMEOUT: Duration = Duration::from_secs(3);

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Created, no stream yet.
    #[default]
    Disconnected,
    /// Stream open, handshake in progress.
    Registering,
    /// Handshake complete, channels joined.
    Connected,
    /// Stream torn down. Never reused.
    Terminated,
}

/// An IRC client session.
pub struct Session {
    config: SessionConfig,
    state: SessionState,
    reader: Option<OwnedReadHalf>,
    writer: LineWriter,
    probes: ProbeCounter,
    read_timeout: Duration,
}

impl Session {
    /// Create a session from a validated configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: SessionState::Disconnected,
            reader: None,
            writer: LineWriter::detached(),
            probes: ProbeCounter::default(),
            read_timeout: READ_TIMEOUT,
        }
    }

    /// Override the deadline used by non-blocking reads.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// A handle for sending lines from other tasks.
    pub fn writer(&self) -> LineWriter {
        self.writer.clone()
    }

    /// A probe responder sharing this session's writer and counter.
    pub fn responder(&self) -> ProbeResponder {
        ProbeResponder::new(self.writer.clone(), self.probes.clone())
    }

    /// Number of probes answered so far.
    pub fn probe_count(&self) -> u64 {
        self.probes.get()
    }

    /// Answer an idle probe in-line. See [`ProbeResponder::respond`].
    pub async fn respond_to_probe(&self, token: &str) -> SessionResult<u64> {
        self.responder().respond(token).await
    }

    /// Send `QUIT` and tear the connection down.
    ///
    /// The teardown happens even when the QUIT write fails; the write error
    /// is still returned. Disconnecting a terminated session is a no-op.
    pub async fn disconnect(&mut self) -> SessionResult<()> {
        match self.state {
            SessionState::Disconnected => Err(SessionError::NotConnected),
            SessionState::Terminated => {
                debug!("disconnect on terminated session ignored");
                Ok(())
            }
            SessionState::Registering | SessionState::Connected => self.terminate().await,
        }
    }

    async fn terminate(&mut self) -> SessionResult<()> {
        let quit = self.writer.send_command(&slirc_proto::Command::QUIT).await;
        if let Err(e) = &quit {
            warn!(error = %e, "disconnect error");
        }
        self.teardown().await;
        quit
    }

    /// Drop both halves of the stream and mark the session terminated.
    async fn teardown(&mut self) {
        if self.state == SessionState::Terminated {
            return;
        }
        self.writer.close().await;
        self.reader = None;
        self.state = SessionState::Terminated;
        info!(server = %self.config.server, "session terminated");
    }
}
