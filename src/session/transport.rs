//! Line transport: framed writes and trimmed, optionally deadline-bound reads.

use super::{READ_ALL, Session, SessionState};
use crate::error::{SessionError, SessionResult};
use slirc_proto::{Command, decode_reply, frame};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{debug, info};

/// Result of a successful [`Session::receive`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Received {
    /// Trimmed text. Empty when a non-blocking read timed out.
    Data(String),
    /// The peer closed the stream; the session is now terminated. Carries
    /// whatever was drained before the close.
    Closed(String),
}

impl Received {
    pub fn text(&self) -> &str {
        match self {
            Received::Data(text) | Received::Closed(text) => text,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Received::Closed(_))
    }
}

/// Cloneable handle to the write half of a session's stream.
///
/// Writes are serialized by a mutex, so lines sent from concurrent tasks
/// never interleave. Once the session is torn down every handle reports
/// [`SessionError::NotConnected`].
#[derive(Clone, Debug)]
pub struct LineWriter {
    inner: Arc<Mutex<Option<OwnedWriteHalf>>>,
}

impl LineWriter {
    pub(super) fn detached() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    pub(super) async fn attach(&self, half: OwnedWriteHalf) {
        *self.inner.lock().await = Some(half);
    }

    pub(super) async fn close(&self) {
        if let Some(mut half) = self.inner.lock().await.take() {
            // Peer may already be gone.
            let _ = half.shutdown().await;
        }
    }

    /// Write `line` followed by CRLF in a single write. No retry.
    pub async fn send(&self, line: &str) -> SessionResult<()> {
        let bytes = frame(line);
        let mut guard = self.inner.lock().await;
        let half = guard.as_mut().ok_or(SessionError::NotConnected)?;
        half.write_all(&bytes).await.map_err(SessionError::Write)
    }

    pub async fn send_command(&self, command: &Command) -> SessionResult<()> {
        debug!(command = command.name(), "sending command");
        self.send(&command.to_string()).await
    }

    /// Send `PRIVMSG <target> :<body>`.
    pub async fn send_channel_message(&self, target: &str, body: &str) -> SessionResult<()> {
        self.send_command(&Command::PRIVMSG(target.to_string(), body.to_string()))
            .await
    }

    /// Alias for [`send_channel_message`](Self::send_channel_message).
    pub async fn reply(&self, sender: &str, body: &str) -> SessionResult<()> {
        self.send_channel_message(sender, body).await
    }
}

impl Session {
    /// Write `line` followed by CRLF.
    pub async fn send(&self, line: &str) -> SessionResult<()> {
        self.writer.send(line).await
    }

    pub async fn send_command(&self, command: &Command) -> SessionResult<()> {
        self.writer.send_command(command).await
    }

    /// Send `PRIVMSG <target> :<body>`.
    pub async fn send_channel_message(&self, target: &str, body: &str) -> SessionResult<()> {
        self.writer.send_channel_message(target, body).await
    }

    /// Alias for [`send_channel_message`](Self::send_channel_message).
    pub async fn reply(&self, sender: &str, body: &str) -> SessionResult<()> {
        self.writer.reply(sender, body).await
    }

    /// Read from the server.
    ///
    /// With `max_bytes == READ_ALL` this reads until the peer closes the
    /// stream; otherwise it performs one read of at most `max_bytes`. When
    /// `block` is false the read is bounded by the session's read timeout and
    /// a timeout yields `Received::Data` with whatever arrived (usually
    /// nothing). End of stream terminates the session and yields
    /// `Received::Closed`; later calls keep returning `Received::Closed`.
    pub async fn receive(&mut self, max_bytes: usize, block: bool) -> SessionResult<Received> {
        if self.state == SessionState::Terminated {
            return Ok(Received::Closed(String::new()));
        }
        let read_timeout = self.read_timeout;
        let reader = self.reader.as_mut().ok_or(SessionError::NotConnected)?;

        if max_bytes == READ_ALL {
            let mut buf = Vec::new();
            let read = reader.read_to_end(&mut buf);
            let outcome = if block {
                Some(read.await)
            } else {
                timeout(read_timeout, read).await.ok()
            };

            return match outcome {
                None => {
                    debug!(bytes = buf.len(), "timeout: resetting err");
                    Ok(Received::Data(decode_reply(&buf)))
                }
                Some(Ok(_)) => {
                    info!("connection closed.");
                    let text = decode_reply(&buf);
                    let _ = self.terminate().await;
                    Ok(Received::Closed(text))
                }
                Some(Err(e)) => Err(SessionError::Read(e)),
            };
        }

        let mut buf = vec![0u8; max_bytes];
        let read = reader.read(&mut buf);
        let outcome = if block {
            Some(read.await)
        } else {
            timeout(read_timeout, read).await.ok()
        };

        match outcome {
            None => {
                debug!("timeout: resetting err");
                Ok(Received::Data(String::new()))
            }
            Some(Ok(0)) => {
                info!("connection closed.");
                let _ = self.terminate().await;
                Ok(Received::Closed(String::new()))
            }
            Some(Ok(n)) => Ok(Received::Data(decode_reply(&buf[..n]))),
            Some(Err(e)) => Err(SessionError::Read(e)),
        }
    }
}
