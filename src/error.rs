//! Unified error handling for slirc-client.
//!
//! Every fallible session operation returns a [`SessionError`]. Handshake
//! failures are wrapped with the [`HandshakeStep`] that failed so callers
//! and logs can tell a dead dial from a rejected JOIN.

use std::fmt;
use std::io;
use std::net::SocketAddr;
use thiserror::Error;

// ============================================================================
// Handshake steps
// ============================================================================

/// The ordered steps of [`Session::connect`](crate::Session::connect).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandshakeStep {
    Resolve,
    Dial,
    Banner,
    Nick,
    User,
    Registration,
    Identify,
    Join(String),
}

impl fmt::Display for HandshakeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolve => f.write_str("resolve"),
            Self::Dial => f.write_str("dial"),
            Self::Banner => f.write_str("banner read"),
            Self::Nick => f.write_str("NICK"),
            Self::User => f.write_str("USER"),
            Self::Registration => f.write_str("registration read"),
            Self::Identify => f.write_str("identify"),
            Self::Join(channel) => write!(f, "JOIN {channel}"),
        }
    }
}

// ============================================================================
// Session errors
// ============================================================================

/// Errors that can occur on a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("couldn't resolve {addr}: {source}")]
    Resolve {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("no IPv4 address found for {0}")]
    NoIpv4Address(String),

    #[error("couldn't dial out to {addr}: {source}")]
    Dial {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("read error: {0}")]
    Read(#[source] io::Error),

    #[error("write error: {0}")]
    Write(#[source] io::Error),

    #[error("session is not connected")]
    NotConnected,

    #[error("session is already connected")]
    AlreadyConnected,

    #[error("session has been terminated")]
    Terminated,

    #[error("connection closed by peer")]
    Closed,

    #[error("handshake failed at {step}: {source}")]
    Handshake {
        step: HandshakeStep,
        #[source]
        source: Box<SessionError>,
    },
}

impl SessionError {
    /// Wrap this error with the handshake step it occurred in.
    pub fn during(self, step: HandshakeStep) -> Self {
        Self::Handshake {
            step,
            source: Box::new(self),
        }
    }

    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Resolve { .. } => "resolve",
            Self::NoIpv4Address(_) => "no_ipv4_address",
            Self::Dial { .. } => "dial",
            Self::Read(_) => "read",
            Self::Write(_) => "write",
            Self::NotConnected => "not_connected",
            Self::AlreadyConnected => "already_connected",
            Self::Terminated => "terminated",
            Self::Closed => "closed",
            Self::Handshake { .. } => "handshake",
        }
    }

    /// The failed handshake step, if this is a handshake error.
    pub fn handshake_step(&self) -> Option<&HandshakeStep> {
        match self {
            Self::Handshake { step, .. } => Some(step),
            _ => None,
        }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
