//! slirc-client - Straylight IRC client.
//!
//! A minimal IRC client session over TCP: registration handshake, channel
//! joins, CRLF line transport, and a PING responder that can run alongside
//! the caller's receive loop.
//!
//! ```no_run
//! use slirc_client::{Inbound, Received, Session, SessionConfig, READ_CHUNK};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = SessionConfig::load("slircc.toml")?;
//! let mut session = Session::new(config);
//! session.connect().await?;
//!
//! let responder = session.responder();
//! while let Received::Data(chunk) = session.receive(READ_CHUNK, true).await? {
//!     for line in Inbound::parse_all(&chunk) {
//!         if let Inbound::Probe(token) = line {
//!             let responder = responder.clone();
//!             tokio::spawn(async move { responder.respond(&token).await });
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;

pub use config::{ConfigError, SessionConfig, ValidationError};
pub use error::{HandshakeStep, SessionError, SessionResult};
pub use session::{
    LineWriter, ProbeCounter, ProbeResponder, READ_ALL, READ_CHUNK, READ_TIMEOUT, Received,
    Session, SessionState,
};
pub use slirc_proto::{Command, Inbound};
