//! # slirc-proto
//!
//! Protocol helpers for the slirc IRC client: outgoing command
//! serialization, CRLF line framing, and classification of inbound lines.
//!
//! The crate performs no I/O; the session layer owns the socket.
//!
//! ## Quick Start
//!
//! ```rust
//! use slirc_proto::{frame, Command, Inbound};
//!
//! let join = Command::JOIN("#rust".to_string());
//! assert_eq!(&frame(&join.to_string())[..], b"JOIN #rust\r\n");
//!
//! match Inbound::parse("PING :irc.example.org") {
//!     Inbound::Probe(token) => assert_eq!(token, "irc.example.org"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod inbound;
pub mod line;

pub use self::command::{Command, GREETING, NICKSERV};
pub use self::inbound::{probe_token, Inbound};
pub use self::line::{decode_reply, frame, is_trim_char, trim_reply, LINE_TERMINATOR};
