//! Outgoing IRC commands.
//!
//! Only the handful of commands a basic client emits are modelled here.
//! [`Command`] implements [`Display`](std::fmt::Display), producing the line
//! exactly as it goes on the wire, without the CRLF terminator (see
//! [`crate::line::frame`]).

use std::fmt;

/// Nickname of the services account that handles `IDENTIFY`.
pub const NICKSERV: &str = "NickServ";

/// Message sent to every channel right after joining it.
pub const GREETING: &str = "hello";

/// An IRC command sent by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Command {
    // === Connection Registration ===
    /// `NICK nickname`
    NICK(String),
    /// `USER user host system realname`
    ///
    /// The real name is written verbatim as the last word(s) of the line.
    USER {
        /// Username (ident).
        user: String,
        /// Host name field.
        host: String,
        /// System (server) name field.
        system: String,
        /// Real name / GECOS.
        realname: String,
    },
    /// `QUIT`
    QUIT,

    // === Channel Operations ===
    /// `JOIN channel`
    JOIN(String),

    // === Messaging ===
    /// `PRIVMSG target :text`
    PRIVMSG(String, String),

    // === Keepalive ===
    /// `PONG token`
    PONG(String),
}

impl Command {
    /// Build the NickServ identification message for `user` and `password`.
    pub fn identify(user: &str, password: &str) -> Self {
        Command::PRIVMSG(NICKSERV.to_string(), format!("IDENTIFY {user} {password}"))
    }

    /// Build the greeting sent to a freshly joined channel.
    pub fn greeting(channel: &str) -> Self {
        Command::PRIVMSG(channel.to_string(), GREETING.to_string())
    }

    /// The command verb, e.g. `"PRIVMSG"`.
    pub fn name(&self) -> &'static str {
        match self {
            Command::NICK(_) => "NICK",
            Command::USER { .. } => "USER",
            Command::QUIT => "QUIT",
            Command::JOIN(_) => "JOIN",
            Command::PRIVMSG(..) => "PRIVMSG",
            Command::PONG(_) => "PONG",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::NICK(n) => write!(f, "NICK {n}"),
            Command::USER {
                user,
                host,
                system,
                realname,
            } => write!(f, "USER {user} {host} {system} {realname}"),
            Command::QUIT => f.write_str("QUIT"),
            Command::JOIN(c) => write!(f, "JOIN {c}"),
            Command::PRIVMSG(t, m) => write!(f, "PRIVMSG {t} :{m}"),
            Command::PONG(t) => write!(f, "PONG {t}"),
        }
    }
}
