//! Classification of lines received from the server.
//!
//! A client receive loop only needs to tell three kinds of line apart: idle
//! probes that must be answered, chat messages, and everything else.
//! [`Inbound::parse`] maps a single line onto that closed set so the caller
//! can `match` instead of testing patterns ad hoc.

use std::sync::OnceLock;

use regex::Regex;

use crate::line::trim_reply;

fn probe_regex() -> &'static Regex {
    static PROBE: OnceLock<Regex> = OnceLock::new();
    PROBE.get_or_init(|| Regex::new(r"^PING :([0-9A-Za-z_.]+)$").expect("valid probe regex"))
}

fn privmsg_regex() -> &'static Regex {
    static PRIVMSG: OnceLock<Regex> = OnceLock::new();
    PRIVMSG.get_or_init(|| {
        Regex::new(r"^:(\S+) PRIVMSG (\S+) :(.*)$").expect("valid privmsg regex")
    })
}

/// A classified inbound line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inbound {
    /// `PING :<token>`; the token must be echoed back in a `PONG`.
    Probe(String),
    /// `:<source> PRIVMSG <target> :<body>`
    ChannelMessage {
        /// Message prefix, usually `nick!user@host`.
        source: String,
        /// Channel or nickname the message was addressed to.
        target: String,
        /// Message text.
        body: String,
    },
    /// Anything else (numerics, notices, server chatter).
    Other(String),
}

impl Inbound {
    /// Classify a single line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Self {
        let line = trim_reply(line);

        if let Some(token) = probe_token(line) {
            return Inbound::Probe(token.to_string());
        }

        if let Some(caps) = privmsg_regex().captures(line) {
            return Inbound::ChannelMessage {
                source: caps[1].to_string(),
                target: caps[2].to_string(),
                body: caps[3].to_string(),
            };
        }

        Inbound::Other(line.to_string())
    }

    /// Split a received chunk into lines and classify each non-empty one.
    pub fn parse_all(chunk: &str) -> Vec<Self> {
        chunk
            .lines()
            .map(trim_reply)
            .filter(|line| !line.is_empty())
            .map(Inbound::parse)
            .collect()
    }

    /// Nickname part of a chat message's source (`nick` in `nick!user@host`).
    pub fn sender_nick(&self) -> Option<&str> {
        match self {
            Inbound::ChannelMessage { source, .. } => {
                Some(source.split_once('!').map_or(source.as_str(), |(nick, _)| nick))
            }
            _ => None,
        }
    }
}

/// Extract the token from a `PING :<token>` line.
///
/// The token may only contain word characters and dots; any other line
/// (including a `PING` with an unusual token) yields `None`.
pub fn probe_token(line: &str) -> Option<&str> {
    probe_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_is_detected() {
        assert_eq!(
            Inbound::parse("PING :irc.example.org"),
            Inbound::Probe("irc.example.org".to_string())
        );
        assert_eq!(probe_token("PING :irc.example.org"), Some("irc.example.org"));
    }

    #[test]
    fn test_probe_with_crlf() {
        assert_eq!(
            Inbound::parse("PING :tok_1.2\r\n"),
            Inbound::Probe("tok_1.2".to_string())
        );
    }

    #[test]
    fn test_probe_requires_exact_form() {
        assert_eq!(probe_token("PING irc.example.org"), None);
        assert_eq!(probe_token(":srv PING :irc.example.org"), None);
        assert_eq!(probe_token("PING :bad-token"), None);
        assert_eq!(probe_token("PING :"), None);
        assert!(matches!(Inbound::parse("PING :bad-token"), Inbound::Other(_)));
    }

    #[test]
    fn test_channel_message() {
        let msg = Inbound::parse(":kyle!k@host PRIVMSG #rust :hello there");
        assert_eq!(
            msg,
            Inbound::ChannelMessage {
                source: "kyle!k@host".to_string(),
                target: "#rust".to_string(),
                body: "hello there".to_string(),
            }
        );
        assert_eq!(msg.sender_nick(), Some("kyle"));
    }

    #[test]
    fn test_sender_nick_without_userhost() {
        let msg = Inbound::parse(":irc.example.org PRIVMSG me :notice-ish");
        assert_eq!(msg.sender_nick(), Some("irc.example.org"));
        assert_eq!(Inbound::Other("x".into()).sender_nick(), None);
    }

    #[test]
    fn test_other_lines() {
        assert_eq!(
            Inbound::parse(":irc.example.org 001 me :Welcome"),
            Inbound::Other(":irc.example.org 001 me :Welcome".to_string())
        );
    }

    #[test]
    fn test_parse_all_splits_chunk() {
        let chunk = ":srv 001 me :Welcome\r\nPING :srv.example\r\n\r\n:a!b@c PRIVMSG #x :yo\r\n";
        let parsed = Inbound::parse_all(chunk);
        assert_eq!(parsed.len(), 3);
        assert!(matches!(parsed[0], Inbound::Other(_)));
        assert_eq!(parsed[1], Inbound::Probe("srv.example".to_string()));
        assert!(matches!(parsed[2], Inbound::ChannelMessage { .. }));
    }

    #[test]
    fn test_parse_all_empty() {
        assert!(Inbound::parse_all("").is_empty());
        assert!(Inbound::parse_all("\r\n\0").is_empty());
    }
}
