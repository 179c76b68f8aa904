//! Telemetry utilities.

/// Standardized span constructors for client observability.
pub mod spans {
    use tracing::{Span, info_span};

    /// Create a span for a session's connect/handshake.
    pub fn session(server: &str, nick: &str) -> Span {
        info_span!("session", server = %server, nick = %nick)
    }
}
