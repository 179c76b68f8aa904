//! In-process stub IRC server.
//!
//! Binds an ephemeral loopback port so each test gets its own server and
//! scripts the server side of the conversation through [`StubPeer`].

use super::peer::StubPeer;
use slirc_client::SessionConfig;
use tokio::net::TcpListener;

/// A stub server listening on 127.0.0.1.
pub struct StubServer {
    listener: TcpListener,
    port: u16,
}

impl StubServer {
    /// Bind a stub server on a random free port.
    pub async fn bind() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        Ok(Self { listener, port })
    }

    /// Get the server port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Accept the next client connection.
    pub async fn accept(&self) -> anyhow::Result<StubPeer> {
        let (stream, _) = self.listener.accept().await?;
        Ok(StubPeer::new(stream))
    }

    /// Session configuration pointing at this server.
    pub fn config(&self, channels: &[&str], password: Option<&str>) -> anyhow::Result<SessionConfig> {
        config_for_port(self.port, channels, password)
    }
}

/// Session configuration for `127.0.0.1:<port>` with nick `x` and user `u`.
pub fn config_for_port(
    port: u16,
    channels: &[&str],
    password: Option<&str>,
) -> anyhow::Result<SessionConfig> {
    let channels = channels
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let mut toml = format!(
        r#"
server = "127.0.0.1"
port = {port}
nick = "x"
sys = "sys"
user = "u"
channels = [{channels}]
"#
    );
    if let Some(password) = password {
        toml.push_str(&format!("password = \"{password}\"\n"));
    }
    Ok(SessionConfig::from_toml_str(&toml)?)
}
