//! Integration test common infrastructure.
//!
//! Provides a stub IRC server, the server side of its connections, and a
//! helper that takes a session through the handshake.

pub mod peer;
pub mod server;

#[allow(unused_imports)]
pub use peer::StubPeer;
#[allow(unused_imports)]
pub use server::{StubServer, config_for_port};

use slirc_client::Session;
use std::time::Duration;

/// Non-blocking read deadline used in tests.
pub const SHORT_TIMEOUT: Duration = Duration::from_millis(300);

/// Greeting banner sent right after accept.
pub const BANNER: &str = ":stub.test NOTICE * :*** Looking up your hostname";

/// Reply to the registration lines.
pub const WELCOME: &str = ":stub.test 001 x :Welcome to the stub network x";

/// Connect a session to a fresh stub server and consume the handshake.
#[allow(dead_code)]
pub async fn connected_session(channels: &[&str]) -> anyhow::Result<(Session, StubPeer)> {
    let server = StubServer::bind().await?;
    let config = server.config(channels, None)?;
    let joins = channels.len();

    let stub = tokio::spawn(async move {
        let mut peer = server.accept().await?;
        peer.send_raw(BANNER).await?;
        peer.expect_line().await?; // NICK
        peer.expect_line().await?; // USER
        peer.send_raw(WELCOME).await?;
        for _ in 0..joins * 2 {
            peer.expect_line().await?; // JOIN, PRIVMSG hello
        }
        anyhow::Ok(peer)
    });

    let mut session = Session::new(config).with_read_timeout(SHORT_TIMEOUT);
    session.connect().await?;
    let peer = stub.await??;
    Ok((session, peer))
}
