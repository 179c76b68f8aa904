//! slircc - Straylight IRC client.
//!
//! Connects with the session described by a TOML config, answers PINGs,
//! logs channel traffic, and quits cleanly on Ctrl-C.

use anyhow::Context;
use slirc_client::{Inbound, READ_CHUNK, Received, Session, SessionConfig};
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "exiting");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "slircc.toml".to_string());

    let config = SessionConfig::load(&config_path)
        .with_context(|| format!("failed to load config from {config_path}"))?;

    info!(
        server = %config.server,
        port = config.port(),
        nick = %config.nick,
        "Starting slircc"
    );
    if config.reconnect {
        warn!("reconnect is set but not supported; the client exits when the connection drops");
    }

    let mut session = Session::new(config);
    session.connect().await.context("couldn't connect")?;

    let responder = session.responder();
    loop {
        let received = tokio::select! {
            received = session.receive(READ_CHUNK, true) => Some(received),
            _ = tokio::signal::ctrl_c() => None,
        };

        let chunk = match received {
            None => {
                info!("interrupted, disconnecting");
                session.disconnect().await.context("disconnect failed")?;
                return Ok(());
            }
            Some(received) => match received.context("receive failed")? {
                Received::Closed(_) => return Ok(()),
                Received::Data(chunk) => chunk,
            },
        };

        for line in Inbound::parse_all(&chunk) {
            let sender = line.sender_nick().unwrap_or_default().to_string();
            match line {
                Inbound::Probe(token) => {
                    let responder = responder.clone();
                    tokio::spawn(async move {
                        if let Err(e) = responder.respond(&token).await {
                            warn!(%token, error = %e, "couldn't answer probe");
                        }
                    });
                }
                Inbound::ChannelMessage { source, target, body } => {
                    info!(%sender, %source, %target, %body, "message")
                }
                Inbound::Other(raw) => debug!(%raw, "server"),
            }
        }
    }
}
