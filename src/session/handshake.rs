//! Registration handshake.
//!
//! Strictly sequential: every step must succeed before the next one runs and
//! no step is retried. A failure after the stream has been opened tears the
//! session down.

use super::{READ_CHUNK, Session, SessionState};
use crate::error::{HandshakeStep, SessionError, SessionResult};
use crate::telemetry::spans;
use slirc_proto::Command;
use std::net::SocketAddr;
use tokio::net::{TcpStream, lookup_host};
use tracing::{Instrument, error, info, warn};

impl Session {
    /// Connect, register, identify and join the configured channels.
    pub async fn connect(&mut self) -> SessionResult<()> {
        let span = spans::session(&self.config.server, &self.config.nick);
        self.handshake().instrument(span).await
    }

    async fn handshake(&mut self) -> SessionResult<()> {
        match self.state {
            SessionState::Disconnected => {}
            SessionState::Terminated => return Err(SessionError::Terminated),
            SessionState::Registering | SessionState::Connected => {
                return Err(SessionError::AlreadyConnected);
            }
        }

        let addr = self.resolve().await.map_err(|e| {
            error!(address = %self.config.address(), error = %e, "couldn't resolve server");
            e.during(HandshakeStep::Resolve)
        })?;

        info!(%addr, "connecting");
        let stream = TcpStream::connect(addr).await.map_err(|source| {
            error!(%addr, error = %source, "couldn't dial out");
            SessionError::Dial { addr, source }.during(HandshakeStep::Dial)
        })?;

        let (read_half, write_half) = stream.into_split();
        self.reader = Some(read_half);
        self.writer.attach(write_half).await;
        self.state = SessionState::Registering;

        if let Err(e) = self.register().await {
            error!(error = %e, "handshake failed");
            self.teardown().await;
            return Err(e);
        }

        self.state = SessionState::Connected;
        info!(channels = self.config.channels.len(), "connected");
        Ok(())
    }

    /// Resolve the configured `server:port` to its first IPv4 address.
    async fn resolve(&self) -> SessionResult<SocketAddr> {
        let addr = self.config.address();
        let mut addrs = lookup_host(addr.as_str())
            .await
            .map_err(|source| SessionError::Resolve {
                addr: addr.clone(),
                source,
            })?;
        addrs
            .find(SocketAddr::is_ipv4)
            .ok_or_else(|| SessionError::NoIpv4Address(addr.clone()))
    }

    async fn register(&mut self) -> SessionResult<()> {
        // Drain the greeting banner; a timeout just means there was none.
        let banner = self
            .receive(READ_CHUNK, false)
            .await
            .map_err(|e| e.during(HandshakeStep::Banner))?;
        if banner.is_closed() {
            return Err(SessionError::Closed.during(HandshakeStep::Banner));
        }

        info!(nick = %self.config.nick, "sending nick");
        self.send_command(&Command::NICK(self.config.nick.clone()))
            .await
            .map_err(|e| e.during(HandshakeStep::Nick))?;

        info!(user = %self.config.user_name, "sending user");
        self.send_command(&self.config.userline())
            .await
            .map_err(|e| e.during(HandshakeStep::User))?;

        let reply = self
            .receive(READ_CHUNK, true)
            .await
            .map_err(|e| e.during(HandshakeStep::Registration))?;
        if reply.is_closed() {
            return Err(SessionError::Closed.during(HandshakeStep::Registration));
        }

        self.identify()
            .await
            .map_err(|e| e.during(HandshakeStep::Identify))?;

        self.join_channels().await
    }

    /// Identify with NickServ when a password is configured.
    async fn identify(&self) -> SessionResult<()> {
        let Some(password) = self.config.password() else {
            return Ok(());
        };
        info!("identifying");
        self.send_command(&Command::identify(&self.config.user_name, password))
            .await
    }

    /// JOIN each channel in order and greet it. The first failed JOIN stops
    /// the loop; channels joined before it are left alone.
    async fn join_channels(&self) -> SessionResult<()> {
        info!("join channels");
        for channel in &self.config.channels {
            info!(%channel, "joining");
            self.send_command(&Command::JOIN(channel.clone()))
                .await
                .map_err(|e| {
                    error!(%channel, error = %e, "error joining channel");
                    e.during(HandshakeStep::Join(channel.clone()))
                })?;

            if let Err(e) = self.send_command(&Command::greeting(channel)).await {
                warn!(%channel, error = %e, "couldn't greet channel");
            }
        }
        Ok(())
    }
}
