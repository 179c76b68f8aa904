//! Server side of a stub connection.
//!
//! Reads what the client sent line by line and writes scripted replies.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

/// How long to wait for the client before failing a test.
const PEER_TIMEOUT: Duration = Duration::from_secs(5);

/// One accepted client connection.
pub struct StubPeer {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl StubPeer {
    pub fn new(stream: TcpStream) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer: write_half,
        }
    }

    /// Send a raw line, adding CRLF if missing. The line goes out in one
    /// write so the client never sees a bare terminator in a later read.
    pub async fn send_raw(&mut self, line: &str) -> anyhow::Result<()> {
        let mut framed = line.to_string();
        if !framed.ends_with("\r\n") {
            framed.push_str("\r\n");
        }
        self.send_bytes(framed.as_bytes()).await
    }

    /// Write bytes exactly as given.
    pub async fn send_bytes(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        self.writer.write_all(bytes).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Read one line from the client, terminator included.
    pub async fn read_raw_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(PEER_TIMEOUT, self.reader.read_line(&mut line)).await??;
        if n == 0 {
            anyhow::bail!("client closed the connection");
        }
        Ok(line)
    }

    /// Read one line from the client, asserting CRLF framing and stripping it.
    pub async fn expect_line(&mut self) -> anyhow::Result<String> {
        let line = self.read_raw_line().await?;
        match line.strip_suffix("\r\n") {
            Some(stripped) => Ok(stripped.to_string()),
            None => anyhow::bail!("line not CRLF-terminated: {:?}", line),
        }
    }

    /// Read everything until the client closes, split into lines.
    pub async fn drain_lines(&mut self) -> anyhow::Result<Vec<String>> {
        let mut rest = String::new();
        timeout(PEER_TIMEOUT, self.reader.read_to_string(&mut rest)).await??;
        Ok(rest.lines().map(str::to_string).collect())
    }

    /// Half-close: the client sees end of stream, but we can still read.
    pub async fn shutdown_write(&mut self) -> anyhow::Result<()> {
        self.writer.shutdown().await?;
        Ok(())
    }
}
