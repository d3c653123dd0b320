// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! TCP transport for the Neohub protocol.

use std::time::Duration;

use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::Mutex;

use crate::codec;
use crate::error::{ProtocolError, Result};
use crate::protocol::{Reply, Transport};

/// How the hub authenticates requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// Legacy API: no authentication.
    Plain,
    /// Token API: every request travels inside the hub's command-queue
    /// envelope carrying this token.
    Token(String),
}

/// Configuration for a TCP connection to a Neohub.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use neohub_lib::protocol::TcpConfig;
///
/// // Legacy hub on the default port
/// let config = TcpConfig::new("192.168.1.10");
///
/// // Token-enabled hub, per-request timeout, one held connection
/// let config = TcpConfig::new("192.168.1.10")
///     .with_token("api-token")
///     .with_timeout(Duration::from_secs(5))
///     .persistent(true);
/// ```
#[derive(Debug, Clone)]
pub struct TcpConfig {
    host: String,
    port: u16,
    auth: AuthMode,
    timeout: Option<Duration>,
    persistent: bool,
}

impl TcpConfig {
    /// Default Neohub port.
    pub const DEFAULT_PORT: u16 = 4242;

    /// Creates a new configuration for the specified host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            auth: AuthMode::Plain,
            timeout: None,
            persistent: false,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Authenticates requests with the hub's API token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth = AuthMode::Token(token.into());
        self
    }

    /// Bounds connect and request/reply exchanges with a timeout.
    ///
    /// Without a timeout the library waits as long as the caller does;
    /// cancellation is then the caller's responsibility.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Holds one connection open instead of dialing per command.
    #[must_use]
    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the authentication mode.
    #[must_use]
    pub fn auth(&self) -> &AuthMode {
        &self.auth
    }

    /// Returns the timeout, if one is set.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns whether one connection is held across commands.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Returns the dial address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Creates a transport from this configuration.
    #[must_use]
    pub fn into_transport(self) -> TcpTransport {
        TcpTransport::new(self)
    }
}

/// One open byte stream to a hub.
///
/// A connection carries one request at a time: write a frame, read the
/// reply up to its NUL terminator, and either shut the stream down or
/// hand it back for the next command.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
}

impl Connection {
    /// Opens a connection to the configured hub.
    ///
    /// The configured timeout, if any, bounds the connect.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::ConnectionFailed`] when the hub is
    /// unreachable and [`ProtocolError::Timeout`] when the connect does
    /// not complete in time.
    pub async fn open(config: &TcpConfig) -> std::result::Result<Self, ProtocolError> {
        let addr = config.addr();
        tracing::debug!(addr = %addr, "Connecting to hub");

        let connect = TcpStream::connect(&addr);
        let connected = match config.timeout() {
            Some(limit) => tokio::time::timeout(limit, connect)
                .await
                .map_err(|_| ProtocolError::Timeout(duration_millis(limit)))?,
            None => connect.await,
        };

        let stream = connected.map_err(|source| ProtocolError::ConnectionFailed {
            addr: addr.clone(),
            source,
        })?;

        Ok(Self { stream })
    }

    /// Writes one request frame.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Io`] on write failures.
    pub async fn send_frame(&mut self, frame: &[u8]) -> std::result::Result<(), ProtocolError> {
        self.stream.write_all(frame).await?;
        self.stream.flush().await?;
        Ok(())
    }

    /// Reads one reply frame, up to and excluding the NUL terminator.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::ConnectionClosed`] when the hub closes
    /// the stream before the terminator and [`ProtocolError::Io`] on
    /// read failures.
    pub async fn read_frame(&mut self) -> std::result::Result<Vec<u8>, ProtocolError> {
        let mut reply = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = self.stream.read(&mut chunk).await?;
            if n == 0 {
                return Err(ProtocolError::ConnectionClosed);
            }
            if let Some(pos) = chunk[..n]
                .iter()
                .position(|&b| b == codec::FRAME_TERMINATOR)
            {
                reply.extend_from_slice(&chunk[..pos]);
                return Ok(reply);
            }
            reply.extend_from_slice(&chunk[..n]);
        }
    }

    /// Shuts the stream down gracefully.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::Io`] if the shutdown fails.
    pub async fn shutdown(mut self) -> std::result::Result<(), ProtocolError> {
        self.stream.shutdown().await?;
        Ok(())
    }
}

/// TCP transport implementing the hub's request/reply cycle.
///
/// By default every command dials a fresh connection, exchanges one
/// frame pair and shuts the connection down, exactly like the hub's own
/// app. With [`TcpConfig::persistent`] one connection is kept open and a
/// mutex serializes commands over it, so concurrent callers can share
/// the transport without interleaving bytes. A transport failure drops
/// the held connection; the next command reconnects.
#[derive(Debug)]
pub struct TcpTransport {
    config: TcpConfig,
    held: Option<Mutex<Option<Connection>>>,
}

impl TcpTransport {
    /// Creates a transport from a configuration.
    #[must_use]
    pub fn new(config: TcpConfig) -> Self {
        let held = config.is_persistent().then(|| Mutex::new(None));
        Self { config, held }
    }

    /// Returns the transport configuration.
    #[must_use]
    pub fn config(&self) -> &TcpConfig {
        &self.config
    }

    async fn exchange(
        conn: &mut Connection,
        frame: &[u8],
    ) -> std::result::Result<Vec<u8>, ProtocolError> {
        conn.send_frame(frame).await?;
        conn.read_frame().await
    }

    /// Runs one exchange on a connection dialed for this command.
    async fn exchange_per_call(&self, frame: &[u8]) -> std::result::Result<Vec<u8>, ProtocolError> {
        let mut conn = Connection::open(&self.config).await?;
        let outcome = with_timeout(
            self.config.timeout(),
            Self::exchange(&mut conn, frame),
        )
        .await;
        match outcome {
            Ok(raw) => {
                conn.shutdown().await?;
                Ok(raw)
            }
            // Dropping the connection closes the socket.
            Err(e) => Err(e),
        }
    }

    /// Runs one exchange on the held connection, opening it if needed.
    async fn exchange_held(
        &self,
        slot: &Mutex<Option<Connection>>,
        frame: &[u8],
    ) -> std::result::Result<Vec<u8>, ProtocolError> {
        let mut guard = slot.lock().await;
        let conn = match guard.take() {
            Some(existing) => guard.insert(existing),
            None => guard.insert(Connection::open(&self.config).await?),
        };

        let outcome = with_timeout(self.config.timeout(), Self::exchange(conn, frame)).await;
        if outcome.is_err() {
            // A failed exchange leaves the stream in an unknown state.
            *guard = None;
        }
        outcome
    }
}

impl Transport for TcpTransport {
    async fn roundtrip(&self, envelope: &Value) -> Result<Reply> {
        let request = match self.config.auth() {
            AuthMode::Plain => envelope.clone(),
            AuthMode::Token(token) => {
                codec::wrap_command_queue(envelope, token, codec::next_command_id())
            }
        };
        let frame = codec::encode_frame(&request);
        tracing::debug!(request = %request, "Sending message");

        let raw = match &self.held {
            Some(slot) => self.exchange_held(slot, &frame).await?,
            None => self.exchange_per_call(&frame).await?,
        };

        let mut value = codec::decode_frame(&raw)?;
        if matches!(self.config.auth(), AuthMode::Token(_)) {
            value = codec::unwrap_command_response(&value)?;
        }
        tracing::debug!(reply = %value, "Received message");

        Ok(Reply::new(value))
    }
}

async fn with_timeout<T>(
    limit: Option<Duration>,
    fut: impl Future<Output = std::result::Result<T, ProtocolError>>,
) -> std::result::Result<T, ProtocolError> {
    match limit {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| ProtocolError::Timeout(duration_millis(limit)))?,
        None => fut.await,
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = TcpConfig::new("neohub.local");
        assert_eq!(config.host(), "neohub.local");
        assert_eq!(config.port(), 4242);
        assert_eq!(config.auth(), &AuthMode::Plain);
        assert_eq!(config.timeout(), None);
        assert!(!config.is_persistent());
    }

    #[test]
    fn config_builder_chain() {
        let config = TcpConfig::new("192.168.1.10")
            .with_port(4243)
            .with_token("secret")
            .with_timeout(Duration::from_secs(5))
            .persistent(true);

        assert_eq!(config.port(), 4243);
        assert_eq!(config.auth(), &AuthMode::Token("secret".to_string()));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert!(config.is_persistent());
        assert_eq!(config.addr(), "192.168.1.10:4243");
    }

    #[test]
    fn transport_without_persistence_holds_no_connection() {
        let transport = TcpConfig::new("neohub.local").into_transport();
        assert!(transport.held.is_none());
    }

    #[test]
    fn persistent_transport_has_slot() {
        let transport = TcpConfig::new("neohub.local").persistent(true).into_transport();
        assert!(transport.held.is_some());
    }
}
