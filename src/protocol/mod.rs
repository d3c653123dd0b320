// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport implementations for talking to a Neohub.
//!
//! A transport carries one request envelope to the hub and returns the
//! decoded reply. The only implementation shipped here is
//! [`TcpTransport`], which speaks the hub's NUL-terminated JSON protocol
//! on port 4242, either opening a connection per command or holding one
//! open for the life of the process.

mod tcp;

pub use tcp::{AuthMode, Connection, TcpConfig, TcpTransport};

use serde_json::Value;

use crate::error::{HubError, ParseError, Result};

/// A decoded reply from the hub.
///
/// Wraps the reply object and offers typed access on top of it.
#[derive(Debug, Clone)]
pub struct Reply {
    value: Value,
}

impl Reply {
    /// Creates a reply from a decoded JSON object.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Returns the raw reply object.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Parses the reply into a typed record.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the reply does not match the target
    /// type, including when a required field is missing.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.value.clone())
            .map_err(|e| ParseError::Json(e).into())
    }

    /// Checks that the reply equals `expected`.
    ///
    /// Set-style commands confirm success with a fixed reply object,
    /// usually `{"result": "..."}` but occasionally something else
    /// (`RESET` answers `{"Restarting": 1}`).
    ///
    /// # Errors
    ///
    /// Returns [`HubError::UnexpectedReply`] when the hub answered with
    /// anything else.
    pub fn expect(&self, expected: &Value) -> Result<()> {
        if &self.value == expected {
            Ok(())
        } else {
            Err(HubError::UnexpectedReply(self.value.to_string()).into())
        }
    }

    /// Checks that the reply is `{"result": expected}`.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::UnexpectedReply`] when the hub answered with
    /// anything else.
    pub fn expect_result(&self, expected: &str) -> Result<()> {
        self.expect(&serde_json::json!({ "result": expected }))
    }
}

/// Trait for transports that can carry a request to a Neohub.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a request envelope and returns the decoded reply.
    ///
    /// One request is in flight at a time; implementations must not
    /// interleave the bytes of concurrent requests.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError`](crate::error::ProtocolError) on
    /// transport failures and [`ParseError`] when the reply frame is not
    /// a well-formed envelope.
    async fn roundtrip(&self, envelope: &Value) -> Result<Reply>;
}
