// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Neohub library.
//!
//! This module provides the error hierarchy for failures across the
//! library: value validation, transport communication, reply parsing,
//! and errors reported by the hub itself.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when talking
/// to a Neohub.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred during transport communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a reply.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error reported by the hub itself.
    #[error("hub error: {0}")]
    Hub(#[from] HubError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values, or when a reply carries an enum value the
/// library does not recognize.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i32,
        /// Maximum allowed value.
        max: i32,
        /// The actual value that was provided.
        actual: i32,
    },

    /// An unrecognized schedule format value.
    #[error("unrecognized schedule format: {0}")]
    InvalidScheduleFormat(String),

    /// An unrecognized temperature unit string.
    #[error("invalid temperature unit: {0}")]
    InvalidTemperatureUnit(String),

    /// An unrecognized DST region string.
    #[error("invalid DST region: {0} (expected UK, EU or NZ)")]
    InvalidDstRegion(String),

    /// A ZigBee channel the hub does not support.
    #[error("invalid ZigBee channel: {0}")]
    InvalidZigbeeChannel(u8),

    /// An unrecognized weekday string.
    #[error("invalid weekday: {0}")]
    InvalidWeekday(String),
}

/// Errors related to transport communication with the hub.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Connecting to the hub failed.
    #[error("connection to {addr} failed: {source}")]
    ConnectionFailed {
        /// The address that was dialed.
        addr: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Reading or writing on an established connection failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The hub closed the connection before the reply terminator arrived.
    #[error("connection closed before reply was complete")]
    ConnectionClosed,

    /// Invalid host or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing hub replies.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the reply.
    #[error("missing field in reply: {0}")]
    MissingField(String),

    /// Unexpected reply format.
    #[error("unexpected reply format: {0}")]
    UnexpectedFormat(String),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors reported by the hub in its reply payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HubError {
    /// The hub answered with an error payload.
    #[error("hub rejected command: {0}")]
    Rejected(String),

    /// The hub answered, but not with the confirmation this command expects.
    #[error("unexpected reply from hub: {0}")]
    UnexpectedReply(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: -1,
            max: 3,
            actual: 5,
        };
        assert_eq!(err.to_string(), "value 5 is out of range [-1, 3]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidScheduleFormat("3".to_string());
        let err: Error = value_err.into();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidScheduleFormat(_))
        ));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("FORMAT".to_string());
        assert_eq!(err.to_string(), "missing field in reply: FORMAT");
    }

    #[test]
    fn hub_error_display() {
        let err = HubError::Rejected("Invalid argument to SET_TEMP".to_string());
        assert_eq!(
            err.to_string(),
            "hub rejected command: Invalid argument to SET_TEMP"
        );
    }

    #[test]
    fn timeout_display() {
        let err = ProtocolError::Timeout(1500);
        assert_eq!(err.to_string(), "request timed out after 1500 ms");
    }
}
