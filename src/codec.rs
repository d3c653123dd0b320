// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire framing and envelope codec.
//!
//! The hub speaks newline-free, NUL-terminated JSON: a request is the
//! envelope followed by `\0\r`, a reply is JSON followed by `\0`. Hubs
//! with the token API enabled additionally wrap each request in a
//! command-queue envelope whose `message` field is itself a JSON-encoded
//! string; replies come back the same way under a `response` key.

use std::sync::atomic::{AtomicU32, Ordering};

use serde_json::{Value, json};

use crate::error::{HubError, ParseError};

/// Byte that terminates every frame in both directions.
pub const FRAME_TERMINATOR: u8 = 0x00;

/// Suffix appended to an encoded request.
const REQUEST_SUFFIX: &[u8] = b"\0\r";

/// Monotonic id for command-queue entries.
static COMMAND_ID: AtomicU32 = AtomicU32::new(1);

/// Returns the next command-queue id.
pub(crate) fn next_command_id() -> u32 {
    COMMAND_ID.fetch_add(1, Ordering::Relaxed)
}

/// Encodes a request envelope into a wire frame.
#[must_use]
pub fn encode_frame(envelope: &Value) -> Vec<u8> {
    let mut frame = envelope.to_string().into_bytes();
    frame.extend_from_slice(REQUEST_SUFFIX);
    frame
}

/// Decodes a wire frame into a reply object.
///
/// Trailing terminator and whitespace bytes are stripped before parsing.
///
/// # Errors
///
/// Returns [`ParseError::Json`] when the payload is not well-formed JSON
/// and [`ParseError::UnexpectedFormat`] when it parses to something other
/// than a JSON object.
pub fn decode_frame(bytes: &[u8]) -> Result<Value, ParseError> {
    let end = bytes
        .iter()
        .rposition(|b| !matches!(b, 0 | b'\r' | b'\n' | b' '))
        .map_or(0, |i| i + 1);
    let value: Value = serde_json::from_slice(&bytes[..end])?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(ParseError::UnexpectedFormat(format!(
            "expected a JSON object, got: {value}"
        )))
    }
}

/// Wraps a request envelope in the token API's command queue.
///
/// The inner message is serialized to a string, as the hub requires.
pub(crate) fn wrap_command_queue(envelope: &Value, token: &str, command_id: u32) -> Value {
    let message = json!({
        "token": token,
        "COMMANDS": [{
            "COMMAND": envelope.to_string(),
            "COMMANDID": command_id,
        }],
    });
    json!({
        "message_type": "hm_get_command_queue",
        "message": message.to_string(),
    })
}

/// Unwraps a token API reply down to the plain reply object.
///
/// # Errors
///
/// Returns [`ParseError::MissingField`] when the wrapper lacks its
/// `response` key and [`ParseError`] variants when the carried response
/// is not a JSON object.
pub(crate) fn unwrap_command_response(reply: &Value) -> Result<Value, ParseError> {
    let response = reply
        .get("response")
        .ok_or_else(|| ParseError::MissingField("response".to_string()))?;
    match response {
        // Observed firmware sends the response as a JSON-encoded string.
        Value::String(text) => {
            let value: Value = serde_json::from_str(text)?;
            if value.is_object() {
                Ok(value)
            } else {
                Err(ParseError::UnexpectedFormat(format!(
                    "expected a JSON object in response, got: {value}"
                )))
            }
        }
        Value::Object(_) => Ok(response.clone()),
        other => Err(ParseError::UnexpectedFormat(format!(
            "expected response string or object, got: {other}"
        ))),
    }
}

/// Extracts the hub's error message from a reply, if it carries one.
///
/// The hub reports application errors as `{"error": "..."}`.
pub(crate) fn hub_error(reply: &Value) -> Option<HubError> {
    reply.get("error").map(|message| {
        HubError::Rejected(
            message
                .as_str()
                .map_or_else(|| message.to_string(), ToString::to_string),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_appends_terminator() {
        let frame = encode_frame(&json!({"GET_SYSTEM": 0}));
        assert_eq!(frame, b"{\"GET_SYSTEM\":0}\0\r");
    }

    #[test]
    fn decode_strips_terminator() {
        let value = decode_frame(b"{\"result\":\"ok\"}\0").unwrap();
        assert_eq!(value, json!({"result": "ok"}));
    }

    #[test]
    fn decode_tolerates_trailing_newline() {
        let value = decode_frame(b"{\"result\":\"ok\"}\0\r\n").unwrap();
        assert_eq!(value, json!({"result": "ok"}));
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = decode_frame(b"{\"result\": not json}\0").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn decode_rejects_non_object() {
        let err = decode_frame(b"[1,2,3]\0").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedFormat(_)));
    }

    #[test]
    fn encode_decode_round_trip() {
        let envelope = json!({"SET_TEMP": [21.5, ["Living Room"]]});
        let frame = encode_frame(&envelope);
        assert_eq!(decode_frame(&frame).unwrap(), envelope);
    }

    #[test]
    fn command_queue_wrap() {
        let wrapped = wrap_command_queue(&json!({"GET_SYSTEM": 0}), "secret", 7);
        assert_eq!(wrapped["message_type"], "hm_get_command_queue");

        let message: Value = serde_json::from_str(wrapped["message"].as_str().unwrap()).unwrap();
        assert_eq!(message["token"], "secret");
        assert_eq!(message["COMMANDS"][0]["COMMANDID"], 7);
        assert_eq!(
            message["COMMANDS"][0]["COMMAND"].as_str().unwrap(),
            r#"{"GET_SYSTEM":0}"#
        );
    }

    #[test]
    fn command_response_unwrap_string() {
        let reply = json!({
            "message_type": "hm_set_command_response",
            "response": r#"{"result":"ok"}"#,
        });
        assert_eq!(
            unwrap_command_response(&reply).unwrap(),
            json!({"result": "ok"})
        );
    }

    #[test]
    fn command_response_unwrap_object() {
        let reply = json!({"response": {"result": "ok"}});
        assert_eq!(
            unwrap_command_response(&reply).unwrap(),
            json!({"result": "ok"})
        );
    }

    #[test]
    fn command_response_missing_key() {
        let err = unwrap_command_response(&json!({"message_type": "other"})).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(field) if field == "response"));
    }

    #[test]
    fn hub_error_extraction() {
        let reply = json!({"error": "Invalid argument to GET_DEVICE_LIST"});
        let err = hub_error(&reply).unwrap();
        assert_eq!(
            err,
            HubError::Rejected("Invalid argument to GET_DEVICE_LIST".to_string())
        );
        assert!(hub_error(&json!({"result": "ok"})).is_none());
    }

    #[test]
    fn command_ids_increase() {
        let a = next_command_id();
        let b = next_command_id();
        assert!(b > a);
    }
}
