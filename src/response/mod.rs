// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed reply records.
//!
//! Each record maps one reply shape onto named fields. Unknown fields
//! are ignored so newer hub firmware does not break older clients;
//! missing required fields surface as parse errors naming the field.

mod holiday;
mod live_data;
mod system;
mod zones;

pub use holiday::{Holiday, HolidayRecord};
pub use live_data::{DeviceRecord, LiveData};
pub use system::{FirmwareVersion, System, SystemRecord};
pub use zones::{DeviceList, DeviceSerial};

use serde::{Deserialize, Deserializer};

/// Deserializes a value the hub may send as either a string or a number
/// into a string.
///
/// Temperatures in live data are strings (`"21.5"`) on most firmware but
/// numbers on some.
pub(crate) fn de_stringish<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stringish {
        Text(String),
        Number(f64),
    }

    Ok(match Stringish::deserialize(deserializer)? {
        Stringish::Text(text) => text,
        Stringish::Number(number) => number.to_string(),
    })
}

/// Deserializes a value the hub may send as either a number or a numeric
/// string into a `u32`.
pub(crate) fn de_stringish_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numberish {
        Number(u32),
        Text(String),
    }

    match Numberish::deserialize(deserializer)? {
        Numberish::Number(number) => Ok(number),
        Numberish::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::de_stringish")]
        text: String,
        #[serde(deserialize_with = "super::de_stringish_u32")]
        number: u32,
    }

    #[test]
    fn stringish_accepts_both() {
        let probe: Probe =
            serde_json::from_str(r#"{"text": "21.5", "number": "2134"}"#).unwrap();
        assert_eq!(probe.text, "21.5");
        assert_eq!(probe.number, 2134);

        let probe: Probe = serde_json::from_str(r#"{"text": 21.5, "number": 2134}"#).unwrap();
        assert_eq!(probe.text, "21.5");
        assert_eq!(probe.number, 2134);
    }

    #[test]
    fn stringish_u32_rejects_garbage() {
        let result: Result<Probe, _> =
            serde_json::from_str(r#"{"text": "x", "number": "not a number"}"#);
        assert!(result.is_err());
    }
}
