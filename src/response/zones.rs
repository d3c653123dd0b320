// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone inventory replies.

use serde::{Deserialize, Serialize};

/// Reply to `GET_DEVICES`: `{"result": ["device1", ...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceList {
    /// Names of the attached devices.
    pub result: Vec<String>,
}

/// One entry of a `DEVICES_SN` reply.
///
/// The hub answers with `{"name": [id, "serial", flag], ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceSerial(i64, String, i64);

impl DeviceSerial {
    /// Returns the numeric device id.
    #[must_use]
    pub const fn device_id(&self) -> i64 {
        self.0
    }

    /// Returns the serial number.
    #[must_use]
    pub fn serial(&self) -> &str {
        &self.1
    }

    /// Returns the trailing status flag.
    #[must_use]
    pub const fn flag(&self) -> i64 {
        self.2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn device_list_requires_result() {
        let list: DeviceList = serde_json::from_value(json!({"result": ["a", "b"]})).unwrap();
        assert_eq!(list.result, ["a", "b"]);

        let err = serde_json::from_value::<DeviceList>(json!({"devices": []})).unwrap_err();
        assert!(err.to_string().contains("result"));
    }

    #[test]
    fn device_serial_from_array() {
        let serials: BTreeMap<String, DeviceSerial> = serde_json::from_value(json!({
            "Kitchen": [1, "A1B2C3", 1],
        }))
        .unwrap();

        let serial = &serials["Kitchen"];
        assert_eq!(serial.device_id(), 1);
        assert_eq!(serial.serial(), "A1B2C3");
        assert_eq!(serial.flag(), 1);
    }
}
