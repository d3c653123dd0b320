// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! System settings replies.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{ScheduleFormat, TemperatureUnit};

/// Raw `GET_SYSTEM` reply as it appears on the wire.
///
/// Use [`System::try_from`] to convert enum-valued fields into their
/// typed forms.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SystemRecord {
    /// Schedule format as a wire integer.
    pub format: i64,

    /// Previous time clock format, kept when the system format is set to
    /// non-programmable.
    #[serde(default)]
    pub alt_timer_format: Option<i64>,

    /// Temperature display unit, `"C"` or `"F"`.
    pub corf: String,

    /// Whether DST is handled automatically.
    #[serde(default)]
    pub dst_auto: bool,

    /// Whether DST is currently applied.
    #[serde(default)]
    pub dst_on: bool,

    /// NTP client state, `"Running"` when active.
    #[serde(default)]
    pub ntp_on: String,

    /// Hub hardware generation.
    #[serde(default)]
    pub hub_type: i64,

    /// Hub firmware version.
    #[serde(default)]
    pub hub_version: i64,

    /// UTC offset of the configured timezone, in hours.
    #[serde(default)]
    pub time_zone: f64,

    /// Hub clock as a Unix timestamp.
    #[serde(default)]
    pub utc: Option<i64>,
}

/// System-wide settings of a hub.
///
/// A read-only snapshot of the hub's state at fetch time; re-fetch to
/// observe changes.
#[derive(Debug, Clone, Serialize)]
pub struct System {
    /// Whether DST is handled automatically.
    pub dst_auto: bool,
    /// Whether DST is currently applied.
    pub dst_on: bool,
    /// Schedule format of the system.
    pub format: ScheduleFormat,
    /// Previous time clock format, if the system is non-programmable.
    pub alt_timer_format: Option<ScheduleFormat>,
    /// Whether the NTP client is running.
    pub ntp_running: bool,
    /// Hub hardware generation.
    pub hub_type: i64,
    /// Hub firmware version.
    pub hub_version: i64,
    /// Temperature display unit.
    pub temperature_unit: TemperatureUnit,
    /// UTC offset of the configured timezone, in hours.
    pub time_zone: f64,
    /// Hub clock as a Unix timestamp.
    pub utc: Option<i64>,
}

impl TryFrom<SystemRecord> for System {
    type Error = Error;

    fn try_from(record: SystemRecord) -> Result<Self, Self::Error> {
        let format = ScheduleFormat::from_wire(record.format)?;
        let alt_timer_format = record
            .alt_timer_format
            .map(ScheduleFormat::from_wire)
            .transpose()?;
        let temperature_unit: TemperatureUnit = record.corf.parse()?;

        Ok(Self {
            dst_auto: record.dst_auto,
            dst_on: record.dst_on,
            format,
            alt_timer_format,
            ntp_running: record.ntp_on == "Running",
            hub_type: record.hub_type,
            hub_version: record.hub_version,
            temperature_unit,
            time_zone: record.time_zone,
            utc: record.utc,
        })
    }
}

/// Reply to the `FIRMWARE` command.
///
/// The hub uses a key with a space in it and, depending on firmware,
/// a string or a number as the value.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FirmwareVersion {
    #[serde(
        rename = "firmware version",
        deserialize_with = "super::de_stringish_u32"
    )]
    version: u32,
}

impl FirmwareVersion {
    /// Returns the firmware version number.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn system_fixture() -> serde_json::Value {
        json!({
            "DST_AUTO": true,
            "DST_ON": false,
            "FORMAT": 4,
            "ALT_TIMER_FORMAT": 1,
            "NTP_ON": "Running",
            "HUB_TYPE": 2,
            "HUB_VERSION": 2134,
            "CORF": "C",
            "TIME_ZONE": 0.0,
            "UTC": 1_720_000_000,
        })
    }

    #[test]
    fn system_maps_typed_fields() {
        let record: SystemRecord = serde_json::from_value(system_fixture()).unwrap();
        let system = System::try_from(record).unwrap();

        assert_eq!(system.format, ScheduleFormat::SevenDay);
        assert_eq!(system.alt_timer_format, Some(ScheduleFormat::TwentyFourHour));
        assert!(system.ntp_running);
        assert_eq!(system.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(system.hub_version, 2134);
    }

    #[test]
    fn system_ignores_unknown_fields() {
        let mut fixture = system_fixture();
        fixture["SOME_FUTURE_FIELD"] = json!("whatever");
        let record: SystemRecord = serde_json::from_value(fixture).unwrap();
        assert!(System::try_from(record).is_ok());
    }

    #[test]
    fn system_missing_format_names_field() {
        let mut fixture = system_fixture();
        fixture.as_object_mut().unwrap().remove("FORMAT");
        let err = serde_json::from_value::<SystemRecord>(fixture).unwrap_err();
        assert!(err.to_string().contains("FORMAT"));
    }

    #[test]
    fn system_unknown_format_is_value_error() {
        let mut fixture = system_fixture();
        fixture["FORMAT"] = json!(3);
        let record: SystemRecord = serde_json::from_value(fixture).unwrap();
        let err = System::try_from(record).unwrap_err();
        assert!(matches!(err, Error::Value(_)));
    }

    #[test]
    fn system_ntp_not_running() {
        let mut fixture = system_fixture();
        fixture["NTP_ON"] = json!("Stopped");
        let record: SystemRecord = serde_json::from_value(fixture).unwrap();
        let system = System::try_from(record).unwrap();
        assert!(!system.ntp_running);
    }

    #[test]
    fn firmware_version_from_string() {
        let version: FirmwareVersion =
            serde_json::from_value(json!({"firmware version": "2134"})).unwrap();
        assert_eq!(version.version(), 2134);
    }

    #[test]
    fn firmware_version_from_number() {
        let version: FirmwareVersion =
            serde_json::from_value(json!({"firmware version": 2027})).unwrap();
        assert_eq!(version.version(), 2027);
    }
}
