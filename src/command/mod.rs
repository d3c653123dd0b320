// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Neohub command definitions.
//!
//! This module provides typed representations of the commands a hub
//! understands. Every command serializes to the hub's request envelope: a
//! JSON object with a single key naming the command and a value carrying
//! its arguments, e.g. `{"SET_TEMP": [21.5, ["Kitchen"]]}`. Commands
//! without arguments use `0` as their value, e.g. `{"GET_SYSTEM": 0}`.
//!
//! # Available Commands
//!
//! | Group | Commands |
//! |-------|----------|
//! | Hub | `FIRMWARE`, `GET_SYSTEM`, `RESET`, `SET_CHANNEL`, `SET_TEMP_FORMAT`, `SET_FORMAT`, `IDENTIFY` |
//! | Clock | `SET_DATE`, `SET_TIME`, `MANUAL_DST`, `DST_ON`/`DST_OFF`, `NTP_ON`/`NTP_OFF` |
//! | Away | `AWAY_ON`/`AWAY_OFF`, `HOLIDAY`, `GET_HOLIDAY`, `CANCEL_HOLIDAY` |
//! | Zones | `GET_ZONES`, `GET_DEVICES`, `GET_DEVICE_LIST`, `DEVICES_SN`, `PERMIT_JOIN`, `ZONE_TITLE`, `REMOVE_ZONE`, `IDENTIFY_DEV` |
//! | Thermostats | `GET_LIVE_DATA`, `LOCK`, `UNLOCK`, `FROST_ON`/`FROST_OFF`, `SET_TEMP`, `SET_DIFF`, `VIEW_ROC`, `TIMER_HOLD_ON`/`TIMER_HOLD_OFF` |
//!
//! # Examples
//!
//! ```
//! use neohub_lib::command::{Command, SetTargetTemperatureCommand};
//!
//! let cmd = SetTargetTemperatureCommand::new(21.5, &["Kitchen"]);
//! assert_eq!(cmd.name(), "SET_TEMP");
//! assert_eq!(
//!     cmd.envelope().to_string(),
//!     r#"{"SET_TEMP":[21.5,["Kitchen"]]}"#
//! );
//! ```

mod away;
mod stat;
mod system;
mod time;
mod zone;

pub use away::{AwayCommand, CancelHolidayCommand, GetHolidayCommand, SetHolidayCommand};
pub use stat::{
    FrostCommand, GetLiveDataCommand, LockCommand, SetDiffCommand, SetTargetTemperatureCommand,
    TimerHoldCommand, UnlockCommand, ViewRocCommand,
};
pub use system::{
    FirmwareCommand, GetSystemCommand, IdentifyCommand, ResetCommand, SetChannelCommand,
    SetFormatCommand, SetTempFormatCommand,
};
pub use time::{DstCommand, ManualDstCommand, NtpCommand, SetDateCommand, SetTimeCommand};
pub use zone::{
    DevicesSnCommand, GetDeviceListCommand, GetDevicesCommand, GetZonesCommand,
    IdentifyDeviceCommand, PermitJoinCommand, RemoveZoneCommand, ZoneTitleCommand,
};

use serde_json::Value;

/// A command that can be sent to a Neohub.
///
/// Commands are serialized to the hub's single-key request envelope for
/// transmission over the socket.
pub trait Command {
    /// Returns the command name.
    ///
    /// For example, `"GET_SYSTEM"`, `"SET_TEMP"`, `"AWAY_ON"`.
    fn name(&self) -> &'static str;

    /// Returns the command arguments.
    ///
    /// Commands without arguments use the number `0`, matching the hub's
    /// convention.
    fn payload(&self) -> Value;

    /// Builds the request envelope `{name: payload}`.
    fn envelope(&self) -> Value {
        let mut map = serde_json::Map::with_capacity(1);
        map.insert(self.name().to_string(), self.payload());
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_single_key() {
        let cmd = GetSystemCommand;
        let envelope = cmd.envelope();
        let obj = envelope.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get("GET_SYSTEM").unwrap(), &Value::from(0));
    }
}
