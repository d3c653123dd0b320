// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Live data replies.
//!
//! `GET_LIVE_DATA` answers with one large object: hub-wide state plus a
//! `devices` array with the current reading of every zone.

use serde::{Deserialize, Serialize};

/// Hub-wide live state plus per-device readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct LiveData {
    /// Hub clock as a Unix timestamp.
    #[serde(default)]
    pub hub_time: i64,

    /// Whether away mode is active.
    #[serde(default)]
    pub hub_away: bool,

    /// Whether holiday mode is active.
    #[serde(default)]
    pub hub_holiday: bool,

    /// End of the scheduled holiday as a Unix timestamp, `-1` if none.
    #[serde(default)]
    pub holiday_end: i64,

    /// Whether the cooling input is asserted.
    #[serde(default)]
    pub cool_input: bool,

    /// Configured switching close delay, in minutes.
    #[serde(default)]
    pub close_delay: i64,

    /// Configured switching open delay, in minutes.
    #[serde(default)]
    pub open_delay: i64,

    /// Change counter for the hub's device lists.
    #[serde(default)]
    pub timestamp_device_lists: i64,

    /// Change counter for engineer settings.
    #[serde(default)]
    pub timestamp_engineers: i64,

    /// Change counter for comfort level profiles.
    #[serde(default)]
    pub timestamp_profile_comfort_levels: i64,

    /// Change counter for timer profiles.
    #[serde(default)]
    pub timestamp_profile_timers: i64,

    /// Change counter for recipes.
    #[serde(default)]
    pub timestamp_recipes: i64,

    /// Current reading of every attached device.
    #[serde(rename = "devices")]
    pub devices: Vec<DeviceRecord>,
}

impl LiveData {
    /// Returns the devices that are thermostats (as opposed to time
    /// clocks and other accessories).
    pub fn thermostats(&self) -> impl Iterator<Item = &DeviceRecord> {
        self.devices.iter().filter(|d| d.is_thermostat())
    }
}

fn default_clock() -> String {
    "0:00".to_string()
}

fn default_pin() -> String {
    "0000".to_string()
}

/// One device's entry in the live data `devices` array.
///
/// Everything except the zone name and the two temperatures is optional
/// on the wire; missing fields take neutral defaults so firmware
/// differences do not break parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DeviceRecord {
    /// Zone name, unique within a hub.
    pub zone_name: String,

    /// Measured temperature. Most firmware sends this as a string.
    #[serde(deserialize_with = "super::de_stringish")]
    pub actual_temp: String,

    /// Target temperature, same encoding as `actual_temp`.
    #[serde(deserialize_with = "super::de_stringish")]
    pub set_temp: String,

    /// Numeric device id.
    #[serde(default)]
    pub device_id: i64,

    /// Currently active comfort level.
    #[serde(default)]
    pub active_level: i64,

    /// Currently active profile.
    #[serde(default)]
    pub active_profile: i64,

    /// Modes this device supports.
    #[serde(default)]
    pub available_modes: Vec<String>,

    /// Whether away mode applies to this device.
    #[serde(default)]
    pub away: bool,

    /// Whether holiday mode applies to this device.
    #[serde(default)]
    pub holiday: bool,

    /// Whether cooling output is on.
    #[serde(default)]
    pub cool_on: bool,

    /// Cooling setpoint.
    #[serde(default)]
    pub cool_temp: f64,

    /// Floor sensor reading, where fitted.
    #[serde(default)]
    pub current_floor_temperature: f64,

    /// Whether the floor limit has cut heating off.
    #[serde(default)]
    pub floor_limit: bool,

    /// Day of the week as a lowercase name.
    #[serde(default)]
    pub date: String,

    /// Wall clock of the device, `"HH:MM"`.
    #[serde(default = "default_clock")]
    pub time: String,

    /// Fan control mode.
    #[serde(default)]
    pub fan_control: String,

    /// Fan speed.
    #[serde(default)]
    pub fan_speed: String,

    /// Heat/cool mode.
    #[serde(default)]
    pub hc_mode: String,

    /// Whether the device is in heating mode.
    #[serde(default)]
    pub heat_mode: bool,

    /// Whether the heating output is on.
    #[serde(default)]
    pub heat_on: bool,

    /// Cooling hold setpoint.
    #[serde(default)]
    pub hold_cool: f64,

    /// Whether a hold-off is active.
    #[serde(default)]
    pub hold_off: bool,

    /// Whether a hold is active.
    #[serde(default)]
    pub hold_on: bool,

    /// Hold setpoint.
    #[serde(default)]
    pub hold_temp: f64,

    /// Remaining hold time, `"HH:MM"` up to `"99:99"`.
    #[serde(default = "default_clock")]
    pub hold_time: String,

    /// Whether the thermostat is PIN locked.
    #[serde(default)]
    pub lock: bool,

    /// Whether the battery is low.
    #[serde(default)]
    pub low_battery: bool,

    /// Whether the output has been switched off manually.
    #[serde(default)]
    pub manual_off: bool,

    /// Whether the mode is locked.
    #[serde(default)]
    pub modelock: bool,

    /// Modulation level of the output, in percent.
    #[serde(default)]
    pub modulation_level: i64,

    /// Whether the device has dropped off the mesh.
    #[serde(default)]
    pub offline: bool,

    /// Lock PIN as the device reports it.
    #[serde(default = "default_pin", deserialize_with = "super::de_stringish")]
    pub pin_number: String,

    /// Whether preheat is running.
    #[serde(default)]
    pub preheat_active: bool,

    /// Programmed setpoint for the current period.
    #[serde(default)]
    pub prg_temp: i64,

    /// Whether the program timer is enabled.
    #[serde(default)]
    pub prg_timer: bool,

    /// Recent temperature readings.
    #[serde(default)]
    pub recent_temps: Vec<String>,

    /// Relative humidity where the device measures it.
    #[serde(default)]
    pub relative_humidity: Option<i64>,

    /// Whether the device is in standby.
    #[serde(default)]
    pub standby: bool,

    /// Remaining switch delay, `"HH:MM"`.
    #[serde(default = "default_clock")]
    pub switch_delay_left: String,

    /// Whether a temporary setpoint override is active.
    #[serde(default)]
    pub temporary_set_flag: bool,

    /// Whether this device is a thermostat. Absent on some accessories.
    #[serde(default)]
    pub thermostat: Option<bool>,

    /// Whether the timer output is on.
    #[serde(default)]
    pub timer_on: bool,

    /// Whether an open window has paused heating.
    #[serde(default)]
    pub window_open: bool,

    /// Device write counter.
    #[serde(default)]
    pub write_count: i64,
}

impl DeviceRecord {
    /// Returns whether this device is a thermostat.
    #[must_use]
    pub fn is_thermostat(&self) -> bool {
        self.thermostat.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn device_fixture(name: &str) -> serde_json::Value {
        json!({
            "ZONE_NAME": name,
            "ACTUAL_TEMP": "21.5",
            "SET_TEMP": "20.0",
            "DEVICE_ID": 1,
            "DATE": "monday",
            "TIME": "14:30",
            "HOLD_TIME": "0:00",
            "SWITCH_DELAY_LEFT": "0:05",
            "PIN_NUMBER": "0000",
            "THERMOSTAT": true,
            "HEAT_ON": true,
            "LOCK": false,
            "LOW_BATTERY": false,
            "OFFLINE": false,
        })
    }

    #[test]
    fn live_data_maps_devices() {
        let fixture = json!({
            "HUB_TIME": 1_720_000_000,
            "HUB_AWAY": false,
            "HUB_HOLIDAY": false,
            "HOLIDAY_END": -1,
            "devices": [device_fixture("Living Room")],
        });

        let live: LiveData = serde_json::from_value(fixture).unwrap();
        assert_eq!(live.devices.len(), 1);
        assert_eq!(live.devices[0].zone_name, "Living Room");
        assert_eq!(live.devices[0].actual_temp, "21.5");
        assert!(live.devices[0].is_thermostat());
    }

    #[test]
    fn thermostats_filters_accessories() {
        let mut clock = device_fixture("Towel Rail");
        clock["THERMOSTAT"] = json!(false);
        let fixture = json!({"devices": [device_fixture("Hall"), clock]});

        let live: LiveData = serde_json::from_value(fixture).unwrap();
        let names: Vec<_> = live.thermostats().map(|d| d.zone_name.as_str()).collect();
        assert_eq!(names, ["Hall"]);
    }

    #[test]
    fn thermostat_flag_defaults_to_false_when_absent() {
        let mut fixture = device_fixture("Sensor");
        fixture.as_object_mut().unwrap().remove("THERMOSTAT");
        let record: DeviceRecord = serde_json::from_value(fixture).unwrap();
        assert!(!record.is_thermostat());
    }

    #[test]
    fn numeric_temperature_is_accepted() {
        let mut fixture = device_fixture("Hall");
        fixture["ACTUAL_TEMP"] = json!(19.5);
        let record: DeviceRecord = serde_json::from_value(fixture).unwrap();
        assert_eq!(record.actual_temp, "19.5");
    }

    #[test]
    fn missing_zone_name_names_field() {
        let mut fixture = device_fixture("Hall");
        fixture.as_object_mut().unwrap().remove("ZONE_NAME");
        let err = serde_json::from_value::<DeviceRecord>(fixture).unwrap_err();
        assert!(err.to_string().contains("ZONE_NAME"));
    }

    #[test]
    fn missing_devices_array_names_field() {
        let err = serde_json::from_value::<LiveData>(json!({"HUB_TIME": 0})).unwrap_err();
        assert!(err.to_string().contains("devices"));
    }
}
