// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat commands.
//!
//! These commands target one or more zones by name. The hub applies them
//! to every named zone in a single exchange.

use serde_json::{Value, json};

use crate::command::Command;
use crate::types::{Pin, SwitchingDifferential};

/// Queries live data for the hub and every attached device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetLiveDataCommand;

impl Command for GetLiveDataCommand {
    fn name(&self) -> &'static str {
        "GET_LIVE_DATA"
    }

    fn payload(&self) -> Value {
        json!(0)
    }
}

/// PIN-locks thermostats.
///
/// # Examples
///
/// ```
/// use neohub_lib::command::{Command, LockCommand};
/// use neohub_lib::types::Pin;
///
/// let cmd = LockCommand::new(Pin::new(1234).unwrap(), &["Kitchen"]);
/// assert_eq!(
///     cmd.envelope().to_string(),
///     r#"{"LOCK":[[1,2,3,4],["Kitchen"]]}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockCommand {
    pin: Pin,
    zones: Vec<String>,
}

impl LockCommand {
    /// Creates a command locking `zones` with `pin`.
    #[must_use]
    pub fn new(pin: Pin, zones: &[impl AsRef<str>]) -> Self {
        Self {
            pin,
            zones: zones.iter().map(|z| z.as_ref().to_string()).collect(),
        }
    }
}

impl Command for LockCommand {
    fn name(&self) -> &'static str {
        "LOCK"
    }

    fn payload(&self) -> Value {
        json!([self.pin.digits(), self.zones])
    }
}

/// Unlocks PIN-locked thermostats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockCommand {
    zones: Vec<String>,
}

impl UnlockCommand {
    /// Creates a command unlocking `zones`.
    #[must_use]
    pub fn new(zones: &[impl AsRef<str>]) -> Self {
        Self {
            zones: zones.iter().map(|z| z.as_ref().to_string()).collect(),
        }
    }
}

impl Command for UnlockCommand {
    fn name(&self) -> &'static str {
        "UNLOCK"
    }

    fn payload(&self) -> Value {
        json!(self.zones)
    }
}

/// Enables or disables frost protection mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrostCommand {
    on: bool,
    zones: Vec<String>,
}

impl FrostCommand {
    /// Creates a command switching frost mode for `zones`.
    #[must_use]
    pub fn new(on: bool, zones: &[impl AsRef<str>]) -> Self {
        Self {
            on,
            zones: zones.iter().map(|z| z.as_ref().to_string()).collect(),
        }
    }
}

impl Command for FrostCommand {
    fn name(&self) -> &'static str {
        if self.on { "FROST_ON" } else { "FROST_OFF" }
    }

    fn payload(&self) -> Value {
        json!(self.zones)
    }
}

/// Overrides the target temperature until the next comfort level.
#[derive(Debug, Clone, PartialEq)]
pub struct SetTargetTemperatureCommand {
    temperature: f64,
    zones: Vec<String>,
}

impl SetTargetTemperatureCommand {
    /// Creates a command setting the target temperature of `zones`.
    #[must_use]
    pub fn new(temperature: f64, zones: &[impl AsRef<str>]) -> Self {
        Self {
            temperature,
            zones: zones.iter().map(|z| z.as_ref().to_string()).collect(),
        }
    }
}

impl Command for SetTargetTemperatureCommand {
    fn name(&self) -> &'static str {
        "SET_TEMP"
    }

    fn payload(&self) -> Value {
        json!([self.temperature, self.zones])
    }
}

/// Sets the switching differential of thermostats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDiffCommand {
    differential: SwitchingDifferential,
    zones: Vec<String>,
}

impl SetDiffCommand {
    /// Creates a command setting the switching differential of `zones`.
    #[must_use]
    pub fn new(differential: SwitchingDifferential, zones: &[impl AsRef<str>]) -> Self {
        Self {
            differential,
            zones: zones.iter().map(|z| z.as_ref().to_string()).collect(),
        }
    }
}

impl Command for SetDiffCommand {
    fn name(&self) -> &'static str {
        "SET_DIFF"
    }

    fn payload(&self) -> Value {
        json!([self.differential.value(), self.zones])
    }
}

/// Queries how long thermostats take to change temperature by one degree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRocCommand {
    zones: Vec<String>,
}

impl ViewRocCommand {
    /// Creates a command querying the rate of change of `zones`.
    #[must_use]
    pub fn new(zones: &[impl AsRef<str>]) -> Self {
        Self {
            zones: zones.iter().map(|z| z.as_ref().to_string()).collect(),
        }
    }
}

impl Command for ViewRocCommand {
    fn name(&self) -> &'static str {
        "VIEW_ROC"
    }

    fn payload(&self) -> Value {
        json!(self.zones)
    }
}

/// Holds a time clock's output on or off for a duration.
///
/// Only affects devices running in time clock mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerHoldCommand {
    on: bool,
    minutes: u32,
    zones: Vec<String>,
}

impl TimerHoldCommand {
    /// Creates a command holding the output of `zones` for `minutes`.
    #[must_use]
    pub fn new(on: bool, minutes: u32, zones: &[impl AsRef<str>]) -> Self {
        Self {
            on,
            minutes,
            zones: zones.iter().map(|z| z.as_ref().to_string()).collect(),
        }
    }
}

impl Command for TimerHoldCommand {
    fn name(&self) -> &'static str {
        if self.on {
            "TIMER_HOLD_ON"
        } else {
            "TIMER_HOLD_OFF"
        }
    }

    fn payload(&self) -> Value {
        json!([self.minutes, self.zones])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_sends_digits_then_names() {
        let cmd = LockCommand::new(Pin::new(42).unwrap(), &["Hall", "Kitchen"]);
        assert_eq!(
            cmd.envelope().to_string(),
            r#"{"LOCK":[[0,0,4,2],["Hall","Kitchen"]]}"#
        );
    }

    #[test]
    fn unlock_sends_names_only() {
        let cmd = UnlockCommand::new(&["Hall"]);
        assert_eq!(cmd.envelope().to_string(), r#"{"UNLOCK":["Hall"]}"#);
    }

    #[test]
    fn frost_command_names() {
        assert_eq!(FrostCommand::new(true, &["Hall"]).name(), "FROST_ON");
        assert_eq!(FrostCommand::new(false, &["Hall"]).name(), "FROST_OFF");
    }

    #[test]
    fn set_temp_carries_fractional_degrees() {
        let cmd = SetTargetTemperatureCommand::new(20.5, &["Hall"]);
        assert_eq!(cmd.envelope().to_string(), r#"{"SET_TEMP":[20.5,["Hall"]]}"#);
    }

    #[test]
    fn set_diff_carries_wire_value() {
        let cmd = SetDiffCommand::new(SwitchingDifferential::HALF_DEGREE, &["Hall"]);
        assert_eq!(cmd.envelope().to_string(), r#"{"SET_DIFF":[0,["Hall"]]}"#);
    }

    #[test]
    fn view_roc() {
        let cmd = ViewRocCommand::new(&["Hall", "Kitchen"]);
        assert_eq!(
            cmd.envelope().to_string(),
            r#"{"VIEW_ROC":["Hall","Kitchen"]}"#
        );
    }

    #[test]
    fn timer_hold_on_and_off() {
        let on = TimerHoldCommand::new(true, 30, &["Towel Rail"]);
        assert_eq!(
            on.envelope().to_string(),
            r#"{"TIMER_HOLD_ON":[30,["Towel Rail"]]}"#
        );
        let off = TimerHoldCommand::new(false, 0, &["Towel Rail"]);
        assert_eq!(off.name(), "TIMER_HOLD_OFF");
    }
}
