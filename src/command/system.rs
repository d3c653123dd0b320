// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hub-wide commands.
//!
//! These commands query or change settings of the hub itself rather than
//! of an individual zone.

use serde_json::{Value, json};

use crate::command::Command;
use crate::types::{ScheduleFormat, TemperatureUnit, ZigbeeChannel};

/// Queries the hub's firmware version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareCommand;

impl Command for FirmwareCommand {
    fn name(&self) -> &'static str {
        "FIRMWARE"
    }

    fn payload(&self) -> Value {
        json!(0)
    }
}

/// Queries system-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetSystemCommand;

impl Command for GetSystemCommand {
    fn name(&self) -> &'static str {
        "GET_SYSTEM"
    }

    fn payload(&self) -> Value {
        json!(0)
    }
}

/// Reboots the hub.
///
/// Supported from firmware 2027 onwards; the reply is `{"Restarting": 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetCommand;

impl Command for ResetCommand {
    fn name(&self) -> &'static str {
        "RESET"
    }

    fn payload(&self) -> Value {
        json!(0)
    }
}

/// Moves the hub's mesh to another ZigBee channel.
///
/// # Examples
///
/// ```
/// use neohub_lib::command::{Command, SetChannelCommand};
/// use neohub_lib::types::ZigbeeChannel;
///
/// let cmd = SetChannelCommand::new(ZigbeeChannel::new(14).unwrap());
/// assert_eq!(cmd.envelope().to_string(), r#"{"SET_CHANNEL":14}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetChannelCommand {
    channel: ZigbeeChannel,
}

impl SetChannelCommand {
    /// Creates a command switching the mesh to `channel`.
    #[must_use]
    pub const fn new(channel: ZigbeeChannel) -> Self {
        Self { channel }
    }
}

impl Command for SetChannelCommand {
    fn name(&self) -> &'static str {
        "SET_CHANNEL"
    }

    fn payload(&self) -> Value {
        json!(self.channel.value())
    }
}

/// Sets the temperature display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetTempFormatCommand {
    unit: TemperatureUnit,
}

impl SetTempFormatCommand {
    /// Creates a command setting the display unit.
    #[must_use]
    pub const fn new(unit: TemperatureUnit) -> Self {
        Self { unit }
    }

    /// The unit this command sets.
    #[must_use]
    pub const fn unit(&self) -> TemperatureUnit {
        self.unit
    }
}

impl Command for SetTempFormatCommand {
    fn name(&self) -> &'static str {
        "SET_TEMP_FORMAT"
    }

    fn payload(&self) -> Value {
        json!(self.unit.as_str())
    }
}

/// Sets the schedule format for all zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetFormatCommand {
    format: ScheduleFormat,
}

impl SetFormatCommand {
    /// Creates a command setting the schedule format.
    #[must_use]
    pub const fn new(format: ScheduleFormat) -> Self {
        Self { format }
    }
}

impl Command for SetFormatCommand {
    fn name(&self) -> &'static str {
        "SET_FORMAT"
    }

    fn payload(&self) -> Value {
        json!(self.format.as_wire())
    }
}

/// Flashes the hub's red LED so it can be found in a rack of kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifyCommand;

impl Command for IdentifyCommand {
    fn name(&self) -> &'static str {
        "IDENTIFY"
    }

    fn payload(&self) -> Value {
        json!(0)
    }
}
