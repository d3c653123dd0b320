// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone inventory commands.
//!
//! These commands list, add, rename and remove the zones known to a hub.

use serde_json::{Value, json};

use crate::command::Command;

/// Queries the zones known to the hub and their ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetZonesCommand;

impl Command for GetZonesCommand {
    fn name(&self) -> &'static str {
        "GET_ZONES"
    }

    fn payload(&self) -> Value {
        json!(0)
    }
}

/// Queries the list of device names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetDevicesCommand;

impl Command for GetDevicesCommand {
    fn name(&self) -> &'static str {
        "GET_DEVICES"
    }

    fn payload(&self) -> Value {
        json!(0)
    }
}

/// Queries the devices associated with one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDeviceListCommand {
    zone: String,
}

impl GetDeviceListCommand {
    /// Creates a command listing the devices of `zone`.
    #[must_use]
    pub fn new(zone: impl Into<String>) -> Self {
        Self { zone: zone.into() }
    }

    /// The zone this command queries.
    #[must_use]
    pub fn zone(&self) -> &str {
        &self.zone
    }
}

impl Command for GetDeviceListCommand {
    fn name(&self) -> &'static str {
        "GET_DEVICE_LIST"
    }

    fn payload(&self) -> Value {
        json!(self.zone)
    }
}

/// Queries the serial numbers of attached devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevicesSnCommand;

impl Command for DevicesSnCommand {
    fn name(&self) -> &'static str {
        "DEVICES_SN"
    }

    fn payload(&self) -> Value {
        json!(0)
    }
}

/// Opens the mesh for a new thermostat to join.
///
/// The joining thermostat becomes a new zone with the given name. The
/// discovery window closes after the timeout.
///
/// # Examples
///
/// ```
/// use neohub_lib::command::{Command, PermitJoinCommand};
///
/// let cmd = PermitJoinCommand::new("Attic", 120);
/// assert_eq!(cmd.envelope().to_string(), r#"{"PERMIT_JOIN":[120,"Attic"]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermitJoinCommand {
    name: String,
    timeout_s: u32,
}

impl PermitJoinCommand {
    /// Creates a command opening the mesh for `timeout_s` seconds.
    #[must_use]
    pub fn new(name: impl Into<String>, timeout_s: u32) -> Self {
        Self {
            name: name.into(),
            timeout_s,
        }
    }
}

impl Command for PermitJoinCommand {
    fn name(&self) -> &'static str {
        "PERMIT_JOIN"
    }

    fn payload(&self) -> Value {
        json!([self.timeout_s, self.name])
    }
}

/// Renames a zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTitleCommand {
    current: String,
    new: String,
}

impl ZoneTitleCommand {
    /// Creates a command renaming `current` to `new`.
    #[must_use]
    pub fn new(current: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            new: new.into(),
        }
    }
}

impl Command for ZoneTitleCommand {
    fn name(&self) -> &'static str {
        "ZONE_TITLE"
    }

    fn payload(&self) -> Value {
        json!([self.current, self.new])
    }
}

/// Removes a zone from the hub.
///
/// The thermostat disconnects a few seconds later; a `GET_ZONES` issued
/// within that window may still list the removed zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveZoneCommand {
    zone: String,
}

impl RemoveZoneCommand {
    /// Creates a command removing `zone`.
    #[must_use]
    pub fn new(zone: impl Into<String>) -> Self {
        Self { zone: zone.into() }
    }
}

impl Command for RemoveZoneCommand {
    fn name(&self) -> &'static str {
        "REMOVE_ZONE"
    }

    fn payload(&self) -> Value {
        json!(self.zone)
    }
}

/// Flashes the LED of one zone's thermostat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifyDeviceCommand {
    zone: String,
}

impl IdentifyDeviceCommand {
    /// Creates a command identifying the thermostat in `zone`.
    #[must_use]
    pub fn new(zone: impl Into<String>) -> Self {
        Self { zone: zone.into() }
    }
}

impl Command for IdentifyDeviceCommand {
    fn name(&self) -> &'static str {
        "IDENTIFY_DEV"
    }

    fn payload(&self) -> Value {
        json!(self.zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_queries() {
        assert_eq!(GetZonesCommand.envelope().to_string(), r#"{"GET_ZONES":0}"#);
        assert_eq!(
            GetDevicesCommand.envelope().to_string(),
            r#"{"GET_DEVICES":0}"#
        );
        assert_eq!(
            DevicesSnCommand.envelope().to_string(),
            r#"{"DEVICES_SN":0}"#
        );
    }

    #[test]
    fn get_device_list_takes_zone_name() {
        let cmd = GetDeviceListCommand::new("Kitchen");
        assert_eq!(
            cmd.envelope().to_string(),
            r#"{"GET_DEVICE_LIST":"Kitchen"}"#
        );
    }

    #[test]
    fn zone_title_orders_names() {
        let cmd = ZoneTitleCommand::new("Kitchen", "Scullery");
        assert_eq!(
            cmd.envelope().to_string(),
            r#"{"ZONE_TITLE":["Kitchen","Scullery"]}"#
        );
    }

    #[test]
    fn remove_and_identify() {
        assert_eq!(
            RemoveZoneCommand::new("Attic").envelope().to_string(),
            r#"{"REMOVE_ZONE":"Attic"}"#
        );
        assert_eq!(
            IdentifyDeviceCommand::new("Attic").envelope().to_string(),
            r#"{"IDENTIFY_DEV":"Attic"}"#
        );
    }
}
