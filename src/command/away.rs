// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Away and holiday commands.
//!
//! Away mode puts every thermostat into frost protection and switches
//! time clocks off. Holiday mode does the same between two datetimes.

use chrono::NaiveDateTime;
use serde_json::{Value, json};

use crate::command::Command;
use crate::types::hub_time;

/// Enables or disables away mode for all devices.
///
/// The set of affected devices can be restricted on the hub with its
/// `GLOBAL_DEV_LIST` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwayCommand {
    on: bool,
}

impl AwayCommand {
    /// Creates a command switching away mode.
    #[must_use]
    pub const fn new(on: bool) -> Self {
        Self { on }
    }
}

impl Command for AwayCommand {
    fn name(&self) -> &'static str {
        if self.on { "AWAY_ON" } else { "AWAY_OFF" }
    }

    fn payload(&self) -> Value {
        json!(0)
    }
}

/// Schedules holiday mode between two datetimes.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use neohub_lib::command::{Command, SetHolidayCommand};
///
/// let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 7, 14).unwrap().and_hms_opt(18, 0, 0).unwrap();
/// let cmd = SetHolidayCommand::new(start, end);
/// assert_eq!(
///     cmd.envelope().to_string(),
///     r#"{"HOLIDAY":["12000001072024","18000014072024"]}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetHolidayCommand {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl SetHolidayCommand {
    /// Creates a command scheduling a holiday from `start` to `end`.
    #[must_use]
    pub const fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }
}

impl Command for SetHolidayCommand {
    fn name(&self) -> &'static str {
        "HOLIDAY"
    }

    fn payload(&self) -> Value {
        json!([
            hub_time::holiday_arg(&self.start),
            hub_time::holiday_arg(&self.end)
        ])
    }
}

/// Queries the currently scheduled holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetHolidayCommand;

impl Command for GetHolidayCommand {
    fn name(&self) -> &'static str {
        "GET_HOLIDAY"
    }

    fn payload(&self) -> Value {
        json!(0)
    }
}

/// Cancels the scheduled holiday and returns to the normal program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelHolidayCommand;

impl Command for CancelHolidayCommand {
    fn name(&self) -> &'static str {
        "CANCEL_HOLIDAY"
    }

    fn payload(&self) -> Value {
        json!(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn away_command_names() {
        assert_eq!(AwayCommand::new(true).name(), "AWAY_ON");
        assert_eq!(AwayCommand::new(false).name(), "AWAY_OFF");
        assert_eq!(AwayCommand::new(true).payload(), json!(0));
    }

    #[test]
    fn holiday_query_commands() {
        assert_eq!(
            GetHolidayCommand.envelope().to_string(),
            r#"{"GET_HOLIDAY":0}"#
        );
        assert_eq!(
            CancelHolidayCommand.envelope().to_string(),
            r#"{"CANCEL_HOLIDAY":0}"#
        );
    }
}
