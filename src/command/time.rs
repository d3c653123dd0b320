// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clock and DST commands.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde_json::{Value, json};

use crate::command::Command;
use crate::types::DstRegion;

/// Sets the hub's date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use neohub_lib::command::{Command, SetDateCommand};
///
/// let cmd = SetDateCommand::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
/// assert_eq!(cmd.envelope().to_string(), r#"{"SET_DATE":[2024,7,1]}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetDateCommand {
    date: NaiveDate,
}

impl SetDateCommand {
    /// Creates a command setting the hub's date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Command for SetDateCommand {
    fn name(&self) -> &'static str {
        "SET_DATE"
    }

    fn payload(&self) -> Value {
        json!([self.date.year(), self.date.month(), self.date.day()])
    }
}

/// Sets the hub's wall-clock time.
///
/// Seconds are not transmitted; the hub only keeps hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetTimeCommand {
    time: NaiveTime,
}

impl SetTimeCommand {
    /// Creates a command setting the hub's time.
    #[must_use]
    pub const fn new(time: NaiveTime) -> Self {
        Self { time }
    }
}

impl Command for SetTimeCommand {
    fn name(&self) -> &'static str {
        "SET_TIME"
    }

    fn payload(&self) -> Value {
        json!([self.time.hour(), self.time.minute()])
    }
}

/// Manually toggles daylight-saving time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualDstCommand {
    on: bool,
}

impl ManualDstCommand {
    /// Creates a command forcing DST on or off.
    #[must_use]
    pub const fn new(on: bool) -> Self {
        Self { on }
    }
}

impl Command for ManualDstCommand {
    fn name(&self) -> &'static str {
        "MANUAL_DST"
    }

    fn payload(&self) -> Value {
        json!(i32::from(self.on))
    }
}

/// Enables or disables automatic DST handling.
///
/// When enabling, an optional [`DstRegion`] selects whose change dates
/// apply; the hub defaults to UK dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DstCommand {
    /// Enable automatic DST, optionally for a specific region.
    On(Option<DstRegion>),
    /// Disable automatic DST.
    Off,
}

impl Command for DstCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::On(_) => "DST_ON",
            Self::Off => "DST_OFF",
        }
    }

    fn payload(&self) -> Value {
        match self {
            Self::On(Some(region)) => json!(region.as_str()),
            Self::On(None) | Self::Off => json!(0),
        }
    }
}

/// Starts or stops the hub's NTP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NtpCommand {
    on: bool,
}

impl NtpCommand {
    /// Creates a command starting or stopping the NTP client.
    #[must_use]
    pub const fn new(on: bool) -> Self {
        Self { on }
    }
}

impl Command for NtpCommand {
    fn name(&self) -> &'static str {
        if self.on { "NTP_ON" } else { "NTP_OFF" }
    }

    fn payload(&self) -> Value {
        json!(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_time_drops_seconds() {
        let cmd = SetTimeCommand::new(NaiveTime::from_hms_opt(9, 41, 59).unwrap());
        assert_eq!(cmd.envelope().to_string(), r#"{"SET_TIME":[9,41]}"#);
    }

    #[test]
    fn manual_dst_sends_integer() {
        assert_eq!(
            ManualDstCommand::new(true).envelope().to_string(),
            r#"{"MANUAL_DST":1}"#
        );
        assert_eq!(
            ManualDstCommand::new(false).envelope().to_string(),
            r#"{"MANUAL_DST":0}"#
        );
    }

    #[test]
    fn dst_on_with_region() {
        let cmd = DstCommand::On(Some(DstRegion::Nz));
        assert_eq!(cmd.envelope().to_string(), r#"{"DST_ON":"NZ"}"#);
    }

    #[test]
    fn dst_on_without_region() {
        assert_eq!(
            DstCommand::On(None).envelope().to_string(),
            r#"{"DST_ON":0}"#
        );
    }

    #[test]
    fn dst_off() {
        assert_eq!(DstCommand::Off.envelope().to_string(), r#"{"DST_OFF":0}"#);
    }

    #[test]
    fn ntp_command_names() {
        assert_eq!(NtpCommand::new(true).name(), "NTP_ON");
        assert_eq!(NtpCommand::new(false).name(), "NTP_OFF");
    }
}
