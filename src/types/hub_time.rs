// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Time formats used on the wire.
//!
//! The hub is inconsistent about time: `HOLIDAY` wants a packed
//! `HHMMSSddmmYYYY` stamp, `GET_HOLIDAY` answers with a ctime-like
//! string, and live data carries clock values as `"HH:MM"` where the
//! hour field can exceed 23 (hold times go up to 99:99). The helpers in
//! this module convert between those and standard types.

use std::time::Duration;

use chrono::NaiveDateTime;

use crate::error::ParseError;

/// Format of the `GET_HOLIDAY` start/end strings.
const HOLIDAY_REPLY_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Formats a datetime as the packed stamp the `HOLIDAY` command expects.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use neohub_lib::types::hub_time;
///
/// let dt = NaiveDate::from_ymd_opt(2024, 7, 1)
///     .unwrap()
///     .and_hms_opt(16, 30, 0)
///     .unwrap();
/// assert_eq!(hub_time::holiday_arg(&dt), "16300001072024");
/// ```
#[must_use]
pub fn holiday_arg(dt: &NaiveDateTime) -> String {
    dt.format("%H%M%S%d%m%Y").to_string()
}

/// Parses a `GET_HOLIDAY` start/end string.
///
/// An empty or whitespace-only value means the boundary is not set and
/// maps to `None`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidValue`] naming `field` when the value is
/// non-empty but not in the hub's `"%a %b %d %H:%M:%S %Y"` format.
pub fn parse_holiday_stamp(
    field: &'static str,
    value: &str,
) -> Result<Option<NaiveDateTime>, ParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(trimmed, HOLIDAY_REPLY_FORMAT)
        .map(Some)
        .map_err(|e| ParseError::InvalidValue {
            field: field.to_string(),
            message: format!("'{trimmed}' is not a hub timestamp: {e}"),
        })
}

/// Parses a `"HH:MM"` clock value into a duration.
///
/// Both fields may exceed their usual clock range: hold times are
/// reported up to `"99:99"`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidValue`] naming `field` when the value is
/// not two colon-separated numbers.
pub fn parse_clock_duration(field: &'static str, value: &str) -> Result<Duration, ParseError> {
    let invalid = || ParseError::InvalidValue {
        field: field.to_string(),
        message: format!("'{value}' is not a HH:MM clock value"),
    };

    let (hours, minutes) = value.trim().split_once(':').ok_or_else(invalid)?;
    let hours: u64 = hours.parse().map_err(|_| invalid())?;
    let minutes: u64 = minutes.parse().map_err(|_| invalid())?;

    Ok(Duration::from_secs((hours * 60 + minutes) * 60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn holiday_arg_packs_fields() {
        assert_eq!(holiday_arg(&dt(2024, 12, 24, 8, 5, 30)), "08053024122024");
    }

    #[test]
    fn parse_holiday_stamp_ctime_format() {
        let parsed = parse_holiday_stamp("start", "Thu Feb 12 12:00:00 2021")
            .unwrap()
            .unwrap();
        assert_eq!(parsed, dt(2021, 2, 12, 12, 0, 0));
    }

    #[test]
    fn parse_holiday_stamp_empty_is_none() {
        assert_eq!(parse_holiday_stamp("end", "").unwrap(), None);
        assert_eq!(parse_holiday_stamp("end", "   ").unwrap(), None);
    }

    #[test]
    fn parse_holiday_stamp_garbage_names_field() {
        let err = parse_holiday_stamp("start", "not a date").unwrap_err();
        assert!(err.to_string().contains("start"));
    }

    #[test]
    fn parse_clock_duration_plain() {
        assert_eq!(
            parse_clock_duration("TIME", "14:30").unwrap(),
            Duration::from_secs(14 * 3600 + 30 * 60)
        );
    }

    #[test]
    fn parse_clock_duration_overlong_hold() {
        // HOLD_TIME can report up to 99:99.
        assert_eq!(
            parse_clock_duration("HOLD_TIME", "99:99").unwrap(),
            Duration::from_secs((99 * 60 + 99) * 60)
        );
    }

    #[test]
    fn parse_clock_duration_invalid() {
        assert!(parse_clock_duration("TIME", "14.30").is_err());
        assert!(parse_clock_duration("TIME", "soon").is_err());
        let err = parse_clock_duration("SWITCH_DELAY_LEFT", "x:y").unwrap_err();
        assert!(err.to_string().contains("SWITCH_DELAY_LEFT"));
    }
}
