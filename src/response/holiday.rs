// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Holiday replies.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::hub_time;

/// Raw `GET_HOLIDAY` reply as it appears on the wire.
///
/// Start and end are ctime-like strings, empty when the boundary is not
/// set. Use [`Holiday::try_from`] to get parsed datetimes.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayRecord {
    /// Beginning of the holiday.
    #[serde(default)]
    pub start: Option<String>,

    /// End of the holiday.
    #[serde(default)]
    pub end: Option<String>,

    /// Devices that have the holiday set up.
    #[serde(default)]
    pub ids: Vec<serde_json::Value>,
}

/// The hub's scheduled holiday.
#[derive(Debug, Clone, Serialize)]
pub struct Holiday {
    /// Beginning of the holiday, if set.
    pub start: Option<NaiveDateTime>,
    /// End of the holiday, if set.
    pub end: Option<NaiveDateTime>,
    /// Devices that have the holiday set up.
    pub ids: Vec<serde_json::Value>,
}

impl TryFrom<HolidayRecord> for Holiday {
    type Error = Error;

    fn try_from(record: HolidayRecord) -> Result<Self, Self::Error> {
        let start = match record.start.as_deref() {
            Some(raw) => hub_time::parse_holiday_stamp("start", raw)?,
            None => None,
        };
        let end = match record.end.as_deref() {
            Some(raw) => hub_time::parse_holiday_stamp("end", raw)?,
            None => None,
        };

        Ok(Self {
            start,
            end,
            ids: record.ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn holiday_with_both_bounds() {
        let record: HolidayRecord = serde_json::from_value(json!({
            "start": "Mon Jul 01 12:00:00 2024",
            "end": "Sun Jul 14 18:00:00 2024",
            "ids": [1, 2],
        }))
        .unwrap();

        let holiday = Holiday::try_from(record).unwrap();
        assert_eq!(
            holiday.start.unwrap(),
            NaiveDate::from_ymd_opt(2024, 7, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        );
        assert_eq!(holiday.ids.len(), 2);
    }

    #[test]
    fn holiday_with_empty_start() {
        let record: HolidayRecord = serde_json::from_value(json!({
            "start": "",
            "end": "Sun Jul 14 18:00:00 2024",
        }))
        .unwrap();

        let holiday = Holiday::try_from(record).unwrap();
        assert!(holiday.start.is_none());
        assert!(holiday.end.is_some());
    }

    #[test]
    fn holiday_with_garbage_stamp() {
        let record: HolidayRecord = serde_json::from_value(json!({
            "start": "tomorrow-ish",
            "end": "",
        }))
        .unwrap();

        let err = Holiday::try_from(record).unwrap_err();
        assert!(err.to_string().contains("start"));
    }
}
