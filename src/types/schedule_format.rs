// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedule format type.
//!
//! The hub reports its programming mode as a small integer and accepts
//! the same integer in `SET_FORMAT`. This module provides a type-safe
//! representation with explicit wire conversion.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Programming mode of the hub's schedules.
///
/// | Wire value | Variant | Meaning |
/// |------------|---------|---------|
/// | 0 | `NonProgrammable` | No program (time clocks cannot use this) |
/// | 1 | `TwentyFourHour` | Same program every day of the week |
/// | 2 | `FiveTwo` | One program for weekdays, one for the weekend |
/// | 4 | `SevenDay` | A different program for every day |
///
/// # Examples
///
/// ```
/// use neohub_lib::types::ScheduleFormat;
///
/// let format = ScheduleFormat::from_wire(2).unwrap();
/// assert_eq!(format, ScheduleFormat::FiveTwo);
/// assert_eq!(format.as_wire(), 2);
///
/// // Unknown wire values are an error, never silently defaulted.
/// assert!(ScheduleFormat::from_wire(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleFormat {
    /// Non-programmable mode.
    NonProgrammable,
    /// The same program is used every day of the week.
    TwentyFourHour,
    /// One program for the five weekdays, another for the two weekend days.
    FiveTwo,
    /// A different program for every day of the week.
    SevenDay,
}

impl ScheduleFormat {
    /// Converts the hub's wire integer into a schedule format.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidScheduleFormat`] for any integer the
    /// hub does not document (including 3, which is unused).
    pub fn from_wire(value: i64) -> Result<Self, ValueError> {
        match value {
            0 => Ok(Self::NonProgrammable),
            1 => Ok(Self::TwentyFourHour),
            2 => Ok(Self::FiveTwo),
            4 => Ok(Self::SevenDay),
            other => Err(ValueError::InvalidScheduleFormat(other.to_string())),
        }
    }

    /// Returns the integer the hub uses for this format.
    #[must_use]
    pub const fn as_wire(&self) -> u8 {
        match self {
            Self::NonProgrammable => 0,
            Self::TwentyFourHour => 1,
            Self::FiveTwo => 2,
            Self::SevenDay => 4,
        }
    }

    /// Returns the vendor's name for this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NonProgrammable => "NONPROGRAMMABLE",
            Self::TwentyFourHour => "24HOURSFIXED",
            Self::FiveTwo => "5DAY/2DAY",
            Self::SevenDay => "7DAY",
        }
    }
}

impl fmt::Display for ScheduleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScheduleFormat {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NONPROGRAMMABLE" | "0" => Ok(Self::NonProgrammable),
            "24HOURSFIXED" | "24H" | "1" => Ok(Self::TwentyFourHour),
            "5DAY/2DAY" | "5/2" | "2" => Ok(Self::FiveTwo),
            "7DAY" | "4" => Ok(Self::SevenDay),
            _ => Err(ValueError::InvalidScheduleFormat(s.to_string())),
        }
    }
}

impl serde::Serialize for ScheduleFormat {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_wire_known_values() {
        assert_eq!(
            ScheduleFormat::from_wire(0).unwrap(),
            ScheduleFormat::NonProgrammable
        );
        assert_eq!(
            ScheduleFormat::from_wire(1).unwrap(),
            ScheduleFormat::TwentyFourHour
        );
        assert_eq!(ScheduleFormat::from_wire(2).unwrap(), ScheduleFormat::FiveTwo);
        assert_eq!(ScheduleFormat::from_wire(4).unwrap(), ScheduleFormat::SevenDay);
    }

    #[test]
    fn from_wire_unknown_value() {
        let err = ScheduleFormat::from_wire(3).unwrap_err();
        assert!(matches!(err, ValueError::InvalidScheduleFormat(_)));
        assert_eq!(err.to_string(), "unrecognized schedule format: 3");
    }

    #[test]
    fn wire_round_trip() {
        for format in [
            ScheduleFormat::NonProgrammable,
            ScheduleFormat::TwentyFourHour,
            ScheduleFormat::FiveTwo,
            ScheduleFormat::SevenDay,
        ] {
            assert_eq!(
                ScheduleFormat::from_wire(i64::from(format.as_wire())).unwrap(),
                format
            );
        }
    }

    #[test]
    fn display_uses_vendor_names() {
        assert_eq!(ScheduleFormat::FiveTwo.to_string(), "5DAY/2DAY");
        assert_eq!(ScheduleFormat::SevenDay.to_string(), "7DAY");
    }

    #[test]
    fn from_str_accepts_names_and_numbers() {
        assert_eq!(
            "7day".parse::<ScheduleFormat>().unwrap(),
            ScheduleFormat::SevenDay
        );
        assert_eq!(
            "2".parse::<ScheduleFormat>().unwrap(),
            ScheduleFormat::FiveTwo
        );
        assert!("3day".parse::<ScheduleFormat>().is_err());
    }
}
