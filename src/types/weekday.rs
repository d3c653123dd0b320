// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Weekday type.
//!
//! Live data reports each zone's current day of the week as a lowercase
//! day name in the `DATE` field.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Day of the week as reported by the hub.
///
/// # Examples
///
/// ```
/// use neohub_lib::types::Weekday;
///
/// let day: Weekday = "monday".parse().unwrap();
/// assert_eq!(day, Weekday::Monday);
/// assert_eq!(day.as_str(), "monday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Weekday {
    /// Returns the hub's lowercase name for this day.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            _ => Err(ValueError::InvalidWeekday(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_all_days() {
        let days = [
            ("monday", Weekday::Monday),
            ("tuesday", Weekday::Tuesday),
            ("wednesday", Weekday::Wednesday),
            ("thursday", Weekday::Thursday),
            ("friday", Weekday::Friday),
            ("saturday", Weekday::Saturday),
            ("sunday", Weekday::Sunday),
        ];
        for (name, day) in days {
            assert_eq!(name.parse::<Weekday>().unwrap(), day);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("Sunday".parse::<Weekday>().unwrap(), Weekday::Sunday);
    }

    #[test]
    fn from_str_invalid() {
        let err = "someday".parse::<Weekday>().unwrap_err();
        assert!(matches!(err, ValueError::InvalidWeekday(_)));
    }
}
