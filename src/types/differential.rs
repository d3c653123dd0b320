// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switching differential type.
//!
//! The switching differential is the temperature band around the setpoint
//! within which a thermostat does not switch. The hub encodes it as a
//! small integer argument to `SET_DIFF`.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Switching differential accepted by `SET_DIFF`.
///
/// | Wire value | Meaning |
/// |------------|---------|
/// | -1 | Undocumented; observed to set the differential to 204 |
/// | 0 | 0.5 degrees |
/// | 1 | 1 degree |
/// | 2 | 2 degrees |
/// | 3 | 3 degrees |
///
/// # Examples
///
/// ```
/// use neohub_lib::types::SwitchingDifferential;
///
/// let diff = SwitchingDifferential::new(1).unwrap();
/// assert_eq!(diff.value(), 1);
///
/// assert!(SwitchingDifferential::new(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwitchingDifferential(i8);

impl SwitchingDifferential {
    /// Half a degree.
    pub const HALF_DEGREE: Self = Self(0);
    /// One degree.
    pub const ONE_DEGREE: Self = Self(1);
    /// Two degrees.
    pub const TWO_DEGREES: Self = Self(2);
    /// Three degrees.
    pub const THREE_DEGREES: Self = Self(3);

    /// Creates a new switching differential.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::OutOfRange`] if the value is outside -1..=3.
    pub fn new(value: i8) -> Result<Self, ValueError> {
        if !(-1..=3).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: -1,
                max: 3,
                actual: i32::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the wire value.
    #[must_use]
    pub const fn value(&self) -> i8 {
        self.0
    }
}

impl fmt::Display for SwitchingDifferential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SwitchingDifferential {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i8 = s.parse().map_err(|_| ValueError::OutOfRange {
            min: -1,
            max: 3,
            actual: i32::MAX,
        })?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_values() {
        for value in -1..=3 {
            assert_eq!(SwitchingDifferential::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn invalid_values() {
        assert!(SwitchingDifferential::new(-2).is_err());
        assert!(SwitchingDifferential::new(4).is_err());
    }

    #[test]
    fn constants() {
        assert_eq!(SwitchingDifferential::HALF_DEGREE.value(), 0);
        assert_eq!(SwitchingDifferential::THREE_DEGREES.value(), 3);
    }
}
