// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ZigBee channel type.
//!
//! The hub's mesh only operates on a subset of the 2.4 GHz ZigBee
//! channels. `SET_CHANNEL` rejects anything else, so the restriction is
//! enforced here before a command is built.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// A ZigBee channel accepted by the hub.
///
/// Only channels 11, 14, 15, 19, 20, 24 and 25 are allowed.
///
/// # Examples
///
/// ```
/// use neohub_lib::types::ZigbeeChannel;
///
/// let channel = ZigbeeChannel::new(14).unwrap();
/// assert_eq!(channel.value(), 14);
///
/// assert!(ZigbeeChannel::new(13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZigbeeChannel(u8);

impl ZigbeeChannel {
    /// Channels the hub will accept.
    pub const ALLOWED: [u8; 7] = [11, 14, 15, 19, 20, 24, 25];

    /// Creates a new channel value.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidZigbeeChannel`] if the channel is not
    /// one of the allowed values.
    pub fn new(channel: u8) -> Result<Self, ValueError> {
        if Self::ALLOWED.contains(&channel) {
            Ok(Self(channel))
        } else {
            Err(ValueError::InvalidZigbeeChannel(channel))
        }
    }

    /// Returns the channel number.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for ZigbeeChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for ZigbeeChannel {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for ZigbeeChannel {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channel: u8 = s
            .parse()
            .map_err(|_| ValueError::InvalidZigbeeChannel(0))?;
        Self::new(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_channels() {
        for channel in ZigbeeChannel::ALLOWED {
            assert_eq!(ZigbeeChannel::new(channel).unwrap().value(), channel);
        }
    }

    #[test]
    fn rejected_channels() {
        for channel in [0, 12, 13, 16, 21, 26] {
            assert!(ZigbeeChannel::new(channel).is_err());
        }
    }

    #[test]
    fn from_str() {
        assert_eq!("25".parse::<ZigbeeChannel>().unwrap().value(), 25);
        assert!("26".parse::<ZigbeeChannel>().is_err());
        assert!("eleven".parse::<ZigbeeChannel>().is_err());
    }
}
