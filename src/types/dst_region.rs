// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! DST region type.
//!
//! Automatic daylight-saving handling on the hub supports a fixed set of
//! regional rules. The region is sent as the payload of `DST_ON`.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Region whose daylight-saving rules the hub should follow.
///
/// # Examples
///
/// ```
/// use neohub_lib::types::DstRegion;
///
/// let region: DstRegion = "EU".parse().unwrap();
/// assert_eq!(region, DstRegion::Eu);
/// assert_eq!(region.as_str(), "EU");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DstRegion {
    /// United Kingdom dates (the hub default).
    Uk,
    /// European Union dates.
    Eu,
    /// New Zealand dates.
    Nz,
}

impl DstRegion {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uk => "UK",
            Self::Eu => "EU",
            Self::Nz => "NZ",
        }
    }
}

impl fmt::Display for DstRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DstRegion {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UK" => Ok(Self::Uk),
            "EU" => Ok(Self::Eu),
            "NZ" => Ok(Self::Nz),
            _ => Err(ValueError::InvalidDstRegion(s.to_string())),
        }
    }
}
