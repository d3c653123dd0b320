// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Type-safe value types for the Neohub protocol.
//!
//! These types enforce the hub's value constraints at construction time,
//! so invalid values are rejected before a command is ever sent.

mod differential;
mod dst_region;
pub mod hub_time;
mod pin;
mod schedule_format;
mod temperature_unit;
mod weekday;
mod zigbee_channel;

pub use differential::SwitchingDifferential;
pub use dst_region::DstRegion;
pub use pin::Pin;
pub use schedule_format::ScheduleFormat;
pub use temperature_unit::TemperatureUnit;
pub use weekday::Weekday;
pub use zigbee_channel::ZigbeeChannel;
