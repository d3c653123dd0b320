// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Neohub Lib - A Rust library to control Heatmiser Neohub heating systems.
//!
//! This library provides async APIs for the hub's JSON-over-TCP protocol:
//! system settings, live thermostat data, zone management, locks, frost
//! protection, holiday and away modes.
//!
//! Every call is one request/reply exchange; the library keeps no cache,
//! performs no retries and runs exactly one request per connection at a
//! time. What a method returns is a snapshot of the hub's state at fetch
//! time.
//!
//! # Quick Start
//!
//! ```no_run
//! use neohub_lib::NeoHub;
//!
//! #[tokio::main]
//! async fn main() -> neohub_lib::Result<()> {
//!     let hub = NeoHub::tcp("192.168.1.10").build();
//!
//!     let system = hub.get_system().await?;
//!     println!("hub firmware: {}", system.hub_version);
//!
//!     let (_live, thermostats) = hub.get_live_data().await?;
//!     for stat in &thermostats {
//!         println!("{}: {:.1}", stat.name(), stat.temperature());
//!         stat.identify().await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Token API
//!
//! Hubs with the token API enabled wrap every exchange in a
//! command-queue envelope. Supply the token at build time; nothing else
//! changes:
//!
//! ```no_run
//! use std::time::Duration;
//! use neohub_lib::NeoHub;
//!
//! # async fn example() -> neohub_lib::Result<()> {
//! let hub = NeoHub::tcp("192.168.1.10")
//!     .token("api-token")
//!     .timeout(Duration::from_secs(5))
//!     .build();
//!
//! hub.set_away(true).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Timeouts and cancellation
//!
//! The library enforces no timeout of its own. Set one with
//! [`NeoHubBuilder::timeout`] to bound each connect and exchange, or
//! wrap calls in the caller's own cancellation mechanism.

pub mod codec;
pub mod command;
pub mod error;
mod hub;
pub mod protocol;
pub mod response;
mod stat;
pub mod types;

pub use error::{Error, HubError, ParseError, ProtocolError, Result, ValueError};
pub use hub::{NeoHub, NeoHubBuilder};
pub use protocol::{AuthMode, Connection, Reply, TcpConfig, TcpTransport, Transport};
pub use response::{
    DeviceList, DeviceRecord, DeviceSerial, FirmwareVersion, Holiday, HolidayRecord, LiveData,
    System, SystemRecord,
};
pub use stat::NeoStat;
pub use types::{
    DstRegion, Pin, ScheduleFormat, SwitchingDifferential, TemperatureUnit, Weekday, ZigbeeChannel,
};
