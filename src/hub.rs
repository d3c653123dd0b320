// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level hub facade.
//!
//! [`NeoHub`] exposes one async method per hub command. Each method
//! builds the command envelope, runs one request/reply exchange on the
//! transport and maps the reply into a typed record. Methods share
//! nothing but the transport; every call is an independent snapshot of
//! the hub's state.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::json;
use tokio::sync::OnceCell;

use crate::codec;
use crate::command::{
    AwayCommand, CancelHolidayCommand, Command, DevicesSnCommand, DstCommand, FirmwareCommand,
    FrostCommand, GetDeviceListCommand, GetDevicesCommand, GetHolidayCommand, GetLiveDataCommand,
    GetSystemCommand, GetZonesCommand, IdentifyCommand, IdentifyDeviceCommand, LockCommand,
    ManualDstCommand, NtpCommand, PermitJoinCommand, RemoveZoneCommand, ResetCommand,
    SetChannelCommand, SetDateCommand, SetDiffCommand, SetFormatCommand, SetHolidayCommand,
    SetTargetTemperatureCommand, SetTempFormatCommand, SetTimeCommand, TimerHoldCommand,
    UnlockCommand, ViewRocCommand, ZoneTitleCommand,
};
use crate::error::{ParseError, Result};
use crate::protocol::{Reply, TcpConfig, TcpTransport, Transport};
use crate::response::{
    DeviceList, DeviceSerial, FirmwareVersion, Holiday, HolidayRecord, LiveData, System,
    SystemRecord,
};
use crate::stat::NeoStat;
use crate::types::{
    DstRegion, Pin, ScheduleFormat, SwitchingDifferential, TemperatureUnit, ZigbeeChannel,
};

/// Firmware version that introduced half-degree setpoint steps.
const HALF_DEGREE_FIRMWARE: u32 = 2135;

/// Firmware version that introduced the `RESET` command.
const RESET_FIRMWARE: u32 = 2027;

/// A Heatmiser Neohub.
///
/// The facade is generic over its [`Transport`]; [`NeoHub::tcp`] builds
/// the stock TCP variant.
///
/// One request is in flight per transport at a time. Calls on a
/// per-call transport each use their own connection and may run in
/// parallel; calls on a persistent transport are serialized internally.
///
/// # Examples
///
/// ```no_run
/// use neohub_lib::NeoHub;
///
/// #[tokio::main]
/// async fn main() -> neohub_lib::Result<()> {
///     let hub = NeoHub::tcp("192.168.1.10").build();
///
///     let system = hub.get_system().await?;
///     println!("firmware {}", system.hub_version);
///
///     let (_live, thermostats) = hub.get_live_data().await?;
///     for stat in &thermostats {
///         println!("{}: {:.1}", stat.name(), stat.temperature());
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct NeoHub<T: Transport = TcpTransport> {
    transport: T,
    temperature_step: OnceCell<f64>,
}

impl NeoHub<TcpTransport> {
    /// Starts building a hub reachable over TCP.
    #[must_use]
    pub fn tcp(host: impl Into<String>) -> NeoHubBuilder {
        NeoHubBuilder {
            config: TcpConfig::new(host),
        }
    }
}

impl<T: Transport> NeoHub<T> {
    /// Creates a hub facade over an existing transport.
    #[must_use]
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            temperature_step: OnceCell::new(),
        }
    }

    /// Sends a command and returns the decoded reply.
    ///
    /// This is the escape hatch for commands the typed methods do not
    /// cover. A reply carrying the hub's `error` payload is converted
    /// into [`HubError::Rejected`](crate::error::HubError::Rejected).
    ///
    /// # Errors
    ///
    /// Returns transport, parse or hub errors from the exchange.
    pub async fn send_command<C: Command + Sync>(&self, command: &C) -> Result<Reply> {
        tracing::debug!(command = command.name(), "Sending command");
        let reply = self.transport.roundtrip(&command.envelope()).await?;
        if let Some(err) = codec::hub_error(reply.value()) {
            return Err(err.into());
        }
        Ok(reply)
    }

    // ========== Hub-wide queries ==========

    /// Returns the hub's firmware version.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange or mapping fails.
    pub async fn firmware(&self) -> Result<u32> {
        let reply = self.send_command(&FirmwareCommand).await?;
        let version: FirmwareVersion = reply.parse()?;
        Ok(version.version())
    }

    /// Returns the hub's system-wide settings.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange or mapping fails, including a
    /// [`ValueError`](crate::error::ValueError) when the hub reports a
    /// schedule format or temperature unit this library does not know.
    pub async fn get_system(&self) -> Result<System> {
        let reply = self.send_command(&GetSystemCommand).await?;
        let record: SystemRecord = reply.parse()?;
        System::try_from(record)
    }

    /// Returns the hub's setpoint step in degrees.
    ///
    /// Firmware 2135 and later step in half degrees, older firmware in
    /// whole degrees. The result is queried once and cached for the
    /// lifetime of this facade.
    ///
    /// # Errors
    ///
    /// Returns error if the firmware query fails.
    pub async fn target_temperature_step(&self) -> Result<f64> {
        self.temperature_step
            .get_or_try_init(|| async {
                let firmware = self.firmware().await?;
                Ok(if firmware >= HALF_DEGREE_FIRMWARE {
                    0.5
                } else {
                    1.0
                })
            })
            .await
            .copied()
    }

    /// Returns live data for the hub and a handle per thermostat.
    ///
    /// Non-thermostat devices (time clocks, sensors) stay in the
    /// returned [`LiveData`] but get no [`NeoStat`] handle.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange or mapping fails.
    pub async fn get_live_data(&self) -> Result<(LiveData, Vec<NeoStat<'_, T>>)> {
        let reply = self.send_command(&GetLiveDataCommand).await?;
        let live: LiveData = reply.parse()?;

        let mut thermostats = Vec::new();
        for record in live.thermostats() {
            thermostats.push(NeoStat::from_record(self, record.clone())?);
        }
        Ok((live, thermostats))
    }

    // ========== Hub-wide settings ==========

    /// Reboots the hub.
    ///
    /// Returns `false` without sending anything when the firmware is too
    /// old to support `RESET`, `true` once the hub confirms it is
    /// restarting.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn reset(&self) -> Result<bool> {
        if self.firmware().await? < RESET_FIRMWARE {
            return Ok(false);
        }
        let reply = self.send_command(&ResetCommand).await?;
        reply.expect(&json!({"Restarting": 1}))?;
        Ok(true)
    }

    /// Moves the hub's mesh to another ZigBee channel.
    ///
    /// The change takes a while to propagate through the mesh.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_channel(&self, channel: ZigbeeChannel) -> Result<()> {
        let reply = self.send_command(&SetChannelCommand::new(channel)).await?;
        reply.expect_result("Trying to change channel")
    }

    /// Sets the temperature display unit.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_temp_format(&self, unit: TemperatureUnit) -> Result<()> {
        let reply = self.send_command(&SetTempFormatCommand::new(unit)).await?;
        reply.expect_result(&format!("Temperature format set to {unit}"))
    }

    /// Sets the schedule format for all zones.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_format(&self, format: ScheduleFormat) -> Result<()> {
        let reply = self.send_command(&SetFormatCommand::new(format)).await?;
        reply.expect_result("Format was set")
    }

    /// Enables or disables away mode for all devices.
    ///
    /// Thermostats go into frost mode, time clocks switch off. Prefer
    /// [`set_frost`](Self::set_frost) for individual zones.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_away(&self, on: bool) -> Result<()> {
        let reply = self.send_command(&AwayCommand::new(on)).await?;
        reply.expect_result(if on { "away on" } else { "away off" })
    }

    /// Flashes the hub's LED.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn identify(&self) -> Result<()> {
        let reply = self.send_command(&IdentifyCommand).await?;
        reply.expect_result("flashing led")
    }

    // ========== Holiday ==========

    /// Schedules holiday mode between two datetimes.
    ///
    /// The hub's confirmation payload varies between firmware versions,
    /// so the raw reply is returned.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails.
    pub async fn set_holiday(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Reply> {
        self.send_command(&SetHolidayCommand::new(start, end)).await
    }

    /// Returns the currently scheduled holiday.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange or mapping fails.
    pub async fn get_holiday(&self) -> Result<Holiday> {
        let reply = self.send_command(&GetHolidayCommand).await?;
        let record: HolidayRecord = reply.parse()?;
        Holiday::try_from(record)
    }

    /// Cancels the scheduled holiday.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn cancel_holiday(&self) -> Result<()> {
        let reply = self.send_command(&CancelHolidayCommand).await?;
        reply.expect_result("holiday cancelled")
    }

    // ========== Zone inventory ==========

    /// Returns the zones known to the hub and their ids.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange or mapping fails.
    pub async fn get_zones(&self) -> Result<BTreeMap<String, i64>> {
        let reply = self.send_command(&GetZonesCommand).await?;
        reply.parse()
    }

    /// Returns the names of attached devices.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange or mapping fails.
    pub async fn get_devices(&self) -> Result<Vec<String>> {
        let reply = self.send_command(&GetDevicesCommand).await?;
        let list: DeviceList = reply.parse()?;
        Ok(list.result)
    }

    /// Returns the devices associated with one zone.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails, if the hub rejects the zone,
    /// or if the reply lacks the zone's entry.
    pub async fn get_device_list(&self, zone: &str) -> Result<Vec<String>> {
        let reply = self.send_command(&GetDeviceListCommand::new(zone)).await?;
        let devices = reply
            .value()
            .get(zone)
            .ok_or_else(|| ParseError::MissingField(zone.to_string()))?;
        serde_json::from_value(devices.clone()).map_err(|e| ParseError::Json(e).into())
    }

    /// Returns the serial numbers of attached devices, keyed by name.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange or mapping fails.
    pub async fn devices_sn(&self) -> Result<BTreeMap<String, DeviceSerial>> {
        let reply = self.send_command(&DevicesSnCommand).await?;
        reply.parse()
    }

    /// Opens the mesh for a new thermostat to join as zone `name`.
    ///
    /// Joining is confirmed on the thermostat itself; the discovery
    /// window closes after `timeout_s` seconds.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn permit_join(&self, name: &str, timeout_s: u32) -> Result<()> {
        let reply = self
            .send_command(&PermitJoinCommand::new(name, timeout_s))
            .await?;
        reply.expect_result("network allows joining")
    }

    /// Renames a zone.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn rename_zone(&self, current: &str, new: &str) -> Result<()> {
        let reply = self.send_command(&ZoneTitleCommand::new(current, new)).await?;
        reply.expect_result("zone renamed")
    }

    /// Removes a zone from the hub.
    ///
    /// The thermostat disconnects a few seconds later; inventory queries
    /// issued within that window may still list the zone.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn remove_zone(&self, zone: &str) -> Result<()> {
        let reply = self.send_command(&RemoveZoneCommand::new(zone)).await?;
        reply.expect_result("zone removed")
    }

    /// Flashes the LED of one zone's thermostat.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn identify_device(&self, zone: &str) -> Result<()> {
        let reply = self.send_command(&IdentifyDeviceCommand::new(zone)).await?;
        reply.expect_result("Device identifying")
    }

    // ========== Clock ==========

    /// Starts or stops the hub's NTP client.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_ntp(&self, on: bool) -> Result<()> {
        let reply = self.send_command(&NtpCommand::new(on)).await?;
        reply.expect_result(if on {
            "ntp client started"
        } else {
            "ntp client stopped"
        })
    }

    /// Sets the hub's date.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_date(&self, date: NaiveDate) -> Result<()> {
        let reply = self.send_command(&SetDateCommand::new(date)).await?;
        reply.expect_result("Date is set")
    }

    /// Sets the hub's wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_time(&self, time: NaiveTime) -> Result<()> {
        let reply = self.send_command(&SetTimeCommand::new(time)).await?;
        reply.expect_result("time set")
    }

    /// Sets the hub's date and time in two exchanges.
    ///
    /// # Errors
    ///
    /// Returns error if either exchange fails; the date may already be
    /// set when the time exchange fails.
    pub async fn set_datetime(&self, datetime: NaiveDateTime) -> Result<()> {
        self.set_date(datetime.date()).await?;
        self.set_time(datetime.time()).await
    }

    /// Manually forces daylight-saving time on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn manual_dst(&self, on: bool) -> Result<()> {
        let reply = self.send_command(&ManualDstCommand::new(on)).await?;
        reply.expect_result("Updated time")
    }

    /// Enables or disables automatic DST handling.
    ///
    /// When enabling, `region` selects whose change dates apply; the hub
    /// defaults to UK dates.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_dst(&self, on: bool, region: Option<DstRegion>) -> Result<()> {
        let command = if on {
            DstCommand::On(region)
        } else {
            DstCommand::Off
        };
        let reply = self.send_command(&command).await?;
        reply.expect_result(if on { "dst on" } else { "dst off" })
    }

    // ========== Thermostats ==========

    /// PIN-locks the named zones.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_lock(&self, pin: Pin, zones: &[impl AsRef<str> + Sync]) -> Result<()> {
        let reply = self.send_command(&LockCommand::new(pin, zones)).await?;
        reply.expect_result("locked")
    }

    /// Unlocks the named zones.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn unlock(&self, zones: &[impl AsRef<str> + Sync]) -> Result<()> {
        let reply = self.send_command(&UnlockCommand::new(zones)).await?;
        reply.expect_result("unlocked")
    }

    /// Enables or disables frost protection for the named zones.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_frost(&self, on: bool, zones: &[impl AsRef<str> + Sync]) -> Result<()> {
        let reply = self.send_command(&FrostCommand::new(on, zones)).await?;
        reply.expect_result(if on { "frost on" } else { "frost off" })
    }

    /// Overrides the target temperature of the named zones.
    ///
    /// The override lasts until the next comfort level. The value is
    /// passed through as-is; the hub enforces its own limits.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_target_temperature(
        &self,
        temperature: f64,
        zones: &[impl AsRef<str> + Sync],
    ) -> Result<()> {
        let reply = self
            .send_command(&SetTargetTemperatureCommand::new(temperature, zones))
            .await?;
        reply.expect_result("temperature was set")
    }

    /// Sets the switching differential of the named zones.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_diff(
        &self,
        differential: SwitchingDifferential,
        zones: &[impl AsRef<str> + Sync],
    ) -> Result<()> {
        let reply = self
            .send_command(&SetDiffCommand::new(differential, zones))
            .await?;
        reply.expect_result("switching differential was set")
    }

    /// Returns minutes per degree of temperature change, keyed by zone.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange or mapping fails.
    pub async fn rate_of_change(
        &self,
        zones: &[impl AsRef<str> + Sync],
    ) -> Result<BTreeMap<String, f64>> {
        let reply = self.send_command(&ViewRocCommand::new(zones)).await?;
        reply.parse()
    }

    /// Holds the output of the named time clocks on or off.
    ///
    /// Only affects devices running in time clock mode.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_timer_hold(
        &self,
        on: bool,
        minutes: u32,
        zones: &[impl AsRef<str> + Sync],
    ) -> Result<()> {
        let reply = self
            .send_command(&TimerHoldCommand::new(on, minutes, zones))
            .await?;
        reply.expect_result(if on { "timer hold on" } else { "timer hold off" })
    }
}

/// Builder for a [`NeoHub`] over TCP.
///
/// Created by [`NeoHub::tcp`].
#[derive(Debug)]
pub struct NeoHubBuilder {
    config: TcpConfig,
}

impl NeoHubBuilder {
    /// Sets a custom port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Authenticates requests with the hub's API token.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config = self.config.with_token(token);
        self
    }

    /// Bounds connect and request/reply exchanges with a timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Holds one connection open instead of dialing per command.
    #[must_use]
    pub fn persistent(mut self, persistent: bool) -> Self {
        self.config = self.config.persistent(persistent);
        self
    }

    /// Builds the hub facade.
    #[must_use]
    pub fn build(self) -> NeoHub<TcpTransport> {
        NeoHub::with_transport(self.config.into_transport())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_configures_transport() {
        let hub = NeoHub::tcp("192.168.1.10")
            .port(4243)
            .token("secret")
            .timeout(Duration::from_secs(2))
            .persistent(true)
            .build();

        let config = hub.transport.config();
        assert_eq!(config.addr(), "192.168.1.10:4243");
        assert!(config.is_persistent());
        assert_eq!(config.timeout(), Some(Duration::from_secs(2)));
    }
}
