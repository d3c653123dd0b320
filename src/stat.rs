// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat zone handle.
//!
//! A [`NeoStat`] pairs one device's live-data snapshot with the hub it
//! came from, so zone-scoped commands can be issued without repeating
//! the zone name.

use std::time::Duration;

use crate::error::{ParseError, Result};
use crate::protocol::Transport;
use crate::response::DeviceRecord;
use crate::types::{Pin, SwitchingDifferential, Weekday, hub_time};
use crate::NeoHub;

/// One thermostat zone, as seen in a live-data snapshot.
///
/// The readings are a snapshot taken at fetch time and never refresh
/// themselves; fetch live data again for current values. Commands issued
/// through this handle go to the hub immediately.
///
/// # Examples
///
/// ```no_run
/// use neohub_lib::NeoHub;
///
/// # async fn example() -> neohub_lib::Result<()> {
/// let hub = NeoHub::tcp("192.168.1.10").build();
/// let (_live, thermostats) = hub.get_live_data().await?;
///
/// for stat in &thermostats {
///     println!("{}: {:.1} -> {:.1}", stat.name(), stat.temperature(), stat.target_temperature());
///     if stat.temperature() < 5.0 {
///         stat.identify().await?;
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NeoStat<'h, T: Transport> {
    hub: &'h NeoHub<T>,
    record: DeviceRecord,
    temperature: f64,
    target_temperature: f64,
    weekday: Weekday,
    hold_time: Duration,
    switch_delay_left: Duration,
    time_of_day: Duration,
    pin_number: u16,
}

impl<'h, T: Transport> NeoStat<'h, T> {
    /// Maps a live-data device record into a zone handle.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] when a temperature or clock
    /// field does not parse, and [`ValueError`](crate::error::ValueError)
    /// when the weekday is unrecognized.
    pub fn from_record(hub: &'h NeoHub<T>, record: DeviceRecord) -> Result<Self> {
        let temperature = parse_temperature("ACTUAL_TEMP", &record.actual_temp)?;
        let target_temperature = parse_temperature("SET_TEMP", &record.set_temp)?;
        let weekday: Weekday = record.date.parse()?;
        let hold_time = hub_time::parse_clock_duration("HOLD_TIME", &record.hold_time)?;
        let switch_delay_left =
            hub_time::parse_clock_duration("SWITCH_DELAY_LEFT", &record.switch_delay_left)?;
        let time_of_day = hub_time::parse_clock_duration("TIME", &record.time)?;
        let pin_number =
            record
                .pin_number
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidValue {
                    field: "PIN_NUMBER".to_string(),
                    message: format!("'{}' is not a PIN", record.pin_number),
                })?;

        Ok(Self {
            hub,
            record,
            temperature,
            target_temperature,
            weekday,
            hold_time,
            switch_delay_left,
            time_of_day,
            pin_number,
        })
    }

    // ========== Snapshot accessors ==========

    /// Zone name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.zone_name
    }

    /// Measured temperature at fetch time.
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Target temperature at fetch time.
    #[must_use]
    pub const fn target_temperature(&self) -> f64 {
        self.target_temperature
    }

    /// Day of the week on the device's clock.
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Remaining hold time.
    #[must_use]
    pub const fn hold_time(&self) -> Duration {
        self.hold_time
    }

    /// Remaining switch delay.
    #[must_use]
    pub const fn switch_delay_left(&self) -> Duration {
        self.switch_delay_left
    }

    /// Wall-clock time on the device, as a duration since midnight.
    #[must_use]
    pub const fn time_of_day(&self) -> Duration {
        self.time_of_day
    }

    /// Configured lock PIN.
    #[must_use]
    pub const fn pin_number(&self) -> u16 {
        self.pin_number
    }

    /// Whether the thermostat is PIN locked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.record.lock
    }

    /// Whether the device has dropped off the mesh.
    #[must_use]
    pub const fn is_offline(&self) -> bool {
        self.record.offline
    }

    /// Whether the device is in standby.
    #[must_use]
    pub const fn is_standby(&self) -> bool {
        self.record.standby
    }

    /// Whether the heating output is on.
    #[must_use]
    pub const fn heat_on(&self) -> bool {
        self.record.heat_on
    }

    /// Whether the battery is low.
    #[must_use]
    pub const fn low_battery(&self) -> bool {
        self.record.low_battery
    }

    /// Whether away mode applies to this zone.
    #[must_use]
    pub const fn away(&self) -> bool {
        self.record.away
    }

    /// Whether an open window has paused heating.
    #[must_use]
    pub const fn window_open(&self) -> bool {
        self.record.window_open
    }

    /// The full wire record behind this handle.
    #[must_use]
    pub const fn record(&self) -> &DeviceRecord {
        &self.record
    }

    // ========== Zone commands ==========

    /// Flashes this thermostat's LED.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn identify(&self) -> Result<()> {
        self.hub.identify_device(self.name()).await
    }

    /// Renames this zone.
    ///
    /// The snapshot keeps the old name; fetch live data again for the
    /// new one.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn rename(&self, new_name: &str) -> Result<()> {
        self.hub.rename_zone(self.name(), new_name).await
    }

    /// Removes this zone from the hub.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn remove(&self) -> Result<()> {
        self.hub.remove_zone(self.name()).await
    }

    /// PIN-locks this thermostat.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_lock(&self, pin: Pin) -> Result<()> {
        self.hub.set_lock(pin, &[self.name()]).await
    }

    /// Unlocks this thermostat.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn unlock(&self) -> Result<()> {
        self.hub.unlock(&[self.name()]).await
    }

    /// Enables or disables frost protection for this zone.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_frost(&self, on: bool) -> Result<()> {
        self.hub.set_frost(on, &[self.name()]).await
    }

    /// Overrides this zone's target temperature.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_target_temperature(&self, temperature: f64) -> Result<()> {
        self.hub
            .set_target_temperature(temperature, &[self.name()])
            .await
    }

    /// Sets this zone's switching differential.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_diff(&self, differential: SwitchingDifferential) -> Result<()> {
        self.hub.set_diff(differential, &[self.name()]).await
    }

    /// Returns minutes per degree of temperature change for this zone.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the reply lacks this zone.
    pub async fn rate_of_change(&self) -> Result<f64> {
        let rates = self.hub.rate_of_change(&[self.name()]).await?;
        rates
            .get(self.name())
            .copied()
            .ok_or_else(|| ParseError::MissingField(self.name().to_string()).into())
    }

    /// Holds this time clock's output on or off for a duration.
    ///
    /// Only meaningful for devices running in time clock mode.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails or the hub does not confirm.
    pub async fn set_timer_hold(&self, on: bool, minutes: u32) -> Result<()> {
        self.hub.set_timer_hold(on, minutes, &[self.name()]).await
    }
}

fn parse_temperature(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| {
            ParseError::InvalidValue {
                field: field.to_string(),
                message: format!("'{value}' is not a temperature"),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_temperature_accepts_decimal_strings() {
        assert_eq!(parse_temperature("ACTUAL_TEMP", "21.5").unwrap(), 21.5);
        assert_eq!(parse_temperature("ACTUAL_TEMP", " 19 ").unwrap(), 19.0);
    }

    #[test]
    fn parse_temperature_names_field() {
        let err = parse_temperature("SET_TEMP", "warm").unwrap_err();
        assert!(err.to_string().contains("SET_TEMP"));
    }
}
