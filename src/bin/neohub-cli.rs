// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command-line tool for Heatmiser Neohub hubs.
//!
//! One subcommand per hub command. Connection settings come from flags,
//! environment variables or a TOML config file, in that order of
//! precedence.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use neohub_lib::types::{
    DstRegion, Pin, ScheduleFormat, SwitchingDifferential, TemperatureUnit, ZigbeeChannel,
};
use neohub_lib::{NeoHub, TcpTransport};

#[derive(Parser)]
#[command(name = "neohub-cli")]
#[command(author, version, about = "CLI to Heatmiser Neohub hubs")]
#[command(propagate_version = true)]
struct Cli {
    /// Hub host name or IP address
    #[arg(long, env = "NEOHUB_HOST")]
    host: Option<String>,

    /// Hub port
    #[arg(long, env = "NEOHUB_PORT")]
    port: Option<u16>,

    /// API token, for hubs with the token API enabled
    #[arg(long, env = "NEOHUB_TOKEN")]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Configuration file path
    #[arg(long, env = "NEOHUB_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the hub's firmware version
    Firmware,

    /// Show system-wide settings
    GetSystem,

    /// Show the hub's setpoint step in degrees
    TargetTemperatureStep,

    /// Reboot the hub
    Reset,

    /// Move the mesh to another ZigBee channel (11, 14, 15, 19, 20, 24, 25)
    SetChannel {
        /// Channel number
        channel: ZigbeeChannel,
    },

    /// Set the temperature display unit
    SetTempFormat {
        /// C or F
        unit: TemperatureUnit,
    },

    /// Set the schedule format for all zones
    SetFormat {
        /// NONPROGRAMMABLE, 24HOURSFIXED, 5DAY/2DAY or 7DAY
        format: ScheduleFormat,
    },

    /// Enable or disable away mode for all devices
    SetAway {
        /// true or false
        on: bool,
    },

    /// Schedule holiday mode
    Holiday {
        /// Start, e.g. "2024-07-01 12:00"
        start: String,

        /// End, e.g. "2024-07-14 18:00"
        end: String,
    },

    /// Show the scheduled holiday
    GetHoliday,

    /// Cancel the scheduled holiday
    CancelHoliday,

    /// List zones and their ids
    GetZones,

    /// List device names
    GetDevices,

    /// List the devices of one zone
    GetDeviceList {
        /// Zone name
        zone: String,
    },

    /// List device serial numbers
    DevicesSn,

    /// Start or stop the hub's NTP client
    SetNtp {
        /// true or false
        on: bool,
    },

    /// Set the hub's date (defaults to today)
    SetDate {
        /// Date as YYYY-MM-DD
        date: Option<NaiveDate>,
    },

    /// Set the hub's time (defaults to now)
    SetTime {
        /// Time as HH:MM
        time: Option<String>,
    },

    /// Set the hub's date and time (defaults to now)
    SetDatetime {
        /// Datetime, e.g. "2024-07-01 12:00"
        datetime: Option<String>,
    },

    /// Manually force DST on or off
    ManualDst {
        /// true or false
        on: bool,
    },

    /// Enable or disable automatic DST handling
    SetDst {
        /// true or false
        on: bool,

        /// Region whose dates apply: UK, EU or NZ
        #[arg(long)]
        region: Option<DstRegion>,
    },

    /// Flash the hub's LED
    Identify,

    /// Show live data for the hub and all devices
    GetLiveData,

    /// Open the mesh for a new thermostat to join
    PermitJoin {
        /// Name for the new zone
        name: String,

        /// Discovery window in seconds
        #[arg(long, default_value_t = 120)]
        timeout_s: u32,
    },

    /// PIN-lock thermostats
    Lock {
        /// Four digit PIN
        pin: Pin,

        /// Zone names
        #[arg(required = true)]
        zones: Vec<String>,
    },

    /// Unlock thermostats
    Unlock {
        /// Zone names
        #[arg(required = true)]
        zones: Vec<String>,
    },

    /// Enable or disable frost protection
    Frost {
        /// true or false
        on: bool,

        /// Zone names
        #[arg(required = true)]
        zones: Vec<String>,
    },

    /// Override the target temperature until the next comfort level
    SetTemp {
        /// Temperature in the hub's display unit
        temperature: f64,

        /// Zone names
        #[arg(required = true)]
        zones: Vec<String>,
    },

    /// Set the switching differential (-1 to 3)
    SetDiff {
        /// Differential wire value
        differential: SwitchingDifferential,

        /// Zone names
        #[arg(required = true)]
        zones: Vec<String>,
    },

    /// Show minutes per degree of temperature change
    Roc {
        /// Zone names
        #[arg(required = true)]
        zones: Vec<String>,
    },

    /// Hold a time clock's output on or off
    TimerHold {
        /// true or false
        on: bool,

        /// Hold duration in minutes
        minutes: u32,

        /// Zone names
        #[arg(required = true)]
        zones: Vec<String>,
    },

    /// Flash the LED of one zone's thermostat
    IdentifyDev {
        /// Zone name
        zone: String,
    },

    /// Rename a zone
    RenameZone {
        /// Current name
        current: String,

        /// New name
        new: String,
    },

    /// Remove a zone from the hub
    RemoveZone {
        /// Zone name
        zone: String,
    },
}

/// Connection settings from a TOML config file.
#[derive(Debug, Default, Deserialize)]
struct Config {
    host: Option<String>,
    port: Option<u16>,
    token: Option<String>,
    timeout_secs: Option<u64>,
}

impl Config {
    /// Loads the config from `path`, or from the default location when
    /// no path is given. A missing file is an empty config.
    fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match dirs::config_dir() {
                Some(dir) => dir.join("neohub").join("config.toml"),
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let hub = build_hub(&cli, &config)?;

    run(&cli.command, &hub).await
}

/// Builds the hub facade from flags merged over the config file.
fn build_hub(cli: &Cli, config: &Config) -> Result<NeoHub<TcpTransport>> {
    let Some(host) = cli.host.clone().or_else(|| config.host.clone()) else {
        bail!("no hub host configured; pass --host, set NEOHUB_HOST or add it to the config file");
    };

    let mut builder = NeoHub::tcp(host);
    if let Some(port) = cli.port.or(config.port) {
        builder = builder.port(port);
    }
    if let Some(token) = cli.token.clone().or_else(|| config.token.clone()) {
        builder = builder.token(token);
    }
    if let Some(secs) = cli.timeout_secs.or(config.timeout_secs) {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build())
}

#[allow(clippy::too_many_lines)]
async fn run(command: &Commands, hub: &NeoHub<TcpTransport>) -> Result<()> {
    match command {
        Commands::Firmware => {
            println!("{}", hub.firmware().await?);
        }
        Commands::GetSystem => {
            print_json(&hub.get_system().await?)?;
        }
        Commands::TargetTemperatureStep => {
            println!("{}", hub.target_temperature_step().await?);
        }
        Commands::Reset => {
            if hub.reset().await? {
                println!("restarting");
            } else {
                println!("hub firmware too old to restart remotely");
            }
        }
        Commands::SetChannel { channel } => {
            hub.set_channel(*channel).await?;
            println!("trying to change channel to {channel}");
        }
        Commands::SetTempFormat { unit } => {
            hub.set_temp_format(*unit).await?;
            println!("temperature format set to {unit}");
        }
        Commands::SetFormat { format } => {
            hub.set_format(*format).await?;
            println!("schedule format set to {format}");
        }
        Commands::SetAway { on } => {
            hub.set_away(*on).await?;
            println!("away {}", if *on { "on" } else { "off" });
        }
        Commands::Holiday { start, end } => {
            let start = parse_datetime(start)?;
            let end = parse_datetime(end)?;
            let reply = hub.set_holiday(start, end).await?;
            print_json(reply.value())?;
        }
        Commands::GetHoliday => {
            print_json(&hub.get_holiday().await?)?;
        }
        Commands::CancelHoliday => {
            hub.cancel_holiday().await?;
            println!("holiday cancelled");
        }
        Commands::GetZones => {
            print_json(&hub.get_zones().await?)?;
        }
        Commands::GetDevices => {
            for device in hub.get_devices().await? {
                println!("{device}");
            }
        }
        Commands::GetDeviceList { zone } => {
            for device in hub.get_device_list(zone).await? {
                println!("{device}");
            }
        }
        Commands::DevicesSn => {
            print_json(&hub.devices_sn().await?)?;
        }
        Commands::SetNtp { on } => {
            hub.set_ntp(*on).await?;
            println!("ntp {}", if *on { "on" } else { "off" });
        }
        Commands::SetDate { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            hub.set_date(date).await?;
            println!("date set to {date}");
        }
        Commands::SetTime { time } => {
            let time = match time {
                Some(raw) => parse_time(raw)?,
                None => Local::now().time(),
            };
            hub.set_time(time).await?;
            println!("time set to {}", time.format("%H:%M"));
        }
        Commands::SetDatetime { datetime } => {
            let datetime = match datetime {
                Some(raw) => parse_datetime(raw)?,
                None => Local::now().naive_local(),
            };
            hub.set_datetime(datetime).await?;
            println!("clock set to {}", datetime.format("%Y-%m-%d %H:%M"));
        }
        Commands::ManualDst { on } => {
            hub.manual_dst(*on).await?;
            println!("manual dst {}", if *on { "on" } else { "off" });
        }
        Commands::SetDst { on, region } => {
            hub.set_dst(*on, *region).await?;
            println!("dst {}", if *on { "on" } else { "off" });
        }
        Commands::Identify => {
            hub.identify().await?;
            println!("hub LED flashing");
        }
        Commands::GetLiveData => {
            let (live, _thermostats) = hub.get_live_data().await?;
            print_json(&live)?;
        }
        Commands::PermitJoin { name, timeout_s } => {
            hub.permit_join(name, *timeout_s).await?;
            println!("network allows joining for {timeout_s}s; confirm on the thermostat");
        }
        Commands::Lock { pin, zones } => {
            hub.set_lock(*pin, zones).await?;
            println!("locked");
        }
        Commands::Unlock { zones } => {
            hub.unlock(zones).await?;
            println!("unlocked");
        }
        Commands::Frost { on, zones } => {
            hub.set_frost(*on, zones).await?;
            println!("frost {}", if *on { "on" } else { "off" });
        }
        Commands::SetTemp { temperature, zones } => {
            hub.set_target_temperature(*temperature, zones).await?;
            println!("temperature set to {temperature}");
        }
        Commands::SetDiff {
            differential,
            zones,
        } => {
            hub.set_diff(*differential, zones).await?;
            println!("switching differential set to {differential}");
        }
        Commands::Roc { zones } => {
            for (zone, minutes) in hub.rate_of_change(zones).await? {
                println!("{zone}: {minutes} min/degree");
            }
        }
        Commands::TimerHold { on, minutes, zones } => {
            hub.set_timer_hold(*on, *minutes, zones).await?;
            println!("timer hold {}", if *on { "on" } else { "off" });
        }
        Commands::IdentifyDev { zone } => {
            hub.identify_device(zone).await?;
            println!("{zone} identifying");
        }
        Commands::RenameZone { current, new } => {
            hub.rename_zone(current, new).await?;
            println!("{current} renamed to {new}");
        }
        Commands::RemoveZone { zone } => {
            hub.remove_zone(zone).await?;
            println!("{zone} removed");
        }
    }
    Ok(())
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .with_context(|| format!("'{raw}' is not a time (expected HH:MM)"))
}

fn parse_datetime(raw: &str) -> Result<NaiveDateTime> {
    const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .with_context(|| format!("'{raw}' is not a datetime (expected YYYY-MM-DD HH:MM)"))
}
