//! # echonet-rs - Reading Home-Energy Devices over ECHONET-Lite
//!
//! The echonet-rs crate queries a storage battery and a photovoltaic inverter
//! over the ECHONET-Lite protocol (UDP multicast, port 3610) and republishes
//! the decoded readings as plain-text metrics over HTTP.
//!
//! ## Features
//!
//! - Pack ECHONET-Lite property-read request frames and multicast them to the
//!   well-known group
//! - Receive the unicast reply, validate its structure, and extract typed
//!   property values with a sequential reader (no hard-coded data offsets)
//! - Per-device query operations for the storage battery (instantaneous
//!   charge/discharge power, state of charge) and the photovoltaic inverter
//!   (instantaneous generation)
//! - An axum-based metrics endpoint (`/metrics`, `/healthcheck`) over the
//!   query layer
//! - Support for logging and typed error handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use echonet_rs::{query_battery, query_photovoltaic, EchonetError};
//!
//! # async fn example() -> Result<(), EchonetError> {
//! let battery = query_battery().await?;
//! println!("state of charge: {}%", battery.state_of_charge);
//! let pv = query_photovoltaic().await?;
//! println!("generating: {} W", pv.generated_electricity);
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod echonet;
pub mod error;
pub mod exporter;
pub mod logging;

pub use crate::error::EchonetError;
pub use crate::logging::{init_logger, log_info};

// Core ECHONET-Lite types
pub use echonet::device::{
    query_battery, query_photovoltaic, BatteryMetrics, PvMetrics, QuerySpec, BATTERY_QUERY,
    PHOTOVOLTAIC_QUERY,
};
pub use echonet::frame::{pack_frame, parse_response, EchonetFrame, Property};
pub use echonet::transport::exchange;

// HTTP metrics surface
pub use exporter::{router, AppState, EchonetSource, MetricsSource};
