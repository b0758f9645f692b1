//! # Device Query Layer
//!
//! High-level, per-device operations composing the frame codec and the UDP
//! transport: one query spec and one typed result struct per device. Each
//! query performs a single independent exchange; errors from the codec or the
//! transport propagate unchanged, with no retry or fallback.
//!
//! Extraction is split out into pure `*_from_response` functions so the typed
//! decoding can be exercised without sockets.

use crate::constants::{
    EOJ_CONTROLLER, EOJ_PV_GENERATION, EOJ_STORAGE_BATTERY, EPC_BATTERY_INSTANT_POWER,
    EPC_BATTERY_STATE_OF_CHARGE, EPC_PV_INSTANT_GENERATION, ESV_READ_REQUEST,
};
use crate::echonet::frame::{pack_frame, parse_response, EchonetFrame, Property};
use crate::echonet::transport;
use crate::error::EchonetError;

/// Static description of one device query: who asks, which device answers,
/// which service, and which properties to read (all with empty payloads).
#[derive(Debug, PartialEq, Eq)]
pub struct QuerySpec {
    pub source: [u8; 3],
    pub destination: [u8; 3],
    pub service: u8,
    pub properties: &'static [u8],
}

/// Read the battery's instantaneous charge/discharge power and state of charge.
pub const BATTERY_QUERY: QuerySpec = QuerySpec {
    source: EOJ_CONTROLLER,
    destination: EOJ_STORAGE_BATTERY,
    service: ESV_READ_REQUEST,
    properties: &[EPC_BATTERY_INSTANT_POWER, EPC_BATTERY_STATE_OF_CHARGE],
};

/// Read the inverter's instantaneous generated power.
pub const PHOTOVOLTAIC_QUERY: QuerySpec = QuerySpec {
    source: EOJ_CONTROLLER,
    destination: EOJ_PV_GENERATION,
    service: ESV_READ_REQUEST,
    properties: &[EPC_PV_INSTANT_GENERATION],
};

/// Decoded storage-battery readings.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BatteryMetrics {
    /// Instantaneous charge/discharge power in watts; negative while discharging.
    pub electricity_flow: i32,
    /// State of charge in percent.
    pub state_of_charge: u8,
}

/// Decoded photovoltaic readings.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PvMetrics {
    /// Instantaneous generated power in watts.
    pub generated_electricity: u16,
}

/// Queries the storage battery: one exchange, two properties.
pub async fn query_battery() -> Result<BatteryMetrics, EchonetError> {
    let request = pack_frame(&EchonetFrame::read_request(&BATTERY_QUERY));
    let raw = transport::exchange(&request).await?;
    battery_metrics_from_response(&raw)
}

/// Queries the photovoltaic inverter: one exchange, one property.
pub async fn query_photovoltaic() -> Result<PvMetrics, EchonetError> {
    let request = pack_frame(&EchonetFrame::read_request(&PHOTOVOLTAIC_QUERY));
    let raw = transport::exchange(&request).await?;
    pv_metrics_from_response(&raw)
}

/// Extracts [`BatteryMetrics`] from a raw battery response frame.
///
/// The decoded sequence is walked by position (power first, state of charge
/// second), reusing the lengths discovered during parsing; absolute byte
/// offsets are never assumed.
pub fn battery_metrics_from_response(raw: &[u8]) -> Result<BatteryMetrics, EchonetError> {
    let properties = parse_response(raw, BATTERY_QUERY.properties.len() as u8)?;

    let electricity_flow = i32::from_be_bytes(fixed_width(&properties[0])?);
    let [state_of_charge] = fixed_width(&properties[1])?;

    Ok(BatteryMetrics {
        electricity_flow,
        state_of_charge,
    })
}

/// Extracts [`PvMetrics`] from a raw photovoltaic response frame.
pub fn pv_metrics_from_response(raw: &[u8]) -> Result<PvMetrics, EchonetError> {
    let properties = parse_response(raw, PHOTOVOLTAIC_QUERY.properties.len() as u8)?;

    let generated_electricity = u16::from_be_bytes(fixed_width(&properties[0])?);

    Ok(PvMetrics {
        generated_electricity,
    })
}

/// Checks that a property's data has exactly the width its EPC calls for.
fn fixed_width<const N: usize>(property: &Property) -> Result<[u8; N], EchonetError> {
    property
        .data
        .as_slice()
        .try_into()
        .map_err(|_| EchonetError::InvalidPropertyData {
            epc: property.epc,
            len: property.data.len(),
        })
}
