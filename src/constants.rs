//! ECHONET-Lite Protocol Constants
//!
//! This module defines constants used in the ECHONET-Lite protocol
//! implementation, based on the ECHONET Lite specification (Part 2,
//! communication middleware).

use std::net::Ipv4Addr;

/// Well-known ECHONET-Lite UDP port (requests and replies)
pub const ECHONET_PORT: u16 = 3610;

/// Multicast group all ECHONET-Lite nodes join
pub const ECHONET_MULTICAST_ADDR: Ipv4Addr = Ipv4Addr::new(224, 0, 23, 0);

// ----------------------------------------------------------------------------
// Frame header constants
// ----------------------------------------------------------------------------

/// EHD1: ECHONET-Lite protocol identifier
pub const ECHONET_EHD1: u8 = 0x10;

/// EHD2: specified message format (format 1)
pub const ECHONET_EHD2: u8 = 0x81;

/// Fixed transaction ID; exchanges are correlated by blocking for a single
/// reply, not by TID, so every request reuses this value
pub const ECHONET_TID: u16 = 0x0001;

/// Byte offset of the OPC (property count) field from the frame start
pub const ECHONET_OPC_OFFSET: usize = 11;

// ----------------------------------------------------------------------------
// ESV (service) codes
// ----------------------------------------------------------------------------

/// ESV: property value read request (Get)
pub const ESV_READ_REQUEST: u8 = 0x62;

/// ESV: property value read response (Get_Res)
pub const ESV_READ_RESPONSE: u8 = 0x72;

// ----------------------------------------------------------------------------
// EOJ (ECHONET object) codes: class group / class / instance
// ----------------------------------------------------------------------------

/// Controller, instance 1 (the requester)
pub const EOJ_CONTROLLER: [u8; 3] = [0x05, 0xff, 0x01];

/// Storage battery, instance 1
pub const EOJ_STORAGE_BATTERY: [u8; 3] = [0x02, 0x7d, 0x01];

/// Residential photovoltaic power generation, instance 1
pub const EOJ_PV_GENERATION: [u8; 3] = [0x02, 0x79, 0x01];

// ----------------------------------------------------------------------------
// EPC (property) codes
// ----------------------------------------------------------------------------

/// Storage battery: instantaneous charging/discharging electric power (W,
/// signed; negative while discharging)
pub const EPC_BATTERY_INSTANT_POWER: u8 = 0xd3;

/// Storage battery: remaining stored electricity 3 (state of charge, %)
pub const EPC_BATTERY_STATE_OF_CHARGE: u8 = 0xe4;

/// Photovoltaic generation: instantaneous generated electric power (W)
pub const EPC_PV_INSTANT_GENERATION: u8 = 0xe0;
