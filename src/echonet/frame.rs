//! # ECHONET-Lite Frame Codec
//!
//! This module provides functionality to encode and decode ECHONET-Lite
//! format-1 frames, used for reading property values from home-energy devices
//! (e.g., storage batteries, photovoltaic inverters).
//! It leverages the `nom` crate for efficient and reliable parsing of binary data.
//!
//! ## Features
//! - Pack property-read request frames from a [`QuerySpec`].
//! - Parse response frames into an ordered sequence of `(EPC, data)` pairs.
//! - Detailed error handling: truncated input and property-count mismatches
//!   are distinct, typed failures.
//!
//! ## Usage
//!
//! Packing a read request:
//! ```ignore
//! let request = pack_frame(&EchonetFrame::read_request(&BATTERY_QUERY));
//! ```
//!
//! Parsing a response that is expected to carry two properties:
//! ```ignore
//! let properties = parse_response(&raw, 2)?;
//! ```
//!
//! ## Wire layout
//!
//! ```text
//! EHD1 EHD2 TID(2) SEOJ(3) DEOJ(3) ESV OPC (EPC PDC data[PDC])*OPC
//! ```
//!
//! The parser walks property entries sequentially, advancing by each entry's
//! declared PDC, so the offset of a later property is always computed from the
//! lengths that precede it. The response header fields (EHD, TID, EOJs, ESV)
//! are not inspected: a single exchange is in flight at a time and any
//! datagram arriving on the bound receive port is taken to be the reply.

use crate::constants::{ECHONET_EHD1, ECHONET_EHD2, ECHONET_OPC_OFFSET, ECHONET_TID};
use crate::echonet::device::QuerySpec;
use crate::error::EchonetError;
use nom::bytes::complete::take;
use nom::multi::count;
use nom::number::complete::be_u8;
use nom::IResult;

/// Represents an ECHONET-Lite format-1 frame.
///
/// A frame lives for one request/response cycle: it is built, packed, sent,
/// and dropped. The OPC byte on the wire is derived from `properties.len()`.
#[derive(Debug, PartialEq, Eq)]
pub struct EchonetFrame {
    pub ehd1: u8,
    pub ehd2: u8,
    pub transaction_id: u16,
    pub source: [u8; 3],
    pub destination: [u8; 3],
    pub service: u8,
    pub properties: Vec<Property>,
}

/// A single property entry: EPC code plus its data bytes.
///
/// In a read request the data is empty (PDC = 0); in a response it carries the
/// device's value for that EPC.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Property {
    pub epc: u8,
    pub data: Vec<u8>,
}

impl EchonetFrame {
    /// Builds a property-read request frame for the given query spec.
    ///
    /// The header constants and the fixed transaction ID are filled in; every
    /// requested EPC gets an empty payload.
    pub fn read_request(spec: &QuerySpec) -> Self {
        EchonetFrame {
            ehd1: ECHONET_EHD1,
            ehd2: ECHONET_EHD2,
            transaction_id: ECHONET_TID,
            source: spec.source,
            destination: spec.destination,
            service: spec.service,
            properties: spec
                .properties
                .iter()
                .map(|&epc| Property {
                    epc,
                    data: Vec::new(),
                })
                .collect(),
        }
    }
}

/// Packs an ECHONET-Lite frame into a byte vector.
///
/// Pure and total: any frame value serializes. Also serves as the reference
/// builder for synthetic response frames in tests.
pub fn pack_frame(frame: &EchonetFrame) -> Vec<u8> {
    let mut data = Vec::with_capacity(ECHONET_OPC_OFFSET + 1 + frame.properties.len() * 2);

    data.push(frame.ehd1);
    data.push(frame.ehd2);
    data.extend_from_slice(&frame.transaction_id.to_be_bytes());
    data.extend_from_slice(&frame.source);
    data.extend_from_slice(&frame.destination);
    data.push(frame.service);
    data.push(frame.properties.len() as u8);
    for property in &frame.properties {
        data.push(property.epc);
        data.push(property.data.len() as u8);
        data.extend_from_slice(&property.data);
    }

    data
}

/// Parses a response frame into its ordered `(EPC, data)` sequence.
///
/// The OPC byte must equal `expected_properties`; any other value is a
/// protocol violation and nothing is decoded from the frame. Input that ends
/// before the OPC byte, or inside a property payload, fails as truncated.
pub fn parse_response(
    raw: &[u8],
    expected_properties: u8,
) -> Result<Vec<Property>, EchonetError> {
    if raw.len() <= ECHONET_OPC_OFFSET {
        return Err(EchonetError::TruncatedFrame { len: raw.len() });
    }

    let observed = raw[ECHONET_OPC_OFFSET];
    if observed != expected_properties {
        return Err(EchonetError::PropertyCountMismatch {
            expected: expected_properties,
            observed,
        });
    }

    let (_, properties) = count(parse_property, observed as usize)(&raw[ECHONET_OPC_OFFSET + 1..])
        .map_err(|_| EchonetError::TruncatedFrame { len: raw.len() })?;
    Ok(properties)
}

/// Parses a single `EPC PDC data[PDC]` entry.
fn parse_property(input: &[u8]) -> IResult<&[u8], Property> {
    let (input, epc) = be_u8(input)?;
    let (input, length) = be_u8(input)?;
    let (input, data) = take(length as usize)(input)?;
    Ok((
        input,
        Property {
            epc,
            data: data.to_vec(),
        },
    ))
}
