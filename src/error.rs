//! # ECHONET-Lite Error Handling
//!
//! This module defines the EchonetError enum, which represents the different
//! error types that can occur in the echonet-rs crate.

use thiserror::Error;

/// Represents the different error types that can occur in the ECHONET-Lite crate.
///
/// Every variant is terminal for the request that produced it; no operation in
/// this crate retries on its own.
#[derive(Debug, Error)]
pub enum EchonetError {
    /// Indicates a socket-level failure: bind, send, or receive (including a
    /// receive timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Indicates a response too short to decode: either shorter than the
    /// fixed header or ending inside a declared property payload.
    #[error("Truncated frame: {len} bytes")]
    TruncatedFrame { len: usize },

    /// Indicates the response carried a different property count than the
    /// request asked for. The device either sent a malformed reply or could
    /// not satisfy every requested property; neither is partially decodable.
    #[error("Property count mismatch: expected {expected}, observed {observed}")]
    PropertyCountMismatch { expected: u8, observed: u8 },

    /// Indicates a property decoded with an unexpected data width for its EPC.
    #[error("Invalid data for property 0x{epc:02X}: {len} bytes")]
    InvalidPropertyData { epc: u8, len: usize },
}
