//! The echonet module contains the components responsible for the core
//! ECHONET-Lite protocol implementation: frame packing and parsing, the UDP
//! multicast transport, and the per-device query layer.

pub mod device;
pub mod frame;
pub mod transport;

pub use device::*;
pub use frame::*;
pub use transport::*;

/// Represents an ECHONET-Lite frame.
pub use frame::EchonetFrame;

/// Represents a single EPC/value pair inside a frame.
pub use frame::Property;
