//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod api_error;
pub mod clock_port;
pub mod document_port;
pub mod raw_api_port;
pub mod testing;

pub use api_error::ApiError;
pub use clock_port::ClockPort;
pub use document_port::{DocumentPort, ElementPort};
pub use raw_api_port::RawApiPort;

#[cfg(test)]
pub use raw_api_port::MockRawApiPort;
