//! Infrastructure adapters for the outbound ports.

pub mod clock;
pub mod headless;
pub mod http_client;
