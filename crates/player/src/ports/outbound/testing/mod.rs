//! Test utilities for outbound ports
//!
//! Available in unit tests and to other crates through the `testing` feature:
//! ```toml
//! [dev-dependencies]
//! zbierka-player = { workspace = true, features = ["testing"] }
//! ```

#[cfg(any(test, feature = "testing"))]
mod in_memory_api;

#[cfg(any(test, feature = "testing"))]
pub use in_memory_api::{InMemoryApi, SentPut};
