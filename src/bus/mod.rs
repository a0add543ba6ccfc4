/// Typed bus client capability.
pub mod client;
/// Real D-Bus adapter backed by zbus.
pub mod connection;
/// Bus error types.
pub mod error;
/// In-memory bus adapter for tests.
pub mod fake;

pub use client::*;
pub use connection::*;
pub use error::*;
pub use fake::*;
