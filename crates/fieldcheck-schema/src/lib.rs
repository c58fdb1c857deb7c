//! JSON Schema shape checks for raw fieldcheck records.
//!
//! Domain validators run their own rules (digit counts, rating ranges) but
//! leave primitive type checks to this crate: a record is first matched
//! against its JSON Schema, and only a well-shaped record reaches the
//! domain rules.

pub mod config;
pub mod error;
pub mod registry;
pub mod validator;

pub use config::RegistryConfig;
pub use error::{Result, SchemaError};
pub use registry::SchemaRegistry;
