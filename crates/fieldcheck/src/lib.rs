//! Validated value objects: EAN barcodes and movie records.
//!
//! Every type here is checked once, at construction, and is immutable
//! afterwards. A failed construction returns a typed error naming the
//! rejected input.
//!
//! # Crate Structure
//!
//! - [`ean`] — EAN-8 / EAN-13 codes and the EAN-13 variable-weight view
//! - [`movie`] — Movie records with conditional rating requirements
//! - [`schema`] — JSON Schema shape checks shared by raw-record validators

/// Re-export EAN types.
pub mod ean {
    pub use fieldcheck_ean::*;
}

/// Re-export movie types.
pub mod movie {
    pub use fieldcheck_movie::*;
}

/// Re-export schema types.
pub mod schema {
    pub use fieldcheck_schema::*;
}
