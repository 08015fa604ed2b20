//! lc-core: stable foundation for the length converter.
//!
//! Contains:
//! - units (the fixed length unit table + uom bridge)
//! - convert (the conversion engine)
//! - error (shared error types)

pub mod convert;
pub mod error;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use convert::*;
pub use error::LcError;
pub use units::*;
