//! Service layer for the length converter.
//!
//! Frontends drive the single converter screen through [`ConverterForm`].

pub mod error;
pub mod form;

pub use error::{AppError, AppResult};
pub use form::ConverterForm;
pub use lc_core::{ConversionResult, LengthUnit};
