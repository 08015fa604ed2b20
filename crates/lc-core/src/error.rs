use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LcError {
    #[error("Unknown length unit: '{name}' (expected one of Metre, Millimetre, Mile, Foot)")]
    UnknownUnit { name: String },
}
