//! Per-item failure kinds of the macro calculation.

use thiserror::Error;

use crate::store::StoreError;

/// Why a volume item could not be converted.
///
/// Every kind is reported to the caller as `found: false`; the kind itself
/// only shows up in logs.
#[derive(Debug, Error)]
pub enum MacroError {
    #[error("unknown food: {0}")]
    UnrecognizedFood(String),

    #[error("no matching food found for: {0}")]
    RecordNotFound(String),

    #[error("food store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("no cup measurement found for {0}")]
    NoConversionAvailable(String),
}

impl MacroError {
    /// Short name used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            MacroError::UnrecognizedFood(_) => "unrecognized_food",
            MacroError::RecordNotFound(_) => "record_not_found",
            MacroError::StoreUnavailable(_) => "store_unavailable",
            MacroError::NoConversionAvailable(_) => "no_conversion_available",
        }
    }
}
