use thiserror::Error;

use crate::color_value::ColorKind;

/// Failures of the color model. Neither kind is fatal: callers either
/// propagate it or substitute a neutral color.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ColorError {
    #[error("cannot convert {from} color to {to}")]
    ConversionUnavailable { from: ColorKind, to: ColorKind },
    #[error("malformed color input: {0}")]
    MalformedInput(#[from] MalformedInput),
}

/// Why a serialized color or hex string was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("missing \"kind\" key")]
    MissingKind,
    #[error("unknown kind {0:?}")]
    UnknownKind(String),
    #[error("bad {kind} coordinates: {reason}")]
    InvalidCoordinates { kind: ColorKind, reason: String },
    #[error("expected exactly six hex digits")]
    HexDigitCount,
    #[error("unexpected character {0:?} in hex color")]
    NonHexCharacter(char),
}
