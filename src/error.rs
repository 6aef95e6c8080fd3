use thiserror::Error;

use crate::grid::{BitDepth, Dimensions};

/// Errors produced by the labeling and filtering engine.
///
/// All variants are unrecoverable for the current call; nothing is retried
/// internally. Degenerate inputs (empty foreground) are not errors and simply
/// yield zero components.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    /// The input grid is not 8-bit. Raised before any scan begins.
    #[error("unsupported bit depth {0}: labeling requires 8-bit volumes")]
    UnsupportedBitDepth(BitDepth),

    /// The label counter would exceed the 16-bit representable range.
    ///
    /// Unreachable while the size-based suppression guard is honored; its
    /// occurrence signals a guard computation defect, not a user error.
    #[error("label space exhausted after {components} components")]
    LabelSpaceExhausted { components: usize },

    /// Axis swap-back was attempted onto a grid whose dimensions do not match
    /// the labeled view.
    #[error("incompatible geometry: expected {expected}, actual {actual}")]
    IncompatibleGeometry {
        expected: Dimensions,
        actual: Dimensions,
    },
}

pub type Result<T> = std::result::Result<T, LabelError>;
