use filterkit_image::ImageError;

/// Reasons a textual color matrix is rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixFormatError {
    /// The text did not split into exactly 20 comma-separated tokens.
    #[error("expected 20 comma-separated coefficients, got {0}")]
    WrongCoefficientCount(usize),

    /// A token is not a real number.
    #[error("coefficient {index} is not a number: {token:?}")]
    InvalidCoefficient {
        /// Zero-based position of the token.
        index: usize,
        /// The offending token, trimmed.
        token: String,
    },

    /// A token parsed to an infinite or NaN value.
    #[error("coefficient {index} is not finite")]
    NonFinite {
        /// Zero-based position of the token.
        index: usize,
    },
}

/// An error type for the filter engine.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterError {
    /// A custom color matrix could not be parsed.
    #[error("invalid color matrix format: {0}")]
    InvalidMatrixFormat(#[from] MatrixFormatError),

    /// Posterize levels outside `2..=256`.
    #[error("posterize levels must be in 2..=256, got {0}")]
    InvalidLevels(usize),

    /// A filter name that does not match any [`crate::preset::Filter`].
    #[error("unknown filter: {0:?}")]
    UnknownFilter(String),

    /// Error from the image data model.
    #[error(transparent)]
    Image(#[from] ImageError),
}
