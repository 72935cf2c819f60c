//! ABI encoding error types

use thiserror::Error;

/// Errors raised while encoding ABI parameters.
///
/// Every variant is a deterministic function of the caller's input; none of
/// them is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// Number of values differs from number of type descriptors
    #[error("parameter count mismatch: expected {expected} values, got {actual}")]
    ParameterCountMismatch {
        /// Number of type descriptors
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// Fixed-length array given a sequence of the wrong length
    #[error("array length mismatch for {ty}: expected {expected} elements, got {actual}")]
    ArrayLengthMismatch {
        /// Array type
        ty: String,
        /// Declared length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// Positional tuple value with the wrong number of components
    #[error("tuple length mismatch for {ty}: expected {expected} components, got {actual}")]
    TupleLengthMismatch {
        /// Tuple type
        ty: String,
        /// Number of components
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// Name-keyed tuple value lacking one of the components
    #[error("missing tuple component `{0}`")]
    MissingTupleField(String),

    /// Address value failed structural or checksum validation
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Fixed-size bytes value with the wrong length
    #[error("invalid length for bytes{expected}: got {actual} bytes")]
    InvalidFixedBytesLength {
        /// Declared size
        expected: usize,
        /// Supplied size
        actual: usize,
    },

    /// Type string not recognized
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Value shape does not fit the declared type
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        /// Declared type
        expected: String,
        /// Kind of value supplied
        found: &'static str,
    },

    /// Integer does not fit the declared bit width
    #[error("value {value} out of range for {ty}")]
    IntegerOutOfRange {
        /// Offending value
        value: String,
        /// Declared type
        ty: String,
    },

    /// Integer literal could not be parsed
    #[error("invalid integer literal: {0}")]
    InvalidInteger(String),

    /// Hex literal could not be parsed
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Value cannot be represented (e.g. JSON null or a fractional number)
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl From<hex::FromHexError> for AbiError {
    fn from(e: hex::FromHexError) -> Self {
        AbiError::InvalidHex(e.to_string())
    }
}

impl From<abikit_primitives::AddressError> for AbiError {
    fn from(e: abikit_primitives::AddressError) -> Self {
        AbiError::InvalidAddress(e.to_string())
    }
}
