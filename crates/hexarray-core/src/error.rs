use thiserror::Error;

/// Failures when building or rendering a hexadecimal value sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Text is not a valid base-16 integer.
    #[error("invalid hexadecimal value '{0}'")]
    InvalidHex(String),

    /// Text is not a valid base-10 integer.
    #[error("invalid decimal value '{0}'")]
    InvalidDecimal(String),

    /// A step of zero would never reach the final bound.
    #[error("step must be non-zero")]
    ZeroStep,

    /// The value does not fit the fixed 8-digit (32-bit, unsigned) field.
    #[error("value {0} does not fit an 8-digit hexadecimal field")]
    Unrepresentable(i64),
}
