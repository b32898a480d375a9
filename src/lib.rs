use std::ops::Mul;

mod number;
pub use number::Number;

/// Errors returned when parsing operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operand is not a numeric value. Holds the offending text.
    InvalidOperand(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidOperand(operand) => write!(f, "invalid operand: `{operand}`"),
        }
    }
}

impl std::error::Error for Error {}

/// Returns the product of `left` and `right`
///
/// Operands that cannot be multiplied are rejected at compile time. Use [`Number`] when the
/// operands' types are known only at runtime.
#[must_use]
pub fn multiply<L, R>(left: L, right: R) -> L::Output
where
    L: Mul<R>,
{
    left * right
}

/// Parses `left` and `right` as [`Number`]s and returns their product
pub fn try_multiply(left: &str, right: &str) -> Result<Number, Error> {
    let left = left.parse::<Number>()?;
    let right = right.parse::<Number>()?;
    Ok(multiply(left, right))
}
