//! Typed failures raised by the operation library.

use thiserror::Error;

/// Failure of a single calculator operation.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// The divisor of a division-like operation was zero.
    #[error("division by zero is not allowed")]
    DivisionByZero,
    /// An input fell outside the mathematical domain of the operation.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// The precondition an input violated.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("cannot take the square root of a negative number")]
    NegativeSquareRoot,
    #[error("cannot take an even root of a negative number")]
    EvenRootOfNegative,
    #[error("the root index cannot be zero")]
    ZeroRootIndex,
    #[error("factorial is not defined for negative numbers")]
    NegativeFactorial,
    #[error("factorial is only defined for integers")]
    NonIntegerFactorial,
    #[error("logarithm is only defined for positive numbers")]
    NonPositiveLogarithm,
    #[error("logarithm base must be positive and different from 1")]
    InvalidLogarithmBase,
    /// Negative base raised to a fractional exponent.
    #[error("power has no real result for a negative base and fractional exponent")]
    NonRealPower,
}
