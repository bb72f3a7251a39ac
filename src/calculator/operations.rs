//! Arithmetic and scientific operations.
//!
//! Every function is pure: it computes one result from its inputs or returns a
//! [`CalcError`] naming the violated precondition. Nothing here ever returns a
//! silent NaN for an invalid input.

use super::error::{CalcError, DomainError};
use std::f64::consts::PI;

pub type CalcResult = Result<f64, CalcError>;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> CalcResult {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Remainder with the sign of the divisor (floored modulo).
pub fn modulo(a: f64, b: f64) -> CalcResult {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    let rem = a % b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        Ok(rem + b)
    } else {
        Ok(rem)
    }
}

/// Floored division.
pub fn integer_divide(a: f64, b: f64) -> CalcResult {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok((a / b).floor())
}

/// Real exponentiation.
///
/// A negative base with a fractional exponent has no real result and fails with
/// [`DomainError::NonRealPower`]. Overflow still yields an infinity.
pub fn power(a: f64, b: f64) -> CalcResult {
    if a < 0.0 && b.is_finite() && b.fract() != 0.0 {
        return Err(DomainError::NonRealPower.into());
    }
    Ok(a.powf(b))
}

pub fn square_root(a: f64) -> CalcResult {
    if a < 0.0 {
        return Err(DomainError::NegativeSquareRoot.into());
    }
    Ok(a.sqrt())
}

/// The `n`-th root of `a`.
///
/// Odd roots of negative numbers are real and are computed on the magnitude.
pub fn nth_root(a: f64, n: f64) -> CalcResult {
    if n == 0.0 {
        return Err(DomainError::ZeroRootIndex.into());
    }
    if a < 0.0 {
        if n % 2.0 == 0.0 {
            return Err(DomainError::EvenRootOfNegative.into());
        }
        if n.fract() == 0.0 {
            return Ok(-(-a).powf(1.0 / n));
        }
        return Err(DomainError::NonRealPower.into());
    }
    Ok(a.powf(1.0 / n))
}

/// `n!` for non-negative integer `n`. Results past `170!` overflow to infinity.
pub fn factorial(n: f64) -> CalcResult {
    if n < 0.0 {
        return Err(DomainError::NegativeFactorial.into());
    }
    if n.fract() != 0.0 || !n.is_finite() {
        return Err(DomainError::NonIntegerFactorial.into());
    }

    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        if result.is_infinite() {
            break;
        }
        i += 1.0;
    }
    Ok(result)
}

/// Logarithm of `a` in the given `base`.
pub fn logarithm(a: f64, base: f64) -> CalcResult {
    if a <= 0.0 {
        return Err(DomainError::NonPositiveLogarithm.into());
    }
    if base <= 0.0 || base == 1.0 {
        return Err(DomainError::InvalidLogarithmBase.into());
    }
    if base == 10.0 {
        return Ok(a.log10());
    }
    Ok(a.ln() / base.ln())
}

/// Base-10 logarithm, the default base of [`logarithm`].
pub fn log10(a: f64) -> CalcResult {
    logarithm(a, 10.0)
}

pub fn natural_log(a: f64) -> CalcResult {
    if a <= 0.0 {
        return Err(DomainError::NonPositiveLogarithm.into());
    }
    Ok(a.ln())
}

pub fn reciprocal(a: f64) -> CalcResult {
    divide(1.0, a)
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

pub fn sine(degrees: f64) -> f64 {
    to_radians(degrees).sin()
}

pub fn cosine(degrees: f64) -> f64 {
    to_radians(degrees).cos()
}

pub fn tangent(degrees: f64) -> f64 {
    to_radians(degrees).tan()
}
