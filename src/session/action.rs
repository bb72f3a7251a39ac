//! Discrete inputs accepted by a calculator session.

use crate::calculator::{CalcResult, operations};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Interpretation of trigonometric inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// Short label for the status caption.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Degrees => "DEG",
            Self::Radians => "RAD",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }
}

/// Binary operator of a pending calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Resolve `lhs op rhs`.
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult {
        match self {
            Self::Add => Ok(operations::add(lhs, rhs)),
            Self::Subtract => Ok(operations::subtract(lhs, rhs)),
            Self::Multiply => Ok(operations::multiply(lhs, rhs)),
            Self::Divide => operations::divide(lhs, rhs),
            Self::Power => operations::power(lhs, rhs),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary scientific function applied to the display value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScientificFn {
    Sin,
    Cos,
    Tan,
    Ln,
    Log10,
    Sqrt,
    Cbrt,
    Square,
    Cube,
    Reciprocal,
    Factorial,
    E,
    Pi,
    Exp,
    Pow10,
}

impl ScientificFn {
    /// Every function, in keypad order.
    pub const ALL: [ScientificFn; 15] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Ln,
        Self::Log10,
        Self::Sqrt,
        Self::Cbrt,
        Self::Square,
        Self::Cube,
        Self::Reciprocal,
        Self::Factorial,
        Self::E,
        Self::Pi,
        Self::Exp,
        Self::Pow10,
    ];

    /// Key label, also used in history records.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Log10 => "log",
            Self::Sqrt => "√",
            Self::Cbrt => "∛",
            Self::Square => "x²",
            Self::Cube => "x³",
            Self::Reciprocal => "1/x",
            Self::Factorial => "!",
            Self::E => "e",
            Self::Pi => "π",
            Self::Exp => "e^x",
            Self::Pow10 => "10^x",
        }
    }

    /// Constants ignore the display value.
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::E | Self::Pi)
    }

    pub fn apply(self, x: f64, angle_mode: AngleMode) -> CalcResult {
        let radians = |x: f64| match angle_mode {
            AngleMode::Degrees => operations::to_radians(x),
            AngleMode::Radians => x,
        };

        match self {
            Self::Sin => Ok(radians(x).sin()),
            Self::Cos => Ok(radians(x).cos()),
            Self::Tan => Ok(radians(x).tan()),
            Self::Ln => operations::natural_log(x),
            Self::Log10 => operations::log10(x),
            Self::Sqrt => operations::square_root(x),
            Self::Cbrt => Ok(x.cbrt()),
            Self::Square => Ok(x * x),
            Self::Cube => Ok(x.powi(3)),
            Self::Reciprocal => operations::reciprocal(x),
            Self::Factorial => operations::factorial(x),
            Self::E => Ok(std::f64::consts::E),
            Self::Pi => Ok(std::f64::consts::PI),
            Self::Exp => Ok(x.exp()),
            Self::Pow10 => operations::power(10.0, x),
        }
    }
}

/// Memory register actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryOp {
    Clear,
    Recall,
    Add,
    Subtract,
}

/// A single user action on a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// A digit key, `0..=9`.
    Digit(u8),
    DecimalPoint,
    Operator(BinaryOp),
    Equals,
    Function(ScientificFn),
    /// Change the sign of the display value.
    Negate,
    /// Divide the display value by 100.
    Percent,
    Clear,
    Backspace,
    ClearHistory,
    Memory(MemoryOp),
    ToggleScientific,
    ToggleAngleMode,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown key '{0}'")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let lower = token.to_lowercase();

        if let [b] = lower.as_bytes()
            && b.is_ascii_digit()
        {
            return Ok(Self::Digit(b - b'0'));
        }

        let action = match lower.as_str() {
            "." | "," => Self::DecimalPoint,
            "+" => Self::Operator(BinaryOp::Add),
            "-" | "−" => Self::Operator(BinaryOp::Subtract),
            "*" | "x" | "×" => Self::Operator(BinaryOp::Multiply),
            "/" | "÷" => Self::Operator(BinaryOp::Divide),
            "^" | "x^y" | "pow" => Self::Operator(BinaryOp::Power),
            "=" => Self::Equals,
            "sin" => Self::Function(ScientificFn::Sin),
            "cos" => Self::Function(ScientificFn::Cos),
            "tan" => Self::Function(ScientificFn::Tan),
            "ln" => Self::Function(ScientificFn::Ln),
            "log" | "log10" => Self::Function(ScientificFn::Log10),
            "sqrt" | "√" => Self::Function(ScientificFn::Sqrt),
            "cbrt" | "∛" => Self::Function(ScientificFn::Cbrt),
            "sq" | "x²" | "x^2" => Self::Function(ScientificFn::Square),
            "cube" | "x³" | "x^3" => Self::Function(ScientificFn::Cube),
            "inv" | "1/x" => Self::Function(ScientificFn::Reciprocal),
            "!" | "n!" | "fact" => Self::Function(ScientificFn::Factorial),
            "e" => Self::Function(ScientificFn::E),
            "pi" | "π" => Self::Function(ScientificFn::Pi),
            "exp" | "e^x" => Self::Function(ScientificFn::Exp),
            "pow10" | "10^x" => Self::Function(ScientificFn::Pow10),
            "neg" | "±" | "+/-" => Self::Negate,
            "%" => Self::Percent,
            "c" | "clear" => Self::Clear,
            "bs" | "backspace" | "⌫" => Self::Backspace,
            "ch" | "clear-history" => Self::ClearHistory,
            "mc" => Self::Memory(MemoryOp::Clear),
            "mr" => Self::Memory(MemoryOp::Recall),
            "m+" => Self::Memory(MemoryOp::Add),
            "m-" => Self::Memory(MemoryOp::Subtract),
            "mode" => Self::ToggleScientific,
            "drg" | "deg" | "rad" | "deg/rad" => Self::ToggleAngleMode,
            _ => return Err(ParseActionError(token.to_string())),
        };
        Ok(action)
    }
}
