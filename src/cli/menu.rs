//! Numbered text menu over the operation library.

use crate::calculator::{CalcError, format_number, operations, parse_integer, parse_number};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Standard input reached end of file.
#[derive(Debug, Error)]
#[error("input closed")]
struct InputClosed;

/// An entry of the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOption {
    Exit,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    NthRoot,
    Modulo,
    IntegerDivide,
    Factorial,
    Logarithm,
    Sine,
    Cosine,
    Tangent,
}

impl MenuOption {
    /// Options in menu order; the index is the option number.
    pub const ALL: [MenuOption; 15] = [
        Self::Exit,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::SquareRoot,
        Self::NthRoot,
        Self::Modulo,
        Self::IntegerDivide,
        Self::Factorial,
        Self::Logarithm,
        Self::Sine,
        Self::Cosine,
        Self::Tangent,
    ];

    pub fn from_choice(choice: &str) -> Option<Self> {
        let index: usize = choice.trim().parse().ok()?;
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Exit => "Exit",
            Self::Add => "Addition (+)",
            Self::Subtract => "Subtraction (-)",
            Self::Multiply => "Multiplication (×)",
            Self::Divide => "Division (÷)",
            Self::Power => "Power (^)",
            Self::SquareRoot => "Square root (√)",
            Self::NthRoot => "N-th root",
            Self::Modulo => "Remainder (modulo %)",
            Self::IntegerDivide => "Integer division (//)",
            Self::Factorial => "Factorial (!)",
            Self::Logarithm => "Logarithm",
            Self::Sine => "Sine",
            Self::Cosine => "Cosine",
            Self::Tangent => "Tangent",
        }
    }
}

/// The menu loop, generic over its input and output.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until option 0 is chosen or the input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the calculator!")?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line("\nChoose an option: ")? else {
                break;
            };

            let option = MenuOption::from_choice(&choice);
            if option == Some(MenuOption::Exit) {
                writeln!(self.output, "\nThanks for using the calculator! Goodbye!")?;
                break;
            }

            let outcome = match option {
                Some(option) => self.evaluate(option),
                None => {
                    writeln!(
                        self.output,
                        "\nInvalid option! Please choose an option from the menu."
                    )?;
                    Ok(())
                }
            };

            if let Err(err) = outcome {
                if err.is::<InputClosed>() {
                    break;
                }
                if let Some(calc) = err.downcast_ref::<CalcError>() {
                    writeln!(self.output, "\nError: {calc}")?;
                } else if err.is::<io::Error>() {
                    return Err(err);
                } else {
                    tracing::warn!(%err, "unexpected menu failure");
                    writeln!(self.output, "\nUnexpected error: {err}")?;
                }
            }

            if self.read_line("\nPress Enter to continue...")?.is_none() {
                break;
            }
        }

        tracing::info!("menu closed");
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(50);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "{:^50}", "CALCULATOR")?;
        writeln!(self.output, "{rule}")?;
        for (number, option) in MenuOption::ALL.iter().enumerate().skip(1) {
            let tag = format!("{number}.");
            writeln!(self.output, "{tag:<4}{}", option.label())?;
        }
        writeln!(self.output, "{:<4}{}", "0.", MenuOption::Exit.label())?;
        writeln!(self.output, "{rule}")
    }

    fn evaluate(&mut self, option: MenuOption) -> Result<()> {
        tracing::debug!(?option, "menu option selected");

        let line = match option {
            MenuOption::Exit => return Ok(()),
            MenuOption::Add => {
                let (a, b) = self.read_pair()?;
                binary_line(a, "+", b, operations::add(a, b))
            }
            MenuOption::Subtract => {
                let (a, b) = self.read_pair()?;
                binary_line(a, "-", b, operations::subtract(a, b))
            }
            MenuOption::Multiply => {
                let (a, b) = self.read_pair()?;
                binary_line(a, "×", b, operations::multiply(a, b))
            }
            MenuOption::Divide => {
                let (a, b) = self.read_pair()?;
                binary_line(a, "÷", b, operations::divide(a, b)?)
            }
            MenuOption::Power => {
                let a = self.read_number("Enter the base: ")?;
                let b = self.read_number("Enter the exponent: ")?;
                binary_line(a, "^", b, operations::power(a, b)?)
            }
            MenuOption::SquareRoot => {
                let a = self.read_number("Enter the number: ")?;
                let r = operations::square_root(a)?;
                format!("√{} = {}", format_number(a), format_number(r))
            }
            MenuOption::NthRoot => {
                let a = self.read_number("Enter the number: ")?;
                let n = self.read_number("Enter the root index: ")?;
                let r = operations::nth_root(a, n)?;
                format!(
                    "{}√{} = {}",
                    format_number(n),
                    format_number(a),
                    format_number(r)
                )
            }
            MenuOption::Modulo => {
                let (a, b) = self.read_pair()?;
                binary_line(a, "%", b, operations::modulo(a, b)?)
            }
            MenuOption::IntegerDivide => {
                let (a, b) = self.read_pair()?;
                binary_line(a, "//", b, operations::integer_divide(a, b)?)
            }
            MenuOption::Factorial => {
                let n = self.read_integer("Enter an integer: ")?;
                let r = operations::factorial(n as f64)?;
                format!("{n}! = {}", format_number(r))
            }
            MenuOption::Logarithm => {
                let a = self.read_number("Enter the number: ")?;
                let base = self.read_base()?;
                let r = operations::logarithm(a, base)?;
                format!(
                    "log_{}({}) = {}",
                    format_number(base),
                    format_number(a),
                    format_number(r)
                )
            }
            MenuOption::Sine => {
                let angle = self.read_number("Enter the angle in degrees: ")?;
                trig_line("sin", angle, operations::sine(angle))
            }
            MenuOption::Cosine => {
                let angle = self.read_number("Enter the angle in degrees: ")?;
                trig_line("cos", angle, operations::cosine(angle))
            }
            MenuOption::Tangent => {
                let angle = self.read_number("Enter the angle in degrees: ")?;
                trig_line("tan", angle, operations::tangent(angle))
            }
        };

        writeln!(self.output, "\nResult: {line}")?;
        Ok(())
    }

    fn read_pair(&mut self) -> Result<(f64, f64)> {
        let a = self.read_number("Enter the first number: ")?;
        let b = self.read_number("Enter the second number: ")?;
        Ok((a, b))
    }

    /// Prompt until a valid number is entered.
    fn read_number(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let line = self.read_line(prompt)?.ok_or(InputClosed)?;
            match parse_number(&line) {
                Some(value) => return Ok(value),
                None => writeln!(self.output, "Error: please enter a valid number!")?,
            }
        }
    }

    fn read_integer(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let line = self.read_line(prompt)?.ok_or(InputClosed)?;
            match parse_integer(&line) {
                Some(value) => return Ok(value),
                None => writeln!(self.output, "Error: please enter a valid integer!")?,
            }
        }
    }

    /// Logarithm base; an empty line selects base 10.
    fn read_base(&mut self) -> Result<f64> {
        loop {
            let line = self
                .read_line("Enter the logarithm base (Enter for base 10): ")?
                .ok_or(InputClosed)?;
            if line.trim().is_empty() {
                return Ok(10.0);
            }
            match parse_number(&line) {
                Some(base) => return Ok(base),
                None => writeln!(self.output, "Error: please enter a valid number!")?,
            }
        }
    }

    /// Print `prompt` and read one line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn binary_line(a: f64, symbol: &str, b: f64, result: f64) -> String {
    format!(
        "{} {symbol} {} = {}",
        format_number(a),
        format_number(b),
        format_number(result)
    )
}

fn trig_line(name: &str, angle: f64, result: f64) -> String {
    format!("{name}({}°) = {}", format_number(angle), format_number(result))
}
