//! Interactive calculator session.
//!
//! A [`Session`] owns the whole state of one calculator: the display, the
//! pending binary operation, the history log and the memory register. Each
//! [`Action`] is handled to completion by [`Session::handle`]; the caller then
//! renders a fresh [`View`].
//!
//! Domain failures never escape a session. They turn the display into
//! `"Error"` and are surfaced through [`Session::message`].

mod action;
mod history;
mod view;

pub use action::{Action, AngleMode, BinaryOp, MemoryOp, ParseActionError, ScientificFn};
pub use history::{HISTORY_CAPACITY, History};
pub use view::View;

use crate::calculator::{
    CalcError, ERROR_TEXT, MAX_DISPLAY_LENGTH, format_display, parse_display,
};
use tracing::debug;

/// State of one calculator.
#[derive(Clone, Debug)]
pub struct Session {
    display: String,
    pending_operand: Option<f64>,
    pending_operator: Option<BinaryOp>,
    waiting_for_operand: bool,
    history: History,
    memory: f64,
    angle_mode: AngleMode,
    scientific_mode: bool,
    message: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AngleMode::default(), true)
    }
}

impl Session {
    pub fn new(angle_mode: AngleMode, scientific_mode: bool) -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: None,
            pending_operator: None,
            waiting_for_operand: false,
            history: History::new(),
            memory: 0.0,
            angle_mode,
            scientific_mode,
            message: None,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.pending_operator
    }

    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn is_scientific(&self) -> bool {
        self.scientific_mode
    }

    /// Message surfaced by the last action, if it failed.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Apply one action.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, display = %self.display, "handling action");
        self.message = None;

        match action {
            Action::Digit(digit) => self.input_digit(digit),
            Action::DecimalPoint => self.input_decimal_point(),
            Action::Operator(op) => self.input_operator(op),
            Action::Equals => self.equals(),
            Action::Function(func) => self.apply_function(func),
            Action::Negate => self.transform_display(|x| -x),
            Action::Percent => self.transform_display(|x| x / 100.0),
            Action::Clear => self.clear(),
            Action::Backspace => self.backspace(),
            Action::ClearHistory => self.history.clear(),
            Action::Memory(op) => self.memory_action(op),
            Action::ToggleScientific => self.scientific_mode = !self.scientific_mode,
            Action::ToggleAngleMode => self.angle_mode = self.angle_mode.toggled(),
        }
    }

    /// Render the display, the newest `history_count` records and the caption.
    pub fn view(&self, history_count: usize) -> View {
        View {
            display: self.display.clone(),
            history: self
                .history
                .recent(history_count)
                .map(str::to_string)
                .collect(),
            caption: self.caption(),
            message: self.message.clone(),
        }
    }

    /// Status line: memory indicator, angle mode and the pending operation.
    fn caption(&self) -> String {
        let mut caption = String::new();
        if self.memory != 0.0 {
            caption.push_str("M ");
        }
        caption.push_str(self.angle_mode.label());
        if let (Some(operand), Some(op)) = (self.pending_operand, self.pending_operator) {
            caption.push_str(&format!(" | {} {}", format_display(operand), op));
        }
        caption
    }

    fn input_digit(&mut self, digit: u8) {
        let Some(digit) = char::from_digit(digit.into(), 10) else {
            return;
        };

        // The error state is never extended.
        if self.waiting_for_operand || parse_display(&self.display).is_none() {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
            return;
        }

        let candidate = if self.display == "0" {
            digit.to_string()
        } else {
            format!("{}{}", self.display, digit)
        };
        if literal_len(&candidate) <= MAX_DISPLAY_LENGTH {
            self.display = candidate;
        }
    }

    /// Like a digit, but ignored while the display already shows a point.
    fn input_decimal_point(&mut self) {
        if self.display.contains('.') {
            return;
        }
        if self.waiting_for_operand || parse_display(&self.display).is_none() {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
            return;
        }
        if self.display.contains('e') {
            return;
        }

        let candidate = format!("{}.", self.display);
        if literal_len(&candidate) <= MAX_DISPLAY_LENGTH {
            self.display = candidate;
        }
    }

    fn input_operator(&mut self, op: BinaryOp) {
        let Some(value) = self.current_value() else {
            return;
        };

        match (self.pending_operand, self.pending_operator) {
            (None, _) => self.pending_operand = Some(value),
            (Some(lhs), Some(prev)) => match self.resolve(lhs, prev, value) {
                Some(result) => self.pending_operand = Some(result),
                None => return,
            },
            (Some(_), None) => self.pending_operand = Some(value),
        }

        self.pending_operator = Some(op);
        self.waiting_for_operand = true;
    }

    fn equals(&mut self) {
        let (Some(lhs), Some(op)) = (self.pending_operand, self.pending_operator) else {
            return;
        };
        let Some(rhs) = self.current_value() else {
            return;
        };

        if self.resolve(lhs, op, rhs).is_some() {
            self.pending_operand = None;
            self.pending_operator = None;
            self.waiting_for_operand = true;
        }
    }

    /// Compute `lhs op rhs`, show it and record it.
    ///
    /// On failure the display shows the error and the pending state is kept,
    /// so a corrected operand can still complete the calculation.
    fn resolve(&mut self, lhs: f64, op: BinaryOp, rhs: f64) -> Option<f64> {
        match op.apply(lhs, rhs) {
            Ok(result) => {
                let shown = format_display(result);
                self.history.push(format!(
                    "{} {} {} = {}",
                    format_display(lhs),
                    op,
                    format_display(rhs),
                    shown
                ));
                debug!(lhs, rhs, result, op = op.symbol(), "resolved calculation");
                self.display = shown;
                Some(result)
            }
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    fn apply_function(&mut self, func: ScientificFn) {
        let input = if func.is_constant() {
            None
        } else {
            match self.current_value() {
                Some(value) => Some(value),
                None => return,
            }
        };

        match func.apply(input.unwrap_or_default(), self.angle_mode) {
            Ok(result) => {
                let shown = format_display(result);
                let record = match input {
                    Some(x) => format!("{}({}) = {}", func.label(), format_display(x), shown),
                    None => format!("{} = {}", func.label(), shown),
                };
                self.history.push(record);
                self.display = shown;
                self.waiting_for_operand = true;
            }
            Err(err) => self.fail(err),
        }
    }

    fn transform_display(&mut self, transform: impl Fn(f64) -> f64) {
        if let Some(value) = self.current_value() {
            self.display = format_display(transform(value));
        }
    }

    fn clear(&mut self) {
        self.display = "0".to_string();
        self.pending_operand = None;
        self.pending_operator = None;
        self.waiting_for_operand = false;
    }

    fn backspace(&mut self) {
        if parse_display(&self.display).is_none() || self.display.contains("Infinity") {
            self.display = "0".to_string();
            return;
        }

        self.display.pop();
        // A cut exponent ("1e-") is not a number; drop the dangling marker.
        while self.display.ends_with(['e', 'E', '+', '-']) {
            self.display.pop();
        }
        if self.display.is_empty() || parse_display(&self.display).is_none() {
            self.display = "0".to_string();
        }
    }

    fn memory_action(&mut self, op: MemoryOp) {
        match op {
            MemoryOp::Clear => self.memory = 0.0,
            MemoryOp::Recall => {
                self.display = format_display(self.memory);
                self.waiting_for_operand = true;
            }
            MemoryOp::Add | MemoryOp::Subtract => {
                let Some(value) = self.current_value() else {
                    return;
                };
                let updated = if op == MemoryOp::Add {
                    self.memory + value
                } else {
                    self.memory - value
                };
                if !updated.is_finite() {
                    self.message = Some("memory can only hold finite numbers".into());
                    return;
                }
                self.memory = updated;
                // The stored entry is complete; the next digit starts a new number.
                self.waiting_for_operand = true;
            }
        }
    }

    /// Parse the display, surfacing a message when it holds the error state.
    fn current_value(&mut self) -> Option<f64> {
        let value = parse_display(&self.display);
        if value.is_none() {
            self.message = Some("the display does not hold a number; press C to clear".into());
        }
        value
    }

    fn fail(&mut self, err: CalcError) {
        debug!(%err, "calculation failed");
        self.display = ERROR_TEXT.to_string();
        self.message = Some(err.to_string());
    }
}

/// Length of a display literal, ignoring its sign and decimal point.
fn literal_len(display: &str) -> usize {
    display.chars().filter(|c| *c != '.' && *c != '-').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(session: &mut Session, keys: &str) {
        for key in keys.split_whitespace() {
            let action = key.parse().unwrap();
            session.handle(action);
        }
    }

    #[test]
    fn test_simple_addition() {
        let mut session = Session::default();
        press(&mut session, "5 + 3 =");
        assert_eq!(session.display(), "8");
        let history: Vec<&str> = session.history().iter().collect();
        assert_eq!(history, ["5 + 3 = 8"]);
        assert_eq!(session.pending_operand(), None);
        assert_eq!(session.pending_operator(), None);
        assert!(session.is_waiting_for_operand());
    }

    #[test]
    fn test_chained_operator_resolves_first() {
        let mut session = Session::default();
        press(&mut session, "5 + 3 +");
        assert_eq!(session.display(), "8");
        assert_eq!(session.pending_operand(), Some(8.0));
        assert_eq!(session.pending_operator(), Some(BinaryOp::Add));

        press(&mut session, "2 =");
        assert_eq!(session.display(), "10");
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history().last(), Some("8 + 2 = 10"));
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut session = Session::default();
        press(&mut session, "4 2 =");
        assert_eq!(session.display(), "42");
        assert!(session.history().is_empty());
        assert!(!session.is_waiting_for_operand());
    }

    #[test]
    fn test_digit_after_result_starts_new_number() {
        let mut session = Session::default();
        press(&mut session, "2 * 3 = 7");
        assert_eq!(session.display(), "7");
    }

    #[test]
    fn test_display_length_limit() {
        let mut session = Session::default();
        for _ in 0..13 {
            session.handle(Action::Digit(9));
            assert!(literal_len(session.display()) <= MAX_DISPLAY_LENGTH);
        }
        assert_eq!(session.display(), "999999999999");

        press(&mut session, "c 1 . 2 3 4 5 6 7 8 9 0 1 2 3");
        assert_eq!(session.display(), "1.23456789012");
    }

    #[test]
    fn test_decimal_point() {
        let mut session = Session::default();
        press(&mut session, ". 2 . 5");
        assert_eq!(session.display(), "0.25");

        // A point already on the display rejects the key, even after an operator.
        press(&mut session, "+ .");
        assert_eq!(session.display(), "0.25");
        press(&mut session, "5 =");
        assert_eq!(session.display(), "5.25");

        press(&mut session, "+ 1 .");
        assert_eq!(session.display(), "1.");
        press(&mut session, "5 =");
        assert_eq!(session.display(), "6.75");
    }

    #[test]
    fn test_division_by_zero_shows_error() {
        let mut session = Session::default();
        press(&mut session, "8 / 0 =");
        assert_eq!(session.display(), "Error");
        assert_eq!(session.message(), Some("division by zero is not allowed"));
        assert!(session.history().is_empty());

        // The pending division survives and a new divisor completes it.
        press(&mut session, "4 =");
        assert_eq!(session.display(), "2");
        assert_eq!(session.message(), None);
    }

    #[test]
    fn test_operator_on_error_display_is_rejected() {
        let mut session = Session::default();
        press(&mut session, "1 ± sqrt");
        assert_eq!(session.display(), "Error");
        press(&mut session, "+");
        assert_eq!(session.pending_operator(), None);
        assert!(session.message().is_some());
    }

    #[test]
    fn test_power_of_negative_base() {
        let mut session = Session::default();
        press(&mut session, "2 ± ^ . 5 =");
        assert_eq!(session.display(), "Error");

        let mut session = Session::default();
        press(&mut session, "2 ^ 1 0 =");
        assert_eq!(session.display(), "1024");
    }

    #[test]
    fn test_scientific_functions() {
        let mut session = Session::default();
        press(&mut session, "3 0 sin");
        assert_eq!(session.display(), "0.5");
        assert_eq!(session.history().last(), Some("sin(30) = 0.5"));
        assert!(session.is_waiting_for_operand());

        press(&mut session, "5 !");
        assert_eq!(session.display(), "120");

        press(&mut session, "pi");
        assert_eq!(session.display(), "3.1415926536");
        assert_eq!(session.history().last(), Some("π = 3.1415926536"));

        press(&mut session, "1 0 0 log");
        assert_eq!(session.display(), "2");

        press(&mut session, "4 inv");
        assert_eq!(session.display(), "0.25");
    }

    #[test]
    fn test_radian_mode() {
        let mut session = Session::default();
        press(&mut session, "drg");
        assert_eq!(session.angle_mode(), AngleMode::Radians);
        press(&mut session, "0 cos");
        assert_eq!(session.display(), "1");
    }

    #[test]
    fn test_function_error_keeps_pending_state() {
        let mut session = Session::default();
        press(&mut session, "9 + 4 ± sqrt");
        assert_eq!(session.display(), "Error");
        assert_eq!(
            session.message(),
            Some("cannot take the square root of a negative number")
        );
        assert_eq!(session.pending_operand(), Some(9.0));
        assert_eq!(session.pending_operator(), Some(BinaryOp::Add));

        press(&mut session, "1 =");
        assert_eq!(session.display(), "10");
    }

    #[test]
    fn test_factorial_of_fraction_is_error() {
        let mut session = Session::default();
        press(&mut session, "2 . 5 !");
        assert_eq!(session.display(), "Error");
        assert_eq!(session.message(), Some("factorial is only defined for integers"));
    }

    #[test]
    fn test_history_keeps_last_ten() {
        let mut session = Session::default();
        for i in 1..=11u8 {
            session.handle(Action::Digit(i % 10));
            press(&mut session, "+ 1 =");
        }
        assert_eq!(session.history().len(), HISTORY_CAPACITY);
        assert_eq!(session.history().iter().next(), Some("2 + 1 = 3"));
        assert_eq!(session.history().last(), Some("1 + 1 = 2"));
    }

    #[test]
    fn test_memory() {
        let mut session = Session::default();
        press(&mut session, "mc 7 m+ 3 m+ mr");
        assert_eq!(session.display(), "10");
        assert_eq!(session.memory(), 10.0);

        press(&mut session, "4 m- mr");
        assert_eq!(session.display(), "6");
        press(&mut session, "mc");
        assert_eq!(session.memory(), 0.0);
    }

    #[test]
    fn test_memory_rejects_non_finite() {
        let mut session = Session::default();
        press(&mut session, "4 0 0 10^x");
        assert_eq!(session.display(), "Infinity");
        press(&mut session, "m+");
        assert_eq!(session.memory(), 0.0);
        assert_eq!(session.message(), Some("memory can only hold finite numbers"));
        assert_eq!(session.view(5).caption, "DEG");

        press(&mut session, "5 m+ 4 0 0 10^x m-");
        assert_eq!(session.memory(), 5.0);
        press(&mut session, "mr");
        assert_eq!(session.display(), "5");
    }

    #[test]
    fn test_out_of_range_digit_is_ignored() {
        let mut session = Session::default();
        press(&mut session, "4");
        session.handle(Action::Digit(12));
        assert_eq!(session.display(), "4");
    }

    #[test]
    fn test_clear_keeps_history_and_memory() {
        let mut session = Session::default();
        press(&mut session, "5 + 3 = m+ 2 *");
        press(&mut session, "c");
        assert_eq!(session.display(), "0");
        assert_eq!(session.pending_operand(), None);
        assert_eq!(session.pending_operator(), None);
        assert!(!session.is_waiting_for_operand());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.memory(), 8.0);
    }

    #[test]
    fn test_backspace() {
        let mut session = Session::default();
        press(&mut session, "1 2 bs");
        assert_eq!(session.display(), "1");
        press(&mut session, "bs");
        assert_eq!(session.display(), "0");
        press(&mut session, "5 ± bs");
        assert_eq!(session.display(), "0");
    }

    #[test]
    fn test_backspace_through_scientific_display() {
        let mut session = Session::default();
        press(&mut session, "1 % % % % % %");
        assert!(session.display().contains('e'), "{}", session.display());

        for _ in 0..12 {
            press(&mut session, "bs");
            assert!(
                parse_display(session.display()).is_some(),
                "{}",
                session.display()
            );
        }
        assert_eq!(session.display(), "0");

        press(&mut session, "2 + 3 =");
        assert_eq!(session.display(), "5");
    }

    #[test]
    fn test_negate_and_percent() {
        let mut session = Session::default();
        press(&mut session, "5 0 ± %");
        assert_eq!(session.display(), "-0.5");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_caption() {
        let mut session = Session::default();
        assert_eq!(session.view(5).caption, "DEG");
        press(&mut session, "7 m+ 1 2 *");
        assert_eq!(session.view(5).caption, "M DEG | 12 ×");
        press(&mut session, "drg");
        assert_eq!(session.view(5).caption, "M RAD | 12 ×");
    }

    #[test]
    fn test_mode_toggle_has_no_numeric_effect() {
        let mut session = Session::default();
        press(&mut session, "4 2 mode");
        assert!(!session.is_scientific());
        assert_eq!(session.display(), "42");
        press(&mut session, "mode");
        assert!(session.is_scientific());
    }
}
