//! Line-driven keypad over a calculator [`Session`].
//!
//! Each input line holds whitespace-separated keys. The keys are applied in
//! order and the view is redrawn once the line is done.

use crate::calculator::{copy_result, is_keypad_number, parse_display};
use crate::config::Config;
use crate::session::{Action, ScientificFn, Session};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::sync::Arc;

const BASIC_KEYS: &str = "\
digits 0-9 and .   + - x / ^   =   c (clear)   bs (backspace)
neg (±)   % (percent)   mc mr m+ m-   ch (clear history)
mode (basic/scientific)   copy   help   quit";

/// Keypad session bound to an input and an output.
pub struct Keypad<R, W> {
    input: R,
    output: W,
    session: Session,
    history_preview: usize,
    copy_results: bool,
    on_copy: Arc<dyn Fn(&str) -> Result<()> + Send + Sync>,
    notices: Vec<String>,
}

impl<R: BufRead, W: Write> Keypad<R, W> {
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            input,
            output,
            session: Session::new(config.angle_mode, config.scientific_mode),
            history_preview: config.history_preview,
            copy_results: config.copy_results,
            on_copy: Arc::new(copy_result),
            notices: Vec::new(),
        }
    }

    /// Replace the clipboard writer.
    pub fn set_on_copy(&mut self, callback: impl Fn(&str) -> Result<()> + Send + Sync + 'static) {
        self.on_copy = Arc::new(callback);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until `quit` or the end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Keypad ready. Type `help` for the list of keys.")?;
        self.render()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if !self.handle_line(&line) {
                break;
            }
            self.render()?;
        }

        tracing::info!("keypad closed");
        Ok(())
    }

    /// Apply every key on `line`. Returns `false` when the user quits.
    pub fn handle_line(&mut self, line: &str) -> bool {
        let mut evaluated = false;

        for token in line.split_whitespace() {
            match token.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return false,
                "help" | "?" => {
                    let help = self.help();
                    self.notices.push(help);
                    continue;
                }
                "copy" => {
                    self.copy_display();
                    continue;
                }
                _ => {}
            }

            if is_keypad_number(token) {
                for key in token.chars() {
                    let action = match key.to_digit(10) {
                        Some(digit) => Action::Digit(digit as u8),
                        None => Action::DecimalPoint,
                    };
                    self.session.handle(action);
                }
                continue;
            }

            match token.parse::<Action>() {
                Ok(Action::Function(_)) if !self.session.is_scientific() => {
                    self.notices
                        .push(format!("'{token}' is only available in scientific mode"));
                }
                Ok(action) => {
                    evaluated |= action == Action::Equals;
                    self.session.handle(action);
                }
                Err(err) => self.notices.push(err.to_string()),
            }
        }

        if evaluated && self.copy_results && parse_display(self.session.display()).is_some() {
            self.copy_display();
        }
        true
    }

    fn copy_display(&mut self) {
        let text = self.session.display().to_string();
        match (self.on_copy)(&text) {
            Ok(()) => self.notices.push(format!("Copied {text}")),
            Err(err) => {
                tracing::warn!(%err, "clipboard copy failed");
                self.notices.push(format!("{err:#}"));
            }
        }
    }

    fn help(&self) -> String {
        let mut help = BASIC_KEYS.to_string();
        help.push_str("\ndrg (toggle DEG/RAD)");
        if self.session.is_scientific() {
            let labels: Vec<&str> = ScientificFn::ALL.iter().map(|f| f.label()).collect();
            help.push_str("   functions: ");
            help.push_str(&labels.join(" "));
        }
        help
    }

    fn render(&mut self) -> Result<()> {
        let view = self.session.view(self.history_preview);
        writeln!(self.output, "{view}")?;
        if !self.session.is_scientific() {
            writeln!(self.output, " basic mode")?;
        }
        for notice in self.notices.drain(..) {
            writeln!(self.output, " {notice}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Mutex;

    fn keypad(config: &Config) -> Keypad<Cursor<&'static [u8]>, Vec<u8>> {
        Keypad::new(Cursor::new(&b""[..]), Vec::new(), config)
    }

    #[test]
    fn test_numbers_expand_into_keystrokes() {
        let mut keypad = keypad(&Config::default());
        assert!(keypad.handle_line("12.5 + 7.5 ="));
        assert_eq!(keypad.session().display(), "20");
        assert_eq!(keypad.session().history().last(), Some("12.5 + 7.5 = 20"));
    }

    #[test]
    fn test_fullwidth_digits_are_unknown_keys() {
        let mut keypad = keypad(&Config::default());
        assert!(keypad.handle_line("7 \u{FF11}\u{FF12}"));
        assert_eq!(keypad.notices, ["unknown key '\u{FF11}\u{FF12}'"]);
        assert_eq!(keypad.session().display(), "7");
    }

    #[test]
    fn test_quit_stops() {
        let mut keypad = keypad(&Config::default());
        assert!(!keypad.handle_line("1 + quit 2"));
        assert_eq!(keypad.session().display(), "1");
    }

    #[test]
    fn test_unknown_key_is_reported() {
        let mut keypad = keypad(&Config::default());
        keypad.handle_line("5 foo");
        assert_eq!(keypad.notices, ["unknown key 'foo'"]);
        assert_eq!(keypad.session().display(), "5");
    }

    #[test]
    fn test_basic_mode_rejects_functions() {
        let config = Config {
            scientific_mode: false,
            ..Config::default()
        };
        let mut keypad = keypad(&config);
        keypad.handle_line("9 sqrt");
        assert_eq!(keypad.session().display(), "9");
        assert_eq!(keypad.notices.len(), 1);

        keypad.handle_line("mode sqrt");
        assert_eq!(keypad.session().display(), "3");
    }

    #[test]
    fn test_copy_results_on_equals() {
        let copied = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&copied);

        let config = Config {
            copy_results: true,
            ..Config::default()
        };
        let mut keypad = keypad(&config);
        keypad.set_on_copy(move |text| {
            sink.lock().unwrap().push(text.to_string());
            Ok(())
        });

        keypad.handle_line("6 x 7 =");
        keypad.handle_line("1 / 0 =");
        assert_eq!(*copied.lock().unwrap(), ["42"]);
    }

    #[test]
    fn test_run_renders_after_each_line() {
        let input = Cursor::new(&b"5 + 3 =\nm+\nquit\n"[..]);
        let mut output = Vec::new();
        Keypad::new(input, &mut output, &Config::default())
            .run()
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("5 + 3 = 8"));
        assert!(text.contains(" M DEG"));
    }
}
