//! Form Input
//!
//! Controlled form fields read from an input source. Validation mirrors the
//! browser defaults of the web forms: required fields and email shape.

use regex::Regex;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::sync::OnceLock;

use crate::router::RouteError;

/// Source of form field values
pub trait FormInput {
    /// Read one field. `Ok(None)` means the input is exhausted.
    fn read_field(&mut self, label: &str, secret: bool) -> std::io::Result<Option<String>>;

    /// Show a validation notice next to the form
    fn notify(&mut self, message: &str);

    /// Whether a failed submission can be retried with fresh input
    fn is_interactive(&self) -> bool;
}

/// Reads fields line by line from stdin, prompting on stderr
pub struct StdinInput {
    stdin: std::io::Stdin,
}

impl StdinInput {
    pub fn new() -> Self {
        Self {
            stdin: std::io::stdin(),
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl FormInput for StdinInput {
    fn read_field(&mut self, label: &str, _secret: bool) -> std::io::Result<Option<String>> {
        let mut stderr = std::io::stderr();
        write!(stderr, "{}: ", label)?;
        stderr.flush()?;

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Fixed queue of answers; never interactive
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    notices: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            notices: Vec::new(),
        }
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

impl FormInput for ScriptedInput {
    fn read_field(&mut self, _label: &str, _secret: bool) -> std::io::Result<Option<String>> {
        Ok(self.answers.pop_front())
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Kind of a form field, deciding its validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
}

/// A single required form field
#[derive(Debug, Clone)]
pub struct Field {
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: Option<String>,
}

impl Field {
    pub fn new(label: &'static str, kind: FieldKind, value: Option<String>) -> Self {
        Self { label, kind, value }
    }

    /// Validation notice for a candidate value, if it is rejected
    pub fn validate(&self, value: &str) -> Option<String> {
        if value.trim().is_empty() {
            return Some(format!("Kolom {} wajib diisi.", self.label));
        }
        if self.kind == FieldKind::Email && !is_email(value.trim()) {
            return Some("Format email tidak valid.".to_string());
        }
        None
    }

    /// Resolve the field: the prefilled value if valid, else prompt until valid
    pub fn fill(&mut self, input: &mut dyn FormInput) -> Result<String, RouteError> {
        let mut candidate = self.value.take();

        loop {
            let value = match candidate.take() {
                Some(value) => value,
                None => input
                    .read_field(self.label, self.kind == FieldKind::Password)?
                    .ok_or(RouteError::InputClosed)?,
            };

            match self.validate(&value) {
                None => {
                    let value = match self.kind {
                        FieldKind::Password => value,
                        _ => value.trim().to_string(),
                    };
                    self.value = Some(value.clone());
                    return Ok(value);
                }
                Some(notice) => input.notify(&notice),
            }
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid email pattern"))
}

/// Loose `local@domain` shape check, like a browser email input
pub fn is_email(value: &str) -> bool {
    email_pattern().is_match(value)
}
