//! Client-side field rules mirroring HTML constraint validation.
//!
//! Lengths count characters, not bytes. An empty value only fails when the
//! field is required; the other constraints are skipped for it, as browsers
//! do for `minlength` and `pattern`.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Unicode general category L only; letter numbers and combining marks fail.
static LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\p{L}]+$").expect("valid regex"));
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]*$").expect("valid regex"));

/// Character-class patterns used by the forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Letters only, any script.
    Letters,
    /// ASCII digits only.
    Digits,
}

impl Pattern {
    fn matches(self, value: &str) -> bool {
        match self {
            Self::Letters => LETTERS.is_match(value),
            Self::Digits => DIGITS.is_match(value),
        }
    }
}

/// Constraints for one input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldRules {
    pub required: bool,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub pattern: Option<Pattern>,
    pub email: bool,
}

impl FieldRules {
    pub const fn required() -> Self {
        Self { required: true, min_len: None, max_len: None, pattern: None, email: false }
    }

    pub const fn min(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    pub const fn max(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    pub const fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub const fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// First rule `value` breaks, if any.
    pub fn check(&self, value: &str) -> Option<Violation> {
        if value.is_empty() {
            return self.required.then_some(Violation::Missing);
        }
        let len = value.chars().count();
        if let Some(min) = self.min_len.filter(|min| len < *min) {
            return Some(Violation::TooShort { min });
        }
        if let Some(max) = self.max_len.filter(|max| len > *max) {
            return Some(Violation::TooLong { max });
        }
        if self.pattern.is_some_and(|p| !p.matches(value)) {
            return Some(Violation::PatternMismatch);
        }
        if self.email && !looks_like_email(value) {
            return Some(Violation::InvalidEmail);
        }
        None
    }
}

/// `local@domain` with no whitespace and a non-empty domain label on both
/// sides of any dot.
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !domain.contains('@') && domain.split('.').all(|label| !label.is_empty())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    Missing,
    TooShort { min: usize },
    TooLong { max: usize },
    PatternMismatch,
    InvalidEmail,
    Mismatch,
    OutOfRange,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("is required"),
            Self::TooShort { min } => write!(f, "must be at least {min} characters"),
            Self::TooLong { max } => write!(f, "must be at most {max} characters"),
            Self::PatternMismatch => f.write_str("contains invalid characters"),
            Self::InvalidEmail => f.write_str("must be a valid email address"),
            Self::Mismatch => f.write_str("does not match"),
            Self::OutOfRange => f.write_str("is out of range"),
        }
    }
}

/// A violation tied to the input that caused it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub violation: Violation,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.violation)
    }
}

/// Collects field errors for one form.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&mut self, field: &'static str, value: &str, rules: FieldRules) -> &mut Self {
        if let Some(violation) = rules.check(value) {
            self.errors.push(FieldError { field, violation });
        }
        self
    }

    /// Record `violation` for `field` when `ok` is false.
    pub fn ensure(&mut self, field: &'static str, ok: bool, violation: Violation) -> &mut Self {
        if !ok {
            self.errors.push(FieldError { field, violation });
        }
        self
    }

    pub fn finish(&mut self) -> Vec<FieldError> {
        std::mem::take(&mut self.errors)
    }
}

/// True when `errors` contains anything for `field`.
pub fn has_error(errors: &[FieldError], field: &str) -> bool {
    errors.iter().any(|e| e.field == field)
}

/// Submission phase: invalid styling appears only after the first attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Untouched,
    Validated,
}

impl FormPhase {
    /// Whether `field` should render as invalid right now.
    pub fn shows_invalid(self, errors: &[FieldError], field: &str) -> bool {
        self == Self::Validated && has_error(errors, field)
    }
}
