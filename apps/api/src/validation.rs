use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Collects every field error of a form so the caller can report them all at
/// once instead of failing on the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    pub errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    #[cfg(test)]
    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Flags `field` when `value` is blank. Returns whether the value was present.
    pub fn require(&mut self, field: &str, value: &str, message: &str) -> bool {
        if value.trim().is_empty() {
            self.push(field, message);
            return false;
        }
        true
    }

    /// Required text with a minimum length, counted in characters after trimming.
    pub fn require_min_chars(
        &mut self,
        field: &str,
        value: &str,
        min: usize,
        label: &str,
    ) {
        if !self.require(field, value, &format!("{label} is required")) {
            return;
        }
        if value.trim().chars().count() < min {
            self.push(field, format!("{label} must be at least {min} characters"));
        }
    }

    pub fn require_email(&mut self, field: &str, value: &str) {
        if !self.require(field, value, "Email is required") {
            return;
        }
        if !is_valid_email(value.trim()) {
            self.push(field, "Invalid email format");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidForm(self))
        }
    }

    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a dot inside
/// the domain with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
