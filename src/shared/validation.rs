// src/shared/validation.rs

/// A locally recoverable input problem, reported next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Slug is required")]
    SlugRequired,

    #[error("Slug must be at least {min} characters")]
    SlugTooShort { min: usize },

    #[error("Only lowercase letters, numbers, hyphens")]
    SlugInvalidCharacters,

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl ValidationError {
    /// Form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::SlugRequired
            | ValidationError::SlugTooShort { .. }
            | ValidationError::SlugInvalidCharacters => "slug",
            ValidationError::MissingField { field } => *field,
            ValidationError::InvalidEmail => "email",
            ValidationError::PasswordMismatch => "confirmPassword",
        }
    }
}

/// Every problem found in one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field(), e))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Errors attached to one form field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.0.iter().filter(move |e| e.field() == field)
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}
