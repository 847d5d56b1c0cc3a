use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

use crate::shared::validation::{ValidationError, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// What survives between runs: the signed-in user and their bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAuth {
    pub user: AuthUser,
    pub token: String,
}

impl StoredAuth {
    /// A record missing the user id or the token is treated as signed out.
    pub fn is_usable(&self) -> bool {
        !self.user.id.trim().is_empty() && !self.token.trim().is_empty()
    }
}

/// Body returned by `/auth/login` and `/auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: AuthUser,
}

impl From<AuthResponse> for StoredAuth {
    fn from(response: AuthResponse) -> Self {
        Self {
            user: response.user,
            token: response.access_token,
        }
    }
}

// ========================= Credentials =========================
/// Validated email and password, ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Trims and lowercases the email. Both fields are required.
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = email.trim();
        if email.is_empty() {
            errors.push(ValidationError::MissingField { field: "email" });
        } else if !EmailAddress::is_valid(email) {
            errors.push(ValidationError::InvalidEmail);
        }

        if password.is_empty() {
            errors.push(ValidationError::MissingField { field: "password" });
        }

        errors.into_result(Self {
            email: email.to_lowercase(),
            password: password.to_string(),
        })
    }

    /// Registration form: the confirmation must repeat the password.
    pub fn for_registration(
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, ValidationErrors> {
        let result = Self::new(email, password);
        if password == confirm_password {
            return result;
        }

        let mut errors = result.err().unwrap_or_default();
        errors.push(ValidationError::PasswordMismatch);
        Err(errors)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
