// Use-case level inputs/outputs for the page controllers.

use crate::domain::ValidationError;

// Raw values of the login form fields.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Constraint check mirroring `required` + `type=email` inputs.
    /// Returns the trimmed email on success.
    pub fn checked_email(&self) -> Result<String, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if !is_email_shaped(email) {
            return Err(ValidationError::EmailInvalid);
        }
        if self.password.is_empty() {
            return Err(ValidationError::PasswordRequired);
        }
        Ok(email.to_string())
    }
}

fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

// Raw values of the review form: the selected rating (empty when none) and
// the comment.
#[derive(Debug, Clone, Default)]
pub struct ReviewForm {
    pub rating: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    // Request accepted; navigation requested.
    Submitted,
    // Blocked by a client-side check; nothing was sent.
    Invalid,
    // Request sent (or attempted) and failed.
    Failed,
}
