//! Validation for the auth form fields.
//!
//! Everything here runs before any network request: a form that fails
//! validation is never submitted.

use std::collections::BTreeMap;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email shape: non-blank local part, exactly one `@`, domain
/// containing an inner dot, no whitespace anywhere.
pub fn validate_email(email: &str) -> ValidationResult {
    if email.trim().is_empty() {
        return ValidationResult::err("Email required");
    }

    if email.chars().any(char::is_whitespace) {
        return ValidationResult::err("Invalid email");
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return ValidationResult::err("Invalid email"),
    };

    if local.is_empty()
        || domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return ValidationResult::err("Invalid email");
    }

    ValidationResult::ok()
}

/// Validate an Indian mobile number: ten digits starting 6-9.
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.trim().is_empty() {
        return ValidationResult::err("Phone required");
    }

    let mut chars = phone.chars();
    let first_ok = matches!(chars.next(), Some('6'..='9'));
    if !first_ok || phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Invalid phone");
    }

    ValidationResult::ok()
}

pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password required");
    }

    if password.len() < 6 {
        return ValidationResult::err("Min 6 characters");
    }

    ValidationResult::ok()
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// Transient state of the auth form, one field per input.
#[derive(Clone, Default)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub location: String,
    pub farm_size: String,
    pub primary_crops: Vec<String>,
}

impl AuthForm {
    /// Field-name to error-message map; empty means the form may submit.
    pub fn validate(&self, mode: AuthMode) -> BTreeMap<&'static str, String> {
        let mut errors = BTreeMap::new();

        if mode == AuthMode::Signup {
            if self.name.trim().is_empty() {
                errors.insert("name", "Name required".to_string());
            }
            let phone = validate_phone(&self.phone);
            if let Some(e) = phone.error {
                errors.insert("phone", e);
            }
            if self.location.is_empty() {
                errors.insert("location", "State required".to_string());
            }
            if self.password != self.confirm_password {
                errors.insert("confirmPassword", "Passwords do not match".to_string());
            }
        }

        if let Some(e) = validate_email(&self.email).error {
            errors.insert("email", e);
        }
        if let Some(e) = validate_password(&self.password).error {
            errors.insert("password", e);
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
        assert!(!validate_email("test@nodot").is_valid);
        assert!(!validate_email("a b@example.com").is_valid);
        assert!(!validate_email("a@b@example.com").is_valid);
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("9876543210").is_valid);
        assert!(validate_phone("6000000000").is_valid);
        assert!(!validate_phone("123").is_valid);
        assert!(!validate_phone("1234567890").is_valid); // leading digit < 6
        assert!(!validate_phone("98765432101").is_valid); // too long
        assert!(!validate_phone("98765abc10").is_valid);
        assert!(!validate_phone("").is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("abc123").is_valid);
        assert!(!validate_password("abc12").is_valid);
        assert!(!validate_password("").is_valid);
    }

    #[test]
    fn short_password_blocks_login_submission() {
        let form = AuthForm {
            email: "a@b.com".to_string(),
            password: "abc".to_string(),
            ..Default::default()
        };
        let errors = form.validate(AuthMode::Login);
        assert!(errors.contains_key("password"));
    }

    #[test]
    fn mismatched_confirmation_blocks_signup() {
        let form = AuthForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            location: "Punjab".to_string(),
            password: "abc123".to_string(),
            confirm_password: "abc124".to_string(),
            ..Default::default()
        };
        let errors = form.validate(AuthMode::Signup);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["confirmPassword"], "Passwords do not match");
    }

    #[test]
    fn valid_signup_form_passes() {
        let form = AuthForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            location: "Punjab".to_string(),
            password: "abc123".to_string(),
            confirm_password: "abc123".to_string(),
            ..Default::default()
        };
        assert!(form.validate(AuthMode::Signup).is_empty());
    }

    #[test]
    fn login_ignores_signup_only_fields() {
        let form = AuthForm {
            email: "asha@example.com".to_string(),
            password: "abc123".to_string(),
            ..Default::default()
        };
        assert!(form.validate(AuthMode::Login).is_empty());
    }
}
