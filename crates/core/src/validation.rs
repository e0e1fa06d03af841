//! Client-side form validation
//!
//! Only presence, length and equality checks happen here. Everything else is
//! the server's call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Local validation failures, rendered as the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Passwords don't match!")]
    PasswordMismatch,

    #[error("New passwords don't match")]
    NewPasswordMismatch,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("New password must be at least {min} characters long")]
    NewPasswordTooShort { min: usize },
}

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

fn long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Login form; `username` may also hold an email address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.username, "Username")?;
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Never sent to the server
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        // Mismatch is checked first so it wins over any other complaint
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        require(&self.username, "Username")?;
        require(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.email, "Email")
    }
}

/// New password submitted from a reset link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordForm {
    /// Opaque user reference from the link, passed through unmodified
    pub uidb64: String,
    /// Opaque reset token from the link, passed through unmodified
    pub token: String,
    pub password: String,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.uidb64, "Reset link")?;
        require(&self.token, "Reset link")?;
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        if !long_enough(&self.password) {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChangeForm {
    pub old_password: String,
    pub new_password: String,
    /// Never sent to the server
    pub confirm_password: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.new_password != self.confirm_password {
            return Err(ValidationError::NewPasswordMismatch);
        }
        if !long_enough(&self.new_password) {
            return Err(ValidationError::NewPasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        if self.old_password.is_empty() {
            return Err(ValidationError::Required("Current password"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm {
            username: "  ".into(),
            password: "pw".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::Required("Username")));

        let form = LoginForm {
            username: "alice".into(),
            password: String::new(),
        };
        assert_eq!(form.validate(), Err(ValidationError::Required("Password")));
    }

    #[test]
    fn registration_mismatch_is_exact() {
        assert_eq!(
            registration("secret123", "secret123 ").validate(),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(registration("secret123", "secret123").validate().is_ok());
    }

    #[test]
    fn registration_mismatch_message() {
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords don't match!"
        );
    }

    #[test]
    fn password_change_minimum_length() {
        let form = PasswordChangeForm {
            old_password: "old".into(),
            new_password: "short".into(),
            confirm_password: "short".into(),
        };
        let err = form.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "New password must be at least 8 characters long"
        );
    }

    #[test]
    fn password_change_mismatch_checked_before_length() {
        let form = PasswordChangeForm {
            old_password: "old".into(),
            new_password: "short".into(),
            confirm_password: "other".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::NewPasswordMismatch));
    }

    #[test]
    fn password_length_counts_characters() {
        let form = PasswordChangeForm {
            old_password: "old".into(),
            new_password: "пароль12".into(),
            confirm_password: "пароль12".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn reset_requires_link_parts_and_length() {
        let mut form = ResetPasswordForm {
            uidb64: "MQ".into(),
            token: "abc-123".into(),
            password: "1234567".into(),
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::PasswordTooShort { min: 8 })
        );

        form.password = "12345678".into();
        assert!(form.validate().is_ok());

        form.token.clear();
        assert_eq!(form.validate(), Err(ValidationError::Required("Reset link")));
    }

    #[test]
    fn forgot_requires_email() {
        assert!(ForgotPasswordForm::default().validate().is_err());
        let form = ForgotPasswordForm {
            email: "a@b.c".into(),
        };
        assert!(form.validate().is_ok());
    }
}
