use std::time::Duration;

use thiserror::Error;

/// How long the (offline) send pretends to take.
pub const SIMULATED_SEND: Duration = Duration::from_millis(1000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your {0}")]
    MissingField(&'static str),
    #[error("'{0}' doesn't look like an email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Rejected(ContactError),
}

impl FormStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, FormStatus::Sending)
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessage, ContactError> {
        let name = required(&self.name, "name")?;
        let email = required(&self.email, "email")?;
        let message = required(&self.message, "message")?;
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ContactError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ContactError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let msg = form("  Ada ", " ada@example.com", "hello\n")
            .validate()
            .expect("form should validate");
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.message, "hello");
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        assert_eq!(
            form("", "", "").validate(),
            Err(ContactError::MissingField("name"))
        );
        assert_eq!(
            form("Ada", "   ", "hi").validate(),
            Err(ContactError::MissingField("email"))
        );
        assert_eq!(
            form("Ada", "ada@example.com", "").validate(),
            Err(ContactError::MissingField("message"))
        );
    }

    #[test]
    fn test_bad_emails_rejected() {
        for bad in ["ada", "@example.com", "ada@", "ada@example", "ada@@example.com", "a da@x.io", "ada@.com", "ada@x."] {
            assert_eq!(
                form("Ada", bad, "hi").validate(),
                Err(ContactError::InvalidEmail(bad.to_string())),
                "{bad}"
            );
        }
        assert!(form("Ada", "ada.l@mail.example.co", "hi").validate().is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField("email").to_string(),
            "Please enter your email"
        );
    }

    #[test]
    fn test_clear_resets_fields() {
        let mut f = form("Ada", "ada@example.com", "hi");
        f.clear();
        assert_eq!(f, ContactForm::default());
    }
}
