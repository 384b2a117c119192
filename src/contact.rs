use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

use crate::notification::Notification;

/// Stand-in for the round trip to a mail service.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(1);

const SENT_TITLE: &str = "Message sent successfully!";
const SENT_DESCRIPTION: &str = "Thanks for reaching out. I'll get back to you soon.";

// "valid e-mail address" from the HTML living standard, same check the browser
// runs for <input type="email">. Browsers punycode the domain first, so domain
// labels here accept any Unicode letter or digit (`[^\W_]`). The 63 character
// label limit is checked separately; a bounded repeat of a Unicode class
// compiles to a very large program.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[^\W_](?:(?:[^\W_]|-)*[^\W_])?(?:\.[^\W_](?:(?:[^\W_]|-)*[^\W_])?)*$",
    )
    .expect("email pattern should compile")
});

const MAX_LABEL_LEN: usize = 63;

fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
        && email
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.split('.').all(|l| l.chars().count() <= MAX_LABEL_LEN))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Email => write!(f, "email"),
            Field::Message => write!(f, "message"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a message is already being sent")]
    InFlight,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::Missing(Field::Name));
        }
        // browsers strip surrounding whitespace from email inputs before checking
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::Missing(Field::Email));
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        if self.message.is_empty() {
            return Err(ValidationError::Missing(Field::Message));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// State behind the contact form: the three fields plus the submitting flag.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    message: ContactMessage,
    state: SubmitState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.message.name = value,
            Field::Email => self.message.email = value,
            Field::Message => self.message.message = value,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.message.name,
            Field::Email => &self.message.email,
            Field::Message => &self.message.message,
        }
    }

    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Moves Idle -> Submitting. On error nothing changes and the caller must
    /// not start the delay.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        self.message.validate()?;
        self.state = SubmitState::Submitting;
        Ok(())
    }

    /// Moves Submitting -> Idle once the delay has elapsed, clearing the fields.
    /// Returns the notification to show, or None if nothing was in flight.
    pub fn complete(&mut self) -> Option<Notification> {
        if !self.is_submitting() {
            return None;
        }
        self.message = ContactMessage::default();
        self.state = SubmitState::Idle;
        Some(Notification::success(SENT_TITLE).with_description(SENT_DESCRIPTION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Severity;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, name.to_string());
        form.set(Field::Email, email.to_string());
        form.set(Field::Message, message.to_string());
        form
    }

    fn fields(form: &ContactForm) -> (&str, &str, &str) {
        (
            form.value(Field::Name),
            form.value(Field::Email),
            form.value(Field::Message),
        )
    }

    #[test]
    fn test_submit_then_complete_clears_fields() {
        let mut form = filled("Ada", "ada@x.com", "Hello");
        assert!(!form.is_submitting());

        form.submit().expect("complete form should submit");
        assert!(form.is_submitting());
        // fields stay visible while the message is in flight
        assert_eq!(fields(&form), ("Ada", "ada@x.com", "Hello"));

        let notification = form.complete().expect("should notify once");
        assert_eq!(notification.severity, Severity::Success);
        assert_eq!(notification.title, "Message sent successfully!");
        assert!(!form.is_submitting());
        assert_eq!(fields(&form), ("", "", ""));
    }

    #[test]
    fn test_notifies_exactly_once() {
        let mut form = filled("Ada", "ada@x.com", "Hello");
        form.submit().unwrap();
        assert!(form.complete().is_some());
        assert!(form.complete().is_none());
    }

    #[test]
    fn test_empty_form_never_submits() {
        let mut form = ContactForm::new();
        assert_eq!(
            form.submit(),
            Err(SubmitError::Invalid(ValidationError::Missing(Field::Name)))
        );
        assert_eq!(form.state(), SubmitState::Idle);
        assert!(form.complete().is_none());
        assert_eq!(fields(&form), ("", "", ""));
    }

    #[test]
    fn test_each_field_is_required() {
        let cases = [
            (filled("", "ada@x.com", "Hello"), Field::Name),
            (filled("Ada", "", "Hello"), Field::Email),
            (filled("Ada", "ada@x.com", ""), Field::Message),
        ];
        for (mut form, missing) in cases {
            assert_eq!(
                form.submit(),
                Err(SubmitError::Invalid(ValidationError::Missing(missing)))
            );
            assert!(!form.is_submitting());
        }
    }

    #[test]
    fn test_email_follows_browser_rules() {
        let ok = [
            "ada@x.com",
            "  ada@x.com ",
            "a.b+c@sub.example.org",
            "ada@localhost",
            "ada@exämple.com",
            "ada@пример.рф",
        ];
        for email in ok {
            let msg = ContactMessage {
                name: "Ada".into(),
                email: email.into(),
                message: "Hi".into(),
            };
            assert_eq!(msg.validate(), Ok(()), "{email} should be accepted");
        }

        let long_label = format!("ada@{}.com", "a".repeat(MAX_LABEL_LEN + 1));
        let bad = [
            "ada",
            "ada@",
            "@x.com",
            "ada@x..com",
            "ada @x.com",
            "ada@-x.com",
            "ada@x_y.com",
            "adä@example.com",
            long_label.as_str(),
        ];
        for email in bad {
            let msg = ContactMessage {
                name: "Ada".into(),
                email: email.into(),
                message: "Hi".into(),
            };
            assert!(
                matches!(msg.validate(), Err(ValidationError::InvalidEmail(_))),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_second_submit_while_in_flight() {
        let mut form = filled("Ada", "ada@x.com", "Hello");
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(SubmitError::InFlight));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Missing(Field::Email).to_string(),
            "email is required"
        );
        assert_eq!(
            SubmitError::from(ValidationError::InvalidEmail("nope".into())).to_string(),
            "'nope' is not a valid email address"
        );
    }
}
