use std::{collections::BTreeMap, fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Basic `local@domain.tld` shape. Applied to the raw (untrimmed) value, so
/// surrounding whitespace is rejected.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

impl ContactForm {
    /// Minimum number of characters of the trimmed message.
    pub const MESSAGE_MIN_LEN: usize = 10;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Email Address",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::Subject => "Project Discussion",
            Self::Message => "Tell me about your project...",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown contact form field: {0:?}")]
pub struct UnknownContactField(pub String);

impl FromStr for ContactField {
    type Err = UnknownContactField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownContactField(s.into()))
    }
}

/// The values currently entered into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }

    /// Checks every field and returns the errors of the fields that are
    /// currently invalid. An empty result means the form can be submitted.
    pub fn validate(&self) -> ValidationErrors {
        ContactField::ALL
            .into_iter()
            .filter_map(|field| validate_field(field, self.get(field)).map(|err| (field, err)))
            .collect()
    }

    /// Validates the form and converts it into the message payload.
    pub fn to_message(&self) -> Result<ContactMessage, ValidationErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactMessage {
            author: ContactMessageAuthor {
                name: self.name.clone(),
                email: self.email.clone(),
            },
            subject: self.subject.clone(),
            content: self.message.clone(),
        })
    }
}

fn validate_field(field: ContactField, value: &str) -> Option<ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(ValidationError::Required(field));
    }

    match field {
        ContactField::Email if !EMAIL_REGEX.is_match(value) => Some(ValidationError::InvalidEmail),
        ContactField::Message if trimmed.chars().count() < ContactForm::MESSAGE_MIN_LEN => {
            Some(ValidationError::MessageTooShort)
        }
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.display_name())]
    Required(ContactField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least {} characters long", ContactForm::MESSAGE_MIN_LEN)]
    MessageTooShort,
}

/// Per-field validation errors. Fields without an entry are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<ContactField, ValidationError>);

impl ValidationErrors {
    pub fn get(&self, field: ContactField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn remove(&mut self, field: ContactField) -> Option<ValidationError> {
        self.0.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, ValidationError)> + '_ {
        self.0.iter().map(|(&field, &err)| (field, err))
    }
}

impl FromIterator<(ContactField, ValidationError)> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = (ContactField, ValidationError)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, err)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {err}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Label of the submit control in this state.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Submitting => "Sending...",
            Self::Success => "Message Sent",
            Self::Error => "Try Again",
        }
    }

    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }
}

/// A validated message ready to be handed to the delivery service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Max Mustermann".into(),
            email: "max.mustermann@example.de".into(),
            subject: "Project Discussion".into(),
            message: "I would like to build a payment gateway.".into(),
        }
    }

    #[test]
    fn valid() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn empty_field_is_required() {
        for field in ContactField::ALL {
            for value in ["", "   ", "\n\t"] {
                let mut form = valid_form();
                form.set(field, value.into());

                let errors = form.validate();

                assert_eq!(errors.len(), 1, "{field} = {value:?}");
                assert_eq!(errors.get(field), Some(ValidationError::Required(field)));
            }
        }
    }

    #[test]
    fn required_messages() {
        let errors = ContactForm::default().validate();

        let messages = errors
            .iter()
            .map(|(field, err)| (field, err.to_string()))
            .collect::<Vec<_>>();
        assert_eq!(
            messages,
            [
                (ContactField::Name, "Name is required".to_owned()),
                (ContactField::Email, "Email is required".to_owned()),
                (ContactField::Subject, "Subject is required".to_owned()),
                (ContactField::Message, "Message is required".to_owned()),
            ]
        );
    }

    #[test]
    fn invalid_email() {
        for email in [
            "not-an-email",
            "missing@tld",
            "@example.com",
            "two@@example.com",
            "with space@example.com",
            " max@example.com",
        ] {
            let form = ContactForm {
                email: email.into(),
                ..Default::default()
            };

            let errors = form.validate();

            assert_eq!(
                errors.get(ContactField::Email),
                Some(ValidationError::InvalidEmail),
                "{email:?}"
            );
        }
    }

    #[test]
    fn invalid_email_message() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn message_too_short() {
        let mut form = valid_form();
        form.message = "short".into();

        let errors = form.validate();

        assert_eq!(errors.len(), 1);
        let err = errors.get(ContactField::Message).unwrap();
        assert_eq!(err, ValidationError::MessageTooShort);
        assert!(err.to_string().contains("must be at least 10 characters"));
    }

    #[test]
    fn message_length_is_trimmed() {
        let mut form = valid_form();
        form.message = "   123456789   ".into();
        assert_eq!(
            form.validate().get(ContactField::Message),
            Some(ValidationError::MessageTooShort)
        );

        form.message = "exactly ten".into();
        assert!(form.validate().is_empty());

        form.message = "0123456789".into();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn validate_is_idempotent() {
        let form = ContactForm {
            name: "Max".into(),
            email: "nope".into(),
            subject: "".into(),
            message: "hi".into(),
        };

        assert_eq!(form.validate(), form.validate());
    }

    #[test]
    fn to_message() {
        let message = valid_form().to_message().unwrap();

        assert_eq!(
            message,
            ContactMessage {
                author: ContactMessageAuthor {
                    name: "Max Mustermann".into(),
                    email: "max.mustermann@example.de".into(),
                },
                subject: "Project Discussion".into(),
                content: "I would like to build a payment gateway.".into(),
            }
        );
    }

    #[test]
    fn to_message_invalid() {
        let errors = ContactForm::default().to_message().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn parse_field() {
        for field in ContactField::ALL {
            assert_eq!(field.as_str().parse::<ContactField>(), Ok(field));
        }
        assert_eq!(
            "phone".parse::<ContactField>(),
            Err(UnknownContactField("phone".into()))
        );
    }

    #[test]
    fn button_labels() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
        assert_eq!(SubmissionStatus::Idle.button_label(), "Send Message");
        assert_eq!(SubmissionStatus::Submitting.button_label(), "Sending...");
        assert_eq!(SubmissionStatus::Success.button_label(), "Message Sent");
        assert_eq!(SubmissionStatus::Error.button_label(), "Try Again");
    }
}
