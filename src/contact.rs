use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

pub const MIN_MESSAGE_LEN: usize = 10;
pub const SUBMIT_DELAY: Duration = Duration::from_secs(1);
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub recipient: String,
    pub min_message_len: usize,
    pub submit_delay: Duration,
    pub success_display: Duration,
}

impl ContactConfig {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            min_message_len: MIN_MESSAGE_LEN,
            submit_delay: SUBMIT_DELAY,
            success_display: SUCCESS_DISPLAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
    TooShort,
}

impl FieldError {
    pub fn message(self, field: Field) -> String {
        match self {
            Self::Required => format!("{} is required", field.label()),
            Self::InvalidFormat => "Please enter a valid email".to_string(),
            Self::TooShort => format!(
                "{} must be at least {MIN_MESSAGE_LEN} characters",
                field.label()
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// Field -> error. An absent field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.message(field))
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate(data: &ContactFormData) -> ValidationErrors {
    validate_with(data, MIN_MESSAGE_LEN)
}

pub fn validate_with(data: &ContactFormData, min_message_len: usize) -> ValidationErrors {
    let mut errors = BTreeMap::new();

    if data.name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::Required);
    }

    if data.email.trim().is_empty() {
        errors.insert(Field::Email, FieldError::Required);
    } else if !is_valid_email(&data.email) {
        errors.insert(Field::Email, FieldError::InvalidFormat);
    }

    let message = data.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, FieldError::Required);
    } else if message.chars().count() < min_message_len {
        errors.insert(Field::Message, FieldError::TooShort);
    }

    ValidationErrors(errors)
}

/// A composed message for the visitor's mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoRequest {
    pub fn compose(recipient: &str, data: &ContactFormData) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: format!("Contact from {}", data.name),
            body: format!(
                "Name: {}\nEmail: {}\n\nMessage:\n{}",
                data.name, data.email, data.message
            ),
        }
    }

    pub fn href(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed, the form is now `Submitting`.
    Started,
    /// Validation failed; errors are set and the status stays `Idle`.
    Invalid,
    /// A submission is already underway or its success is still displayed.
    Busy,
}

/// Contact form state: fields, inline errors, and submission status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    config: ContactConfig,
    data: ContactFormData,
    errors: ValidationErrors,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new(config: ContactConfig) -> Self {
        Self {
            config,
            data: ContactFormData::default(),
            errors: ValidationErrors::default(),
            status: SubmitStatus::Idle,
        }
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Updates one field and drops its error so it can be corrected on its own.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value);
        self.errors.clear(field);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.status != SubmitStatus::Idle {
            return SubmitOutcome::Busy;
        }
        self.errors = validate_with(&self.data, self.config.min_message_len);
        if !self.errors.is_valid() {
            return SubmitOutcome::Invalid;
        }
        self.status = SubmitStatus::Submitting;
        SubmitOutcome::Started
    }

    /// Submitting -> Success. Hands back the mail to compose and clears the
    /// fields.
    pub fn finish(&mut self) -> Option<MailtoRequest> {
        if self.status != SubmitStatus::Submitting {
            return None;
        }
        let request = MailtoRequest::compose(&self.config.recipient, &self.data);
        self.data = ContactFormData::default();
        self.errors = ValidationErrors::default();
        self.status = SubmitStatus::Success;
        Some(request)
    }

    /// Success -> Idle once the confirmation has been shown.
    pub fn revert(&mut self) {
        if self.status == SubmitStatus::Success {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(name: &str, email: &str, message: &str) -> ContactFormData {
        ContactFormData {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn form() -> ContactForm {
        ContactForm::new(ContactConfig::new("me@example.com"))
    }

    #[test]
    fn test_empty_form_requires_everything() {
        let errors = validate(&data("", "", ""));
        assert_eq!(errors.len(), 3);
        for field in Field::ALL {
            assert_eq!(errors.get(field), Some(FieldError::Required));
        }

        let errors = validate(&data("   ", " \t", "\n  "));
        assert!(errors.iter().all(|(_, e)| e == FieldError::Required));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_format_and_length_errors() {
        let errors = validate(&data("Ann", "not-an-email", "short"));
        assert_eq!(errors.get(Field::Name), None);
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidFormat));
        assert_eq!(errors.get(Field::Message), Some(FieldError::TooShort));
        assert_eq!(
            errors.message(Field::Message).unwrap(),
            "Message must be at least 10 characters"
        );
        assert_eq!(
            errors.message(Field::Email).unwrap(),
            "Please enter a valid email"
        );
    }

    #[test]
    fn test_message_length_uses_trimmed_text() {
        assert_eq!(
            validate(&data("Ann", "a@b.co", "   123456789   ")).get(Field::Message),
            Some(FieldError::TooShort)
        );
        assert!(validate(&data("Ann", "a@b.co", "  1234567890  ")).is_valid());
        // counted in characters, not bytes
        assert!(validate(&data("Ann", "a@b.co", "héllo wörld")).is_valid());
        assert_eq!(
            validate(&data("Ann", "a@b.co", "ééééé")).get(Field::Message),
            Some(FieldError::TooShort)
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("ann@example.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("ann@example"));
        assert!(!is_valid_email("ann@@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("ann smith@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ann@.com"));
        assert!(!is_valid_email("ann@example."));
        assert!(!is_valid_email(" ann@example.com"));
    }

    #[test]
    fn test_valid_input_revalidates() {
        let input = data("Ann", "ann@example.com", "Hello there, nice site!");
        let first = validate(&input);
        assert!(first.is_valid());
        let again = validate(&input.clone());
        assert_eq!(first, again);
        assert!(again.is_valid());
    }

    #[test]
    fn test_edit_clears_only_that_field() {
        let mut form = form();
        assert_eq!(form.submit(), SubmitOutcome::Invalid);
        assert_eq!(form.errors().len(), 3);
        assert_eq!(form.status(), SubmitStatus::Idle);

        form.edit(Field::Email, "ann@");
        assert_eq!(form.errors().get(Field::Email), None);
        assert_eq!(form.errors().get(Field::Name), Some(FieldError::Required));
        assert_eq!(form.errors().len(), 2);
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut form = form();
        form.edit(Field::Name, "Ann Lee");
        form.edit(Field::Email, "ann@example.com");
        form.edit(Field::Message, "I'd like to talk about a project.");

        assert_eq!(form.submit(), SubmitOutcome::Started);
        assert_eq!(form.status(), SubmitStatus::Submitting);
        assert_eq!(form.submit(), SubmitOutcome::Busy);

        let mail = form.finish().unwrap();
        assert_eq!(mail.recipient, "me@example.com");
        assert_eq!(mail.subject, "Contact from Ann Lee");
        assert_eq!(
            mail.body,
            "Name: Ann Lee\nEmail: ann@example.com\n\nMessage:\nI'd like to talk about a project."
        );
        assert_eq!(form.status(), SubmitStatus::Success);
        assert_eq!(form.data(), &ContactFormData::default());
        assert!(form.finish().is_none());

        assert_eq!(form.submit(), SubmitOutcome::Busy);
        form.revert();
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_mailto_href_is_encoded() {
        let mail =
            MailtoRequest::compose("me@example.com", &data("Ann & Bo", "a@b.co", "Hi!\nBye"));
        assert_eq!(
            mail.href(),
            "mailto:me@example.com?subject=Contact%20from%20Ann%20%26%20Bo&body=Name%3A%20Ann%20%26%20Bo%0AEmail%3A%20a%40b.co%0A%0AMessage%3A%0AHi%21%0ABye"
        );
    }

    #[test]
    fn test_revert_outside_success_is_noop() {
        let mut form = form();
        form.revert();
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert!(form.finish().is_none());
    }
}
