use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    FullName,
    Email,
    Company,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::FullName,
        FormField::Email,
        FormField::Company,
        FormField::Message,
    ];

    /// Value of the `name` attribute on the matching input.
    pub fn name(self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::FullName => "Full name",
            FormField::Email => "Email",
            FormField::Company => "Company",
            FormField::Message => "Message",
        }
    }
}

/// The contact form contents. Serialized as the payload a real backend would receive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FullName => self.full_name = value,
            FormField::Email => self.email = value,
            FormField::Company => self.company = value,
            FormField::Message => self.message = value,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::FullName => self.full_name.as_deref(),
            FormField::Email => self.email.as_deref(),
            FormField::Company => self.company.as_deref(),
            FormField::Message => self.message.as_deref(),
        }
    }

    fn slot(&mut self, field: FormField) -> &mut Option<String> {
        match field {
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self, field: FormField) {
        *self.slot(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_none())
    }

    pub fn len(&self) -> usize {
        FormField::ALL
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }
}

fn check_full_name(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        Some("Full name is required")
    } else if value.chars().count() < MIN_NAME_LEN {
        Some("Full name must be at least 2 characters")
    } else {
        None
    }
}

fn check_email(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        Some("Email is required")
    } else if !EMAIL_PATTERN.is_match(value) {
        Some("Please enter a valid email address")
    } else {
        None
    }
}

fn check_company(value: &str) -> Option<&'static str> {
    value.trim().is_empty().then_some("Company name is required")
}

fn check_message(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        Some("Message is required")
    } else if value.chars().count() < MIN_MESSAGE_LEN {
        Some("Message must be at least 10 characters")
    } else {
        None
    }
}

/// Runs every field check. Pure; the result replaces any previous error set wholesale.
pub fn validate(data: &FormData) -> FormErrors {
    FormErrors {
        full_name: check_full_name(&data.full_name).map(str::to_string),
        email: check_email(&data.email).map(str::to_string),
        company: check_company(&data.company).map(str::to_string),
        message: check_message(&data.message).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(full_name: &str, email: &str, company: &str, message: &str) -> FormData {
        FormData {
            full_name: full_name.to_string(),
            email: email.to_string(),
            company: company.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn complete_form_passes() {
        let errors = validate(&form("Jane Doe", "jane@acme.com", "Acme", "Please call me back soon"));
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn missing_name_is_the_only_error() {
        let errors = validate(&form("", "a@b.com", "Acme", "hello there"));
        assert_eq!(
            errors,
            FormErrors {
                full_name: Some("Full name is required".to_string()),
                ..FormErrors::default()
            }
        );
    }

    #[test]
    fn bad_email_and_short_message_are_reported() {
        let errors = validate(&form("Jo", "not-an-email", "Acme", "short"));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.email.as_deref(), Some("Please enter a valid email address"));
        assert_eq!(
            errors.message.as_deref(),
            Some("Message must be at least 10 characters")
        );
        assert!(errors.full_name.is_none());
        assert!(errors.company.is_none());
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let errors = validate(&form("   ", " ", "\t", "  \n "));
        assert_eq!(errors.full_name.as_deref(), Some("Full name is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.company.as_deref(), Some("Company name is required"));
        assert_eq!(errors.message.as_deref(), Some("Message is required"));
    }

    #[test]
    fn single_character_name_is_too_short() {
        let errors = validate(&form(" J ", "a@b.com", "Acme", "hello there"));
        assert_eq!(
            errors.full_name.as_deref(),
            Some("Full name must be at least 2 characters")
        );
    }

    #[test]
    fn email_shape_needs_domain_dot_and_no_spaces() {
        for bad in ["a@b", "@b.com", "a@.com", "a b@c.com", "a@b.", "a@@b.com"] {
            assert!(check_email(bad).is_some(), "{bad} should be rejected");
        }
        for good in ["a@b.co", "  first.last@sub.example.org  ", "x+y@d.io"] {
            assert!(check_email(good).is_none(), "{good} should be accepted");
        }
    }

    #[test]
    fn message_length_is_measured_after_trimming() {
        assert!(check_message("   123456789   ").is_some());
        assert!(check_message("1234567890").is_none());
    }

    #[test]
    fn validation_is_idempotent() {
        let data = form("J", "", "Acme", "tiny");
        assert_eq!(validate(&data), validate(&data));
    }

    #[test]
    fn clearing_one_field_leaves_the_rest() {
        let mut errors = validate(&FormData::default());
        errors.clear(FormField::Email);
        assert!(errors.email.is_none());
        assert_eq!(errors.len(), 3);
    }
}
