use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// The contact form as submitted. Serialized as a flat field mapping for
/// the submission endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Presence first, then the email shape.
pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    let required = [Field::Name, Field::Email, Field::Subject, Field::Message];
    if required.iter().any(|field| fields.get(*field).is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    if !is_email_shaped(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada Lovelace".into(),
            email: "ada@studio.example".into(),
            subject: "Archive access".into(),
            message: "We have 4,000 reels to preserve.".into(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(validate(&filled()), Ok(()));
    }

    #[test]
    fn each_missing_field_fails_with_one_error() {
        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            let mut fields = filled();
            fields.set(field, String::new());
            assert_eq!(validate(&fields), Err(ValidationError::MissingFields), "{:?}", field);
        }
        assert_eq!(
            validate(&ContactFields::default()),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn presence_is_checked_before_email_shape() {
        let mut fields = filled();
        fields.email = "not-an-email".into();
        fields.subject.clear();
        assert_eq!(validate(&fields), Err(ValidationError::MissingFields));
    }

    #[test]
    fn malformed_email_fails() {
        let mut fields = filled();
        fields.email = "not-an-email".into();
        assert_eq!(validate(&fields), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_shape() {
        for ok in ["a@b.co", "first.last@sub.domain.org", "x+tag@y.z"] {
            assert!(is_email_shaped(ok), "{}", ok);
        }
        for bad in ["plain", "a@b", "@b.co", "a@.", "a b@c.d", "a@b@c.d", "a@b.co "] {
            assert!(!is_email_shaped(bad), "{}", bad);
        }
    }

    #[test]
    fn messages_match_the_site_copy() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn serializes_as_flat_mapping() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["email"], "ada@studio.example");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
