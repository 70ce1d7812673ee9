use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;

/// Pattern a contact email address has to match: `local@domain.tld`.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A contact form submission whose fields passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub message: ContactContent,
}

/// Kept verbatim, blank only counts as missing.
#[nutype(
    validate(predicate = |name| !name.trim().is_empty()),
    derive(Debug, Clone, PartialEq, Eq, Display, AsRef, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct ContactName(String);

/// Matches [`CONTACT_EMAIL_REGEX`] and is accepted as an SMTP address.
#[nutype(
    validate(predicate = |email| is_contact_email(email)),
    derive(Debug, Clone, PartialEq, Eq, Display, AsRef, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct ContactEmail(String);

/// Kept verbatim, indentation and line breaks matter in the rendered email.
#[nutype(
    validate(predicate = |message| !message.trim().is_empty()),
    derive(Debug, Clone, PartialEq, Eq, Display, AsRef, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct ContactContent(String);

fn is_contact_email(email: &str) -> bool {
    CONTACT_EMAIL_REGEX.is_match(email) && email.parse::<lettre::Address>().is_ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFieldError {
    /// The field is empty or contains only whitespace.
    Required,
    /// The field is present but malformed.
    InvalidFormat,
}

/// Validation result of every field of a submission.
///
/// `None` means the field is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactFieldErrors {
    pub name: Option<ContactFieldError>,
    pub email: Option<ContactFieldError>,
    pub message: Option<ContactFieldError>,
}

impl ContactFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    /// Whether at least one field is missing entirely.
    pub fn has_missing(&self) -> bool {
        [self.name, self.email, self.message].contains(&Some(ContactFieldError::Required))
    }
}

impl ContactSubmission {
    /// Validate the raw field values of a contact form.
    ///
    /// Every field is checked, a failing field never hides the errors of the
    /// others.
    pub fn validate(name: &str, email: &str, message: &str) -> Result<Self, ContactFieldErrors> {
        let name = ContactName::try_new(name.to_owned()).map_err(|_| ContactFieldError::Required);

        let email = if email.trim().is_empty() {
            Err(ContactFieldError::Required)
        } else {
            ContactEmail::try_new(email.to_owned()).map_err(|_| ContactFieldError::InvalidFormat)
        };

        let message =
            ContactContent::try_new(message.to_owned()).map_err(|_| ContactFieldError::Required);

        match (name, email, message) {
            (Ok(name), Ok(email), Ok(message)) => Ok(Self {
                name,
                email,
                message,
            }),
            (name, email, message) => Err(ContactFieldErrors {
                name: name.err(),
                email: email.err(),
                message: message.err(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn valid_submission() {
        let submission = ContactSubmission::validate("Carlos", "carlos@x.com", "Hola").unwrap();
        assert_eq!(submission.name.as_ref(), "Carlos");
        assert_eq!(submission.email.as_ref(), "carlos@x.com");
        assert_eq!(submission.message.as_ref(), "Hola");
    }

    #[test]
    fn all_fields_blank() {
        let errors = ContactSubmission::validate("", "  ", "\n\t").unwrap_err();
        assert_eq!(
            errors,
            ContactFieldErrors {
                name: Some(ContactFieldError::Required),
                email: Some(ContactFieldError::Required),
                message: Some(ContactFieldError::Required),
            }
        );
        assert!(errors.has_missing());
    }

    #[test]
    fn fields_are_checked_independently() {
        let errors = ContactSubmission::validate(" ", "carlos@x.com", "Hola").unwrap_err();
        assert_eq!(
            errors,
            ContactFieldErrors {
                name: Some(ContactFieldError::Required),
                ..Default::default()
            }
        );

        let errors = ContactSubmission::validate("Carlos", "carlos", "").unwrap_err();
        assert_eq!(
            errors,
            ContactFieldErrors {
                name: None,
                email: Some(ContactFieldError::InvalidFormat),
                message: Some(ContactFieldError::Required),
            }
        );
    }

    #[test]
    fn invalid_email_is_not_missing() {
        let errors = ContactSubmission::validate("Carlos", "carlos@x", "Hola").unwrap_err();
        assert_eq!(errors.email, Some(ContactFieldError::InvalidFormat));
        assert!(!errors.has_missing());
        assert!(!errors.is_empty());
    }

    #[test]
    fn email_pattern() {
        for (input, valid) in [
            ("carlos@x.com", true),
            ("ana@test.com", true),
            ("a.b+c@sub.domain.io", true),
            ("carlos@x", false),
            ("carlos.x.com", false),
            ("carlos@@x.com", false),
            ("car los@x.com", false),
            (" carlos@x.com", false),
            ("carlos@x.com ", false),
            ("@x.com", false),
            ("carlos@.com", false),
        ] {
            assert_eq!(
                ContactEmail::try_new(input.to_owned()).is_ok(),
                valid,
                "{input:?}"
            );
        }
    }

    #[test]
    fn name_and_message_are_kept_verbatim() {
        let message = "    fn main() {}\n\n-- Carlos\n";
        let submission = ContactSubmission::validate("  Carlos ", "carlos@x.com", message).unwrap();
        assert_eq!(submission.name.into_inner(), "  Carlos ");
        assert_eq!(submission.message.into_inner(), message);
    }

    #[test]
    fn email_must_be_a_valid_smtp_address() {
        for input in ["a,b@x.com", "a\"b@x.com", "a(b)@x.com"] {
            let errors = ContactSubmission::validate("Carlos", input, "Hola").unwrap_err();
            assert_eq!(
                errors,
                ContactFieldErrors {
                    email: Some(ContactFieldError::InvalidFormat),
                    ..Default::default()
                },
                "{input:?}"
            );
        }
    }
}
