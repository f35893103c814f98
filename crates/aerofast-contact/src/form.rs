use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ContactError;

/// RFQ form as posted by the page. Every field is required; surrounding
/// whitespace does not count as content.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct InquiryForm {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub company: String,
    #[validate(email)]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub message: String,
}

impl InquiryForm {
    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            company: self.company.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// A validated inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInquiry {
    pub name: String,
    pub company: String,
    pub email: String,
    /// Free text; usually part numbers, quantities and specs.
    pub message: String,
}

impl TryFrom<InquiryForm> for ContactInquiry {
    type Error = ContactError;

    fn try_from(value: InquiryForm) -> Result<Self, Self::Error> {
        let form = value.trimmed();
        form.validate()?;

        Ok(Self {
            name: form.name,
            company: form.company,
            email: form.email,
            message: form.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> InquiryForm {
        InquiryForm {
            name: "Dana Reyes".to_string(),
            company: "Skyline MRO".to_string(),
            email: "dana@skyline-mro.com".to_string(),
            message: "Need 500x NAS1149F0363P, cert required.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let mut raw = form();
        raw.name = "  Dana Reyes ".to_string();
        raw.email = " dana@skyline-mro.com\n".to_string();

        let inquiry = ContactInquiry::try_from(raw).unwrap();
        assert_eq!(inquiry.name, "Dana Reyes");
        assert_eq!(inquiry.email, "dana@skyline-mro.com");
    }

    #[test]
    fn test_blank_fields_rejected() {
        for field in ["name", "company", "message"] {
            let mut raw = form();
            match field {
                "name" => raw.name = "   ".to_string(),
                "company" => raw.company = String::new(),
                _ => raw.message = "\t".to_string(),
            }
            let err = ContactInquiry::try_from(raw).unwrap_err();
            match err {
                ContactError::Validation(msg) => assert!(msg.contains(field), "{}", msg),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_invalid_email_rejected() {
        for email in ["", "dana", "dana@", "@skyline.com"] {
            let mut raw = form();
            raw.email = email.to_string();
            assert!(
                matches!(ContactInquiry::try_from(raw), Err(ContactError::Validation(_))),
                "{:?} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_missing_fields_deserialize_as_blank() {
        let raw: InquiryForm = serde_json::from_str(r#"{"name": "Dana"}"#).unwrap();
        assert!(ContactInquiry::try_from(raw).is_err());
    }
}
