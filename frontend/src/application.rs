use serde::Serialize;
use thiserror::Error;

use crate::content::{DESCRIPTION_MAX_CHARS, DOMAINS, PHONE_PREFIX};

const MOBILE_DIGITS: usize = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdeaType {
    #[default]
    Tech,
    NonTech,
    Combined,
}

impl IdeaType {
    pub const ALL: [IdeaType; 3] = [IdeaType::Tech, IdeaType::NonTech, IdeaType::Combined];

    pub fn label(self) -> &'static str {
        match self {
            IdeaType::Tech => "Tech",
            IdeaType::NonTech => "Non-Tech",
            IdeaType::Combined => "Combined",
        }
    }
}

/// Nomination form state as typed by the applicant.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    /// Digits only, the `+91` prefix is rendered next to the input.
    pub mobile_number: String,
    pub college: String,
    pub is_solo_founder: bool,
    pub needs_cofounder: bool,
    pub idea_type: IdeaType,
    /// Empty until a domain is picked.
    pub domain: String,
    pub idea_description: String,
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            mobile_number: String::new(),
            college: String::new(),
            is_solo_founder: true,
            needs_cofounder: false,
            idea_type: IdeaType::Tech,
            domain: String::new(),
            idea_description: String::new(),
        }
    }
}

/// Row inserted into the `applications` table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApplicationRecord {
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub college: String,
    pub is_solo_founder: bool,
    pub needs_cofounder: bool,
    pub idea_type: IdeaType,
    pub domains: Vec<String>,
    pub idea_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your full name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter your mobile number.")]
    MissingMobile,
    #[error("Please enter a 10-digit mobile number.")]
    InvalidMobile,
    #[error("Please enter your college or institution name.")]
    MissingCollege,
    #[error("Please select the domain of your idea.")]
    MissingDomain,
    #[error("Please select one of the listed domains.")]
    UnknownDomain,
    #[error("Please tell us briefly about your idea.")]
    MissingDescription,
    #[error("Idea description must be at most {max} characters.")]
    DescriptionTooLong { max: usize },
}

impl ApplicationForm {
    pub fn validate(&self) -> Result<ApplicationRecord, ValidationError> {
        let full_name = required(&self.full_name, ValidationError::MissingName)?;
        let email = required(&self.email, ValidationError::MissingEmail)?;
        if !looks_like_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }
        let mobile_number = normalize_mobile(&self.mobile_number)?;
        let college = required(&self.college, ValidationError::MissingCollege)?;

        let domain = required(&self.domain, ValidationError::MissingDomain)?;
        if !DOMAINS.contains(&domain.as_str()) {
            return Err(ValidationError::UnknownDomain);
        }

        let idea_description =
            required(&self.idea_description, ValidationError::MissingDescription)?;
        if idea_description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX_CHARS,
            });
        }

        Ok(ApplicationRecord {
            full_name,
            email,
            mobile_number,
            college,
            is_solo_founder: self.is_solo_founder,
            needs_cofounder: self.needs_cofounder,
            idea_type: self.idea_type,
            domains: vec![domain],
            idea_description,
        })
    }
}

pub fn description_counter(text: &str) -> String {
    format!("{}/{}", text.chars().count(), DESCRIPTION_MAX_CHARS)
}

fn required(value: &str, missing: ValidationError) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(missing)
    } else {
        Ok(trimmed.to_string())
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

fn normalize_mobile(raw: &str) -> Result<String, ValidationError> {
    let digits: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if digits.is_empty() {
        return Err(ValidationError::MissingMobile);
    }
    if digits.len() != MOBILE_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidMobile);
    }
    Ok(format!("{}{}", PHONE_PREFIX, digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> ApplicationForm {
        ApplicationForm {
            full_name: "  Asha Verma ".to_string(),
            email: "asha@example.in".to_string(),
            mobile_number: "98765 43210".to_string(),
            college: "IIT Roorkee".to_string(),
            is_solo_founder: false,
            needs_cofounder: true,
            idea_type: IdeaType::NonTech,
            domain: "AgriTech".to_string(),
            idea_description: "Cold storage booking for small farmers".to_string(),
        }
    }

    #[test]
    fn default_form_matches_reset_state() {
        let form = ApplicationForm::default();
        assert!(form.is_solo_founder);
        assert!(!form.needs_cofounder);
        assert_eq!(form.idea_type, IdeaType::Tech);
        assert!(form.domain.is_empty());
    }

    #[test]
    fn valid_form_produces_wire_payload() {
        let record = filled().validate().unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "full_name": "Asha Verma",
                "email": "asha@example.in",
                "mobile_number": "+919876543210",
                "college": "IIT Roorkee",
                "is_solo_founder": false,
                "needs_cofounder": true,
                "idea_type": "non-tech",
                "domains": ["AgriTech"],
                "idea_description": "Cold storage booking for small farmers",
            })
        );
    }

    #[test]
    fn idea_type_wire_values() {
        let values: Vec<_> = IdeaType::ALL
            .iter()
            .map(|t| serde_json::to_value(t).unwrap())
            .collect();
        assert_eq!(values, vec![json!("tech"), json!("non-tech"), json!("combined")]);
    }

    #[test]
    fn blank_fields_are_rejected_in_form_order() {
        let empty = ApplicationForm::default();
        assert_eq!(empty.validate(), Err(ValidationError::MissingName));

        let mut form = filled();
        form.college = "   ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingCollege));

        let mut form = filled();
        form.domain.clear();
        assert_eq!(form.validate(), Err(ValidationError::MissingDomain));

        let mut form = filled();
        form.idea_description = "\n".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingDescription));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["asha", "@example.in", "asha@example", "asha@@example.in", "as ha@example.in"] {
            let mut form = filled();
            form.email = bad.to_string();
            assert_eq!(form.validate(), Err(ValidationError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn mobile_needs_ten_digits() {
        let mut form = filled();
        form.mobile_number = "98765".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidMobile));

        form.mobile_number = "+919876543210".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidMobile));

        form.mobile_number = "98765-43210".to_string();
        assert_eq!(form.validate().unwrap().mobile_number, "+919876543210");
    }

    #[test]
    fn domain_must_be_listed() {
        let mut form = filled();
        form.domain = "SpaceTech".to_string();
        assert_eq!(form.validate(), Err(ValidationError::UnknownDomain));
    }

    #[test]
    fn description_limit_counts_chars() {
        let mut form = filled();
        form.idea_description = "é".repeat(DESCRIPTION_MAX_CHARS);
        assert!(form.validate().is_ok());

        form.idea_description.push('x');
        assert_eq!(
            form.validate(),
            Err(ValidationError::DescriptionTooLong { max: DESCRIPTION_MAX_CHARS })
        );
    }

    #[test]
    fn counter_shows_chars_over_limit() {
        assert_eq!(description_counter(""), "0/500");
        assert_eq!(description_counter("नमस्ते"), "6/500");
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            ValidationError::DescriptionTooLong { max: 500 }.to_string(),
            "Idea description must be at most 500 characters."
        );
    }
}
