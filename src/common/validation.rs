use thiserror::Error;

use super::requests::{EarlyAccessRequest, PartnershipRequest, TechnicalOverviewRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Required,
    InvalidEmail,
}

impl FieldIssue {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required => "This field is required.",
            Self::InvalidEmail => "Enter a valid email address.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Serialized (camelCase) name of the offending field.
    pub field: &'static str,
    pub issue: FieldIssue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("invalid fields: {}", field_names(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn field_names(errors: &[FieldError]) -> String {
    errors.iter().map(|err| err.field).collect::<Vec<_>>().join(", ")
}

impl ValidationErrors {
    pub fn issue(&self, field: &str) -> Option<FieldIssue> {
        self.0.iter().find(|err| err.field == field).map(|err| err.issue)
    }

    pub fn clear_field(&mut self, field: &str) {
        self.0.retain(|err| err.field != field);
    }
}

/// Collects field errors, keeping only the first issue found per field.
#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn push(&mut self, field: &'static str, issue: FieldIssue) {
        if !self.errors.iter().any(|err| err.field == field) {
            self.errors.push(FieldError { field, issue });
        }
    }

    fn required(mut self, field: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.push(field, FieldIssue::Required);
        }
        self
    }

    fn email(mut self, field: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.push(field, FieldIssue::Required);
        } else if !is_plausible_email(value.trim()) {
            self.push(field, FieldIssue::InvalidEmail);
        }
        self
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

/// Same bar as a browser `type=email` input: something before and after a single `@`,
/// no whitespace.
fn is_plausible_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = s.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !domain.starts_with('.') && !domain.ends_with('.')
        }
        _ => false,
    }
}

impl EarlyAccessRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::default()
            .required("fullName", &self.full_name)
            .email("email", &self.email)
            .required("company", &self.company)
            .required("useCase", &self.use_case)
            .finish()
    }
}

impl TechnicalOverviewRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::default()
            .email("email", &self.email)
            .required("role", &self.role)
            .required("focusArea", &self.focus_area)
            .finish()
    }
}

impl PartnershipRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::default()
            .required("fullName", &self.full_name)
            .required("organization", &self.organization)
            .required("message", &self.message)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Readiness;

    #[test]
    fn email_plausibility() {
        assert!(is_plausible_email("ada@example.com"));
        assert!(is_plausible_email("ops@localhost"));
        assert!(!is_plausible_email("ada.example.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("ada@"));
        assert!(!is_plausible_email("ada@@example.com"));
        assert!(!is_plausible_email("ada lovelace@example.com"));
        assert!(!is_plausible_email("ada@.example"));
    }

    #[test]
    fn complete_early_access_passes() {
        let request = EarlyAccessRequest {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            company: "Analytical Engines".into(),
            use_case: "Structural monitoring".into(),
            readiness: Readiness::Pilot,
        };
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn fresh_early_access_reports_each_empty_field() {
        let errors = EarlyAccessRequest::default().validate().unwrap_err();

        assert_eq!(errors.issue("fullName"), Some(FieldIssue::Required));
        assert_eq!(errors.issue("email"), Some(FieldIssue::Required));
        assert_eq!(errors.issue("company"), Some(FieldIssue::Required));
        // pre-filled by default
        assert_eq!(errors.issue("useCase"), None);
        assert_eq!(errors.to_string(), "invalid fields: fullName, email, company");
    }

    #[test]
    fn blank_is_not_filled() {
        let request = PartnershipRequest {
            full_name: "Grace Hopper".into(),
            organization: "   ".into(),
            message: "Pilot on a bridge".into(),
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors, ValidationErrors(vec![FieldError { field: "organization", issue: FieldIssue::Required }]));
    }

    #[test]
    fn malformed_overview_email() {
        let request = TechnicalOverviewRequest {
            email: "not-an-email".into(),
            ..Default::default()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.issue("email"), Some(FieldIssue::InvalidEmail));
        assert_eq!(errors.to_string(), "invalid fields: email");
    }

    #[test]
    fn clearing_a_field() {
        let mut errors = EarlyAccessRequest::default().validate().unwrap_err();
        errors.clear_field("email");
        assert_eq!(errors.issue("email"), None);
        assert_eq!(errors.to_string(), "invalid fields: fullName, company");
    }
}
