//! Request and response records exchanged with the backend.
//!
//! Field names serialize in camelCase; that shape is what a live backend would
//! have to accept and return.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Readiness {
    #[default]
    Prototype,
    Pilot,
    Production,
}

impl Readiness {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Prototype => "Prototype ready",
            Self::Pilot => "Pilot-ready environment",
            Self::Production => "Production deployment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarlyAccessRequest {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub use_case: String,
    pub readiness: Readiness,
}

impl Default for EarlyAccessRequest {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            company: String::new(),
            use_case: "Calm-state resilience program".to_string(),
            readiness: Readiness::Prototype,
        }
    }
}

/// `(value, label)` pairs offered by the technical overview role select.
pub const ROLE_OPTIONS: [(&str, &str); 4] = [
    ("Founder", "Founder"),
    ("CTO", "CTO / VP Engineering"),
    ("Research lead", "Research lead"),
    ("Operations", "Operations / Safety"),
];

pub const FOCUS_AREA_OPTIONS: [(&str, &str); 4] = [
    ("Built environment", "Built environment"),
    ("Healthcare", "Healthcare & pharma"),
    ("Genetics", "Genetics & adaptive biology"),
    ("Defense", "Defense & aerospace"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalOverviewRequest {
    pub email: String,
    pub role: String,
    pub focus_area: String,
}

impl Default for TechnicalOverviewRequest {
    fn default() -> Self {
        Self {
            email: String::new(),
            role: ROLE_OPTIONS[0].0.to_string(),
            focus_area: FOCUS_AREA_OPTIONS[0].0.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipRequest {
    pub full_name: String,
    pub organization: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl SocialProvider {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Facebook => "Facebook",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLoginResponse {
    pub provider: SocialProvider,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl SocialLoginResponse {
    /// The canned profile the mock backend hands out for `provider`.
    pub fn canned(provider: SocialProvider) -> Self {
        let (name, email, avatar) = match provider {
            SocialProvider::Google => (
                "Google Researcher",
                "researcher@qe.example",
                "https://www.gravatar.com/avatar/?d=identicon",
            ),
            SocialProvider::Facebook => (
                "Facebook Engineer",
                "engineer@qe.example",
                "https://www.gravatar.com/avatar/?d=mp",
            ),
        };

        Self {
            provider,
            name: name.to_string(),
            email: email.to_string(),
            avatar_url: Some(avatar.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Ok,
}

/// What the backend answers to a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt<T> {
    pub status: ReceiptStatus,
    pub received: T,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl<T> SubmissionReceipt<T> {
    pub fn ok(received: T, timestamp: u64) -> Self {
        Self {
            status: ReceiptStatus::Ok,
            received,
            timestamp,
        }
    }
}
