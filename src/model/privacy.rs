use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsentType {
    #[serde(alias = "terms")]
    Terms,
    #[serde(alias = "privacy_policy")]
    PrivacyPolicy,
    #[serde(alias = "marketing")]
    Marketing,
    #[serde(alias = "analytics")]
    Analytics,
}

impl ConsentType {
    pub const ALL: [ConsentType; 4] = [
        Self::Terms,
        Self::PrivacyPolicy,
        Self::Marketing,
        Self::Analytics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Terms => "Terms of service",
            Self::PrivacyPolicy => "Privacy policy",
            Self::Marketing => "Marketing emails",
            Self::Analytics => "Usage analytics",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentDto {
    pub id: i64,
    pub user_id: i64,
    pub consent_type: ConsentType,
    pub granted: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentRequest {
    pub user_id: i64,
    pub consent_type: ConsentType,
    pub granted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeletionRequestStatus {
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "approved")]
    Approved,
    #[serde(alias = "rejected")]
    Rejected,
    #[serde(alias = "completed")]
    Completed,
}

impl DeletionRequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Completed => "Completed",
        }
    }
}

/// A GDPR right-to-erasure request awaiting admin processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionRequestDto {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: DeletionRequestStatus,
    pub requested_at: NaiveDateTime,
    #[serde(default)]
    pub processed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub admin_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionRequestRequest {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDeletionRequest {
    pub approve: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}
