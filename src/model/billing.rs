use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "paid", alias = "COMPLETED")]
    Paid,
    #[serde(alias = "failed")]
    Failed,
    #[serde(alias = "refunded")]
    Refunded,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Failed => "Failed",
            Self::Refunded => "Refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A subscription charge for one hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: i64,
    pub hotel_id: i64,
    #[serde(default)]
    pub hotel_name: Option<String>,
    #[serde(default)]
    pub plan_name: Option<String>,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: PaymentStatus,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub paid_at: Option<NaiveDateTime>,
}

fn default_currency() -> String {
    "EUR".to_string()
}
