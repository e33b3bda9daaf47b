use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role, decides which pages a user may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[serde(rename = "SUPERADMIN", alias = "superadmin", alias = "SUPER_ADMIN")]
    SuperAdmin,
    #[serde(alias = "admin")]
    Admin,
    #[serde(alias = "technician")]
    Technician,
    #[serde(alias = "client")]
    Client,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super admin",
            Self::Admin => "Hotel admin",
            Self::Technician => "Technician",
            Self::Client => "Client",
        }
    }

    /// Whether the role is scoped to a single hotel tenant
    pub fn is_hotel_scoped(&self) -> bool {
        !matches!(self, Self::SuperAdmin)
    }

    pub fn can_manage_hotel(&self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin)
    }

    pub fn can_manage_platform(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    pub fn can_work_tickets(&self) -> bool {
        matches!(self, Self::Admin | Self::Technician)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub hotel_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<i64>,
}

/// Body returned by both `/auth/login` and `/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub email: String,
    pub user_id: i64,
    pub full_name: String,
    pub role: Role,
    pub hotel_id: Option<i64>,
}

/// The signed-in user as persisted under the `user_data` storage key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub email: String,
    pub user_id: i64,
    pub full_name: String,
    pub role: Role,
    pub hotel_id: Option<i64>,
}

impl From<&AuthResponse> for AuthUser {
    fn from(response: &AuthResponse) -> Self {
        Self {
            email: response.email.clone(),
            user_id: response.user_id,
            full_name: response.full_name.clone(),
            role: response.role,
            hotel_id: response.hotel_id,
        }
    }
}
