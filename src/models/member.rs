use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in member, as returned by `/auth/me`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub membership_active: bool,
    #[serde(default)]
    pub referral_code: Option<String>,
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub member: Member,
}

/// Registration draft captured before payment; lives in a cookie until
/// the membership flow completes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub father_name: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}

impl RegistrationDraft {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }
}
