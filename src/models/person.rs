use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Bilingual;

/// Public profile role within the organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonRole {
    Founder,
    Management,
}

impl PersonRole {
    pub fn as_str(self) -> &'static str {
        match self {
            PersonRole::Founder => "founder",
            PersonRole::Management => "management",
        }
    }
}

/// Public profile shown in the founders/management directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub role: PersonRole,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub bio: Bilingual,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}
