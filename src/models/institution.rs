use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Bilingual;

/// A community-run institution (school, hostel, dharamshala, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub description: Bilingual,
    #[serde(default)]
    pub contact_phone: Option<String>,
}
