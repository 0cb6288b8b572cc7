use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A matrimony profile. Created and updated by its owning member only;
/// everyone else sees it read-only through the browse pages.
///
/// `phone` may be present in the payload regardless of interest state;
/// the display layer decides whether it is shown (see
/// `services::interests::visible_phone`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrimonyProfile {
    pub id: Uuid,
    pub member_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gotra: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Interest lifecycle. Transitions only move forward: an interest is
/// created as `Pending` by the sender and may become `Accepted` through
/// the recipient's action; nothing ever reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestStatus {
    Pending,
    Accepted,
}

/// Directional interest relation between two members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interest {
    pub id: Uuid,
    pub from_member: Uuid,
    pub to_member: Uuid,
    pub status: InterestStatus,
    /// Profile the interest was expressed on, when the backend sends it.
    #[serde(default)]
    pub profile_id: Option<Uuid>,
    #[serde(default)]
    pub from_name: Option<String>,
    #[serde(default)]
    pub to_name: Option<String>,
}
