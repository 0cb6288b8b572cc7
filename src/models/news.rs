use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Bilingual;

/// A published news story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: Uuid,
    pub slug: String,
    #[serde(default)]
    pub title: Bilingual,
    #[serde(default)]
    pub summary: Bilingual,
    #[serde(default)]
    pub body: Bilingual,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl NewsItem {
    /// Date label for listings; empty when the backend sent none.
    pub fn published_label(&self) -> String {
        self.published_at
            .map(|t| t.format("%d %b %Y").to_string())
            .unwrap_or_default()
    }
}
