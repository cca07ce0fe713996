use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Moderation status of a submitted website.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebsiteStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for WebsiteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WebsiteStatus::Pending => "pending",
            WebsiteStatus::Approved => "approved",
            WebsiteStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub category_id: i64,
    pub thumbnail: Option<String>,
    pub thumbnail_base64: Option<String>,
    pub status: WebsiteStatus,
    pub visits: i64,
    pub likes: i64,
    pub last_visited_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// One rendered category block: a category and its matching websites,
/// in list order. Categories without matches produce no section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySection {
    pub category: Category,
    pub websites: Vec<Website>,
}
