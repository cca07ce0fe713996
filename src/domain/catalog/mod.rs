pub mod model;
pub mod service;

pub use model::{Category, CategorySection, Website, WebsiteStatus};
pub use service::{filter_websites, CatalogService};

use serde::{Deserialize, Serialize};

/// Everything the home page renders: the two pinned blocks followed by
/// the category sections over the filtered approved list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeView {
    pub recently_visited: Vec<Website>,
    pub favorites: Vec<Website>,
    pub sections: Vec<CategorySection>,
}

/// Sort key for the rankings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingMetric {
    Visits,
    Likes,
    RecentVisit,
}
