use std::sync::RwLock;

use chrono::Utc;

use super::model::{Category, CategorySection, Website, WebsiteStatus};
use super::{HomeView, RankingMetric};
use crate::domain::session::SessionService;

/// Case-insensitive substring filter over title and description.
///
/// An empty query is the identity: the full list comes back unchanged.
/// No ranking is applied; the input order is preserved.
pub fn filter_websites(websites: &[Website], query: &str) -> Vec<Website> {
    if query.is_empty() {
        return websites.to_vec();
    }
    let needle = query.to_lowercase();
    websites
        .iter()
        .filter(|website| {
            website.title.to_lowercase().contains(&needle)
                || website.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

struct CatalogState {
    websites: Vec<Website>,
    categories: Vec<Category>,
}

/// In-memory view of the website directory for one session.
///
/// The relational data layer owns the records; this holds the copies
/// received at page load and applies optimistic local mutations while
/// the gateway is asked to persist the same change.
pub struct CatalogService {
    state: RwLock<CatalogState>,
}

impl CatalogService {
    pub fn new(websites: Vec<Website>, categories: Vec<Category>) -> Self {
        Self {
            state: RwLock::new(CatalogState {
                websites,
                categories,
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.websites.is_empty() && state.categories.is_empty()
    }

    /// Replace the whole catalog, e.g. after a fresh server fetch.
    pub fn replace(&self, websites: Vec<Website>, categories: Vec<Category>) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.websites = websites;
        state.categories = categories;
    }

    pub fn websites(&self) -> Vec<Website> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.websites.clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.categories.clone()
    }

    /// Websites eligible for public listing, in list order.
    pub fn approved(&self) -> Vec<Website> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state
            .websites
            .iter()
            .filter(|w| w.status == WebsiteStatus::Approved)
            .cloned()
            .collect()
    }

    /// Filter the full website list against a search query.
    pub fn search(&self, query: &str) -> Vec<Website> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        filter_websites(&state.websites, query)
    }

    /// Partition a (typically already filtered) list into per-category
    /// sections, preserving category order and skipping empty groups.
    pub fn sections(&self, websites: &[Website]) -> Vec<CategorySection> {
        let categories = self.categories();
        categories
            .into_iter()
            .filter_map(|category| {
                let matching: Vec<Website> = websites
                    .iter()
                    .filter(|w| w.category_id == category.id)
                    .cloned()
                    .collect();
                if matching.is_empty() {
                    None
                } else {
                    Some(CategorySection {
                        category,
                        websites: matching,
                    })
                }
            })
            .collect()
    }

    /// Compose the home page view from the current session state.
    pub fn home_view(&self, session: &SessionService) -> HomeView {
        let query = session.search_query();
        let filtered = filter_websites(&self.approved(), &query);
        HomeView {
            recently_visited: session.recently_visited(),
            favorites: session.favorites(),
            sections: self.sections(&filtered),
        }
    }

    /// Top `limit` approved websites by the given metric. Websites that
    /// were never visited sort last under `RecentVisit`.
    pub fn rankings(&self, metric: RankingMetric, limit: usize) -> Vec<Website> {
        let mut ranked = self.approved();
        match metric {
            RankingMetric::Visits => ranked.sort_by(|a, b| b.visits.cmp(&a.visits)),
            RankingMetric::Likes => ranked.sort_by(|a, b| b.likes.cmp(&a.likes)),
            RankingMetric::RecentVisit => ranked.sort_by(|a, b| {
                let a_at = a.last_visited_at.map(|t| t.timestamp_millis()).unwrap_or(0);
                let b_at = b.last_visited_at.map(|t| t.timestamp_millis()).unwrap_or(0);
                b_at.cmp(&a_at)
            }),
        }
        ranked.truncate(limit);
        ranked
    }

    /// Optimistic local mutation for a recorded visit.
    pub fn apply_visit(&self, website_id: i64) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if let Some(website) = state.websites.iter_mut().find(|w| w.id == website_id) {
            website.visits += 1;
            website.last_visited_at = Some(Utc::now());
        }
    }

    /// Optimistic local mutation for an accepted like. Returns the new
    /// counter value when the website is known.
    pub fn apply_like(&self, website_id: i64) -> Option<i64> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        let website = state.websites.iter_mut().find(|w| w.id == website_id)?;
        website.likes += 1;
        Some(website.likes)
    }

    /// Optimistic local mutation for a moderation decision.
    pub fn apply_status(&self, website_id: i64, status: WebsiteStatus) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if let Some(website) = state.websites.iter_mut().find(|w| w.id == website_id) {
            website.status = status;
        }
    }
}
