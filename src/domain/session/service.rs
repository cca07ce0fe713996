use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::catalog::{Category, Website};
use crate::infrastructure::store::PreferenceStore;

// Slot keys, kept identical to the browser-era storage keys so an
// exported localStorage dump maps one-to-one onto a data directory.
const KEY_WEBSITES: &str = "websites";
const KEY_CATEGORIES: &str = "categories";
const KEY_SEARCH_QUERY: &str = "searchQuery";
const KEY_SELECTED_CATEGORY: &str = "selectedCategory";
const KEY_ADMIN_MODE: &str = "isAdminMode";
const KEY_COMPACT_MODE: &str = "isCompactMode";
const KEY_SIDEBAR_COLLAPSED: &str = "sidebarCollapsed";
const KEY_RECENTLY_VISITED: &str = "recentlyVisited";
const KEY_FAVORITES: &str = "favorites";

fn like_key(website_id: i64) -> String {
    format!("website-{website_id}-liked")
}

/// Typed access to the persisted preference slots of one browsing
/// session.
///
/// Every read is defensive: a slot that is missing or fails to parse
/// falls back to that slot's default and is logged, never propagated.
/// Writes are best-effort; a failed write leaves the in-memory state
/// authoritative until the next reload.
pub struct SessionService {
    store: Arc<dyn PreferenceStore>,
}

impl SessionService {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    fn get_or_else<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.store.get_raw(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(key, error = %err, "discarding malformed preference value");
                    default()
                }
            },
            Ok(None) => default(),
            Err(err) => {
                tracing::warn!(key, error = %err, "preference read failed, using default");
                default()
            }
        }
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to serialize preference value");
                return;
            }
        };
        if let Err(err) = self.store.set_raw(key, &raw) {
            tracing::warn!(key, error = %err, "failed to persist preference value");
        }
    }

    pub fn websites(&self) -> Vec<Website> {
        self.get_or_else(KEY_WEBSITES, Vec::new)
    }

    pub fn set_websites(&self, websites: &[Website]) {
        self.set(KEY_WEBSITES, &websites);
    }

    pub fn categories(&self) -> Vec<Category> {
        self.get_or_else(KEY_CATEGORIES, Vec::new)
    }

    pub fn set_categories(&self, categories: &[Category]) {
        self.set(KEY_CATEGORIES, &categories);
    }

    pub fn search_query(&self) -> String {
        self.get_or_else(KEY_SEARCH_QUERY, String::new)
    }

    pub fn set_search_query(&self, query: &str) {
        self.set(KEY_SEARCH_QUERY, &query);
    }

    pub fn selected_category(&self) -> Option<i64> {
        self.get_or_else(KEY_SELECTED_CATEGORY, || None)
    }

    pub fn set_selected_category(&self, category_id: Option<i64>) {
        self.set(KEY_SELECTED_CATEGORY, &category_id);
    }

    pub fn is_admin_mode(&self) -> bool {
        self.get_or_else(KEY_ADMIN_MODE, || false)
    }

    pub fn set_admin_mode(&self, enabled: bool) {
        self.set(KEY_ADMIN_MODE, &enabled);
    }

    /// Compact cards are the default view.
    pub fn is_compact_mode(&self) -> bool {
        self.get_or_else(KEY_COMPACT_MODE, || true)
    }

    pub fn set_compact_mode(&self, enabled: bool) {
        self.set(KEY_COMPACT_MODE, &enabled);
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.get_or_else(KEY_SIDEBAR_COLLAPSED, || false)
    }

    pub fn set_sidebar_collapsed(&self, collapsed: bool) {
        self.set(KEY_SIDEBAR_COLLAPSED, &collapsed);
    }

    pub fn recently_visited(&self) -> Vec<Website> {
        self.get_or_else(KEY_RECENTLY_VISITED, Vec::new)
    }

    pub fn set_recently_visited(&self, websites: &[Website]) {
        self.set(KEY_RECENTLY_VISITED, &websites);
    }

    pub fn favorites(&self) -> Vec<Website> {
        self.get_or_else(KEY_FAVORITES, Vec::new)
    }

    pub fn set_favorites(&self, websites: &[Website]) {
        self.set(KEY_FAVORITES, &websites);
    }

    /// Timestamp of the last accepted like for a website, if any.
    /// Stored as epoch milliseconds.
    pub fn last_liked_at(&self, website_id: i64) -> Option<DateTime<Utc>> {
        let millis: Option<i64> = self.get_or_else(&like_key(website_id), || None);
        millis.and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }

    pub fn record_like_timestamp(&self, website_id: i64, at: DateTime<Utc>) {
        self.set(&like_key(website_id), &at.timestamp_millis());
    }
}
