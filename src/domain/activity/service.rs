use std::future::Future;
use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::catalog::{CatalogService, Website, WebsiteStatus};
use crate::domain::session::SessionService;
use crate::error::AppResult;
use crate::infrastructure::gateway::SiteGateway;
use crate::infrastructure::notify::{Notification, Notifier};

/// The recently-visited block keeps at most this many entries.
const RECENTLY_VISITED_LIMIT: usize = 8;

/// One like per website per browsing session per this window.
const LIKE_COOLDOWN_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    /// Accepted, with the new optimistic counter value when the website
    /// is known to the catalog.
    Accepted { likes: Option<i64> },
    /// Rejected by the 24-hour cooldown; nothing was mutated.
    OnCooldown,
}

/// Remove any entry with the same id, prepend, cap the length.
fn push_recent(mut recent: Vec<Website>, website: Website) -> Vec<Website> {
    recent.retain(|w| w.id != website.id);
    recent.insert(0, website);
    recent.truncate(RECENTLY_VISITED_LIMIT);
    recent
}

/// Reacts to user actions: visits, favorite toggles, likes and admin
/// moderation. Local state is mutated optimistically; the gateway is
/// notified fire-and-forget.
pub struct ActivityService {
    catalog: Arc<CatalogService>,
    session: Arc<SessionService>,
    gateway: Arc<dyn SiteGateway>,
    notifier: Arc<dyn Notifier>,
}

impl ActivityService {
    pub fn new(
        catalog: Arc<CatalogService>,
        session: Arc<SessionService>,
        gateway: Arc<dyn SiteGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            catalog,
            session,
            gateway,
            notifier,
        }
    }

    fn spawn_gateway_call<F, Fut>(&self, website_id: i64, action: &'static str, call: F)
    where
        F: FnOnce(Arc<dyn SiteGateway>) -> Fut + Send + 'static,
        Fut: Future<Output = AppResult<()>> + Send,
    {
        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            if let Err(err) = call(gateway).await {
                tracing::warn!(website_id, action, error = %err, "gateway notification failed");
            }
        });
    }

    /// Record a visit: notify the gateway, bump the local counter and
    /// move the website to the front of the recently-visited list.
    pub fn record_visit(&self, website: &Website) {
        let id = website.id;
        self.spawn_gateway_call(id, "visit", move |gateway| async move {
            gateway.record_visit(id).await
        });

        self.catalog.apply_visit(id);

        let recent = push_recent(self.session.recently_visited(), website.clone());
        self.session.set_recently_visited(&recent);
    }

    /// Add or remove a favorite, by id. Two toggles restore the
    /// original membership.
    pub fn toggle_favorite(&self, website: &Website) -> FavoriteOutcome {
        let mut favorites = self.session.favorites();
        let outcome = if favorites.iter().any(|w| w.id == website.id) {
            favorites.retain(|w| w.id != website.id);
            FavoriteOutcome::Removed
        } else {
            favorites.push(website.clone());
            FavoriteOutcome::Added
        };
        self.session.set_favorites(&favorites);

        let notification = match outcome {
            FavoriteOutcome::Added => {
                Notification::success("Added to favorites", "The website is now in your favorites.")
            }
            FavoriteOutcome::Removed => Notification::success(
                "Removed from favorites",
                "The website was removed from your favorites.",
            ),
        };
        self.notifier.notify(notification);
        outcome
    }

    /// Attempt a like, subject to the per-website cooldown. A rejection
    /// performs no mutation and no network call.
    pub fn attempt_like(&self, website_id: i64) -> LikeOutcome {
        let now = Utc::now();
        if let Some(last) = self.session.last_liked_at(website_id) {
            if now - last < Duration::hours(LIKE_COOLDOWN_HOURS) {
                self.notifier.notify(Notification::info(
                    "Already liked",
                    "One like per website per day; come back tomorrow.",
                ));
                return LikeOutcome::OnCooldown;
            }
        }

        let likes = self.catalog.apply_like(website_id);
        self.session.record_like_timestamp(website_id, now);
        self.spawn_gateway_call(website_id, "like", move |gateway| async move {
            gateway.record_like(website_id).await
        });

        LikeOutcome::Accepted { likes }
    }

    /// Admin moderation: apply the decision locally, notify the
    /// gateway, confirm to the user.
    pub fn set_status(&self, website_id: i64, status: WebsiteStatus) {
        self.catalog.apply_status(website_id, status);
        self.spawn_gateway_call(website_id, "status", move |gateway| async move {
            gateway.update_status(website_id, status).await
        });

        let description = match status {
            WebsiteStatus::Approved => "The website passed review and is now listed.",
            WebsiteStatus::Rejected => "The website was rejected.",
            WebsiteStatus::Pending => "The website was moved back to the review queue.",
        };
        self.notifier
            .notify(Notification::success("Status updated", description));
    }
}
