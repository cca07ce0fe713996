use async_trait::async_trait;
use serde_json::json;

use crate::domain::catalog::WebsiteStatus;
use crate::error::AppResult;

/// Outbound side-effect calls to the external data layer.
///
/// All three are fire-and-forget from the caller's point of view:
/// callers spawn them, log failures and never await, retry or roll
/// back. The optimistic local state stands until the next full reload.
#[async_trait]
pub trait SiteGateway: Send + Sync {
    async fn record_visit(&self, website_id: i64) -> AppResult<()>;

    async fn record_like(&self, website_id: i64) -> AppResult<()>;

    async fn update_status(&self, website_id: i64, status: WebsiteStatus) -> AppResult<()>;
}

/// HTTP implementation against the directory's API routes.
pub struct HttpSiteGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSiteGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, website_id: i64, action: &str) -> String {
        format!(
            "{}/api/websites/{}/{}",
            self.base_url.trim_end_matches('/'),
            website_id,
            action
        )
    }
}

#[async_trait]
impl SiteGateway for HttpSiteGateway {
    async fn record_visit(&self, website_id: i64) -> AppResult<()> {
        self.client
            .post(self.url(website_id, "visit"))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn record_like(&self, website_id: i64) -> AppResult<()> {
        self.client
            .post(self.url(website_id, "like"))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn update_status(&self, website_id: i64, status: WebsiteStatus) -> AppResult<()> {
        self.client
            .put(self.url(website_id, "status"))
            .json(&json!({ "status": status }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Gateway that drops every call, for offline sessions and tests.
pub struct NullGateway;

#[async_trait]
impl SiteGateway for NullGateway {
    async fn record_visit(&self, _website_id: i64) -> AppResult<()> {
        Ok(())
    }

    async fn record_like(&self, _website_id: i64) -> AppResult<()> {
        Ok(())
    }

    async fn update_status(&self, _website_id: i64, _status: WebsiteStatus) -> AppResult<()> {
        Ok(())
    }
}
