use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ainav_core::domain::activity::ActivityService;
use ainav_core::domain::catalog::{CatalogService, WebsiteStatus};
use ainav_core::domain::session::SessionService;
use ainav_core::error::AppResult;
use ainav_core::infrastructure::gateway::SiteGateway;
use ainav_core::infrastructure::notify::MemoryNotifier;
use ainav_core::infrastructure::store::MemoryStore;


/// What the external data layer was asked to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayCall {
    Visit(i64),
    Like(i64),
    Status(i64, WebsiteStatus),
}

/// Gateway stub that records every call for later assertions.
#[derive(Default)]
pub struct RecordingGateway {
    calls: Mutex<Vec<GatewayCall>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SiteGateway for RecordingGateway {
    async fn record_visit(&self, website_id: i64) -> AppResult<()> {
        self.calls.lock().unwrap().push(GatewayCall::Visit(website_id));
        Ok(())
    }

    async fn record_like(&self, website_id: i64) -> AppResult<()> {
        self.calls.lock().unwrap().push(GatewayCall::Like(website_id));
        Ok(())
    }

    async fn update_status(&self, website_id: i64, status: WebsiteStatus) -> AppResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(GatewayCall::Status(website_id, status));
        Ok(())
    }
}

pub struct TestContext {
    pub catalog: Arc<CatalogService>,
    pub session: Arc<SessionService>,
    pub activity: ActivityService,
    pub gateway: Arc<RecordingGateway>,
    pub notifier: Arc<MemoryNotifier>,
}

impl TestContext {
    /// Context over the sample catalog with in-memory persistence.
    pub fn new() -> Self {
        let (websites, categories) = fixtures::sample_catalog();
        let catalog = Arc::new(CatalogService::new(websites, categories));
        let session = Arc::new(SessionService::new(Arc::new(MemoryStore::new())));
        let gateway = Arc::new(RecordingGateway::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let activity = ActivityService::new(
            catalog.clone(),
            session.clone(),
            gateway.clone(),
            notifier.clone(),
        );
        Self {
            catalog,
            session,
            activity,
            gateway,
            notifier,
        }
    }
}

/// Give spawned fire-and-forget gateway tasks a chance to run.
pub async fn settle() {
    tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
}
