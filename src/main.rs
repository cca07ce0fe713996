use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ainav_core::domain::catalog::{CatalogService, RankingMetric};
use ainav_core::domain::session::SessionService;
use ainav_core::infrastructure::config::{Config, LogFormat};
use ainav_core::infrastructure::seed;
use ainav_core::infrastructure::store::{FileStore, PreferenceStore};

/// Seeds the local session store with the default catalog and prints a
/// summary of what a fresh session would render.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        data_dir = %config.data_dir.display(),
        development = config.is_development(),
        "Starting ainav-core seeder"
    );

    let store: Arc<dyn PreferenceStore> = Arc::new(FileStore::new(&config.data_dir)?);
    let session = Arc::new(SessionService::new(store));

    let seeded = seed::ensure_seeded(&session);
    if seeded == 0 {
        tracing::info!("Catalog already seeded, nothing to do");
    }

    let catalog = Arc::new(CatalogService::new(
        session.websites(),
        session.categories(),
    ));

    let view = catalog.home_view(&session);
    tracing::info!(
        sections = view.sections.len(),
        recently_visited = view.recently_visited.len(),
        favorites = view.favorites.len(),
        "Home view composed"
    );
    for section in &view.sections {
        tracing::info!(
            category = %section.category.name,
            websites = section.websites.len(),
            "Section"
        );
    }

    let top = catalog.rankings(RankingMetric::Visits, 10);
    if let Some(leader) = top.first() {
        tracing::info!(title = %leader.title, visits = leader.visits, "Most visited");
    }

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "ainav_core=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "ainav_core=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
