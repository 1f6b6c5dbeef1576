use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use promparty_rent::{
    config::{Config, StoreBackend},
    db::{Database, DocumentStore, MemoryStore},
    seed, AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn DocumentStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let db = Database::new(&config.database_url).await?;
            db.migrate().await?;
            Arc::new(db)
        }
        StoreBackend::Memory => {
            info!("Using in-memory document store, data will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    if config.seed_on_startup {
        match seed::seed_demo_data(store.as_ref()).await {
            Ok(report) => info!(
                "Startup seeding inserted {} properties and {} testimonials",
                report.properties, report.testimonials
            ),
            Err(e) => error!("Startup seeding failed: {}", e),
        }
    }

    let state = Arc::new(AppState {
        store,
        config: config.clone(),
    });
    let app = promparty_rent::build_app(state);

    let address = config.server_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Server starting on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
