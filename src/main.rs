use std::sync::Arc;
use std::{fs, io};

use house_pricer::config::AppConfig;
use house_pricer::model::loader::ModelCache;
use house_pricer::model::Predictor;
use house_pricer::server::{routes, types::AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Load config; an absent file means defaults
    let config = match fs::read_to_string("config.yaml") {
        Ok(raw) => serde_yaml::from_str::<AppConfig>(&raw)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => AppConfig::default(),
        Err(e) => return Err(e.into()),
    };

    // 2. Load the model once. A missing artifact disables predictions;
    //    any other load failure aborts startup.
    let model_path = config.model.resolve_path();
    let model = ModelCache::new(&model_path).get()?;
    match &model {
        Some(_) => info!(path = %model_path.display(), "model loaded"),
        None => warn!(
            path = %model_path.display(),
            "model artifact not found, predictions disabled"
        ),
    }

    // 3. Create router
    let state = Arc::new(AppState {
        model: model.map(|m| m as Arc<dyn Predictor>),
    });
    let app = routes::create_router(state);

    // 4. Bind & serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
