use std::sync::Arc;

use all_human_company::{
    ambient::{Clock, Randomness, SystemClock, ThreadRandomness},
    build_app,
    config::Config,
    logging,
    storage::FileSubmissionStore,
    AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let randomness: Arc<dyn Randomness> = Arc::new(ThreadRandomness);
    let store = Arc::new(FileSubmissionStore::new(
        config.data_dir.clone(),
        clock.clone(),
        randomness.clone(),
    ));

    let bind_socket = config.bind_socket()?;
    let state = AppState::new(config.site_dir.clone(), store, clock, randomness);
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(bind_socket).await?;

    info!(
        bind_addr = %config.bind_addr,
        bind_port = config.bind_port,
        "server starting"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
