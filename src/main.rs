mod model;
mod server;

use server::{
    config::Config, error::AppError, router, service::activity::ActivityService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    ActivityService::new(&db)
        .ensure_initialized(&config.seed_path)
        .await?;

    let app = router::router(&config.static_dir).with_state(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Listening on {}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
