//! Server binary: open the pool, ensure the schema, mount routes, serve.

use eventwise::{app, apply_migrations, connect, AppState, ServerConfig};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("eventwise=info".parse()?))
        .init();

    let config = ServerConfig::from_env();
    let pool = connect(&config.database_url).await?;
    apply_migrations(&pool).await?;

    let state = AppState { pool };
    let app = app(state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
