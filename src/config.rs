//! Server configuration from environment variables.

/// Runtime settings. `DATABASE_URL` defaults to a local SQLite file and
/// `BIND_ADDR` to the catalog's standard port.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:eventwise.db".into());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5555".into());
        Self {
            database_url,
            bind_addr,
        }
    }
}
