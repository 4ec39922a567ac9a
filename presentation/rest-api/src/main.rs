use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod security;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod store {
        pub mod routes;
    }
    pub mod movie {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod review {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod cart {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod order {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}

mod config {
    pub mod app_config;
    pub mod auth_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod server_config;
    pub mod store_config;
}

mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, auth_config, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API entry point
///
/// - config: environment driven settings (server, CORS, auth, database, store)
/// - setup: dependency wiring and the HTTP server
/// - api: routes, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    let admins = auth_config::admins_from_env();

    // 4. Connect and migrate
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, admins, config.store.clone());

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
