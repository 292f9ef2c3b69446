use axum::Router;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use havenweb::{config::Config, db::Database, seed, AppState};

#[derive(Parser)]
#[command(name = "havenweb", about = "Content and SEO API for the behavioral health website")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Apply database migrations and exit
    Migrate,
    /// Create the admin account from ADMIN_* settings and exit
    SeedAdmin,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Migrate => {
            let db = connect(&config).await?;
            db.migrate().await?;
            info!("Migrations applied");
            Ok(())
        }
        Command::SeedAdmin => {
            let db = connect(&config).await?;
            db.migrate().await?;
            seed::seed_admin_user(&db, &config).await
        }
    }
}

async fn connect(config: &Config) -> anyhow::Result<Database> {
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set for this command"))?;
    Database::new_with_pool_config(url, config.db_max_connections, 1).await
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let db = match &config.database_url {
        Some(_) => {
            let db = connect(&config).await?;
            db.migrate().await?;
            seed::seed_admin_user(&db, &config).await?;
            Some(db)
        }
        None => {
            warn!("DATABASE_URL not set: serving built-in SEO data and empty content lists");
            None
        }
    };

    let state = Arc::new(AppState::new(db, config.clone()));

    let mut app: Router<Arc<AppState>> = havenweb::routes::api_router()
        .merge(havenweb::swagger::create_swagger_router());

    if let Some(site_dir) = &config.site_dir {
        info!("Serving static site from {}", site_dir);
        let index = format!("{}/index.html", site_dir.trim_end_matches('/'));
        app = app.fallback_service(ServeDir::new(site_dir).fallback(ServeFile::new(index)));
    }

    let app = app.layer(CorsLayer::permissive()).with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!("Server starting on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
