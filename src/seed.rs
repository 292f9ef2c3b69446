use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::Database;
use crate::models::{CreateUser, UserRole};

/// Create the bootstrap admin account from `ADMIN_*` settings if it does not exist yet.
pub async fn seed_admin_user(db: &Database, config: &Config) -> Result<()> {
    if db.get_user_by_username(&config.admin_username).await?.is_some() {
        info!("Admin user '{}' already exists", config.admin_username);
        return Ok(());
    }

    let Some(password) = config.admin_password.clone() else {
        warn!(
            "No admin user '{}' and ADMIN_PASSWORD is not set; skipping admin seed",
            config.admin_username
        );
        return Ok(());
    };

    let user = db
        .create_user(CreateUser {
            username: config.admin_username.clone(),
            email: config.admin_email.clone(),
            password,
            role: UserRole::Admin,
        })
        .await?;

    info!("Created admin user '{}' ({})", user.username, user.id);
    Ok(())
}
