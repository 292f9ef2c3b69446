use anyhow::Result;
use std::env;

use crate::seo::SiteIdentity;

#[derive(Clone, Debug)]
pub struct Config {
    /// `None` means no content database: public reads degrade to empty
    /// results and SEO comes from the built-in table.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub server_address: String,
    pub jwt_secret: String,
    pub admin_username: String,
    pub admin_email: String,
    pub admin_password: Option<String>,
    pub site_name: String,
    pub site_url: Option<String>,
    pub site_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let site_url = non_empty_var("SITE_URL").map(|url| url.trim_end_matches('/').to_string());
        if let Some(url) = &site_url {
            url::Url::parse(url).map_err(|e| anyhow::anyhow!("SITE_URL '{}' is not a valid URL: {}", url, e))?;
        }

        Ok(Config {
            database_url: non_empty_var("DATABASE_URL"),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            server_address: env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "change-me-in-production".to_string()),
            admin_username: env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| "admin".to_string()),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@localhost".to_string()),
            admin_password: non_empty_var("ADMIN_PASSWORD"),
            site_name: env::var("SITE_NAME")
                .unwrap_or_else(|_| "Haven Behavioral Health".to_string()),
            site_url,
            site_dir: non_empty_var("SITE_DIR"),
        })
    }

    pub fn site_identity(&self) -> SiteIdentity {
        SiteIdentity {
            name: self.site_name.clone(),
            url: self.site_url.clone(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
