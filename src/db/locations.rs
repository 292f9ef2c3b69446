use anyhow::Result;
use uuid::Uuid;

use crate::models::{CreateLocation, Location};
use super::Database;

const LOCATION_COLUMNS: &str = "id, name, slug, address, city, state, zip_code, phone, email, hours, \
    services, latitude, longitude, image_url, is_active, created_at, updated_at";

impl Database {
    pub async fn get_all_locations(&self) -> Result<Vec<Location>> {
        let locations = sqlx::query_as::<_, Location>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }

    pub async fn get_active_locations(&self) -> Result<Vec<Location>> {
        let locations = sqlx::query_as::<_, Location>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE is_active = TRUE ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }

    pub async fn get_location_by_id(&self, id: Uuid) -> Result<Option<Location>> {
        let location = sqlx::query_as::<_, Location>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(location)
    }

    pub async fn get_active_location_by_slug(&self, slug: &str) -> Result<Option<Location>> {
        let location = sqlx::query_as::<_, Location>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE slug = $1 AND is_active = TRUE"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(location)
    }

    pub async fn create_location(&self, location: &CreateLocation) -> Result<Location> {
        let created = sqlx::query_as::<_, Location>(&format!(
            r#"
            INSERT INTO locations
                (name, slug, address, city, state, zip_code, phone, email, hours,
                 services, latitude, longitude, image_url, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {LOCATION_COLUMNS}
            "#
        ))
        .bind(&location.name)
        .bind(&location.slug)
        .bind(&location.address)
        .bind(&location.city)
        .bind(&location.state)
        .bind(&location.zip_code)
        .bind(&location.phone)
        .bind(&location.email)
        .bind(&location.hours)
        .bind(&location.services)
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(&location.image_url)
        .bind(location.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn update_location(&self, location: &Location) -> Result<Option<Location>> {
        let updated = sqlx::query_as::<_, Location>(&format!(
            r#"
            UPDATE locations SET
                name = $1, slug = $2, address = $3, city = $4, state = $5, zip_code = $6,
                phone = $7, email = $8, hours = $9, services = $10, latitude = $11,
                longitude = $12, image_url = $13, is_active = $14, updated_at = NOW()
            WHERE id = $15
            RETURNING {LOCATION_COLUMNS}
            "#
        ))
        .bind(&location.name)
        .bind(&location.slug)
        .bind(&location.address)
        .bind(&location.city)
        .bind(&location.state)
        .bind(&location.zip_code)
        .bind(&location.phone)
        .bind(&location.email)
        .bind(&location.hours)
        .bind(&location.services)
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(&location.image_url)
        .bind(location.is_active)
        .bind(location.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete_location(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
