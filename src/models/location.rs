use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{errors::ApiError, validation};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: Option<String>,
    pub hours: Option<String>,
    pub services: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLocation {
    pub name: String,
    /// Derived from the name when omitted
    pub slug: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: Option<String>,
    pub hours: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateLocation {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub hours: Option<String>,
    pub services: Option<Vec<String>>,
    /// `null` clears the coordinate; omitting it leaves it unchanged
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>)]
    pub latitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>)]
    pub longitude: Option<Option<f64>>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// A present field becomes `Some`, even when it is `null`.
fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

impl CreateLocation {
    pub fn validate(self) -> Result<Self, ApiError> {
        let name = validation::bounded_text("name", &self.name, validation::NAME_MAX)?;
        let slug = validation::resolve_slug(self.slug.as_deref(), &name)?;
        validate_coordinates(self.latitude, self.longitude)?;

        Ok(Self {
            slug: Some(slug),
            address: validation::require_text("address", &self.address)?,
            city: validation::bounded_text("city", &self.city, validation::CITY_MAX)?,
            state: validation::bounded_text("state", &self.state, validation::STATE_MAX)?,
            zip_code: validation::bounded_text("zip_code", &self.zip_code, validation::ZIP_CODE_MAX)?,
            phone: validation::bounded_text("phone", &self.phone, validation::PHONE_MAX)?,
            email: validation::optional_bounded("email", self.email, validation::EMAIL_MAX)?,
            hours: validation::optional_text(self.hours),
            services: validation::normalize_list(self.services),
            latitude: self.latitude,
            longitude: self.longitude,
            image_url: validation::optional_url("image_url", self.image_url)?,
            is_active: self.is_active,
            name,
        })
    }
}

impl UpdateLocation {
    pub fn apply(self, mut location: Location) -> Result<Location, ApiError> {
        if let Some(name) = self.name {
            location.name = validation::bounded_text("name", &name, validation::NAME_MAX)?;
        }
        if let Some(slug) = self.slug {
            location.slug = validation::resolve_slug(Some(&slug), &location.name)?;
        }
        if let Some(address) = self.address {
            location.address = validation::require_text("address", &address)?;
        }
        if let Some(city) = self.city {
            location.city = validation::bounded_text("city", &city, validation::CITY_MAX)?;
        }
        if let Some(state) = self.state {
            location.state = validation::bounded_text("state", &state, validation::STATE_MAX)?;
        }
        if let Some(zip_code) = self.zip_code {
            location.zip_code = validation::bounded_text("zip_code", &zip_code, validation::ZIP_CODE_MAX)?;
        }
        if let Some(phone) = self.phone {
            location.phone = validation::bounded_text("phone", &phone, validation::PHONE_MAX)?;
        }
        if self.email.is_some() {
            location.email = validation::optional_bounded("email", self.email, validation::EMAIL_MAX)?;
        }
        if self.hours.is_some() {
            location.hours = validation::optional_text(self.hours);
        }
        if let Some(services) = self.services {
            location.services = validation::normalize_list(services);
        }
        if let Some(latitude) = self.latitude {
            location.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            location.longitude = longitude;
        }
        if self.image_url.is_some() {
            location.image_url = validation::optional_url("image_url", self.image_url)?;
        }
        if let Some(is_active) = self.is_active {
            location.is_active = is_active;
        }
        validate_coordinates(location.latitude, location.longitude)?;
        Ok(location)
    }
}

fn validate_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<(), ApiError> {
    if latitude.is_some_and(|lat| !(-90.0..=90.0).contains(&lat)) {
        return Err(ApiError::bad_request("'latitude' must be between -90 and 90"));
    }
    if longitude.is_some_and(|lng| !(-180.0..=180.0).contains(&lng)) {
        return Err(ApiError::bad_request("'longitude' must be between -180 and 180"));
    }
    Ok(())
}
