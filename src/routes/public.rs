//! Unauthenticated read endpoints backing the marketing pages.

use axum::{
    extract::State,
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    extract::{Json, Path, Query},
    models::{BlogListQuery, BlogPost, Faq, FaqQuery, Location, ResolvedSeo, SeoQuery, TeamMember},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/blog", get(list_blog_posts))
        .route("/blog/tags", get(list_blog_tags))
        .route("/blog/{slug}", get(get_blog_post))
        .route("/faqs", get(list_faqs))
        .route("/locations", get(list_locations))
        .route("/locations/{slug}", get(get_location))
        .route("/team", get(list_team_members))
        .route("/seo", get(get_page_seo))
}

#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "public",
    params(BlogListQuery),
    responses(
        (status = 200, description = "Published posts, newest first; empty when content is unavailable", body = Vec<BlogPost>)
    )
)]
pub async fn list_blog_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BlogListQuery>,
) -> Json<Vec<BlogPost>> {
    Json(state.public_content().blog_posts(&query).await)
}

#[utoipa::path(
    get,
    path = "/api/blog/tags",
    tag = "public",
    responses(
        (status = 200, description = "Tags used by published posts", body = Vec<String>)
    )
)]
pub async fn list_blog_tags(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.public_content().blog_tags().await)
}

#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = "public",
    params(
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "Published post", body = BlogPost),
        (status = 404, description = "No published post with that slug")
    )
)]
pub async fn get_blog_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    state
        .public_content()
        .blog_post(&slug)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    get,
    path = "/api/faqs",
    tag = "public",
    params(FaqQuery),
    responses(
        (status = 200, description = "Active FAQs ordered by category and position", body = Vec<Faq>)
    )
)]
pub async fn list_faqs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FaqQuery>,
) -> Json<Vec<Faq>> {
    Json(state.public_content().faqs(query.category.as_deref()).await)
}

#[utoipa::path(
    get,
    path = "/api/locations",
    tag = "public",
    responses(
        (status = 200, description = "Active locations by name", body = Vec<Location>)
    )
)]
pub async fn list_locations(State(state): State<Arc<AppState>>) -> Json<Vec<Location>> {
    Json(state.public_content().locations().await)
}

#[utoipa::path(
    get,
    path = "/api/locations/{slug}",
    tag = "public",
    params(
        ("slug" = String, Path, description = "Location slug")
    ),
    responses(
        (status = 200, description = "Location detail", body = Location),
        (status = 404, description = "No active location with that slug")
    )
)]
pub async fn get_location(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Location>, ApiError> {
    state
        .public_content()
        .location(&slug)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    get,
    path = "/api/team",
    tag = "public",
    responses(
        (status = 200, description = "Active management team members in display order", body = Vec<TeamMember>)
    )
)]
pub async fn list_team_members(State(state): State<Arc<AppState>>) -> Json<Vec<TeamMember>> {
    Json(state.public_content().team_members().await)
}

#[utoipa::path(
    get,
    path = "/api/seo",
    tag = "public",
    params(SeoQuery),
    responses(
        (status = 200, description = "SEO metadata for the page and where it came from", body = ResolvedSeo)
    )
)]
pub async fn get_page_seo(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SeoQuery>,
) -> Json<ResolvedSeo> {
    Json(state.seo.resolve(&query.path).await)
}
