use axum::Router;
use std::sync::Arc;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        BlogPost, CreateBlogPost, CreateFaq, CreateLocation, CreateSeoMetadata,
        CreateTeamMember, CreateUser, Faq, Location, LoginRequest, LoginResponse, PageSeo,
        ResolvedSeo, SeoMetadata, SeoSource, TeamMember, UpdateBlogPost, UpdateFaq,
        UpdateLocation, UpdateSeoMetadata, UpdateTeamMember, UpdateUser, UserResponse, UserRole,
    },
    permissions::{Action, PermissionTable, Permissions, Resource, ResourcePermissions},
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        // Public site
        crate::routes::public::list_blog_posts,
        crate::routes::public::list_blog_tags,
        crate::routes::public::get_blog_post,
        crate::routes::public::list_faqs,
        crate::routes::public::list_locations,
        crate::routes::public::get_location,
        crate::routes::public::list_team_members,
        crate::routes::public::get_page_seo,
        // Auth
        crate::routes::auth::login,
        crate::routes::auth::me,
        // Admin CMS
        crate::routes::admin::get_permissions,
        crate::routes::admin::blog::list_blog_posts,
        crate::routes::admin::blog::get_blog_post,
        crate::routes::admin::blog::create_blog_post,
        crate::routes::admin::blog::update_blog_post,
        crate::routes::admin::blog::delete_blog_post,
        crate::routes::admin::faqs::list_faqs,
        crate::routes::admin::faqs::get_faq,
        crate::routes::admin::faqs::create_faq,
        crate::routes::admin::faqs::update_faq,
        crate::routes::admin::faqs::delete_faq,
        crate::routes::admin::locations::list_locations,
        crate::routes::admin::locations::get_location,
        crate::routes::admin::locations::create_location,
        crate::routes::admin::locations::update_location,
        crate::routes::admin::locations::delete_location,
        crate::routes::admin::team::list_team_members,
        crate::routes::admin::team::get_team_member,
        crate::routes::admin::team::create_team_member,
        crate::routes::admin::team::update_team_member,
        crate::routes::admin::team::delete_team_member,
        crate::routes::admin::seo::list_seo_metadata,
        crate::routes::admin::seo::get_seo_metadata,
        crate::routes::admin::seo::create_seo_metadata,
        crate::routes::admin::seo::update_seo_metadata,
        crate::routes::admin::seo::delete_seo_metadata,
        // Users
        crate::routes::users::list_users,
        crate::routes::users::get_user,
        crate::routes::users::create_user,
        crate::routes::users::update_user,
        crate::routes::users::delete_user,
    ),
    components(
        schemas(
            BlogPost, CreateBlogPost, UpdateBlogPost,
            Faq, CreateFaq, UpdateFaq,
            Location, CreateLocation, UpdateLocation,
            TeamMember, CreateTeamMember, UpdateTeamMember,
            SeoMetadata, CreateSeoMetadata, UpdateSeoMetadata, PageSeo, ResolvedSeo, SeoSource,
            CreateUser, UpdateUser, UserResponse, UserRole, LoginRequest, LoginResponse,
            Resource, Action, Permissions, ResourcePermissions, PermissionTable
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Service health"),
        (name = "public", description = "Content for the public site"),
        (name = "auth", description = "Dashboard authentication"),
        (name = "admin", description = "Content management"),
        (name = "users", description = "Dashboard account management"),
    ),
    info(
        title = "Havenweb API",
        version = "1.4.0",
        description = "Content and SEO API for the behavioral health website"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn create_swagger_router() -> Router<Arc<AppState>> {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
