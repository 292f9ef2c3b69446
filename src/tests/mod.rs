mod auth_tests;
mod seo_tests;
mod public_routes_tests;
mod admin_routes_tests;
