// Re-export all model types so callers can use `crate::models::*`

pub mod user;
pub mod blog;
pub mod faq;
pub mod location;
pub mod team;
pub mod seo;

pub use user::*;
pub use blog::*;
pub use faq::*;
pub use location::*;
pub use team::*;
pub use seo::*;
