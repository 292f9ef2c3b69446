//! Input normalization and validation shared by the content payloads.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::errors::ApiError;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex is valid"));

static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("separator regex is valid"));

/// Derive a URL slug from free text: "Anxiety & Depression Care" -> "anxiety-depression-care".
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

/// Column widths shared with the schema in `migrations/`.
pub const SLUG_MAX: usize = 255;
pub const NAME_MAX: usize = 255;
pub const EMAIL_MAX: usize = 255;
pub const CATEGORY_MAX: usize = 100;
pub const CITY_MAX: usize = 120;
pub const STATE_MAX: usize = 60;
pub const ZIP_CODE_MAX: usize = 20;
pub const PHONE_MAX: usize = 40;
pub const PAGE_PATH_MAX: usize = 512;

/// Use the explicit slug when one was given, otherwise derive it from `source`.
/// Derived slugs are cut at a hyphen to fit; explicit ones must already fit.
pub fn resolve_slug(explicit: Option<&str>, source: &str) -> Result<String, ApiError> {
    let slug = match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.to_string(),
        None => truncate_slug(slugify(source)),
    };

    max_len("slug", &slug, SLUG_MAX)?;
    if !is_valid_slug(&slug) {
        return Err(ApiError::bad_request(format!(
            "Invalid slug '{}': use lowercase letters, digits and single hyphens",
            slug
        )));
    }
    Ok(slug)
}

/// Trim a required text field, rejecting blank values.
pub fn require_text(field: &str, value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request(format!("'{}' must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

fn truncate_slug(slug: String) -> String {
    if slug.len() <= SLUG_MAX {
        return slug;
    }
    // slugify output is ASCII, so byte offsets are char boundaries
    slug[..SLUG_MAX].trim_end_matches('-').to_string()
}

/// Reject values longer than `max` characters.
pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), ApiError> {
    if value.chars().count() > max {
        return Err(ApiError::bad_request(format!(
            "'{}' must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// `require_text` plus a length limit.
pub fn bounded_text(field: &str, value: &str, max: usize) -> Result<String, ApiError> {
    let trimmed = require_text(field, value)?;
    max_len(field, &trimmed, max)?;
    Ok(trimmed)
}

/// `optional_text` plus a length limit.
pub fn optional_bounded(field: &str, value: Option<String>, max: usize) -> Result<Option<String>, ApiError> {
    let value = optional_text(value);
    if let Some(v) = &value {
        max_len(field, v, max)?;
    }
    Ok(value)
}

/// Trim entries, drop blanks and keep the first occurrence of duplicates.
pub fn normalize_list(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() || out.iter().any(|v| v == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}

/// Optional text: whitespace-only collapses to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Optional absolute URL (http or https).
pub fn optional_url(field: &str, value: Option<String>) -> Result<Option<String>, ApiError> {
    let Some(value) = optional_text(value) else {
        return Ok(None);
    };

    match Url::parse(&value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(Some(value)),
        _ => Err(ApiError::bad_request(format!(
            "'{}' must be an absolute http(s) URL",
            field
        ))),
    }
}
