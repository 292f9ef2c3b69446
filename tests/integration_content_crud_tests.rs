//! CRUD round trips against a real Postgres container.
//!
//! Run with `--features test-utils`; Docker must be available.

#![cfg(feature = "test-utils")]

use axum::http::StatusCode;
use serde_json::json;

use havenweb::test_utils::{send, TestContext};

#[tokio::test]
async fn test_blog_post_lifecycle() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    let (status, created) = send(
        &ctx.app,
        "POST",
        "/api/admin/blog",
        Some(&token),
        Some(json!({
            "title": "Managing Holiday Stress",
            "content": "Practical tips.",
            "author": "Dr. Patel",
            "tags": ["stress", "wellness", "stress"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["slug"], "managing-holiday-stress");
    assert_eq!(created["tags"], json!(["stress", "wellness"]));
    assert_eq!(created["published"], false);
    let id = created["id"].as_str().unwrap().to_string();

    // drafts stay off the public site
    let (_, public) = send(&ctx.app, "GET", "/api/blog", None, None).await;
    assert_eq!(public, json!([]));
    let (status, _) = send(&ctx.app, "GET", "/api/blog/managing-holiday-stress", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, updated) = send(
        &ctx.app,
        "PUT",
        &format!("/api/admin/blog/{}", id),
        Some(&token),
        Some(json!({"published": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["published"], true);
    assert!(updated["published_at"].is_string());

    let (_, public) = send(&ctx.app, "GET", "/api/blog?tag=wellness", None, None).await;
    assert_eq!(public.as_array().unwrap().len(), 1);
    let (_, tags) = send(&ctx.app, "GET", "/api/blog/tags", None, None).await;
    assert_eq!(tags, json!(["stress", "wellness"]));

    let (status, _) = send(&ctx.app, "DELETE", &format!("/api/admin/blog/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&ctx.app, "DELETE", &format!("/api/admin/blog/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_slug_conflicts() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;
    let location = json!({
        "name": "Riverside Clinic",
        "address": "100 River Rd",
        "city": "Springfield",
        "state": "IL",
        "zip_code": "62701",
        "phone": "555-0100",
        "services": ["Therapy", "Psychiatry"]
    });

    let (status, _) = send(&ctx.app, "POST", "/api/admin/locations", Some(&token), Some(location.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&ctx.app, "POST", "/api/admin/locations", Some(&token), Some(location)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");

    let (_, listed) = send(&ctx.app, "GET", "/api/locations", None, None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    let (status, detail) = send(&ctx.app, "GET", "/api/locations/riverside-clinic", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["services"], json!(["Therapy", "Psychiatry"]));
}

#[tokio::test]
async fn test_faqs_filtered_and_ordered() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    for (question, category, order, active) in [
        ("Second billing question", "Billing", 2, true),
        ("First billing question", "billing", 1, true),
        ("Hidden question", "billing", 0, false),
        ("Telehealth?", "services", 0, true),
    ] {
        let (status, _) = send(
            &ctx.app,
            "POST",
            "/api/admin/faqs",
            Some(&token),
            Some(json!({"question": question, "answer": "Yes.", "category": category, "sort_order": order, "is_active": active})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, billing) = send(&ctx.app, "GET", "/api/faqs?category=BILLING", None, None).await;
    let questions: Vec<&str> = billing
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["question"].as_str().unwrap())
        .collect();
    assert_eq!(questions, vec!["First billing question", "Second billing question"]);

    let (_, all_admin) = send(&ctx.app, "GET", "/api/admin/faqs", Some(&token), None).await;
    assert_eq!(all_admin.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_stored_seo_overrides_static_table() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    let (_, before) = send(&ctx.app, "GET", "/api/seo?path=/about", None, None).await;
    assert_eq!(before["source"], "static");

    let (status, created) = send(
        &ctx.app,
        "POST",
        "/api/admin/seo",
        Some(&token),
        Some(json!({"page_path": "/About/", "title": "About Our Clinics", "keywords": ["about"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["page_path"], "/about");

    let (_, after) = send(&ctx.app, "GET", "/api/seo?path=/about?ref=nav", None, None).await;
    assert_eq!(after["source"], "database");
    assert_eq!(after["metadata"]["title"], "About Our Clinics");

    let (status, _) = send(
        &ctx.app,
        "POST",
        "/api/admin/seo",
        Some(&token),
        Some(json!({"page_path": "/about", "title": "Duplicate"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_editor_account_is_limited_by_role() {
    let ctx = TestContext::new().await;
    let admin_token = ctx.admin_token().await;

    let (status, editor) = send(
        &ctx.app,
        "POST",
        "/api/users",
        Some(&admin_token),
        Some(json!({"username": "editor1", "email": "editor1@example.com", "password": "editorpass1", "role": "editor"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(editor["role"], "editor");

    let editor_token = ctx.login("editor1", "editorpass1").await;

    let (status, me) = send(&ctx.app, "GET", "/api/auth/me", Some(&editor_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], "editor1");

    let (status, member) = send(
        &ctx.app,
        "POST",
        "/api/admin/team",
        Some(&editor_token),
        Some(json!({"name": "Jordan Lee", "title": "Clinical Director", "sort_order": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let member_uri = format!("/api/admin/team/{}", member["id"].as_str().unwrap());
    let (status, _) = send(&ctx.app, "DELETE", &member_uri, Some(&editor_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send(&ctx.app, "DELETE", &member_uri, Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_login_rejects_wrong_password() {
    let ctx = TestContext::new().await;

    let (status, _) = send(
        &ctx.app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"username": "admin", "password": "wrong-password"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    assert_eq!(ctx.db.get_all_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_stale_token_follows_stored_role() {
    let ctx = TestContext::new().await;
    let admin_token = ctx.admin_token().await;

    let (status, editor) = send(
        &ctx.app,
        "POST",
        "/api/users",
        Some(&admin_token),
        Some(json!({"username": "editor2", "email": "editor2@example.com", "password": "editorpass2", "role": "editor"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let editor_uri = format!("/api/users/{}", editor["id"].as_str().unwrap());
    let editor_token = ctx.login("editor2", "editorpass2").await;
    let post = json!({"title": "Sleep Hygiene", "content": "Keep a routine.", "author": "Staff"});

    let (status, _) = send(&ctx.app, "POST", "/api/admin/blog", Some(&editor_token), Some(post.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&ctx.app, "PUT", &editor_uri, Some(&admin_token), Some(json!({"role": "viewer"}))).await;
    assert_eq!(status, StatusCode::OK);

    // same token, demoted account
    let (status, body) = send(&ctx.app, "POST", "/api/admin/blog", Some(&editor_token), Some(post)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
    let (status, _) = send(&ctx.app, "GET", "/api/admin/blog", Some(&editor_token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&ctx.app, "DELETE", &editor_uri, Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = send(&ctx.app, "GET", "/api/admin/blog", Some(&editor_token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_location_lifecycle() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    let (status, created) = send(
        &ctx.app,
        "POST",
        "/api/admin/locations",
        Some(&token),
        Some(json!({
            "name": "Lakeview Office",
            "address": "12 Shore Dr",
            "city": "Madison",
            "state": "WI",
            "zip_code": "53703",
            "phone": "555-0142",
            "email": "lakeview@example.com",
            "latitude": 43.07,
            "longitude": -89.40
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["slug"], "lakeview-office");
    let admin_uri = format!("/api/admin/locations/{}", created["id"].as_str().unwrap());

    let (_, listed) = send(&ctx.app, "GET", "/api/locations", None, None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, _) = send(&ctx.app, "PUT", &admin_uri, Some(&token), Some(json!({"is_active": false}))).await;
    assert_eq!(status, StatusCode::OK);
    let (_, listed) = send(&ctx.app, "GET", "/api/locations", None, None).await;
    assert_eq!(listed, json!([]));
    let (status, _) = send(&ctx.app, "GET", "/api/locations/lakeview-office", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, cleared) = send(
        &ctx.app,
        "PUT",
        &admin_uri,
        Some(&token),
        Some(json!({"email": "", "latitude": null, "longitude": null, "phone": "555-0199"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(cleared["email"].is_null());
    assert!(cleared["latitude"].is_null());
    assert!(cleared["longitude"].is_null());
    assert_eq!(cleared["phone"], "555-0199");
    assert_eq!(cleared["city"], "Madison");

    let (status, body) = send(&ctx.app, "PUT", &admin_uri, Some(&token), Some(json!({"state": "W".repeat(61)}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, _) = send(&ctx.app, "DELETE", &admin_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&ctx.app, "GET", &admin_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(ctx.db.get_all_locations().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_team_members_ordered() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    let mut ids = Vec::new();
    for (name, order, active) in [
        ("Casey Morgan", 2, true),
        ("Avery Chen", 0, true),
        ("Blake Ortiz", 1, true),
        ("Drew Former", 0, false),
    ] {
        let (status, member) = send(
            &ctx.app,
            "POST",
            "/api/admin/team",
            Some(&token),
            Some(json!({"name": name, "title": "Director", "credentials": "LCSW", "sort_order": order, "is_active": active})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(member["id"].as_str().unwrap().to_string());
    }

    let (_, team) = send(&ctx.app, "GET", "/api/team", None, None).await;
    let names: Vec<&str> = team.as_array().unwrap().iter().map(|m| m["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Avery Chen", "Blake Ortiz", "Casey Morgan"]);

    let (status, updated) = send(
        &ctx.app,
        "PUT",
        &format!("/api/admin/team/{}", ids[0]),
        Some(&token),
        Some(json!({"sort_order": -1, "credentials": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(updated["credentials"].is_null());
    assert_eq!(updated["title"], "Director");

    let active = ctx.db.get_active_team_members().await.unwrap();
    assert_eq!(active[0].name, "Casey Morgan");
    assert_eq!(ctx.db.get_all_team_members().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_blog_listing_pages_newest_first() {
    let ctx = TestContext::new().await;
    let token = ctx.admin_token().await;

    for day in 1..=5 {
        let tags = if day % 2 == 0 { vec!["even"] } else { vec![] };
        let (status, _) = send(
            &ctx.app,
            "POST",
            "/api/admin/blog",
            Some(&token),
            Some(json!({
                "title": format!("Post {}", day),
                "content": "Body",
                "author": "Staff",
                "cover_image_url": "https://cdn.example/cover.jpg",
                "tags": tags,
                "published": true,
                "published_at": format!("2025-03-0{}T09:00:00Z", day)
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let titles = |page: serde_json::Value| -> Vec<String> {
        page.as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap().to_string())
            .collect()
    };

    let (_, page) = send(&ctx.app, "GET", "/api/blog?limit=2", None, None).await;
    assert_eq!(titles(page), vec!["Post 5", "Post 4"]);
    let (_, page) = send(&ctx.app, "GET", "/api/blog?limit=2&offset=4", None, None).await;
    assert_eq!(titles(page), vec!["Post 1"]);
    let (_, page) = send(&ctx.app, "GET", "/api/blog?limit=0", None, None).await;
    assert_eq!(titles(page), vec!["Post 5"]);
    let (_, page) = send(&ctx.app, "GET", "/api/blog?tag=%20", None, None).await;
    assert_eq!(page.as_array().unwrap().len(), 5);
    let (_, page) = send(&ctx.app, "GET", "/api/blog?tag=even", None, None).await;
    assert_eq!(titles(page), vec!["Post 4", "Post 2"]);

    let (_, post) = send(&ctx.app, "GET", "/api/blog/post-3", None, None).await;
    let uri = format!("/api/admin/blog/{}", post["id"].as_str().unwrap());
    let (status, updated) = send(&ctx.app, "PUT", &uri, Some(&token), Some(json!({"cover_image_url": ""}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(updated["cover_image_url"].is_null());
    assert_eq!(updated["slug"], "post-3");
}
