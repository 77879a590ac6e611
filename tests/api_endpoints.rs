//! Integration tests for the v1 API module.

use chrono::{Duration, Utc};
use gamejam_backend::config::AppConfig;
use gamejam_backend::store::{GameJam, Profile, User};
use reqwest::StatusCode;
use serde_json::json;

mod common;

fn jam(id: &str, name: &str, start_in_days: i64, len_days: i64) -> GameJam {
    let start = Utc::now() + Duration::days(start_in_days);
    GameJam {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        start_date: start,
        end_date: start + Duration::days(len_days),
        host_user_ids: vec![],
    }
}

fn user(id: &str, name: &str, username: Option<&str>, jam_ids: Vec<String>) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        skill_level: None,
        profile: username.map(|u| Profile {
            username: u.to_string(),
            bio: String::new(),
        }),
        jam_ids,
    }
}

#[tokio::test]
async fn test_gamejam_time_frame_filter() {
    let server = common::spawn_server(AppConfig::default()).await;
    server.store.put_game_jam(jam("current", "Spring Jam", -1, 3));
    server.store.put_game_jam(jam("previous", "Winter Jam", -30, 2));
    server.store.put_game_jam(jam("upcoming", "Summer Jam", 10, 2));
    let client = common::no_redirect_client();

    for (frame, expected) in [
        ("current", "current"),
        ("previous", "previous"),
        ("upcoming", "upcoming"),
    ] {
        let res = client
            .get(server.url(&format!("/api/v1/gamejams?time_frame={frame}")))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["count"], 1, "time_frame={frame}");
        assert_eq!(body["game_jams"][0]["id"], expected);
    }

    let res = client.get(server.url("/api/v1/gamejams")).send().await.unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn test_gamejam_search_and_pagination() {
    let server = common::spawn_server(AppConfig::default()).await;
    for i in 0..5 {
        // Staggered starts so the listing order is deterministic.
        server
            .store
            .put_game_jam(jam(&format!("j{i}"), &format!("Pixel Jam {i}"), -10 - i, 2));
    }
    server.store.put_game_jam(jam("other", "Unrelated", -1, 2));
    let client = common::no_redirect_client();

    let res = client
        .get(server.url("/api/v1/gamejams?q=Pixel&limit=2"))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["count"], 5);
    assert_eq!(body["game_jams"].as_array().unwrap().len(), 2);
    assert_eq!(body["game_jams"][0]["id"], "j0");
    let cursor = body["next_cursor"].as_str().expect("cursor expected").to_string();
    assert_eq!(cursor, "j2");

    let res = client
        .get(server.url(&format!("/api/v1/gamejams?q=Pixel&limit=2&cursor={cursor}")))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["game_jams"][0]["id"], "j2");
    assert_eq!(body["game_jams"][1]["id"], "j3");
}

#[tokio::test]
async fn test_gamejam_limit_bounds() {
    let server = common::spawn_server(AppConfig::default()).await;
    let client = common::no_redirect_client();

    for bad in ["0", "1001"] {
        let res = client
            .get(server.url(&format!("/api/v1/gamejams?limit={bad}")))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_gamejam_get_by_id() {
    let server = common::spawn_server(AppConfig::default()).await;
    server.store.put_game_jam(jam("known", "Known Jam", -1, 2));
    let client = common::no_redirect_client();

    let res = client.get(server.url("/api/v1/gamejams/known")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["name"], "Known Jam");

    let res = client.get(server.url("/api/v1/gamejams/missing")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_gamejam_upsert_creates_then_updates() {
    let server = common::spawn_server(AppConfig::default()).await;
    let client = common::no_redirect_client();

    let start = Utc::now().to_rfc3339();
    let end = (Utc::now() + Duration::days(2)).to_rfc3339();
    let res = client
        .post(server.url("/api/v1/gamejams"))
        .json(&json!({
            "name": "New Jam",
            "start_date": start,
            "end_date": end,
            "host_user_id": "host-1",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let created: serde_json::Value = res.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["host_user_ids"][0], "host-1");

    let res = client
        .post(server.url("/api/v1/gamejams"))
        .json(&json!({
            "id": id,
            "name": "Renamed Jam",
            "description": "now with a description",
            "start_date": start,
            "end_date": end,
            "host_user_id": "host-2",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["name"], "Renamed Jam");
    // Both hosts stay connected.
    assert_eq!(updated["host_user_ids"].as_array().unwrap().len(), 2);

    let stored = server.store.game_jam(&id).unwrap();
    assert_eq!(stored.name, "Renamed Jam");
}

#[tokio::test]
async fn test_user_listing_hides_profileless_and_derives_handles() {
    let server = common::spawn_server(AppConfig::default()).await;
    server.store.put_user(user("u1", "Ada", Some("ada"), vec![]));
    server.store.put_user(user("u2", "Ghost", None, vec![]));
    let client = common::no_redirect_client();

    let res = client.get(server.url("/api/v1/users")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["count"], 1);
    assert_eq!(body["users"][0]["handle"], "@ada");

    // Search is case-insensitive.
    let res = client.get(server.url("/api/v1/users?q=ADA")).send().await.unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn test_user_detail_buckets_jams() {
    let server = common::spawn_server(AppConfig::default()).await;
    server.store.put_game_jam(jam("now", "Now Jam", -1, 3));
    server.store.put_game_jam(jam("past", "Past Jam", -20, 2));
    server.store.put_game_jam(jam("soon", "Soon Jam", 5, 2));
    server.store.put_user(user(
        "u1",
        "Ada",
        Some("ada"),
        vec!["now".into(), "past".into(), "soon".into()],
    ));
    let client = common::no_redirect_client();

    for url in ["/api/v1/users/u1", "/api/v1/users/by-username/ada"] {
        let res = client.get(server.url(url)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["current_game_jams"][0]["id"], "now", "{url}");
        assert_eq!(body["previous_game_jams"][0]["id"], "past", "{url}");
        assert_eq!(body["upcoming_game_jams"][0]["id"], "soon", "{url}");
    }

    let res = client.get(server.url("/api/v1/users/unknown")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = client
        .get(server.url("/api/v1/users/by-username/unknown"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_listing_and_delete() {
    let server = common::spawn_server(common::admin_config("test-admin-key")).await;
    server.store.put_game_jam(jam("doomed", "Doomed Jam", -1, 2));
    server.store.put_user(user("u2", "Ghost", None, vec![]));
    let client = common::no_redirect_client();

    // Admin sees profile-less users the public API hides.
    let res = client
        .get(server.url("/admin/users"))
        .header("Authorization", "Bearer test-admin-key")
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);

    let res = client
        .delete(server.url("/admin/gamejams/doomed"))
        .header("Authorization", "Bearer test-admin-key")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(server.store.game_jam("doomed").is_none());

    let res = client
        .delete(server.url("/admin/gamejams/doomed"))
        .header("Authorization", "Bearer test-admin-key")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
