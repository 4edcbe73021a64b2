mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/signup")
        .json(&json!({
            "username": "alice",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "User registered successfully");
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    let app = TestApp::spawn().await;

    app.post("/signup")
        .json(&json!({
            "username": "alice",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Same username, different password: still a duplicate
    let response = app
        .post("/signup")
        .json(&json!({
            "username": "alice",
            "password": "another_password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Username already exists");
}

#[tokio::test]
async fn test_signup_empty_username() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/signup")
        .json(&json!({
            "username": "",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Username must not be empty");
}

#[tokio::test]
async fn test_signup_empty_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/signup")
        .json(&json!({
            "username": "alice",
            "password": ""
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Password must not be empty");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.post("/signup")
        .json(&json!({
            "username": "alice",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/login")
        .json(&json!({
            "username": "alice",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Welcome, alice!");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    app.post("/signup")
        .json(&json!({
            "username": "alice",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/login")
        .json(&json!({
            "username": "alice",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_unknown_username_indistinguishable_from_wrong_password() {
    let app = TestApp::spawn().await;

    app.post("/signup")
        .json(&json!({
            "username": "alice",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let wrong_password = app
        .post("/login")
        .json(&json!({
            "username": "alice",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let wrong_password_status = wrong_password.status();
    let wrong_password_body: serde_json::Value =
        wrong_password.json().await.expect("Failed to parse response");

    let unknown_user = app
        .post("/login")
        .json(&json!({
            "username": "bob",
            "password": "x"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let unknown_user_status = unknown_user.status();
    let unknown_user_body: serde_json::Value =
        unknown_user.json().await.expect("Failed to parse response");

    // Same status, same body: no username enumeration
    assert_eq!(wrong_password_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password_body, unknown_user_body);
    assert_eq!(unknown_user_body["detail"], "Invalid username or password");
}

#[tokio::test]
async fn test_full_auth_workflow() {
    let app = TestApp::spawn().await;

    // 1. Sign up
    let signup_response = app
        .post("/signup")
        .json(&json!({
            "username": "alice",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(signup_response.status(), StatusCode::CREATED);

    // 2. Signing up again with the same username fails
    let duplicate_response = app
        .post("/signup")
        .json(&json!({
            "username": "alice",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(duplicate_response.status(), StatusCode::BAD_REQUEST);

    // 3. Login with the right password succeeds
    let login_response = app
        .post("/login")
        .json(&json!({
            "username": "alice",
            "password": "secret1"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(login_response.status(), StatusCode::OK);
    let login_body: serde_json::Value = login_response
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(login_body["message"], "Welcome, alice!");

    // 4. Login with the wrong password fails
    let wrong_response = app
        .post("/login")
        .json(&json!({
            "username": "alice",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(wrong_response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_concurrent_signups_single_winner() {
    let app = TestApp::spawn().await;

    let requests = (0..8).map(|i| {
        app.post("/signup")
            .json(&json!({
                "username": "alice",
                "password": format!("password_{}", i)
            }))
            .send()
    });

    let responses = futures::future::join_all(requests).await;

    let mut created = 0;
    let mut rejected = 0;
    for response in responses {
        match response.expect("Failed to execute request").status() {
            StatusCode::CREATED => created += 1,
            StatusCode::BAD_REQUEST => rejected += 1,
            other => panic!("Unexpected status: {}", other),
        }
    }

    // The unique constraint lets exactly one insert through
    assert_eq!(created, 1);
    assert_eq!(rejected, 7);
}
