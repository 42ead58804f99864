//! End-to-end tests for the HTTP API
//!
//! Each test serves a fresh router seeded with the demo data on an
//! ephemeral port and drives it with reqwest.

use common::seed::demo_catalog;
use rating_api::{
    AppState, create_router,
    jwt::{JwtConfig, JwtService},
};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
    client: Client,
}

impl TestApp {
    async fn spawn() -> Self {
        let jwt_service = JwtService::new(JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry: 3600,
        });
        let app = create_router(AppState::new(demo_catalog(), jwt_service));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let address = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server failed");
        });

        TestApp {
            base_url: format!("http://{address}"),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn login(&self, email: &str, password: &str) -> String {
        let resp = self
            .client
            .post(self.url("/login"))
            .json(&json!({"email": email, "password": password}))
            .send()
            .await
            .expect("Failed to log in");

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = resp.json().await.expect("Failed to read login body");
        body["token"]
            .as_str()
            .expect("Login response has no token")
            .to_string()
    }

    async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut request = self.client.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await.expect("Request failed");
        let status = resp.status();
        (status, resp.json().await.expect("Response is not JSON"))
    }

    async fn send(
        &self,
        method: reqwest::Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = self.client.request(method, self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let resp = request.send().await.expect("Request failed");
        let status = resp.status();
        (status, resp.json().await.expect("Response is not JSON"))
    }
}

#[tokio::test]
async fn health_check_responds() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn login_returns_session_user() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/login"))
        .json(&json!({"email": "bob@example.com", "password": "whatever"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["user"]["id"], 3);
    assert_eq!(body["user"]["role"], "store");
}

#[tokio::test]
async fn unknown_email_is_unauthorized() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .send(
            reqwest::Method::POST,
            "/login",
            None,
            Some(json!({"email": "nobody@example.com", "password": "x"})),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn rating_upsert_recomputes_store_average() {
    let app = TestApp::spawn().await;
    let token = app.login("alice@example.com", "any").await;

    let (status, body) = app
        .send(
            reqwest::Method::POST,
            "/ratings",
            Some(&token),
            Some(json!({"storeId": 1, "rating": 5})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["storeRating"], 4.7);
    assert_eq!(body["rating"]["userId"], 4);
    let rating_id = body["rating"]["id"].clone();

    let (status, body) = app
        .send(
            reqwest::Method::POST,
            "/ratings",
            Some(&token),
            Some(json!({"storeId": 1, "rating": 3})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rating"]["id"], rating_id);
    assert_eq!(body["storeRating"], 4.0);

    let (_, body) = app.get("/stores/1", None).await;
    assert_eq!(body["store"]["rating"], 4.0);

    let (_, body) = app.get("/ratings/store/1", None).await;
    assert_eq!(body["ratings"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn out_of_range_rating_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.login("alice@example.com", "any").await;

    let (status, body) = app
        .send(
            reqwest::Method::POST,
            "/ratings",
            Some(&token),
            Some(json!({"storeId": 1, "rating": 6})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (_, body) = app.get("/stores/1", None).await;
    assert_eq!(body["store"]["rating"], 4.5);
}

#[tokio::test]
async fn rating_requires_a_session() {
    let app = TestApp::spawn().await;

    let (status, _) = app
        .send(
            reqwest::Method::POST,
            "/ratings",
            None,
            Some(json!({"storeId": 1, "rating": 4})),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn only_author_or_admin_modify_ratings() {
    let app = TestApp::spawn().await;
    let jane = app.login("jane@example.com", "any").await;
    let john = app.login("john@example.com", "any").await;

    // rating 2 belongs to Bob
    let (status, _) = app
        .send(reqwest::Method::DELETE, "/ratings/2", Some(&jane), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .send(reqwest::Method::DELETE, "/ratings/2", Some(&john), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["storeRating"], 5.0);
}

#[tokio::test]
async fn dashboard_follows_role() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get("/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dashboard"]["view"], "loading");

    let admin = app.login("john@example.com", "any").await;
    let (_, body) = app.get("/dashboard?search=coffee", Some(&admin)).await;
    assert_eq!(body["dashboard"]["view"], "admin");
    assert_eq!(body["dashboard"]["totals"]["users"], 5);
    assert_eq!(body["dashboard"]["totals"]["ratings"], 18);

    let owner = app.login("bob@example.com", "any").await;
    let (_, body) = app.get("/dashboard", Some(&owner)).await;
    assert_eq!(body["dashboard"]["view"], "store");
    assert_eq!(body["dashboard"]["store"]["name"], "Coffee Haven");
    assert_eq!(body["dashboard"]["totalRatings"], 2);

    let normal = app.login("jane@example.com", "any").await;
    let (_, body) = app.get("/dashboard", Some(&normal)).await;
    assert_eq!(body["dashboard"]["view"], "user");
    assert_eq!(body["dashboard"]["stores"][0]["myRating"], 5);
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = TestApp::spawn().await;
    let token = app.login("jane@example.com", "any").await;

    let (status, body) = app.get("/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["userId"], 2);

    let (status, _) = app
        .send(reqwest::Method::POST, "/logout", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get("/me", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, body) = app.get("/dashboard", Some(&token)).await;
    assert_eq!(body["dashboard"]["view"], "loading");
}

#[tokio::test]
async fn user_management_is_admin_only() {
    let app = TestApp::spawn().await;
    let jane = app.login("jane@example.com", "any").await;
    let john = app.login("john@example.com", "any").await;

    let (status, _) = app.get("/users", Some(&jane)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.get("/users?search=STORE", Some(&john)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"].as_array().map(Vec::len), Some(2));

    let (status, _) = app
        .send(reqwest::Method::DELETE, "/users/2", Some(&john), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    // deleting a user ends their sessions
    let (status, _) = app.get("/me", Some(&jane)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn created_ids_are_never_reused() {
    let app = TestApp::spawn().await;
    let john = app.login("john@example.com", "any").await;

    let store = json!({
        "name": "Night Market",
        "email": "hello@nightmarket.com",
        "address": "1 Late St",
    });

    let (status, _) = app
        .send(reqwest::Method::DELETE, "/stores/5", Some(&john), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .send(reqwest::Method::POST, "/stores", Some(&john), Some(store))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["store"]["id"], 6);
    assert_eq!(body["store"]["rating"], 0.0);
    assert_eq!(body["store"]["image"], "/placeholder.svg");
}

#[tokio::test]
async fn owners_update_only_their_store() {
    let app = TestApp::spawn().await;
    let bob = app.login("bob@example.com", "any").await;

    let update = json!({
        "name": "Coffee Haven Roastery",
        "email": "info@coffeehaven.com",
        "address": "123 Main St, New York",
        "description": "Now roasting on site.",
    });

    let (status, body) = app
        .send(reqwest::Method::PUT, "/stores/1", Some(&bob), Some(update.clone()))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"]["name"], "Coffee Haven Roastery");
    assert_eq!(body["store"]["rating"], 4.5);
    assert_eq!(body["store"]["ownerId"], 3);

    let (status, _) = app
        .send(reqwest::Method::PUT, "/stores/2", Some(&bob), Some(update))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn registered_account_needs_its_password() {
    let app = TestApp::spawn().await;

    let (status, body) = app
        .send(
            reqwest::Method::POST,
            "/register",
            None,
            Some(json!({
                "name": "Dana Scully",
                "email": "dana@example.com",
                "password": "Secret#123",
                "address": "22 Bureau Way",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["role"], "normal");
    assert!(body["user"].get("passwordHash").is_none());

    let (status, _) = app
        .send(
            reqwest::Method::POST,
            "/login",
            None,
            Some(json!({"email": "dana@example.com", "password": "wrong"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    app.login("dana@example.com", "Secret#123").await;

    let (status, _) = app
        .send(
            reqwest::Method::POST,
            "/register",
            None,
            Some(json!({
                "name": "Mallory",
                "email": "mallory@example.com",
                "password": "Secret#123",
                "address": "1 Root Rd",
                "role": "admin",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_input_gets_json_bad_request() {
    let app = TestApp::spawn().await;
    let token = app.login("alice@example.com", "any").await;

    let bodies = [
        json!({"storeId": 1, "rating": "5"}),
        json!({"storeId": 1, "rating": 4.5}),
        json!({"storeId": 1}),
    ];
    for body in bodies {
        let (status, body) = app
            .send(reqwest::Method::POST, "/ratings", Some(&token), Some(body))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }

    let (status, body) = app.get("/stores/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (_, body) = app.get("/stores/1", None).await;
    assert_eq!(body["store"]["rating"], 4.5);
}

#[tokio::test]
async fn admin_created_account_needs_its_password() {
    let app = TestApp::spawn().await;
    let john = app.login("john@example.com", "any").await;

    let (status, body) = app
        .send(
            reqwest::Method::POST,
            "/users",
            Some(&john),
            Some(json!({
                "name": "Eve Moneypenny",
                "email": "eve@example.com",
                "address": "1 Office Row",
                "role": "admin",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = app
        .send(
            reqwest::Method::POST,
            "/users",
            Some(&john),
            Some(json!({
                "name": "Eve Moneypenny",
                "email": "eve@example.com",
                "address": "1 Office Row",
                "role": "admin",
                "password": "Secret#123",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .send(
            reqwest::Method::POST,
            "/login",
            None,
            Some(json!({"email": "eve@example.com", "password": "guess"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    app.login("eve@example.com", "Secret#123").await;
}

#[tokio::test]
async fn ratings_outlive_their_store() {
    let app = TestApp::spawn().await;
    let john = app.login("john@example.com", "any").await;

    let (status, _) = app
        .send(reqwest::Method::DELETE, "/stores/1", Some(&john), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get("/stores/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.get("/ratings/store/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ratings"].as_array().map(Vec::len), Some(2));

    let (_, body) = app.get("/ratings/user/2", None).await;
    let orphaned = body["ratings"]
        .as_array()
        .and_then(|ratings| ratings.iter().find(|r| r["storeId"] == 1))
        .expect("Rating for the deleted store is listed");
    assert!(orphaned["storeName"].is_null());
}
