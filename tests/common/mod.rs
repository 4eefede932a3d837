#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use coursebook::router::init_router;
use coursebook::state::AppState;
use coursebook_config::{CorsConfig, SecurityConfig};
use coursebook_core::hash_password_with_cost;
use coursebook_db::{CourseStore, MemoryStore, PgStore, UserStore};
use coursebook_models::{Course, NewCourse, NewUser, User};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

/// bcrypt's minimum cost keeps tests fast.
pub const TEST_COST: u32 = 4;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

pub fn setup_test_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(
        store.clone(),
        SecurityConfig::with_cost(TEST_COST),
        CorsConfig::default(),
    )
    .unwrap();

    TestApp {
        router: init_router(state),
        store,
    }
}

/// Router backed by a migrated PostgreSQL test database.
pub fn setup_pg_app(pool: PgPool) -> Router {
    let state = AppState::new(
        Arc::new(PgStore::new(pool)),
        SecurityConfig::with_cost(TEST_COST),
        CorsConfig::default(),
    )
    .unwrap();
    init_router(state)
}

pub async fn create_test_user(store: &MemoryStore, email: &str, password: &str) -> User {
    let password_hash = hash_password_with_cost(password, TEST_COST).unwrap();
    store
        .create_user(NewUser {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: email.to_string(),
            password_hash,
        })
        .await
        .unwrap()
}

pub async fn create_test_course(store: &MemoryStore, owner: &User, title: &str) -> Course {
    store
        .create_course(
            owner.id,
            NewCourse {
                title: title.to_string(),
                description: "Learn by building".to_string(),
                estimated_time: Some("12 hours".to_string()),
                materials_needed: None,
            },
        )
        .await
        .unwrap()
}

pub fn basic_auth(email: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", email, password)))
}

pub fn json_request(method: &str, uri: &str, auth: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder.body(Body::empty()).unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
