mod common;

use axum::Router;
use axum::http::{StatusCode, header};
use common::{basic_auth, empty_request, json_request, send, setup_pg_app};
use serde_json::json;
use sqlx::PgPool;

async fn register(app: &Router, first_name: &str, email: &str, password: &str) {
    let response = send(
        app,
        json_request(
            "POST",
            "/api/users",
            None,
            &json!({
                "firstName": first_name,
                "lastName": "Tester",
                "emailAddress": email,
                "password": password
            }),
        ),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
}

/// Returns the new course's location.
async fn create_course(app: &Router, auth: &str, title: &str) -> String {
    let response = send(
        app,
        json_request(
            "POST",
            "/api/courses",
            Some(auth),
            &json!({ "title": title, "description": "Learn by building" }),
        ),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.headers[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}

#[sqlx::test(migrations = "crates/coursebook-db/migrations")]
async fn test_duplicate_registration_reports_used_email(pool: PgPool) {
    let app = setup_pg_app(pool);
    register(&app, "Joe", "joe@smith.com", "joepassword").await;

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/users",
            None,
            &json!({
                "first_name": "Other",
                "last_name": "Joe",
                "email": "joe@smith.com",
                "password": "otherpassword"
            }),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "errors": ["The email address you entered is already used"] })
    );
}

#[sqlx::test(migrations = "crates/coursebook-db/migrations")]
async fn test_registered_user_authenticates(pool: PgPool) {
    let app = setup_pg_app(pool);
    register(&app, "Joe", "joe@smith.com", "joepassword").await;

    let response = send(
        &app,
        empty_request(
            "GET",
            "/api/users",
            Some(&basic_auth("joe@smith.com", "joepassword")),
        ),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "joe@smith.com");
    assert_eq!(response.body["first_name"], "Joe");

    let response = send(
        &app,
        empty_request(
            "GET",
            "/api/users",
            Some(&basic_auth("joe@smith.com", "wrongpassword")),
        ),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, json!({ "message": "Access Denied" }));
}

#[sqlx::test(migrations = "crates/coursebook-db/migrations")]
async fn test_delete_ownership_scenario(pool: PgPool) {
    let app = setup_pg_app(pool);
    register(&app, "Joe", "joe@smith.com", "joepassword").await;
    register(&app, "Sally", "sally@jones.com", "sallypassword").await;
    let joe = basic_auth("joe@smith.com", "joepassword");
    let sally = basic_auth("sally@jones.com", "sallypassword");
    let location = create_course(&app, &joe, "Bookcase").await;

    let response = send(&app, empty_request("DELETE", &location, Some(&sally))).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body, json!({ "message": "Access Denied" }));

    let response = send(&app, empty_request("GET", &location, None)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["owner"]["email"], "joe@smith.com");

    let response = send(&app, empty_request("DELETE", &location, Some(&joe))).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = send(&app, empty_request("GET", &location, None)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = send(
        &app,
        empty_request("DELETE", "/api/courses/999999", Some(&joe)),
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "message": "Course Not Found" }));
}

#[sqlx::test(migrations = "crates/coursebook-db/migrations")]
async fn test_update_is_owner_only_and_in_place(pool: PgPool) {
    let app = setup_pg_app(pool);
    register(&app, "Joe", "joe@smith.com", "joepassword").await;
    register(&app, "Sally", "sally@jones.com", "sallypassword").await;
    let joe = basic_auth("joe@smith.com", "joepassword");
    let sally = basic_auth("sally@jones.com", "sallypassword");
    let location = create_course(&app, &joe, "Bookcase").await;
    let body = json!({ "title": "Shelf", "description": "Learn by building" });

    let response = send(&app, json_request("PUT", &location, Some(&sally), &body)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = send(&app, json_request("PUT", &location, Some(&joe), &body)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = send(&app, empty_request("GET", "/api/courses", None)).await;
    assert_eq!(response.status, StatusCode::OK);
    let courses = response.body.as_array().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["title"], "Shelf");
    assert_eq!(courses[0]["owner"]["first_name"], "Joe");
}
