//! API integration tests
//!
//! These run against a live server with a migrated database:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Register a fresh user and return (token, user id)
async fn register_user(client: &Client, prefix: &str) -> (String, i64) {
    let username = format!(
        "{}-{}",
        prefix,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    );

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({ "username": username, "password": "pw1234" }))
        .send()
        .await
        .expect("Failed to send register request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse register response");
    let token = body["token"].as_str().expect("No token in response").to_string();
    let user_id = body["user"]["id"].as_i64().expect("No user id in response");
    (token, user_id)
}

/// Create a library for the given token
async fn create_library(client: &Client, token: &str, name: &str) -> Value {
    let response = client
        .post(format!("{}/library", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send create library request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse library response")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_then_login_round_trips() {
    let client = Client::new();
    let username = format!(
        "roundtrip-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    );

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({ "username": username, "password": "pw1234" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let registered: Value = response.json().await.unwrap();
    let user_id = registered["user"]["id"].as_i64().unwrap();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "username": username, "password": "pw1234" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let logged_in: Value = response.json().await.unwrap();
    let token = logged_in["token"].as_str().unwrap();

    // The issued token resolves back to the same user
    let body: Value = client
        .get(format!("{}/users/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["id"].as_i64().unwrap(), user_id);
    assert_eq!(body["username"], username.as_str());
}

#[tokio::test]
#[ignore]
async fn test_register_duplicate_username_conflicts() {
    let client = Client::new();
    let username = format!(
        "dup-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    );

    for expected in [201, 409] {
        let response = client
            .post(format!("{}/auth/register", BASE_URL))
            .json(&json!({ "username": username, "password": "pw1234" }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
#[ignore]
async fn test_register_mixed_case_duplicate_conflicts() {
    let client = Client::new();
    let username = format!(
        "CaseUser-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    );

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({ "username": username, "password": "pw1234" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // Same name in a different case is the same user
    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({ "username": username.to_lowercase(), "password": "pw1234" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_register_rejects_invalid_input() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({ "username": "", "password": "" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_create_book_rejects_empty_title() {
    let client = Client::new();
    let (token, _) = register_user(&client, "badbook").await;
    create_library(&client, &token, "Strict Shelf").await;

    let response = client
        .post(format!("{}/library/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "title": "", "author": "Herbert", "status": "unread" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_login_failures_are_indistinguishable() {
    let client = Client::new();
    let (_, _) = register_user(&client, "wrongpw").await;

    let unknown_user = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "username": "no-such-user-ever", "password": "pw1234" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(unknown_user.status(), 401);
    let unknown_body: Value = unknown_user.json().await.unwrap();

    let username = format!(
        "badpw-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    );
    client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({ "username": username, "password": "pw1234" }))
        .send()
        .await
        .unwrap();

    let wrong_password = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "username": username, "password": "not-the-password" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(wrong_password.status(), 401);
    let wrong_body: Value = wrong_password.json().await.unwrap();

    // Same error kind and message for both failure causes
    assert_eq!(unknown_body["code"], wrong_body["code"]);
    assert_eq!(unknown_body["message"], wrong_body["message"]);
}

#[tokio::test]
#[ignore]
async fn test_library_missing_then_create_then_conflict() {
    let client = Client::new();
    let (token, _) = register_user(&client, "library").await;

    // No library yet
    let response = client
        .get(format!("{}/library", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    // First create succeeds
    create_library(&client, &token, "My Shelf").await;

    // Second create conflicts
    let response = client
        .post(format!("{}/library", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "Another Shelf" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_library_update_merges_description() {
    let client = Client::new();
    let (token, _) = register_user(&client, "libmerge").await;

    let response = client
        .post(format!("{}/library", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "Shelf", "description": "original description" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    // Update with name only; description must survive
    let response = client
        .put(format!("{}/library", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "Renamed Shelf" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let body: Value = client
        .get(format!("{}/library", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["name"], "Renamed Shelf");
    assert_eq!(body["description"], "original description");
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let client = Client::new();
    let (token, _) = register_user(&client, "alice").await;
    create_library(&client, &token, "Alice's Shelf").await;

    // Create
    let response = client
        .post(format!("{}/library/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "title": "Dune", "author": "Herbert", "status": "unread" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    let book_id = body["id"].as_i64().expect("No book id");

    // Get matches payload
    let response = client
        .get(format!("{}/library/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "Dune");
    assert_eq!(body["author"], "Herbert");
    assert_eq!(body["status"], "unread");

    // Delete
    let response = client
        .delete(format!("{}/library/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    // Gone
    let response = client
        .get(format!("{}/library/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_book_update_merges_optional_fields() {
    let client = Client::new();
    let (token, _) = register_user(&client, "bookmerge").await;
    create_library(&client, &token, "Merge Shelf").await;

    let response = client
        .post(format!("{}/library/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "title": "Dune",
            "author": "Herbert",
            "status": "reading",
            "review": "great so far",
            "rating": 5,
            "genre": "science_fiction"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    let book_id = body["id"].as_i64().unwrap();

    // Update only the required fields
    let response = client
        .put(format!("{}/library/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "title": "Dune Messiah", "author": "Herbert", "status": "finished" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    // Optional fields untouched, required fields overwritten
    let body: Value = client
        .get(format!("{}/library/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["title"], "Dune Messiah");
    assert_eq!(body["status"], "finished");
    assert_eq!(body["review"], "great so far");
    assert_eq!(body["rating"], 5);
    assert_eq!(body["genre"], "science_fiction");
}

#[tokio::test]
#[ignore]
async fn test_books_are_not_reachable_across_users() {
    let client = Client::new();

    let (owner_token, _) = register_user(&client, "owner").await;
    create_library(&client, &owner_token, "Owner Shelf").await;

    let response = client
        .post(format!("{}/library/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", owner_token))
        .json(&json!({ "title": "Private", "author": "Owner", "status": "unread" }))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let book_id = body["id"].as_i64().unwrap();

    // A different user with their own library gets 404, not the book
    let (other_token, _) = register_user(&client, "other").await;
    create_library(&client, &other_token, "Other Shelf").await;

    let response = client
        .get(format!("{}/library/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", other_token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    // Same for update and delete
    let response = client
        .delete(format!("{}/library/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", other_token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_book_operations_without_library_fail() {
    let client = Client::new();
    let (token, _) = register_user(&client, "nolibrary").await;

    let response = client
        .get(format!("{}/library/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let response = client
        .post(format!("{}/library/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "title": "Orphan", "author": "Nobody", "status": "unread" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_list_filters_apply_one_at_a_time() {
    let client = Client::new();
    let (token, _) = register_user(&client, "filters").await;
    create_library(&client, &token, "Filter Shelf").await;

    for (title, status, genre) in [
        ("A", "finished", "fantasy"),
        ("B", "unread", "fantasy"),
        ("C", "finished", "mystery"),
    ] {
        client
            .post(format!("{}/library/books", BASE_URL))
            .header("Authorization", format!("Bearer {}", token))
            .json(&json!({ "title": title, "author": "X", "status": status, "genre": genre }))
            .send()
            .await
            .unwrap();
    }

    // Status filter
    let body: Value = client
        .get(format!("{}/library/books?status=finished", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Status wins over genre when both are supplied
    let body: Value = client
        .get(format!(
            "{}/library/books?status=unread&genre=mystery",
            BASE_URL
        ))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let books = body.as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "B");
}

#[tokio::test]
#[ignore]
async fn test_delete_user_cascades_to_library_and_books() {
    let client = Client::new();
    let (token, _) = register_user(&client, "cascade").await;
    create_library(&client, &token, "Doomed Shelf").await;

    client
        .post(format!("{}/library/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "title": "Last Book", "author": "X", "status": "unread" }))
        .send()
        .await
        .unwrap();

    let response = client
        .delete(format!("{}/users/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    // The token still verifies, but the user row is gone
    let response = client
        .get(format!("{}/users/me", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/library", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);

    let response = client
        .get(format!("{}/library/books", BASE_URL))
        .header("Authorization", "Bearer not-a-token")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);
}
