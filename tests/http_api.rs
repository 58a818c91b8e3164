//! HTTP API Tests
//!
//! Full router roundtrips over the seeded catalog: every route's success and
//! failure status codes, response bodies, and the mutation flows.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use filmdb::catalog::MovieStore;
use filmdb::http_server::HttpServer;

// =============================================================================
// Helper Functions
// =============================================================================

fn app() -> Router {
    HttpServer::new(MovieStore::seeded()).router()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn request_with_body(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn valid_movie_body(id: i64) -> Value {
    json!({
        "id": id,
        "title": "Arrival",
        "director": "Denis Villeneuve",
        "releaseDate": "2016-11-11",
        "rating": 7.9,
        "description": "A linguist works with the military to communicate with alien lifeforms.",
        "posterUrl": "https://example.com/arrival.jpg"
    })
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_list_returns_seeded_collection_in_order() {
    let response = app().oneshot(get("/movies")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let movies = body.as_array().unwrap();
    assert_eq!(movies.len(), 12);
    assert_eq!(movies[0]["id"], 1);
    assert_eq!(movies[0]["title"], "Interstellar");
    assert_eq!(movies[11]["id"], 12);
}

// =============================================================================
// Get By Id
// =============================================================================

#[tokio::test]
async fn test_get_by_id_returns_record() {
    let response = app().oneshot(get("/movies/byid/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["title"], "Interstellar");
    assert_eq!(body["director"], "Christopher Nolan");
    assert_eq!(body["rating"], 8.6);
    assert_eq!(body["releaseDate"], "2014-11-07");
}

#[tokio::test]
async fn test_get_by_absent_id_returns_404() {
    let response = app().oneshot(get("/movies/byid/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], 404);
    assert!(body["error"].as_str().unwrap().contains("GET"));
}

#[tokio::test]
async fn test_get_by_non_integer_id_rejected() {
    let response = app().oneshot(get("/movies/byid/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Filter
// =============================================================================

#[tokio::test]
async fn test_filter_matches_title_and_director_case_insensitively() {
    let response = app().oneshot(get("/movies/bystr/nolan")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 6]);
}

#[tokio::test]
async fn test_filter_without_matches_returns_empty_200() {
    let response = app().oneshot(get("/movies/bystr/zzzzzz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, json!([]));
}

// =============================================================================
// Sorted Views
// =============================================================================

#[tokio::test]
async fn test_sorted_by_title_asc_and_desc_are_reverses() {
    let app = app();

    let asc = body_json(
        app.clone()
            .oneshot(get("/movies/sorted/bytitleasc"))
            .await
            .unwrap(),
    )
    .await;
    let desc = body_json(
        app.oneshot(get("/movies/sorted/bytitledesc"))
            .await
            .unwrap(),
    )
    .await;

    let mut asc_titles: Vec<String> = asc
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap().to_string())
        .collect();
    let desc_titles: Vec<String> = desc
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(asc_titles[0], "Fight Club");
    asc_titles.reverse();
    assert_eq!(asc_titles, desc_titles);
}

#[tokio::test]
async fn test_sorted_by_rating_desc_starts_with_maximum() {
    let response = app()
        .oneshot(get("/movies/sorted/byratingdesc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let first = &body.as_array().unwrap()[0];
    assert_eq!(first["rating"], 9.3);
    // 9.3 ties between Inception (id 2) and The Shawshank Redemption (id 3);
    // the stable sort keeps collection order.
    assert_eq!(first["id"], 2);
}

#[tokio::test]
async fn test_sorted_by_rating_asc_starts_with_minimum() {
    let response = app()
        .oneshot(get("/movies/sorted/byratingasc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let first = &body.as_array().unwrap()[0];
    assert_eq!(first["rating"], 8.6);
    assert_eq!(first["id"], 1);
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_returns_201_and_echoes_record() {
    let app = app();
    let body = valid_movie_body(42);

    let response = app
        .clone()
        .oneshot(request_with_body("POST", "/movies", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, body);

    // Created record is visible to subsequent reads
    let fetched = body_json(app.oneshot(get("/movies/byid/42")).await.unwrap()).await;
    assert_eq!(fetched["title"], "Arrival");
}

#[tokio::test]
async fn test_create_with_missing_field_returns_422() {
    let mut body = valid_movie_body(42);
    body.as_object_mut().unwrap().remove("rating");

    let response = app()
        .oneshot(request_with_body("POST", "/movies", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error = body_json(response).await;
    assert_eq!(error["code"], 422);
    assert_eq!(error["details"][0]["field"], "rating");
    assert_eq!(error["details"][0]["actual"], "missing");
}

#[tokio::test]
async fn test_create_with_mistyped_field_returns_422() {
    let mut body = valid_movie_body(42);
    body["id"] = json!("not-an-int");

    let response = app()
        .oneshot(request_with_body("POST", "/movies", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let error = body_json(response).await;
    assert_eq!(error["details"][0]["field"], "id");
    assert_eq!(error["details"][0]["expected"], "int");
    assert_eq!(error["details"][0]["actual"], "string");
}

#[tokio::test]
async fn test_create_with_duplicate_id_is_accepted() {
    let app = app();
    let mut body = valid_movie_body(1);
    body["title"] = json!("Impostor");

    let response = app
        .clone()
        .oneshot(request_with_body("POST", "/movies", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // First match in collection order still wins
    let fetched = body_json(app.oneshot(get("/movies/byid/1")).await.unwrap()).await;
    assert_eq!(fetched["title"], "Interstellar");
}

#[tokio::test]
async fn test_create_with_malformed_json_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/movies")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_replaces_record_and_keeps_length() {
    let app = app();
    let replacement = json!({
        "id": 5,
        "title": "Reservoir Dogs",
        "director": "Quentin Tarantino",
        "releaseDate": "1992-10-23",
        "rating": 8.3,
        "description": "A botched jewelry heist.",
        "posterUrl": "https://example.com/rd.jpg"
    });

    let response = app
        .clone()
        .oneshot(request_with_body("PUT", "/movies/5", &replacement))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, replacement);

    let fetched = body_json(
        app.clone()
            .oneshot(get("/movies/byid/5"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(fetched["title"], "Reservoir Dogs");

    let all = body_json(app.oneshot(get("/movies")).await.unwrap()).await;
    assert_eq!(all.as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn test_update_absent_id_returns_404() {
    let response = app()
        .oneshot(request_with_body("PUT", "/movies/999", &valid_movie_body(999)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("PUT"));
}

#[tokio::test]
async fn test_update_with_invalid_body_returns_422() {
    let response = app()
        .oneshot(request_with_body("PUT", "/movies/1", &json!({"id": 1})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_returns_204_then_get_returns_404() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/movies/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app
        .clone()
        .oneshot(get("/movies/byid/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let all = body_json(app.oneshot(get("/movies")).await.unwrap()).await;
    assert_eq!(all.as_array().unwrap().len(), 11);
}

#[tokio::test]
async fn test_delete_absent_id_returns_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/movies/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("DELETE"));
}
