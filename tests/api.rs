//! End-to-end tests for the movie resource API.
//!
//! Each test constructs a fresh store, spawns the real server on an
//! ephemeral port, and drives it over HTTP with reqwest.

use movie_api::movies::model::{Genre, Movie};
use movie_api::{HttpServer, MovieStore, ServerConfig};
use serde_json::{json, Value};

const SHAWSHANK_ID: &str = "dcdd0fad-a94c-4810-8acc-5f108d3b18c3";
const DARK_KNIGHT_ID: &str = "c8a7d63f-3b04-44d3-b971-d6c267fc5eff";
const ALLOWED_ORIGIN: &str = "http://localhost:8080";

fn seed_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: SHAWSHANK_ID.to_string(),
            title: "The Shawshank Redemption".to_string(),
            year: 1994,
            director: "Frank Darabont".to_string(),
            duration: 142,
            rate: 9.3,
            poster: "https://example.com/shawshank.jpg".to_string(),
            genre: vec![Genre::Drama],
        },
        Movie {
            id: DARK_KNIGHT_ID.to_string(),
            title: "The Dark Knight".to_string(),
            year: 2008,
            director: "Christopher Nolan".to_string(),
            duration: 152,
            rate: 9.0,
            poster: "https://example.com/dark-knight.jpg".to_string(),
            genre: vec![Genre::Action, Genre::Thriller],
        },
    ]
}

/// Spawn the server over the given store; returns the base URL.
async fn spawn_server(store: MovieStore) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let server = HttpServer::new(ServerConfig::default(), store);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{addr}")
}

async fn spawn_seeded() -> String {
    spawn_server(MovieStore::with_movies(seed_movies())).await
}

fn valid_payload() -> Value {
    json!({
        "title": "X",
        "year": 2000,
        "director": "D",
        "duration": 100,
        "rate": 5,
        "poster": "http://a.com/p.jpg",
        "genre": ["Action"]
    })
}

#[tokio::test]
async fn root_greets() {
    let base = spawn_seeded().await;
    let body: Value = reqwest::get(format!("{base}/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "message": "Hola Mundo" }));
}

#[tokio::test]
async fn list_returns_full_collection_in_order() {
    let base = spawn_seeded().await;
    let body: Vec<Movie> = reqwest::get(format!("{base}/movies"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0].id, SHAWSHANK_ID);
    assert_eq!(body[1].id, DARK_KNIGHT_ID);
}

#[tokio::test]
async fn genre_filter_is_case_insensitive() {
    let base = spawn_seeded().await;
    let body: Vec<Movie> = reqwest::get(format!("{base}/movies?genre=thriller"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].title, "The Dark Knight");

    let none: Vec<Movie> = reqwest::get(format!("{base}/movies?genre=thrill"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn id_query_hit_returns_the_record() {
    let base = spawn_seeded().await;
    let body: Movie = reqwest::get(format!("{base}/movies?id={SHAWSHANK_ID}"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.title, "The Shawshank Redemption");
}

#[tokio::test]
async fn id_query_miss_is_a_200_null() {
    let base = spawn_seeded().await;
    let response = reqwest::get(format!("{base}/movies?id=abc")).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn path_lookup_matches_id_and_title_exactly() {
    let base = spawn_seeded().await;
    let hit: Movie = reqwest::get(format!("{base}/movies/{DARK_KNIGHT_ID}/The Dark Knight"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(hit.id, DARK_KNIGHT_ID);

    // Title is case-sensitive on this route.
    let miss = reqwest::get(format!("{base}/movies/{DARK_KNIGHT_ID}/the dark knight"))
        .await
        .unwrap();
    assert_eq!(miss.status(), 404);
}

#[tokio::test]
async fn path_lookup_miss_is_a_404_with_message() {
    let base = spawn_seeded().await;
    let response = reqwest::get(format!("{base}/movies/abc/Unknown")).await.unwrap();
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Movie not found" }));
}

#[tokio::test]
async fn post_valid_payload_creates_the_record() {
    let base = spawn_seeded().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/movies"))
        .json(&valid_payload())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.unwrap();
    let id = created["id"].as_str().expect("generated id");
    assert!(!id.is_empty());
    assert_ne!(id, SHAWSHANK_ID);
    assert_ne!(id, DARK_KNIGHT_ID);
    assert_eq!(created["title"], "X");
    assert_eq!(created["year"], 2000);
    assert_eq!(created["director"], "D");
    assert_eq!(created["duration"], 100);
    assert_eq!(created["rate"], 5.0);
    assert_eq!(created["poster"], "http://a.com/p.jpg");
    assert_eq!(created["genre"], json!(["Action"]));

    let all: Vec<Movie> = reqwest::get(format!("{base}/movies"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[2].id, id);
}

#[tokio::test]
async fn post_invalid_payload_is_rejected_without_appending() {
    let base = spawn_seeded().await;
    let client = reqwest::Client::new();

    let mut payload = valid_payload();
    payload["year"] = json!(1800);
    let response = client
        .post(format!("{base}/movies"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    let errors = body["error"].as_array().expect("error list");
    assert!(errors.iter().any(|e| e["field"] == "year"));

    // Validation failure must short-circuit; nothing was appended.
    let all: Vec<Movie> = reqwest::get(format!("{base}/movies"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn post_undecodable_body_is_a_client_error() {
    let base = spawn_seeded().await;
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base}/movies"))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn delete_removes_the_record() {
    let base = spawn_seeded().await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{base}/movies/{SHAWSHANK_ID}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Movie deleted" }));

    let all: Vec<Movie> = reqwest::get(format!("{base}/movies"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, DARK_KNIGHT_ID);
}

#[tokio::test]
async fn delete_unknown_id_is_a_404_no_op() {
    let base = spawn_seeded().await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{base}/movies/abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let all: Vec<Movie> = reqwest::get(format!("{base}/movies"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn patch_updates_only_the_given_field() {
    let base = spawn_seeded().await;
    let client = reqwest::Client::new();

    let response = client
        .patch(format!("{base}/movies/{SHAWSHANK_ID}"))
        .json(&json!({ "year": 2020 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let updated: Movie = response.json().await.unwrap();
    assert_eq!(updated.id, SHAWSHANK_ID);
    assert_eq!(updated.year, 2020);
    assert_eq!(updated.title, "The Shawshank Redemption");
    assert_eq!(updated.duration, 142);
}

#[tokio::test]
async fn patch_invalid_payload_is_a_400() {
    let base = spawn_seeded().await;
    let client = reqwest::Client::new();

    let response = client
        .patch(format!("{base}/movies/{SHAWSHANK_ID}"))
        .json(&json!({ "rate": 99 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_array().is_some());
}

#[tokio::test]
async fn patch_unknown_id_is_a_404() {
    let base = spawn_seeded().await;
    let client = reqwest::Client::new();

    let response = client
        .patch(format!("{base}/movies/abc"))
        .json(&json!({ "year": 2020 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn preflight_advertises_methods_for_allowed_origin() {
    let base = spawn_seeded().await;
    let client = reqwest::Client::new();

    let response = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{base}/movies/{SHAWSHANK_ID}"),
        )
        .header("Origin", ALLOWED_ORIGIN)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-methods")
            .and_then(|v| v.to_str().ok()),
        Some("GET, POST, PATCH, DELETE")
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(ALLOWED_ORIGIN)
    );
}

#[tokio::test]
async fn preflight_withholds_permissions_from_unknown_origin() {
    let base = spawn_seeded().await;
    let client = reqwest::Client::new();

    let response = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{base}/movies/{SHAWSHANK_ID}"),
        )
        .header("Origin", "http://evil.example")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.headers().get("access-control-allow-methods").is_none());
    assert!(response.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn preflight_without_origin_still_advertises_methods() {
    let base = spawn_seeded().await;
    let client = reqwest::Client::new();

    let response = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{base}/movies/{SHAWSHANK_ID}"),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.headers().get("access-control-allow-methods").is_some());
    assert!(response.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn allowed_origin_is_echoed_on_reads() {
    let base = spawn_seeded().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/movies"))
        .header("Origin", ALLOWED_ORIGIN)
        .send()
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(ALLOWED_ORIGIN)
    );

    let blocked = client
        .get(format!("{base}/movies"))
        .header("Origin", "http://evil.example")
        .send()
        .await
        .unwrap();
    assert!(blocked.headers().get("access-control-allow-origin").is_none());
}
