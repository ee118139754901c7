use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::Router;
use cookbook_core::{ListView, Recipe, RecipeApi, RecipeClient, RecipeCreate, RecipeUpdate, Route};
use cookbook_server::{app, seed, store::RecipeStore, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app(state: AppState) -> Router {
    app(state, vec![HeaderValue::from_static("http://localhost:5173")])
}

fn pizza() -> RecipeCreate {
    RecipeCreate {
        title: "Pizza".to_string(),
        description: "Thin crust".to_string(),
        ingredients: vec!["dough".to_string(), "tomato".to_string()],
        instructions: "Bake it.".to_string(),
        cooking_time: 20,
        servings: 2,
    }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_root_and_health() {
    let state: AppState = Arc::new(RecipeStore::new());

    let (status, body) = send(test_app(state.clone()), empty_request("GET", "/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["docs"], "/swagger-ui");

    let (status, body) = send(test_app(state), empty_request("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_list_returns_seeded_recipes() {
    let state: AppState = Arc::new(RecipeStore::new());
    seed::seed(&state).await;

    let (status, body) = send(test_app(state), empty_request("GET", "/api/recipes")).await;
    assert_eq!(status, StatusCode::OK);
    let recipes: Vec<Recipe> = serde_json::from_value(body).unwrap();
    assert_eq!(recipes.len(), 3);
    assert_eq!(recipes[0].title, "Classic Margherita Pizza");
}

#[tokio::test]
async fn test_create_returns_201_with_server_fields() {
    let state: AppState = Arc::new(RecipeStore::new());

    let (status, body) = send(
        test_app(state.clone()),
        json_request("POST", "/api/recipes", serde_json::to_value(pizza()).unwrap()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let recipe: Recipe = serde_json::from_value(body).unwrap();
    assert!(!recipe.id.is_empty());
    assert_eq!(recipe.title, "Pizza");
    assert_eq!(recipe.created_at, recipe.updated_at);
    assert_eq!(state.len().await, 1);
}

#[tokio::test]
async fn test_create_rejects_invalid_body() {
    let state: AppState = Arc::new(RecipeStore::new());
    let mut body = serde_json::to_value(pizza()).unwrap();
    body["ingredients"] = json!([]);

    let (status, body) = send(
        test_app(state.clone()),
        json_request("POST", "/api/recipes", body),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Please add at least one ingredient");
    assert!(state.is_empty().await);
}

#[tokio::test]
async fn test_get_unknown_is_404_with_message() {
    let state: AppState = Arc::new(RecipeStore::new());

    let (status, body) = send(test_app(state), empty_request("GET", "/api/recipes/missing")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Recipe with ID 'missing' not found");
}

#[tokio::test]
async fn test_update_merges_fields() {
    let state: AppState = Arc::new(RecipeStore::new());
    let created = state.create(pizza()).await;

    let (status, body) = send(
        test_app(state),
        json_request(
            "PUT",
            &format!("/api/recipes/{}", created.id),
            json!({"title": "Better Pizza"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated: Recipe = serde_json::from_value(body).unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Better Pizza");
    assert_eq!(updated.description, "Thin crust");
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_unknown_and_invalid() {
    let state: AppState = Arc::new(RecipeStore::new());
    let created = state.create(pizza()).await;

    let (status, _) = send(
        test_app(state.clone()),
        json_request("PUT", "/api/recipes/missing", json!({"title": "X"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        test_app(state.clone()),
        json_request(
            "PUT",
            &format!("/api/recipes/{}", created.id),
            json!({"servings": 0}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(state.get(&created.id).await.unwrap().servings, 2);
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let state: AppState = Arc::new(RecipeStore::new());
    let created = state.create(pizza()).await;
    let uri = format!("/api/recipes/{}", created.id);

    let (status, body) = send(test_app(state.clone()), empty_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(test_app(state.clone()), empty_request("GET", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(test_app(state), empty_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let state: AppState = Arc::new(RecipeStore::new());
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/recipes")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = test_app(state).oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:5173"
    );
}

/// Serve on an ephemeral port and return a client pointed at it.
async fn spawn_server(state: AppState) -> RecipeClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, test_app(state)).await.unwrap();
    });
    RecipeClient::new(format!("http://{}/api", addr)).unwrap()
}

#[tokio::test]
async fn test_client_round_trip_against_server() {
    let client = spawn_server(Arc::new(RecipeStore::new())).await;

    let created = client.create(&pizza()).await.unwrap();
    assert_eq!(client.get(&created.id).await.unwrap(), created);

    let updated = client
        .update(
            &created.id,
            &RecipeUpdate {
                servings: Some(6),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.servings, 6);
    assert_eq!(updated.title, "Pizza");

    client.delete(&created.id).await.unwrap();
    let remaining = client.list().await.unwrap();
    assert!(remaining.iter().all(|r| r.id != created.id));
    assert!(matches!(
        client.get(&created.id).await,
        Err(cookbook_core::ApiError::NotFound)
    ));
}

#[tokio::test]
async fn test_list_view_against_server() {
    let client = spawn_server(Arc::new(RecipeStore::new())).await;

    let mut view = ListView::new();
    view.load(&client).await;
    assert!(view.is_empty());
    assert!(view.render().contains("No recipes found"));
    assert_eq!(view.add_recipe(), Route::New);

    let created = client.create(&pizza()).await.unwrap();
    view.retry(&client).await;
    assert_eq!(view.recipes().len(), 1);

    let intent = view.cards()[0].delete();
    let next = view.handle(intent, &client, &mut |_: &str| true).await;
    assert_eq!(next, None);
    assert!(view.is_empty());
    assert!(client.list().await.unwrap().is_empty());
    assert!(client.get(&created.id).await.is_err());
}
