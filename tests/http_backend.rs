//! HttpBackend against an in-process fake PhonePro API.

use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use phonepro::api::HttpBackend;
use phonepro::auth::{self, AuthOutcome, AuthState, LoginForm, SignupForm};
use phonepro::catalog::{DetailState, PhoneLookup};
use phonepro::config::ApiConfig;
use phonepro::recommend::{self, RecommendState, RecommendationForm};
use phonepro::{ApiError, Backend, FileStore, Message, Session, SessionStore, View, SESSION_KEY};

#[derive(Clone, Default)]
struct FakeApi {
    phone_paths: Arc<Mutex<Vec<String>>>,
}

async fn signup(Json(body): Json<Value>) -> impl IntoResponse {
    if body["username"] == "taken" {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Username already exists"})),
        )
    } else {
        (
            StatusCode::CREATED,
            Json(json!({"message": "User created successfully! Please login."})),
        )
    }
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    match (body["username"].as_str(), body["password"].as_str()) {
        (Some("admin"), Some("admin")) => (
            StatusCode::OK,
            Json(json!({"message": "Welcome, admin!", "username": "admin"})),
        ),
        (Some("admin"), _) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Incorrect password"})),
        ),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "User does not exist"})),
        ),
    }
}

async fn options() -> Json<Value> {
    Json(json!({
        "brand_names": ["google", "samsung"],
        "processor_brands": ["snapdragon", "tensor"],
        "operating_systems": ["android", "ios"],
        "phone_models": ["Galaxy S21 FE", "Pixel 6a", "Pixel 7"]
    }))
}

async fn phone(
    State(api): State<FakeApi>,
    OriginalUri(uri): OriginalUri,
    Path(model): Path<String>,
) -> impl IntoResponse {
    api.phone_paths.lock().unwrap().push(uri.path().to_string());

    if model == "Galaxy S21 FE" {
        (
            StatusCode::OK,
            Json(json!({"model": "Galaxy S21 FE", "price": 31999, "brand_name": "samsung"})),
        )
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Phone model not found"})),
        )
    }
}

async fn recommend(Json(body): Json<Value>) -> axum::response::Response {
    if body["brand_name"] == "" {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": [{"field": "brand_name", "msg": "required"}]})),
        )
            .into_response();
    }
    if body["brand_name"] == "nokia" {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }

    Json(json!({
        "suggested_model": "Pixel 7",
        "details": {"model": "Pixel 7", "ram_capacity": 8, "5G_or_not": body["5G_or_not"]}
    }))
    .into_response()
}

async fn spawn_api() -> (String, FakeApi) {
    let api = FakeApi::default();
    let router = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/options", get(options))
        .route("/phone/:model", get(phone))
        .route("/recommend", post(recommend))
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), api)
}

fn backend(base_url: &str) -> HttpBackend {
    HttpBackend::new(&ApiConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_login_persists_session() {
    let (url, _api) = spawn_api().await;
    let backend = backend(&url);
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::restore(FileStore::new(dir.path()));

    let form = LoginForm {
        username: "admin".to_string(),
        password: "admin".to_string(),
    };
    let mut state = AuthState::default();
    state.begin();
    let outcome = auth::login(&backend, session.store(), &form).await;
    let username = state.finish(outcome).expect("login should succeed");
    session.authenticated(&username).unwrap();

    assert_eq!(session.view(), View::Application { username: "admin" });
    let restored = Session::restore(FileStore::new(dir.path()));
    assert_eq!(restored.username(), Some("admin"));

    session.logout().unwrap();
    assert_eq!(session.view(), View::Auth);
    assert_eq!(FileStore::new(dir.path()).get(SESSION_KEY).unwrap(), None);
}

#[tokio::test]
async fn test_login_rejection_shows_detail() {
    let (url, _api) = spawn_api().await;
    let backend = backend(&url);
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let form = LoginForm {
        username: "admin".to_string(),
        password: "wrong".to_string(),
    };
    let outcome = auth::login(&backend, &store, &form).await;

    assert_eq!(outcome, AuthOutcome::Failed(Message::error("Incorrect password")));
    assert_eq!(store.get(SESSION_KEY).unwrap(), None);
}

#[tokio::test]
async fn test_signup_outcomes() {
    let (url, _api) = spawn_api().await;
    let backend = backend(&url);

    let mut form = SignupForm {
        username: "newbie".to_string(),
        email: "newbie@example.com".to_string(),
        password: "pw".to_string(),
        confirm: "pw".to_string(),
    };
    assert_eq!(
        auth::signup(&backend, &form).await,
        AuthOutcome::SignedUp(Message::success("User created successfully! Please login."))
    );

    form.username = "taken".to_string();
    assert_eq!(
        auth::signup(&backend, &form).await,
        AuthOutcome::Failed(Message::error("Username already exists"))
    );
}

#[tokio::test]
async fn test_options_catalog() {
    let (url, _api) = spawn_api().await;
    let catalog = backend(&url).options().await.unwrap();

    assert_eq!(catalog.brand_names, vec!["google", "samsung"]);
    assert_eq!(catalog.phone_models.len(), 3);
}

#[tokio::test]
async fn test_phone_model_is_percent_encoded() {
    let (url, api) = spawn_api().await;
    let backend = backend(&url);
    let mut lookup = PhoneLookup::new();

    let state = lookup.fetch(&backend, "Galaxy S21 FE").await;
    let record = match state {
        DetailState::Loaded(record) => record,
        other => panic!("expected details, got {:?}", other),
    };
    let keys: Vec<&str> = record.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["model", "price", "brand_name"]);

    lookup.fetch(&backend, "Galaxy S21 FE").await;
    assert_eq!(
        *api.phone_paths.lock().unwrap(),
        vec!["/phone/Galaxy%20S21%20FE".to_string()]
    );

    assert_eq!(lookup.fetch(&backend, "Nokia 3310").await, DetailState::Failed);
}

#[tokio::test]
async fn test_recommend_success() {
    let (url, _api) = spawn_api().await;
    let backend = backend(&url);
    let catalog = backend.options().await.unwrap();

    let mut form = RecommendationForm::default();
    form.apply_defaults(&catalog);
    let mut state = RecommendState::default();
    state.begin();
    state.finish(recommend::submit(&backend, &form).await);

    assert_eq!(state.message, Some(Message::success("Recommendation generated.")));
    let view = state.view().unwrap();
    assert_eq!(view.suggested_model.as_deref(), Some("Pixel 7"));
    assert_eq!(
        view.details.unwrap(),
        vec![
            ("model".to_string(), "Pixel 7".to_string()),
            ("ram_capacity".to_string(), "8".to_string()),
            ("5G_or_not".to_string(), "true".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_recommend_structured_error() {
    let (url, _api) = spawn_api().await;
    let backend = backend(&url);

    let mut state = RecommendState::default();
    state.begin();
    state.finish(recommend::submit(&backend, &RecommendationForm::default()).await);

    assert_eq!(
        state.message,
        Some(Message::error(
            r#"Invalid input. [{"field":"brand_name","msg":"required"}]"#
        ))
    );
    assert!(state.view().is_none());
}

#[tokio::test]
async fn test_recommend_non_json_error_body() {
    let (url, _api) = spawn_api().await;
    let backend = backend(&url);
    let form = RecommendationForm {
        brand: "nokia".to_string(),
        ..RecommendationForm::default()
    };

    let err = recommend::submit(&backend, &form).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 500,
            body: json!({})
        }
    );
    assert_eq!(err.recommend_message(), "Recommendation failed.");
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = backend(&url).options().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(!err.auth_message("Login failed.", "Login error.").is_empty());
}
