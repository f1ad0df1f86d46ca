mod dto;
mod handlers;
mod models;
mod repository;
mod service;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
};

use std::sync::Arc;

use handlers::rest;
use repository::Repository;

use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use service::NoteService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Repository and service creation
    let repo = Arc::new(tokio::sync::Mutex::new(Repository::new()));
    let service = Arc::new(NoteService::new(repo));

    // Router config
    let app = router(service);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind to address");

    // Starting router
    tracing::info!("Started listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("failed to start server");
}

fn router(service: Arc<NoteService>) -> Router {
    let notes_router = Router::new()
        .route("/api/v1/notes/", post(rest::create_note))
        .route("/api/v1/notes/", get(rest::get_all_notes))
        .route("/api/v1/notes/{id}", get(rest::get_one_note))
        .route("/api/v1/notes/{id}", patch(rest::update_note))
        .route("/api/v1/notes/{id}", delete(rest::delete_note));

    Router::new()
        .route("/", get(root))
        .merge(notes_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", rest::ApiDoc::openapi()))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Response {
    (StatusCode::OK, "Hello world!").into_response()
}
