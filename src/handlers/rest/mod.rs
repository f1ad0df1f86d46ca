use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{
    dto::{CreateNoteRequest, NoteResponse, UpdateNoteRequest},
    repository::RepositoryError,
    service::NoteService,
};

#[derive(OpenApi)]
#[openapi(
    paths(create_note, get_all_notes, get_one_note, update_note, delete_note),
    components(schemas(NoteResponse, CreateNoteRequest, UpdateNoteRequest)),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    post,
    path = "/api/v1/notes/",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = NoteResponse),
        (status = 400, description = "Invalid request body or empty fields")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    Json(payload): Json<CreateNoteRequest>,
) -> Response {
    if payload.title.is_empty() || payload.content.is_empty() {
        return (StatusCode::BAD_REQUEST, "Title and content are required").into_response();
    }

    let note = service.create_note(payload).await;
    (StatusCode::CREATED, Json(note)).into_response()
}

#[utoipa::path(
    get,
    path = "/api/v1/notes/",
    responses(
        (status = 200, description = "List of all notes", body = Vec<NoteResponse>)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(State(service): State<Arc<NoteService>>) -> Response {
    let notes = service.get_all_notes().await;
    (StatusCode::OK, Json(notes)).into_response()
}

#[utoipa::path(
    get,
    path = "/api/v1/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 400, description = "Invalid note ID"),
        (status = 404, description = "Note not found")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_one_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
) -> Response {
    match service.get_one_note(id).await {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(RepositoryError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "Note not found").into_response()
        }
    }
}

#[utoipa::path(
    patch,
    path = "/api/v1/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated successfully", body = NoteResponse),
        (status = 400, description = "Invalid note ID or request body"),
        (status = 404, description = "Note not found")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateNoteRequest>,
) -> Response {
    match service.update_note(id, payload).await {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(RepositoryError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "Note not found").into_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 204, description = "Note deleted successfully"),
        (status = 400, description = "Invalid note ID"),
        (status = 404, description = "Note not found")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(State(service): State<Arc<NoteService>>, Path(id): Path<i64>) -> Response {
    match service.delete_note(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(RepositoryError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, "Note not found").into_response()
        }
    }
}
