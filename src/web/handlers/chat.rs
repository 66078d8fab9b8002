//! `POST /chat`

use crate::models::{ChatReply, ChatRequest, ImagePayload};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

/// Always answers 200; failures travel as `"Error: ..."` in `response`.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatReply> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("Rejected /chat body: {}", rejection.body_text());
            return Json(ChatReply {
                response: format!("Error: Invalid request body: {}", rejection.body_text()),
            });
        }
    };

    let image = request
        .image_path
        .as_deref()
        .and_then(ImagePayload::from_base64);

    tracing::info!(
        "Chat request (text: {}, image: {})",
        request.input.as_deref().is_some_and(|t| !t.trim().is_empty()),
        image.is_some()
    );

    let response = state
        .pipeline
        .respond(request.input.as_deref(), image.as_ref())
        .await;

    Json(ChatReply { response })
}
