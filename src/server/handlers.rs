use super::types::{AskRequest, AskResponse, ErrorResponse, HealthResponse, UploadResponse};
use crate::assistant::{QuestionAnswerer, Uploader};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use tracing::{debug, error, info};

const UPLOAD_FIELD: &str = "file";
const UPLOADED: &str = "uploaded";

type HandlerError = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub uploader: Uploader,
    pub answerer: QuestionAnswerer,
}

/// Collaborator failures are reported without their cause.
fn internal_error() -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal Server Error".to_string(),
        }),
    )
}

fn unprocessable(msg: &str) -> HandlerError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
}

pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, HandlerError> {
    loop {
        let field = multipart.next_field().await.map_err(|e| {
            (
                e.status(),
                Json(ErrorResponse {
                    error: e.body_text(),
                }),
            )
        })?;

        let Some(field) = field else {
            return Err(unprocessable("Missing 'file' field"));
        };

        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let Some(filename) = field.file_name().map(str::to_string) else {
            return Err(unprocessable("Field 'file' has no filename"));
        };

        info!("Received upload request for file: {}", filename);

        let data = field.bytes().await.map_err(|e| {
            (
                e.status(),
                Json(ErrorResponse {
                    error: e.body_text(),
                }),
            )
        })?;

        return match state.uploader.upload(&filename, data).await {
            Ok(receipt) => Ok(Json(UploadResponse {
                filename: receipt.filename,
                status: UPLOADED.to_string(),
            })),
            Err(e) => {
                error!("Failed to upload {}: {}", filename, e);
                Err(internal_error())
            }
        };
    }
}

pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, HandlerError> {
    info!("Received question ({} chars)", request.question.chars().count());
    debug!("Question text: {}", request.question);

    match state.answerer.ask(&request.question).await {
        Ok(answer) => {
            info!("Answered question with model {}", state.answerer.model_id());
            Ok(Json(AskResponse {
                question: request.question,
                answer,
            }))
        }
        Err(e) => {
            error!("Failed to answer question: {}", e);
            Err(internal_error())
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
