use super::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordScoreRequest {
    pub correct: bool,

    /// Response time in milliseconds, if measured
    pub response_time: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundFile {
    /// File name without extension
    pub name: String,

    /// Path relative to the assets directory
    pub file: String,

    /// Name up to the first digit ("dog2.wav" -> "dog")
    pub animal: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/scores
pub async fn get_scores(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.scores.snapshot().await)
}

/// POST /api/scores/:game
/// Record one answer for a game
pub async fn record_score(
    State(state): State<AppState>,
    Path(game): Path<String>,
    Json(req): Json<RecordScoreRequest>,
) -> impl IntoResponse {
    match state
        .scores
        .record(&game, req.correct, req.response_time)
        .await
    {
        Some(score) => (StatusCode::OK, Json(score)).into_response(),
        None => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid game".to_string(),
            }),
        )
            .into_response(),
    }
}

/// POST /api/reset
pub async fn reset_scores(State(state): State<AppState>) -> impl IntoResponse {
    state.scores.reset().await;
    info!("Scores reset");

    Json(MessageResponse {
        message: "Scores reset".to_string(),
    })
}

/// GET /api/sounds
/// List `.wav` files in `<assets>/sounds`
pub async fn list_sounds(State(state): State<AppState>) -> impl IntoResponse {
    let sounds_dir = state.assets_path.join("sounds");

    let mut entries = match tokio::fs::read_dir(&sounds_dir).await {
        Ok(entries) => entries,
        Err(e) => {
            error!("Failed to read {}: {}", sounds_dir.display(), e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to read sounds directory: {}", e),
                }),
            )
                .into_response();
        }
    };

    let mut sounds = Vec::new();
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => {
                let file_name = entry.file_name().to_string_lossy().into_owned();
                if let Some(sound) = sound_file(&file_name) {
                    sounds.push(sound);
                }
            }
            Ok(None) => break,
            Err(e) => {
                error!("Failed to list {}: {}", sounds_dir.display(), e);
                break;
            }
        }
    }
    sounds.sort_by(|a, b| a.file.cmp(&b.file));

    (StatusCode::OK, Json(sounds)).into_response()
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

fn sound_file(file_name: &str) -> Option<SoundFile> {
    let name = file_name.strip_suffix(".wav")?;
    let animal = name
        .split(|c: char| c.is_ascii_digit())
        .next()
        .filter(|prefix| !prefix.is_empty())
        .unwrap_or(name);

    Some(SoundFile {
        name: name.to_string(),
        file: format!("sounds/{}", file_name),
        animal: animal.to_string(),
    })
}
