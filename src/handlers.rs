use crate::chart::build_chart;
use crate::emotes::{normalize_team_name, record_emote, team_history};
use crate::errors::AppError;
use crate::models::{ChartResponse, EmoteRequest, MessageResponse, Team};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::{debug, info};

pub async fn get_team(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<Team>, AppError> {
    let team = state
        .read(|data| team_history(data, &team))
        .await
        .inspect_err(|err| debug!("lookup rejected: {err}"))?;
    Ok(Json(team))
}

pub async fn get_team_chart(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<ChartResponse>, AppError> {
    let team = state
        .read(|data| team_history(data, &team))
        .await
        .inspect_err(|err| debug!("lookup rejected: {err}"))?;
    Ok(Json(build_chart(&team)))
}

pub async fn post_emote(
    State(state): State<AppState>,
    Path(team): Path<String>,
    payload: Result<Json<EmoteRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload.map_err(|err| {
        debug!("emote body rejected: {err}");
        AppError::bad_request(err.body_text())
    })?;

    let entry = state
        .update(|data| {
            record_emote(data, &team, &payload.date, &payload.emote)
                .inspect_err(|err| debug!("emote rejected: {err}"))
        })
        .await?;

    let emote = payload.emote.trim();
    info!(
        team = %normalize_team_name(&team),
        date = %entry.date,
        emote,
        count = entry.count(emote),
        "emote recorded"
    );

    Ok(Json(MessageResponse {
        message: "Entry saved successfully.".to_string(),
    }))
}
