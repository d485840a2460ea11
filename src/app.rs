use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/emotes/:team",
            get(handlers::get_team).post(handlers::post_emote),
        )
        .route("/emotes/:team/chart", get(handlers::get_team_chart))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
