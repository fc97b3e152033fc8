use crate::models::popup::{ClickEvent, PopupContent};
use crate::server::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;

pub async fn webmap_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.html.clone())
}

pub async fn config_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(state.spec.clone())
}

pub async fn popup_handler(
    State(state): State<Arc<AppState>>,
    Query(click): Query<ClickEvent>,
) -> Result<Json<PopupContent>, (StatusCode, String)> {
    click
        .validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let popup = state.artifact.popup.evaluate(click);
    log::debug!(
        "Popup at {}, {} -> {:?}",
        popup.lat,
        popup.lng,
        popup.region
    );
    Ok(Json(popup))
}
