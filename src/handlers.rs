use crate::entry_store::{EntryError, EntryStore};
use crate::errors::AppError;
use crate::models::{CreateEntryRequest, DashboardView, EntryId, MOODS, Mood, StatsResponse};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::storage::FileStore;
use crate::ui::render_index;
use crate::view::dashboard;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let entries = state.entries.lock().await;
    let view = current_view(&entries);
    Html(render_index(&view))
}

pub async fn list_moods() -> Json<Vec<Mood>> {
    Json(MOODS.to_vec())
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let entries = state.entries.lock().await;
    Json(build_stats(entries.list()))
}

pub async fn get_entries(State(state): State<AppState>) -> Json<DashboardView> {
    let entries = state.entries.lock().await;
    Json(current_view(&entries))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<DashboardView>), AppError> {
    let selected = selected_mood(payload.mood.as_deref())?;
    let note = payload.note.unwrap_or_default();

    let mut entries = state.entries.lock().await;
    entries.create(selected.as_ref(), &note).await?;

    Ok((StatusCode::CREATED, Json(current_view(&entries))))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<EntryId>,
) -> Result<Json<DashboardView>, AppError> {
    let mut entries = state.entries.lock().await;
    if !entries.remove(id).await? {
        info!(id, "delete requested for unknown entry");
    }
    Ok(Json(current_view(&entries)))
}

pub async fn clear_entries(State(state): State<AppState>) -> Result<Json<DashboardView>, AppError> {
    let mut entries = state.entries.lock().await;
    entries.clear().await?;
    Ok(Json(current_view(&entries)))
}

/// Blank means nothing was picked; anything else must name a catalog mood.
fn selected_mood(code: Option<&str>) -> Result<Option<Mood>, EntryError> {
    match code.map(str::trim) {
        None | Some("") => Ok(None),
        Some(code) => Mood::find(code)
            .map(Some)
            .ok_or_else(|| EntryError::UnknownMood(code.to_string())),
    }
}

fn current_view(entries: &EntryStore<FileStore>) -> DashboardView {
    dashboard(entries.list(), build_stats(entries.list()))
}
