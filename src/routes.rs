use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppResult, OrNotFound},
    models::{Film, ScheduleEntry, SeriesInfo, SeriesSummary},
    queries,
};

pub async fn health() -> &'static str {
    "ok"
}

pub async fn list_series(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<SeriesSummary>>> {
    Ok(Json(queries::series_summaries(&state.store).await?))
}

pub async fn current_series(State(state): State<Arc<AppState>>) -> AppResult<Json<SeriesInfo>> {
    let info = queries::current_series(&state.store).await?.or_not_found("current series")?;
    Ok(Json(info))
}

pub async fn current_series_id(State(state): State<Arc<AppState>>) -> AppResult<Json<i64>> {
    let id = queries::current_series_id(&state.store).await?.or_not_found("current series")?;
    Ok(Json(id))
}

pub async fn series(
    State(state): State<Arc<AppState>>,
    Path(series_id): Path<i64>,
) -> AppResult<Json<SeriesInfo>> {
    let info = queries::series_info(&state.store, series_id)
        .await?
        .or_not_found(format!("series {series_id}"))?;
    Ok(Json(info))
}

pub async fn schedule(
    State(state): State<Arc<AppState>>,
    Path(series_id): Path<i64>,
) -> AppResult<Json<Vec<ScheduleEntry>>> {
    Ok(Json(queries::series_schedule(&state.store, series_id).await?))
}

pub async fn film(
    State(state): State<Arc<AppState>>,
    Path(film_id): Path<i64>,
) -> AppResult<Json<Film>> {
    let film =
        queries::film_info(&state.store, film_id).await?.or_not_found(format!("film {film_id}"))?;
    Ok(Json(film))
}
