//! Read-only lookups over the screenings store.
//!
//! Every function opens its own connection through [`Store::scoped`], runs a
//! single statement with bound parameters, and releases the connection
//! before returning. Lookups by id that match nothing return `None` (or an
//! empty list) rather than an error.

use sea_orm::{
    ColumnTrait, DbBackend, EntityTrait, FromQueryResult, JsonValue, QuerySelect, Statement,
};
use tracing::debug;

use crate::{
    db::{Store, StoreResult},
    entities::series,
    models::{Film, ScheduleEntry, ScheduleRow, SeriesInfo, SeriesSummary},
};

const SERIES_INFO_SQL: &str = "\
SELECT s.series_id, \
       s.series_semester || s.series_year AS semester, \
       CAST(s.series_semester AS TEXT) AS series_semester, \
       CAST(s.series_year AS INTEGER) AS series_year, \
       CAST(s.series_title AS TEXT) AS series_title, \
       CAST(s.series_brief AS TEXT) AS series_brief, \
       CAST(s.series_poster AS TEXT) AS series_poster, \
       CAST(s.series_poster_url AS TEXT) AS series_poster_url, \
       CAST(s.series_display AS INTEGER) AS series_display, \
       CAST(c.color1 AS TEXT) AS color1, \
       CAST(c.color2 AS TEXT) AS color2, \
       CAST(c.color3 AS TEXT) AS color3 \
FROM series AS s \
JOIN colors AS c ON c.series_id = s.series_id \
WHERE s.series_id = ?";

const SERIES_SCHEDULE_SQL: &str = "\
SELECT f.id AS film_id, \
       CAST(f.film_title AS TEXT) AS film_title, \
       CAST(f.film_director AS TEXT) AS film_director, \
       CAST(f.film_year AS INTEGER) AS film_year, \
       CAST(f.film_runtime AS INTEGER) AS film_runtime, \
       CAST(f.wiki AS TEXT) AS wiki, \
       CAST(sc.schedule AS TEXT) AS schedule, \
       CAST(sc.notes AS TEXT) AS notes \
FROM series AS se \
JOIN schedules AS sc ON sc.series_id = se.series_id \
JOIN films AS f ON f.id = sc.film_id \
WHERE se.series_id = ? \
ORDER BY sc.schedule";

const SERIES_SUMMARIES_SQL: &str = "\
SELECT DISTINCT series_id, \
       CAST(series_semester AS TEXT) AS series_semester, \
       CAST(series_year AS INTEGER) AS series_year, \
       CAST(series_display AS INTEGER) AS series_display \
FROM series \
ORDER BY series_id";

const FILM_INFO_SQL: &str = "SELECT * FROM films WHERE id = ?";

/// Identifier of the current series, i.e. the greatest `series_id`.
pub async fn current_series_id(store: &Store) -> StoreResult<Option<i64>> {
    let id = store
        .scoped("current_series_id", |db| {
            Box::pin(async move {
                series::Entity::find()
                    .select_only()
                    .column_as(series::Column::SeriesId.max(), "current")
                    .into_tuple::<Option<i64>>()
                    .one(db)
                    .await
            })
        })
        .await?
        .flatten();

    debug!(current = ?id, "resolved current series");
    Ok(id)
}

pub async fn series_info(store: &Store, series_id: i64) -> StoreResult<Option<SeriesInfo>> {
    let stmt =
        Statement::from_sql_and_values(DbBackend::Sqlite, SERIES_INFO_SQL, [series_id.into()]);

    let row = store
        .scoped("series_info", move |db| {
            Box::pin(async move { SeriesInfo::find_by_statement(stmt).one(db).await })
        })
        .await?;

    debug!(series_id, found = row.is_some(), "fetched series info");
    Ok(row)
}

/// Screenings of a series in chronological order, each joined with its film.
pub async fn series_schedule(store: &Store, series_id: i64) -> StoreResult<Vec<ScheduleEntry>> {
    let stmt =
        Statement::from_sql_and_values(DbBackend::Sqlite, SERIES_SCHEDULE_SQL, [series_id.into()]);

    let rows = store
        .scoped("series_schedule", move |db| {
            Box::pin(async move { ScheduleRow::find_by_statement(stmt).all(db).await })
        })
        .await?;

    debug!(series_id, entries = rows.len(), "fetched series schedule");
    Ok(rows.into_iter().map(ScheduleEntry::from).collect())
}

/// Every series, ordered by id.
pub async fn series_summaries(store: &Store) -> StoreResult<Vec<SeriesSummary>> {
    let stmt = Statement::from_string(DbBackend::Sqlite, SERIES_SUMMARIES_SQL);

    let summaries = store
        .scoped("series_summaries", move |db| {
            Box::pin(async move { SeriesSummary::find_by_statement(stmt).all(db).await })
        })
        .await?;

    debug!(count = summaries.len(), "fetched series summaries");
    Ok(summaries)
}

pub async fn film_info(store: &Store, film_id: i64) -> StoreResult<Option<Film>> {
    let stmt = Statement::from_sql_and_values(DbBackend::Sqlite, FILM_INFO_SQL, [film_id.into()]);

    let row = store
        .scoped("film_info", move |db| {
            Box::pin(async move { JsonValue::find_by_statement(stmt).one(db).await })
        })
        .await?;

    debug!(film_id, found = row.is_some(), "fetched film info");
    Ok(row.and_then(Film::from_json))
}

/// Info for the current series, `None` when the store holds no series.
pub async fn current_series(store: &Store) -> StoreResult<Option<SeriesInfo>> {
    match current_series_id(store).await? {
        Some(id) => series_info(store, id).await,
        None => Ok(None),
    }
}
