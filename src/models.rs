use jiff::{Timestamp, civil::Date, tz::TimeZone};
use sea_orm::{FromQueryResult, JsonValue};
use serde::Serialize;
use serde_json::Map;
use tracing::warn;

// The store's schema is not ours: every non-key column may be NULL, text
// columns are read through `CAST(.. AS TEXT)` and numeric ones through
// `CAST(.. AS INTEGER)` so a differently-typed column still decodes.

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct SeriesSummary {
    pub series_id: i64,
    pub series_semester: Option<String>,
    pub series_year: Option<i64>,
    pub series_display: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct SeriesInfo {
    pub series_id: i64,
    /// Semester label followed by the year as stored, e.g. `Spring2024`.
    /// Absent when either part is NULL.
    pub semester: Option<String>,
    pub series_semester: Option<String>,
    pub series_year: Option<i64>,
    pub series_title: Option<String>,
    pub series_brief: Option<String>,
    pub series_poster: Option<String>,
    pub series_poster_url: Option<String>,
    pub series_display: Option<bool>,
    pub color1: Option<String>,
    pub color2: Option<String>,
    pub color3: Option<String>,
}

/// Raw row of the schedules/films join.
#[derive(Debug, FromQueryResult)]
pub(crate) struct ScheduleRow {
    pub film_id: i64,
    pub film_title: Option<String>,
    pub film_director: Option<String>,
    pub film_year: Option<i64>,
    pub film_runtime: Option<i64>,
    pub wiki: Option<String>,
    pub schedule: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub film_id: i64,
    pub film_title: Option<String>,
    pub film_director: Option<String>,
    pub film_year: Option<i64>,
    pub film_runtime: Option<i64>,
    pub wiki: Option<String>,
    pub schedule: Option<String>,
    pub notes: Option<String>,
    /// Two-digit day of month taken from `schedule`.
    pub day: Option<String>,
    /// English month name taken from `schedule`.
    pub month: Option<String>,
}

impl From<ScheduleRow> for ScheduleEntry {
    fn from(row: ScheduleRow) -> Self {
        let date = row.schedule.as_deref().and_then(screening_date);
        if date.is_none() {
            warn!(film_id = row.film_id, schedule = ?row.schedule, "unparseable screening timestamp");
        }

        Self {
            day: date.map(|d| d.strftime("%d").to_string()),
            month: date.map(|d| d.strftime("%B").to_string()),
            film_id: row.film_id,
            film_title: row.film_title,
            film_director: row.film_director,
            film_year: row.film_year,
            film_runtime: row.film_runtime,
            wiki: row.wiki,
            schedule: row.schedule,
            notes: row.notes,
        }
    }
}

/// Calendar date of a stored screening timestamp.
///
/// Accepts the forms SQLite's date functions understand: `YYYY-MM-DD`,
/// optionally followed by a time separated by `T` or a space. A timestamp
/// carrying an offset (`Z` or `+HH:MM`) is converted to UTC first.
pub fn screening_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts.to_zoned(TimeZone::UTC).date());
    }
    if let Ok(dt) = raw.parse::<jiff::civil::DateTime>() {
        return Some(dt.date());
    }
    raw.parse::<Date>().ok()
}

/// A film row with every column the store holds for it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Film {
    columns: Map<String, JsonValue>,
}

impl Film {
    pub(crate) fn from_json(value: JsonValue) -> Option<Self> {
        match value {
            JsonValue::Object(columns) => Some(Self { columns }),
            _ => None,
        }
    }

    pub fn column(&self, name: &str) -> Option<&JsonValue> {
        self.columns.get(name)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn id(&self) -> Option<i64> {
        self.column("id").and_then(JsonValue::as_i64)
    }

    pub fn title(&self) -> Option<&str> {
        self.column("film_title").and_then(JsonValue::as_str)
    }

    pub fn director(&self) -> Option<&str> {
        self.column("film_director").and_then(JsonValue::as_str)
    }

    pub fn year(&self) -> Option<i64> {
        self.column("film_year").and_then(JsonValue::as_i64)
    }

    pub fn runtime(&self) -> Option<i64> {
        self.column("film_runtime").and_then(JsonValue::as_i64)
    }

    pub fn wiki(&self) -> Option<&str> {
        self.column("wiki").and_then(JsonValue::as_str)
    }
}
