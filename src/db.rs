use futures::future::BoxFuture;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to open store {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: DbErr,
    },
    #[error("{op} failed: {source}")]
    Query {
        op: &'static str,
        #[source]
        source: DbErr,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Handle naming the backing SQLite store.
///
/// Holds no connection. Every lookup opens its own connection through
/// [`Store::scoped`] and releases it before returning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Store {
    url: String,
}

impl Store {
    /// Accepts either a `sqlite:` URL, used as-is, or a filesystem path,
    /// which is opened read-only.
    pub fn new(handle: impl AsRef<str>) -> Self {
        let handle = handle.as_ref();
        let url = if handle.starts_with("sqlite:") {
            handle.to_string()
        } else {
            format!("sqlite:{handle}?mode=ro")
        };
        Self { url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn connect(&self) -> StoreResult<DatabaseConnection> {
        let mut opts = ConnectOptions::new(self.url.clone());
        opts.max_connections(1).min_connections(0).sqlx_logging(false);

        Database::connect(opts)
            .await
            .map_err(|source| StoreError::Connect { url: self.url.clone(), source })
    }

    /// Runs `f` against a fresh connection and closes it afterwards,
    /// whether `f` succeeded or not.
    pub async fn scoped<T, F>(&self, op: &'static str, f: F) -> StoreResult<T>
    where
        F: for<'c> FnOnce(&'c DatabaseConnection) -> BoxFuture<'c, Result<T, DbErr>> + Send,
        T: Send,
    {
        let db = self.connect().await?;
        debug!(op, "connection opened");

        let result = f(&db).await;

        if let Err(err) = db.close().await {
            warn!(op, error = %err, "failed to close connection");
        }

        result.map_err(|source| StoreError::Query { op, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_open_read_only() {
        let store = Store::new("/var/lib/screenings/site.db");
        assert_eq!(store.url(), "sqlite:/var/lib/screenings/site.db?mode=ro");
    }

    #[test]
    fn urls_pass_through() {
        let store = Store::new("sqlite://site.db?mode=rwc");
        assert_eq!(store.url(), "sqlite://site.db?mode=rwc");
    }

    #[tokio::test]
    async fn missing_file_is_a_connect_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("absent.db").to_string_lossy());

        let err = store
            .scoped("probe", |db| Box::pin(async move { db.ping().await }))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Connect { .. }), "unexpected error: {err}");
    }
}
