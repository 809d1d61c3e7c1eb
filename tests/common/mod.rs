#![allow(dead_code)]

use std::path::{Path, PathBuf};

use screenings::db::Store;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use tempfile::TempDir;

const SCHEMA: &str = include_str!("../fixtures/screenings.sql");
const SEED: &str = include_str!("../fixtures/seed.sql");
const LOOSE: &str = include_str!("../fixtures/loose.sql");

/// A temporary store file. The directory is removed on drop.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
    pub store: Store,
}

/// Schema plus the sample series, films and screenings.
pub async fn seeded() -> Fixture {
    build(&[SCHEMA, SEED]).await
}

/// Text-typed numeric columns and NULLs where the usual schema has values.
pub async fn loose() -> Fixture {
    build(&[LOOSE]).await
}

/// Schema only, no rows.
pub async fn empty() -> Fixture {
    build(&[SCHEMA]).await
}

async fn build(scripts: &[&str]) -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("screenings.db");

    let db = Database::connect(format!("sqlite:{}?mode=rwc", path.display()))
        .await
        .expect("create fixture store");
    for script in scripts {
        run_sql(&db, script).await;
    }
    db.close().await.expect("close fixture store");

    let store = Store::new(path.to_string_lossy());
    Fixture { _dir: dir, path, store }
}

/// Runs extra statements against the fixture file with a writable connection.
pub async fn execute(path: &Path, sql: &str) {
    let db = Database::connect(format!("sqlite:{}?mode=rw", path.display()))
        .await
        .expect("open fixture store");
    run_sql(&db, sql).await;
    db.close().await.expect("close fixture store");
}

async fn run_sql(db: &DatabaseConnection, sql: &str) {
    for stmt in sql.split(';') {
        let stmt = stmt.trim();
        if stmt.is_empty() {
            continue;
        }
        db.execute(Statement::from_string(db.get_database_backend(), stmt.to_string()))
            .await
            .unwrap_or_else(|e| panic!("fixture statement failed: {e}\n{stmt}"));
    }
}
