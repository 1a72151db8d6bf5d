//! Storage backend contract and SQLite implementation.
//!
//! # Responsibility
//! - Define the raw key-value contract the adapter builds on.
//! - Open file or in-memory SQLite stores with migrations applied.
//!
//! # Invariants
//! - Returned backends have migrations fully applied.
//! - `read` returns exactly the text previously written for a key.

use super::migrations::apply_migrations;
use super::StorageResult;
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Raw key-value contract: string keys mapped to serialized JSON text.
pub trait StorageBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> StorageResult<()>;
    fn delete(&mut self, key: &str) -> StorageResult<()>;
}

/// SQLite-backed key-value store holding one row per storage key.
pub struct SqliteBackend {
    conn: Connection,
}

/// Opens a store file and applies all pending migrations.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StorageResult<SqliteBackend> {
    let started_at = Instant::now();
    let mut conn = Connection::open(path).map_err(|err| {
        error!("event=store_open module=storage status=error mode=file error={err}");
        super::StorageError::from(err)
    })?;
    if let Err(err) = bootstrap(&mut conn) {
        error!(
            "event=store_open module=storage status=error mode=file duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        );
        return Err(err);
    }
    info!(
        "event=store_open module=storage status=ok mode=file duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(SqliteBackend { conn })
}

/// Opens an in-memory store and applies all pending migrations.
pub fn open_store_in_memory() -> StorageResult<SqliteBackend> {
    let mut conn = Connection::open_in_memory().map_err(|err| {
        error!("event=store_open module=storage status=error mode=memory error={err}");
        super::StorageError::from(err)
    })?;
    if let Err(err) = bootstrap(&mut conn) {
        error!("event=store_open module=storage status=error mode=memory error={err}");
        return Err(err);
    }
    info!("event=store_open module=storage status=ok mode=memory");
    Ok(SqliteBackend { conn })
}

fn bootstrap(conn: &mut Connection) -> StorageResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}

impl StorageBackend for SqliteBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}
