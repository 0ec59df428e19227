//! Schema migrations for the task store database.
//!
//! # Responsibility
//! - List the SQL scripts that build the `kv_store` schema, oldest first.
//! - Run every script newer than the database in one transaction.
//!
//! # Invariants
//! - Script versions start at 1 and increase by one.
//! - `PRAGMA user_version` equals the last applied script version.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// Ordered `(version, sql)` pairs.
const SCRIPTS: &[(u32, &str)] = &[(1, include_str!("0001_kv_store.sql"))];

/// Schema version this build writes.
pub fn latest_version() -> u32 {
    SCRIPTS.last().map_or(0, |(version, _)| *version)
}

/// Brings the schema up to `latest_version()`.
///
/// Databases written by a newer build are rejected instead of downgraded.
/// A failing script rolls back every script of this run.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from = current_user_version(conn)?;
    let to = latest_version();

    if from > to {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: to,
        });
    }
    if from == to {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for &(version, sql) in SCRIPTS.iter().filter(|(version, _)| *version > from) {
        tx.execute_batch(sql)
            .and_then(|()| tx.pragma_update(None, "user_version", version))
            .map_err(|source| DbError::Migration { version, source })?;
    }
    tx.commit()?;

    Ok(())
}

/// Reads the schema version stored in `PRAGMA user_version`.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?)
}
