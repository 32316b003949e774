//! Versioned schema for the preference database.
//!
//! # Invariants
//! - Steps are listed in strictly increasing `version` order.
//! - The schema version lives in `PRAGMA user_version` and is bumped inside
//!   the same transaction as the step it records.

use crate::db::{DbError, DbResult};
use rusqlite::{Connection, Transaction};

struct SchemaStep {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    name: "kv_entries",
    sql: include_str!("0001_kv_entries.sql"),
}];

/// Schema versions before and after `apply_migrations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    pub from_version: u32,
    pub to_version: u32,
}

impl MigrationReport {
    pub fn applied_steps(&self) -> u32 {
        self.to_version - self.from_version
    }
}

/// Newest schema version this build can open.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Version currently recorded in the database header.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

/// Brings `conn` up to [`latest_version`] in one transaction.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file was written by a newer build.
/// - `Migration` naming the first step that failed; nothing is committed.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<MigrationReport> {
    let from_version = schema_version(conn)?;
    let latest = latest_version();
    if from_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }

    let pending: Vec<&SchemaStep> = SCHEMA_STEPS
        .iter()
        .filter(|step| step.version > from_version)
        .collect();
    if pending.is_empty() {
        return Ok(MigrationReport {
            from_version,
            to_version: from_version,
        });
    }

    let tx = conn.transaction()?;
    for step in &pending {
        run_step(&tx, step).map_err(|source| DbError::Migration {
            version: step.version,
            name: step.name,
            source,
        })?;
    }
    tx.commit()?;

    Ok(MigrationReport {
        from_version,
        to_version: latest,
    })
}

fn run_step(tx: &Transaction<'_>, step: &SchemaStep) -> rusqlite::Result<()> {
    tx.execute_batch(step.sql)?;
    tx.pragma_update(None, "user_version", step.version)
}

#[cfg(test)]
mod tests {
    use super::{apply_migrations, latest_version, schema_version};
    use rusqlite::Connection;

    #[test]
    fn fresh_database_reaches_latest_and_second_run_is_noop() {
        let mut conn = Connection::open_in_memory().unwrap();
        let first = apply_migrations(&mut conn).unwrap();
        assert_eq!(first.from_version, 0);
        assert_eq!(first.applied_steps(), latest_version());
        assert_eq!(schema_version(&conn).unwrap(), latest_version());

        let second = apply_migrations(&mut conn).unwrap();
        assert_eq!(second.applied_steps(), 0);
    }
}
