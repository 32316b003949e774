//! Connection setup for the preference database.

use super::migrations::{apply_migrations, MigrationReport};
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (creating if needed) the preference file at `path`, migrated.
///
/// Logs one `store_open` start event and one ok/error event with timing.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    connect_and_migrate("file", || Connection::open(path))
}

/// Opens a migrated in-memory preference database.
pub fn open_db_in_memory() -> DbResult<Connection> {
    connect_and_migrate("memory", Connection::open_in_memory)
}

fn connect_and_migrate(
    mode: &'static str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=store_open module=db status=start mode={mode}");

    let outcome = connect()
        .map_err(Into::into)
        .and_then(|mut conn| prepare(&mut conn).map(|report| (conn, report)));
    let elapsed_ms = started_at.elapsed().as_millis();

    match outcome {
        Ok((conn, report)) => {
            info!(
                "event=store_open module=db status=ok mode={mode} duration_ms={elapsed_ms} schema_from={} schema_to={}",
                report.from_version, report.to_version
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=store_open module=db status=error mode={mode} duration_ms={elapsed_ms} error={err}"
            );
            Err(err)
        }
    }
}

fn prepare(conn: &mut Connection) -> DbResult<MigrationReport> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn)
}
