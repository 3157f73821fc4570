use log::debug;
use rusqlite::Connection;
use rusqlite::Result;
use std::time::Duration;

/// How long a statement waits on a locked store before failing
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens a connection to the store at `db_path`.
///
/// The schema is not created here; see [`crate::database::schema`].
pub fn open_connection(db_path: &str, busy_timeout: Duration) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.busy_timeout(busy_timeout)?;
    debug!(
        "Opened store at {} (busy timeout {} ms)",
        db_path,
        busy_timeout.as_millis()
    );
    Ok(conn)
}
