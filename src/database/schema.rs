use crate::error::StatsError;
use log::{debug, error};
use rusqlite::Connection;

// Embed migrations from the migrations directory
refinery::embed_migrations!("migrations");

/// Creates or upgrades the `Students` table.
///
/// Owned by whoever writes student records; the statistics service only reads.
pub fn apply_migrations(conn: &mut Connection) -> Result<(), StatsError> {
    match migrations::runner().run(conn) {
        Ok(report) => {
            debug!(
                "Applied {} migration(s)",
                report.applied_migrations().len()
            );
            Ok(())
        }
        Err(e) => {
            error!("Refinery migration error: {}", e);
            Err(StatsError::Migration(e.to_string()))
        }
    }
}
