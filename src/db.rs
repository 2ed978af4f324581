use crate::LabseedError;
use crate::schema::MIGRATIONS;
use rusqlite::Connection;
use std::path::Path;

/// Apply standard PRAGMAs (before migrations).
fn apply_pragmas(conn: &Connection, readonly: bool) -> Result<(), LabseedError> {
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "busy_timeout", 5000)?;
    conn.pragma_update(None, "temp_store", "MEMORY")?;
    if !readonly {
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
    }
    Ok(())
}

/// Open (creating if needed) the demo database and bring it to the latest schema.
pub fn open_db(db_path: &Path) -> Result<Connection, LabseedError> {
    if let Some(parent) = db_path.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut conn = Connection::open(db_path)?;
    apply_pragmas(&conn, false)?;
    MIGRATIONS.to_latest(&mut conn)?;
    Ok(conn)
}

pub fn open_db_readonly(db_path: &Path) -> Result<Connection, LabseedError> {
    if !db_path.exists() {
        return Err(LabseedError::Config(format!(
            "database not found: {}",
            db_path.display()
        )));
    }

    let conn = Connection::open_with_flags(
        db_path,
        rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    apply_pragmas(&conn, true)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_parent_dir_and_schema() {
        let dir = tempfile::TempDir::new().unwrap();
        let db_path = dir.path().join("nested").join("ohm_sweet_ohm.db");

        let conn = open_db(&db_path).unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='products'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
        assert!(db_path.exists());
    }

    #[test]
    fn readonly_rejects_missing_db() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = open_db_readonly(&dir.path().join("absent.db"));
        assert!(result.is_err());
    }
}
