use crate::LabseedError;
use crate::db::open_db_readonly;
use crate::setup::{DB_FILE, FAQ_FILE};
use std::path::Path;

const TABLES: &[&str] = &[
    "products",
    "orders",
    "order_items",
    "stores",
    "store_inventory",
    "promotions",
];

pub fn handle_status(data_dir: &Path) -> Result<(), LabseedError> {
    let db_path = data_dir.join(DB_FILE);
    if !db_path.exists() {
        eprintln!(
            "labseed: no database at {} (run `labseed setup` first)",
            db_path.display()
        );
        return Ok(());
    }

    let db_size = std::fs::metadata(&db_path)?.len();
    let wal_size = std::fs::metadata(db_path.with_extension("db-wal"))
        .map(|m| m.len())
        .ok();

    let conn = open_db_readonly(&db_path)?;
    let mut counts = Vec::new();
    for table in TABLES {
        let n: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))?;
        counts.push(format!("{table}: {n}"));
    }

    match wal_size {
        Some(ws) => eprintln!(
            "labseed: database — {} (+{} WAL)",
            fmt_size(db_size),
            fmt_size(ws)
        ),
        None => eprintln!("labseed: database — {}", fmt_size(db_size)),
    }
    eprintln!("labseed: rows — {}", counts.join(", "));

    let faq_path = data_dir.join(FAQ_FILE);
    match std::fs::metadata(&faq_path) {
        Ok(m) => eprintln!("labseed: FAQ — {}", fmt_size(m.len())),
        Err(_) => eprintln!("labseed: FAQ — missing (run `labseed setup`)"),
    }

    Ok(())
}

fn fmt_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_database_is_not_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(handle_status(dir.path()).is_ok());
    }

    #[test]
    fn reports_after_setup() {
        let dir = tempfile::TempDir::new().unwrap();
        crate::setup::handle_setup(dir.path()).unwrap();
        assert!(handle_status(dir.path()).is_ok());
    }

    #[test]
    fn fmt_size_units() {
        assert_eq!(fmt_size(512), "512 B");
        assert_eq!(fmt_size(2048), "2.0 KB");
        assert_eq!(fmt_size(3 * 1024 * 1024), "3.0 MB");
    }
}
