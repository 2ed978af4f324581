use crate::LabseedError;
use crate::catalog::{FAQ_TEXT, ORDERS, PRODUCTS, PROMOTIONS, STORES};
use crate::db::open_db;
use rusqlite::{Connection, params};
use std::path::Path;

pub const DB_FILE: &str = "ohm_sweet_ohm.db";
pub const FAQ_FILE: &str = "faq.txt";

/// Build the demo environment from scratch: store database plus FAQ document.
/// Always starts from a clean slate so repeated runs never accumulate drift.
pub fn handle_setup(data_dir: &Path) -> Result<(), LabseedError> {
    std::fs::create_dir_all(data_dir)?;

    let db_path = data_dir.join(DB_FILE);
    if db_path.exists() {
        std::fs::remove_file(&db_path)?;
        let _ = std::fs::remove_file(db_path.with_extension("db-wal"));
        let _ = std::fs::remove_file(db_path.with_extension("db-shm"));
    }

    let conn = open_db(&db_path)?;
    load_catalog(&conn)?;

    let faq_path = data_dir.join(FAQ_FILE);
    std::fs::write(&faq_path, FAQ_TEXT)?;

    eprintln!(
        "labseed: database created at {} ({} products, {} orders, {} stores, {} promotions)",
        db_path.display(),
        PRODUCTS.len(),
        ORDERS.len(),
        STORES.len(),
        PROMOTIONS.len()
    );
    eprintln!("labseed: FAQ written to {}", faq_path.display());
    Ok(())
}

fn load_catalog(conn: &Connection) -> Result<(), LabseedError> {
    let tx = conn.unchecked_transaction()?;

    {
        let mut stmt = tx.prepare("INSERT INTO products VALUES (?1, ?2, ?3, ?4, ?5, ?6)")?;
        for p in PRODUCTS {
            stmt.execute(params![
                p.id,
                p.name,
                p.description,
                p.price,
                p.category,
                p.in_stock
            ])?;
        }
    }

    {
        let mut order_stmt = tx.prepare("INSERT INTO orders VALUES (?1, ?2, ?3, ?4, ?5, ?6)")?;
        let mut item_stmt = tx.prepare("INSERT INTO order_items VALUES (?1, ?2, ?3, ?4)")?;
        for o in ORDERS {
            order_stmt.execute(params![
                o.id,
                o.customer_name,
                o.customer_email,
                o.status,
                o.days_since_order,
                o.current_location
            ])?;
            for item in o.items {
                item_stmt.execute(params![o.id, item.product_id, item.quantity, item.unit_price])?;
            }
        }
    }

    {
        let mut store_stmt = tx.prepare("INSERT INTO stores VALUES (?1, ?2, ?3, ?4)")?;
        let mut inv_stmt = tx.prepare("INSERT INTO store_inventory VALUES (?1, ?2, ?3)")?;
        for s in STORES {
            store_stmt.execute(params![s.id, s.name, s.address, s.phone])?;
            for (product_id, stock_level) in s.inventory {
                inv_stmt.execute(params![s.id, product_id, stock_level])?;
            }
        }
    }

    {
        // store_id stays behind: the chatbot's schema flattens promotions
        let mut stmt = tx.prepare("INSERT INTO promotions VALUES (?1, ?2, ?3, ?4, ?5, ?6)")?;
        for p in PROMOTIONS {
            let product_ids: Option<String> =
                (!p.product_ids.is_empty()).then(|| p.product_ids.join(","));
            stmt.execute(params![
                p.id,
                p.description,
                p.discount_percent,
                p.discount_amount,
                p.category,
                product_ids
            ])?;
        }
    }

    tx.commit()?;
    Ok(())
}
