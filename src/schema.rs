use rusqlite_migration::{M, Migrations};
use std::sync::LazyLock;

pub static MIGRATIONS: LazyLock<Migrations<'static>> = LazyLock::new(|| {
    Migrations::new(vec![M::up(
        "
CREATE TABLE products (
    product_id  TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    description TEXT NOT NULL,
    price       REAL NOT NULL,
    category    TEXT NOT NULL,
    in_stock    INTEGER NOT NULL
);

CREATE TABLE orders (
    order_id         TEXT PRIMARY KEY,
    customer_name    TEXT NOT NULL,
    customer_email   TEXT NOT NULL,
    status           TEXT NOT NULL,
    days_since_order INTEGER NOT NULL,
    current_location TEXT NOT NULL
);

CREATE TABLE order_items (
    order_id   TEXT NOT NULL REFERENCES orders(order_id),
    product_id TEXT NOT NULL REFERENCES products(product_id),
    quantity   INTEGER NOT NULL,
    unit_price REAL NOT NULL
);

CREATE TABLE stores (
    store_id TEXT PRIMARY KEY,
    name     TEXT NOT NULL,
    address  TEXT NOT NULL,
    phone    TEXT NOT NULL
);

CREATE TABLE store_inventory (
    store_id    TEXT NOT NULL REFERENCES stores(store_id),
    product_id  TEXT NOT NULL REFERENCES products(product_id),
    stock_level INTEGER NOT NULL
);

CREATE TABLE promotions (
    promotion_id     TEXT PRIMARY KEY,
    description      TEXT NOT NULL,
    discount_percent REAL,
    discount_amount  REAL,
    category         TEXT,
    product_ids      TEXT
);

-- Indexes for the lookups the chatbot's SQL tool actually runs
CREATE INDEX idx_products_category ON products(category);
CREATE INDEX idx_order_items_order ON order_items(order_id);
CREATE INDEX idx_inventory_store ON store_inventory(store_id, product_id);
CREATE INDEX idx_promotions_category ON promotions(category);
",
    )])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_valid() {
        assert!(MIGRATIONS.validate().is_ok());
    }

    #[test]
    fn migrations_apply_to_memory_db() {
        let mut conn = rusqlite::Connection::open_in_memory().unwrap();
        MIGRATIONS.to_latest(&mut conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |r| r.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert!(tables.contains(&"products".into()));
        assert!(tables.contains(&"orders".into()));
        assert!(tables.contains(&"order_items".into()));
        assert!(tables.contains(&"stores".into()));
        assert!(tables.contains(&"store_inventory".into()));
        assert!(tables.contains(&"promotions".into()));
    }

    #[test]
    fn promotions_allow_null_discounts() {
        let mut conn = rusqlite::Connection::open_in_memory().unwrap();
        MIGRATIONS.to_latest(&mut conn).unwrap();

        // Percent-off and fixed-amount promotions each leave the other column NULL
        conn.execute(
            "INSERT INTO promotions (promotion_id, description, discount_percent) VALUES ('P1', 'pct', 15.0)",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO promotions (promotion_id, description, discount_amount) VALUES ('P2', 'amt', 100.0)",
            [],
        )
        .unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM promotions", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);
    }
}
