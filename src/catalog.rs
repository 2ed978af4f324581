//! Static contents of the demo store: the product/order/store/promotion
//! tables `setup` loads into SQLite, and the FAQ document the policy
//! workflow pretends to retrieve from.

pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub category: &'static str,
    pub in_stock: bool,
}

pub struct OrderItem {
    pub product_id: &'static str,
    pub quantity: u32,
    pub unit_price: f64,
}

pub struct Order {
    pub id: &'static str,
    pub customer_name: &'static str,
    pub customer_email: &'static str,
    pub status: &'static str,
    pub days_since_order: u32,
    pub current_location: &'static str,
    pub items: &'static [OrderItem],
}

pub struct Store {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    /// (product_id, stock_level), one entry per catalog product.
    pub inventory: &'static [(&'static str, u32)],
}

/// `store_id` is where the promotion runs; the chatbot's promotions table
/// flattens it away, but the raw record keeps it for integrity checks.
pub struct Promotion {
    pub id: &'static str,
    pub store_id: &'static str,
    pub description: &'static str,
    pub discount_percent: Option<f64>,
    pub discount_amount: Option<f64>,
    pub category: Option<&'static str>,
    pub product_ids: &'static [&'static str],
}

macro_rules! product {
    ($id:expr, $name:expr, $desc:expr, $price:expr, $cat:expr, $stock:expr) => {
        Product {
            id: $id,
            name: $name,
            description: $desc,
            price: $price,
            category: $cat,
            in_stock: $stock,
        }
    };
}

pub const PRODUCTS: &[Product] = &[
    product!("AUDIO-101", "NexusWave Pro Headphones", "Premium noise-cancelling wireless headphones with 40-hour battery life and crystal-clear audio", 149.99, "Audio", true),
    product!("AUDIO-102", "SonicBlast Studio Headphones", "Professional studio headphones with deep bass and noise isolation, perfect for music production", 119.99, "Audio", true),
    product!("AUDIO-103", "AirStream Wireless Earbuds", "Lightweight wireless earbuds with 12-hour battery and quick charge technology", 79.99, "Audio", true),
    product!("WEAR-201", "PulseSync Fitness Tracker", "Advanced fitness tracking smartwatch with heart rate monitor, GPS, and 7-day battery life", 249.99, "Wearables", true),
    product!("WEAR-202", "FitZone Activity Band", "Budget-friendly fitness tracker with step counting, sleep tracking, and 10-day battery", 89.99, "Wearables", true),
    product!("WEAR-203", "ProActive Sports Watch", "Rugged sports watch with GPS, water resistance, and advanced workout tracking", 199.99, "Wearables", true),
    product!("CASE-301", "ShieldMax Phone Protector", "Military-grade protective case with shock absorption and screen protection", 34.99, "Accessories", true),
    product!("CASE-302", "ClearGuard Transparent Case", "Slim transparent case that shows off your phone while providing protection", 24.99, "Accessories", true),
    product!("DESK-401", "ElevateDesk Adjustable Stand", "Ergonomic aluminum laptop stand with adjustable height and ventilation", 79.99, "Office", true),
    product!("DESK-402", "CompactDesk Mini Stand", "Space-saving laptop stand perfect for small desks and portable setups", 49.99, "Office", true),
    product!("CABLE-501", "PowerFlow USB-C Charger", "6ft fast-charging USB-C cable with braided design and data transfer support", 19.99, "Accessories", true),
    product!("AUDIO-601", "SoundSphere Portable Speaker", "Waterproof Bluetooth speaker with 360-degree sound and 15-hour battery", 129.99, "Audio", true),
    product!("AUDIO-602", "BassBoom Party Speaker", "High-powered portable speaker with deep bass and LED lights for parties", 159.99, "Audio", true),
    product!("MOUSE-701", "PrecisionPoint Wireless Mouse", "Ergonomic wireless mouse with precision tracking and long battery life", 49.99, "Office", false),
    product!("MOUSE-702", "SpeedClick Gaming Mouse", "High-DPI gaming mouse with RGB lighting and programmable buttons", 69.99, "Office", true),
    product!("TABLET-801", "FlexStand Tablet Mount", "Adjustable stand for tablets and e-readers with flexible positioning", 39.99, "Office", true),
    product!("AUDIO-901", "BassBoost Earbuds", "True wireless earbuds with active noise cancellation and 8-hour battery", 89.99, "Audio", true),
    product!("CABLE-1001", "MultiCharge Cable Set", "3-in-1 charging cable set with USB-C, Lightning, and Micro-USB connectors", 29.99, "Accessories", true),
    product!("GAME-1101", "NexGen Pro Gaming Console", "Latest generation gaming console with 4K gaming, ray tracing, and exclusive titles", 499.99, "Gaming", true),
    product!("GAME-1102", "PlayStation 5", "Sony PlayStation 5 with ultra-fast SSD, 3D audio, and DualSense controller", 499.99, "Gaming", true),
    product!("GAME-1103", "Xbox Series X", "Microsoft Xbox Series X with 4K gaming, backward compatibility, and Game Pass", 499.99, "Gaming", true),
    product!("GAME-1104", "Nintendo Switch OLED", "Nintendo Switch with vibrant OLED screen, enhanced audio, and portable gaming", 349.99, "Gaming", true),
    product!("GAME-1201", "ProGamer Controller", "Professional gaming controller with customizable buttons and haptic feedback", 79.99, "Gaming", true),
    product!("GAME-1202", "Racing Wheel Pro", "Force feedback racing wheel with pedals for realistic driving simulation", 299.99, "Gaming", true),
    product!("GAME-1203", "FightStick Arcade Controller", "Arcade-style fight stick with mechanical buttons for fighting games", 149.99, "Gaming", true),
    product!("TV-1301-55", "CrystalView 4K Smart TV - 55 inch", "55-inch 4K UHD Smart TV with HDR, voice control, and streaming apps", 599.99, "TVs", true),
    product!("TV-1301-65", "CrystalView 4K Smart TV - 65 inch", "65-inch 4K UHD Smart TV with HDR, voice control, and streaming apps", 899.99, "TVs", true),
    product!("TV-1301-75", "CrystalView 4K Smart TV - 75 inch", "75-inch 4K UHD Smart TV with HDR, voice control, and streaming apps", 1299.99, "TVs", true),
    product!("TV-1302-55", "UltraBright OLED TV - 55 inch", "55-inch OLED TV with perfect blacks, Dolby Vision, and premium sound", 1299.99, "TVs", true),
    product!("TV-1302-65", "UltraBright OLED TV - 65 inch", "65-inch OLED TV with perfect blacks, Dolby Vision, and premium sound", 1899.99, "TVs", true),
    product!("TV-1302-75", "UltraBright OLED TV - 75 inch", "75-inch OLED TV with perfect blacks, Dolby Vision, and premium sound", 2499.99, "TVs", true),
    product!("TV-1303-55", "BudgetSmart LED TV - 55 inch", "55-inch LED Smart TV with 4K resolution and built-in streaming", 399.99, "TVs", true),
    product!("TV-1303-65", "BudgetSmart LED TV - 65 inch", "65-inch LED Smart TV with 4K resolution and built-in streaming", 599.99, "TVs", true),
    product!("TV-1303-75", "BudgetSmart LED TV - 75 inch", "75-inch LED Smart TV with 4K resolution and built-in streaming", 899.99, "TVs", true),
];

macro_rules! item {
    ($pid:expr, $qty:expr, $price:expr) => {
        OrderItem { product_id: $pid, quantity: $qty, unit_price: $price }
    };
}

macro_rules! order {
    ($id:expr, $name:expr, $email:expr, $days:expr, $status:expr, $loc:expr, $items:expr) => {
        Order {
            id: $id,
            customer_name: $name,
            customer_email: $email,
            status: $status,
            days_since_order: $days,
            current_location: $loc,
            items: $items,
        }
    };
}

pub const ORDERS: &[Order] = &[
    order!("TECH-001", "Steve Mobs", "steve.mobs@email.com", 5, "shipped", "Distribution Center - San Francisco, CA", &[item!("AUDIO-101", 1, 149.99)]),
    order!("TECH-002", "Taylor Shift", "taylor.shift@email.com", 3, "in_transit", "In Transit - Oakland, CA", &[item!("WEAR-201", 1, 249.99), item!("CASE-301", 2, 34.99)]),
    order!("TECH-003", "Albert I. Stein", "albert.stine@email.com", 1, "processing", "Warehouse - Processing", &[item!("DESK-401", 1, 79.99)]),
    order!("TECH-004", "Meryl Streak", "meryl.streak@email.com", 12, "delivered", "Delivered to Customer", &[item!("CABLE-501", 3, 19.99)]),
    order!("TECH-005", "Elon Tusk", "elon.tusk@email.com", 0, "pending", "Order Received - Awaiting Processing", &[item!("AUDIO-101", 2, 149.99), item!("AUDIO-601", 1, 129.99)]),
    order!("TECH-006", "Lebron Jams", "Lebron.Jams@email.com", 4, "shipped", "Distribution Center - San Francisco, CA", &[item!("MOUSE-702", 1, 69.99), item!("DESK-401", 1, 79.99)]),
    order!("TECH-007", "Selena Williams", "selena.williams@email.com", 2, "in_transit", "Out for Delivery - San Francisco, CA", &[item!("WEAR-201", 1, 249.99)]),
    order!("TECH-008", "Serena Gomez", "serena.gomez@email.com", 8, "delivered", "Delivered to Customer", &[item!("CASE-301", 4, 34.99), item!("CABLE-501", 2, 19.99)]),
    order!("TECH-009", "Michael Gordon", "michael.gordon@email.com", 2, "processing", "Warehouse - Processing", &[item!("AUDIO-601", 1, 129.99), item!("TABLET-801", 1, 39.99)]),
    order!("TECH-010", "Brad Litt", "brad.litt@email.com", 6, "shipped", "Distribution Center - San Francisco, CA", &[item!("WEAR-201", 1, 249.99), item!("CASE-301", 1, 34.99)]),
    order!("TECH-011", "Lyon Woods", "lyon.woods@email.com", 0, "pending", "Order Received - Awaiting Processing", &[item!("AUDIO-101", 1, 149.99)]),
    order!("TECH-012", "Bill Smith", "bill.smith@email.com", 15, "delivered", "Delivered to Customer", &[item!("DESK-401", 2, 79.99)]),
    order!("TECH-013", "Bill Bates", "bill.bates@email.com", 1, "processing", "Warehouse - Quality Check", &[item!("GAME-1102", 1, 499.99), item!("GAME-1201", 2, 79.99)]),
    order!("TECH-014", "Wayne the Sock Johnson", "wayne.johnson@email.com", 4, "in_transit", "In Transit - Sacramento, CA", &[item!("TV-1301-65", 1, 899.99)]),
    order!("TECH-015", "Bryan Reynolds", "bryan.reynolds@email.com", 3, "in_transit", "In Transit - San Jose, CA", &[item!("GAME-1104", 1, 349.99), item!("AUDIO-901", 1, 89.99)]),
    order!("TECH-016", "Travis Swift", "travis.swift@email.com", 10, "delivered", "Delivered to Customer", &[item!("TV-1302-55", 1, 1299.99)]),
    order!("TECH-017", "Keanu Reevis", "keanu.reevis@email.com", 0, "pending", "Order Received - Awaiting Processing", &[item!("GAME-1101", 1, 499.99), item!("GAME-1202", 1, 299.99)]),
    order!("TECH-018", "Josh Ballen", "josh.ballen@email.com", 5, "shipped", "Distribution Center - San Francisco, CA", &[item!("AUDIO-102", 1, 119.99), item!("AUDIO-103", 1, 79.99)]),
    order!("TECH-019", "Tom Brody", "tom.brody@email.com", 2, "in_transit", "In Transit - Fresno, CA", &[item!("TV-1303-75", 1, 899.99), item!("CABLE-1001", 2, 29.99)]),
    order!("TECH-020", "Mark Grufallo", "mark.grufallo@email.com", 13, "delivered", "Delivered to Customer", &[item!("WEAR-202", 1, 89.99), item!("CASE-302", 2, 24.99)]),
    order!("TECH-021", "Michaelangelo DiCaprio", "michaelangelo.dicaprio@email.com", 1, "processing", "Warehouse - Packaging", &[item!("GAME-1103", 1, 499.99), item!("GAME-1203", 1, 149.99)]),
    order!("TECH-022", "Emma Scone", "emma.scone@email.com", 3, "shipped", "Distribution Center - San Francisco, CA", &[item!("TV-1301-55", 1, 599.99), item!("AUDIO-602", 1, 159.99)]),
    order!("TECH-023", "Leonel Besti", "leo.besti@email.com", 11, "delivered", "Delivered to Customer", &[item!("WEAR-203", 1, 199.99), item!("DESK-402", 1, 49.99)]),
    order!("TECH-024", "Miles Seller", "miles.seller@email.com", 1, "pending", "Order Received - Awaiting Processing", &[item!("TV-1302-75", 1, 2499.99)]),
    order!("TECH-025", "Tom Bruise", "tom.bruise@email.com", 7, "delivered", "Delivered to Customer", &[item!("AUDIO-101", 1, 149.99), item!("MOUSE-702", 1, 69.99), item!("CABLE-501", 2, 19.99)]),
];

pub const STORES: &[Store] = &[
    Store {
        id: "SF-DOWNTOWN",
        name: "Ohm Sweet Ohm Downtown",
        address: "123 Market Street, San Francisco, CA 94102",
        phone: "(415) 555-0101",
        inventory: &[
            ("AUDIO-101", 18), ("AUDIO-102", 12), ("AUDIO-103", 25), ("WEAR-201", 0),
            ("WEAR-202", 20), ("WEAR-203", 8), ("CASE-301", 35), ("CASE-302", 28),
            ("DESK-401", 15), ("DESK-402", 22), ("CABLE-501", 60), ("AUDIO-601", 14),
            ("AUDIO-602", 6), ("MOUSE-701", 0), ("MOUSE-702", 15), ("TABLET-801", 22),
            ("AUDIO-901", 20), ("CABLE-1001", 45), ("GAME-1101", 5), ("GAME-1102", 8),
            ("GAME-1103", 6), ("GAME-1104", 12), ("GAME-1201", 18), ("GAME-1202", 3),
            ("GAME-1203", 10), ("TV-1301-55", 8), ("TV-1301-65", 5), ("TV-1301-75", 2),
            ("TV-1302-55", 4), ("TV-1302-65", 3), ("TV-1302-75", 1), ("TV-1303-55", 15),
            ("TV-1303-65", 10), ("TV-1303-75", 6),
        ],
    },
    Store {
        id: "SF-UNION",
        name: "Ohm Sweet Ohm Union Square",
        address: "456 Geary Street, San Francisco, CA 94108",
        phone: "(415) 555-0202",
        inventory: &[
            ("AUDIO-101", 25), ("AUDIO-102", 8), ("AUDIO-103", 30), ("WEAR-201", 8),
            ("WEAR-202", 15), ("WEAR-203", 0), ("CASE-301", 42), ("CASE-302", 35),
            ("DESK-401", 0), ("DESK-402", 18), ("CABLE-501", 55), ("AUDIO-601", 18),
            ("AUDIO-602", 4), ("MOUSE-701", 12), ("MOUSE-702", 20), ("TABLET-801", 28),
            ("AUDIO-901", 0), ("CABLE-1001", 50), ("GAME-1101", 7), ("GAME-1102", 10),
            ("GAME-1103", 8), ("GAME-1104", 15), ("GAME-1201", 22), ("GAME-1202", 5),
            ("GAME-1203", 12), ("TV-1301-55", 12), ("TV-1301-65", 8), ("TV-1301-75", 4),
            ("TV-1302-55", 6), ("TV-1302-65", 4), ("TV-1302-75", 2), ("TV-1303-55", 20),
            ("TV-1303-65", 15), ("TV-1303-75", 10),
        ],
    },
    Store {
        id: "SF-MISSION",
        name: "Ohm Sweet Ohm Mission District",
        address: "789 Valencia Street, San Francisco, CA 94110",
        phone: "(415) 555-0303",
        inventory: &[
            ("AUDIO-101", 0), ("AUDIO-102", 15), ("AUDIO-103", 18), ("WEAR-201", 15),
            ("WEAR-202", 25), ("WEAR-203", 10), ("CASE-301", 28), ("CASE-302", 20),
            ("DESK-401", 18), ("DESK-402", 12), ("CABLE-501", 48), ("AUDIO-601", 0),
            ("AUDIO-602", 8), ("MOUSE-701", 8), ("MOUSE-702", 12), ("TABLET-801", 15),
            ("AUDIO-901", 22), ("CABLE-1001", 38), ("GAME-1101", 4), ("GAME-1102", 6),
            ("GAME-1103", 5), ("GAME-1104", 10), ("GAME-1201", 15), ("GAME-1202", 2),
            ("GAME-1203", 8), ("TV-1301-55", 6), ("TV-1301-65", 4), ("TV-1301-75", 1),
            ("TV-1302-55", 3), ("TV-1302-65", 2), ("TV-1302-75", 0), ("TV-1303-55", 12),
            ("TV-1303-65", 8), ("TV-1303-75", 5),
        ],
    },
    Store {
        id: "SF-MARINA",
        name: "Ohm Sweet Ohm Marina",
        address: "321 Chestnut Street, San Francisco, CA 94123",
        phone: "(415) 555-0404",
        inventory: &[
            ("AUDIO-101", 20), ("AUDIO-102", 10), ("AUDIO-103", 22), ("WEAR-201", 10),
            ("WEAR-202", 18), ("WEAR-203", 6), ("CASE-301", 0), ("CASE-302", 30),
            ("DESK-401", 12), ("DESK-402", 15), ("CABLE-501", 52), ("AUDIO-601", 16),
            ("AUDIO-602", 5), ("MOUSE-701", 0), ("MOUSE-702", 18), ("TABLET-801", 20),
            ("AUDIO-901", 18), ("CABLE-1001", 0), ("GAME-1101", 6), ("GAME-1102", 9),
            ("GAME-1103", 7), ("GAME-1104", 13), ("GAME-1201", 20), ("GAME-1202", 4),
            ("GAME-1203", 11), ("TV-1301-55", 10), ("TV-1301-65", 6), ("TV-1301-75", 3),
            ("TV-1302-55", 5), ("TV-1302-65", 3), ("TV-1302-75", 1), ("TV-1303-55", 18),
            ("TV-1303-65", 12), ("TV-1303-75", 8),
        ],
    },
    Store {
        id: "SF-SOMA",
        name: "Ohm Sweet Ohm SoMa",
        address: "555 Folsom Street, San Francisco, CA 94107",
        phone: "(415) 555-0505",
        inventory: &[
            ("AUDIO-101", 15), ("AUDIO-102", 6), ("AUDIO-103", 20), ("WEAR-201", 14),
            ("WEAR-202", 22), ("WEAR-203", 8), ("CASE-301", 25), ("CASE-302", 18),
            ("DESK-401", 20), ("DESK-402", 10), ("CABLE-501", 0), ("AUDIO-601", 12),
            ("AUDIO-602", 3), ("MOUSE-701", 15), ("MOUSE-702", 16), ("TABLET-801", 18),
            ("AUDIO-901", 16), ("CABLE-1001", 40), ("GAME-1101", 5), ("GAME-1102", 7),
            ("GAME-1103", 6), ("GAME-1104", 11), ("GAME-1201", 17), ("GAME-1202", 3),
            ("GAME-1203", 9), ("TV-1301-55", 9), ("TV-1301-65", 5), ("TV-1301-75", 2),
            ("TV-1302-55", 4), ("TV-1302-65", 2), ("TV-1302-75", 1), ("TV-1303-55", 16),
            ("TV-1303-65", 11), ("TV-1303-75", 7),
        ],
    },
];

macro_rules! promo {
    ($id:expr, $store:expr, $desc:expr, pct $pct:expr, $cat:expr, $pids:expr) => {
        Promotion {
            id: $id,
            store_id: $store,
            description: $desc,
            discount_percent: Some($pct),
            discount_amount: None,
            category: $cat,
            product_ids: $pids,
        }
    };
    ($id:expr, $store:expr, $desc:expr, amt $amt:expr, $cat:expr, $pids:expr) => {
        Promotion {
            id: $id,
            store_id: $store,
            description: $desc,
            discount_percent: None,
            discount_amount: Some($amt),
            category: $cat,
            product_ids: $pids,
        }
    };
    ($id:expr, $store:expr, $desc:expr, bogo, $cat:expr, $pids:expr) => {
        Promotion {
            id: $id,
            store_id: $store,
            description: $desc,
            discount_percent: None,
            discount_amount: None,
            category: $cat,
            product_ids: $pids,
        }
    };
}

pub const PROMOTIONS: &[Promotion] = &[
    promo!("PROMO-001", "SF-DOWNTOWN", "20% off all Audio products", pct 20.0, Some("Audio"), &[]),
    promo!("PROMO-002", "SF-UNION", "15% off all Office products", pct 15.0, Some("Office"), &[]),
    promo!("PROMO-003", "SF-MISSION", "25% off PulseSync Fitness Tracker", pct 25.0, None, &["WEAR-201"]),
    promo!("PROMO-004", "SF-MARINA", "10% off all Accessories", pct 10.0, Some("Accessories"), &[]),
    promo!("PROMO-005", "SF-SOMA", "30% off NexusWave Pro Headphones", pct 30.0, None, &["AUDIO-101"]),
    promo!("PROMO-006", "SF-DOWNTOWN", "$20 off ElevateDesk Adjustable Stand", amt 20.00, None, &["DESK-401"]),
    promo!("PROMO-007", "SF-UNION", "Buy 2 Get 1 Free on all Cables", bogo, Some("Accessories"), &["CABLE-501", "CABLE-1001"]),
    promo!("PROMO-008", "SF-DOWNTOWN", "15% off all Gaming products", pct 15.0, Some("Gaming"), &[]),
    promo!("PROMO-009", "SF-UNION", "$50 off PlayStation 5", amt 50.00, None, &["GAME-1102"]),
    promo!("PROMO-010", "SF-MISSION", "$50 off Xbox Series X", amt 50.00, None, &["GAME-1103"]),
    promo!("PROMO-011", "SF-MARINA", "$30 off Nintendo Switch OLED", amt 30.00, None, &["GAME-1104"]),
    promo!("PROMO-012", "SF-SOMA", "10% off all TVs", pct 10.0, Some("TVs"), &[]),
    promo!("PROMO-013", "SF-DOWNTOWN", "$100 off CrystalView 4K Smart TV - 65 inch", amt 100.00, None, &["TV-1301-65"]),
    promo!("PROMO-014", "SF-UNION", "$200 off UltraBright OLED TV - 75 inch", amt 200.00, None, &["TV-1302-75"]),
    promo!("PROMO-015", "SF-MISSION", "20% off all Wearables", pct 20.0, Some("Wearables"), &[]),
    promo!("PROMO-016", "SF-MARINA", "25% off SoundSphere Portable Speaker", pct 25.0, None, &["AUDIO-601"]),
    promo!("PROMO-017", "SF-SOMA", "$15 off ProGamer Controller", amt 15.00, None, &["GAME-1201"]),
    promo!("PROMO-018", "SF-DOWNTOWN", "$50 off Racing Wheel Pro", amt 50.00, None, &["GAME-1202"]),
    promo!("PROMO-019", "SF-UNION", "20% off BudgetSmart LED TV - 55 inch", pct 20.0, None, &["TV-1303-55"]),
    promo!("PROMO-020", "SF-MISSION", "$10 off BassBoost Earbuds", amt 10.00, None, &["AUDIO-901"]),
    promo!("PROMO-021", "SF-MARINA", "12% off all Gaming accessories", pct 12.0, Some("Gaming"), &["GAME-1201", "GAME-1202", "GAME-1203"]),
    promo!("PROMO-022", "SF-SOMA", "$30 off CrystalView 4K Smart TV - 75 inch", amt 30.00, None, &["TV-1301-75"]),
];

pub const FAQ_TEXT: &str = "RETURN POLICY

Ohm Sweet Ohm offers a 30-day return policy on all items. Items must be in their original packaging and unused condition. To initiate a return, please contact customer service with your order number. Return shipping is free for defective items. For other returns, customers are responsible for return shipping costs unless the return is due to our error.

SHIPPING INFORMATION

Standard shipping takes 5-7 business days and costs $5.99. Express shipping (2-3 business days) costs $12.99. Overnight shipping is available for $24.99. Free shipping is available on orders over $50. All orders are shipped from our warehouse in San Francisco within 1-2 business days of order confirmation.

PAYMENT METHODS

We accept all major credit cards (Visa, Mastercard, American Express), PayPal, Apple Pay, and Google Pay. Payment is processed securely at checkout. We do not store your payment information.

WARRANTY INFORMATION

All electronics come with a 1-year manufacturer warranty. Extended warranties are available for purchase at checkout. Warranty claims can be processed through our customer service department or by visiting any of our retail locations in San Francisco.

PRODUCT AVAILABILITY

Product availability is updated in real-time on our website. If an item shows as \"out of stock\" online, you can check with our retail stores for availability. We also offer backorder options for popular items - you'll be notified when your item is back in stock.

STORE LOCATIONS:
We have five retail locations in San Francisco:
- Ohm Sweet Ohm Downtown: 123 Market Street, San Francisco, CA 94102
- Ohm Sweet Ohm Union Square: 456 Geary Street, San Francisco, CA 94108
- Ohm Sweet Ohm Mission District: 789 Valencia Street, San Francisco, CA 94110
- Ohm Sweet Ohm Marina: 321 Chestnut Street, San Francisco, CA 94123
- Ohm Sweet Ohm SoMa: 555 Folsom Street, San Francisco, CA 94107

You can visit any location to browse products, make returns, or get in-person assistance.

STORE HOURS:
All Ohm Sweet Ohm retail locations are open during the following hours:
- Monday through Friday: 10:00 AM - 9:00 PM
- Saturday: 10:00 AM - 8:00 PM
- Sunday: 11:00 AM - 6:00 PM
Holiday hours may vary. Please check our website for specific holiday schedules.

PRICE MATCHING

We offer price matching on identical items from authorized retailers. The item must be in stock at both locations and the price match must be requested at the time of purchase. Online price matches must be requested within 7 days of purchase.

GIFT CARDS

Gift cards are available for purchase in-store or online. They never expire and can be used for any purchase. Gift cards cannot be returned or refunded for cash.

LOYALTY PROGRAM

Join our loyalty program to earn points on every purchase. Points can be redeemed for discounts on future purchases. Sign up is free and available both online and in-store.

CONTACT INFORMATION

For customer service inquiries, you can reach Ohm Sweet Ohm at:
- Phone: 1-800-555-OHM (1-800-555-646)
- Email: support@ohmsweetohm.com
- Live Chat: Available on our website Monday-Friday, 9 AM - 6 PM PST

ORDER MODIFICATIONS AND CANCELLATIONS
Once an order is placed, our warehouse begins processing it immediately to ensure fast shipping. Therefore, orders can only be cancelled or modified within 1 hour of placement. To request a change, please call our customer support line immediately. We cannot modify orders via email or chat due to processing delays.

REFUND TIMING
Once your return is received and inspected at our warehouse (usually within 3 days of delivery), we will process your refund. The refund will be issued to your original payment method. Please allow 5-10 business days for your bank to post the refund to your account.";
