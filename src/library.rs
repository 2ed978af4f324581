//! Canned conversation material for the synthetic traces. Every session
//! sticks to one entry: the primary exchange opens it, the follow-ups
//! continue it, and [`CLOSING`] wraps it up once the topic is spent.

use rand::Rng;
use rand::seq::SliceRandom;

/// One scripted question/answer pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Which branch of the support workflow handles a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Database,
    Policy,
    Chat,
}

impl Route {
    /// The label the router step claims to have produced.
    pub fn label(self) -> &'static str {
        match self {
            Route::Database => "DATABASE",
            Route::Policy => "POLICY",
            Route::Chat => "CHAT",
        }
    }

    /// Lowercase form used as a trace tag.
    pub fn tag(self) -> &'static str {
        match self {
            Route::Database => "database",
            Route::Policy => "policy",
            Route::Chat => "chat",
        }
    }
}

/// What the record-tree builder replays for one turn: the workflow branch
/// plus the entry's fixed artifact, if the branch has one.
#[derive(Debug, Clone, Copy)]
pub enum Workflow {
    DataLookup { sql: &'static str },
    PolicyLookup { context: &'static str },
    Chat,
}

impl Workflow {
    pub fn route(self) -> Route {
        match self {
            Workflow::DataLookup { .. } => Route::Database,
            Workflow::PolicyLookup { .. } => Route::Policy,
            Workflow::Chat => Route::Chat,
        }
    }
}

/// A conversation subject: primary exchange, same-subject follow-ups, and
/// the artifact its workflow pretends to produce (a SQL query for data
/// lookups, a retrieved snippet for policy lookups, nothing for chat).
pub enum TopicEntry {
    Data {
        exchange: Exchange,
        sql: &'static str,
        follow_ups: &'static [Exchange],
    },
    Policy {
        exchange: Exchange,
        context: &'static str,
        follow_ups: &'static [Exchange],
    },
    Chat {
        exchange: Exchange,
        follow_ups: &'static [Exchange],
    },
}

impl TopicEntry {
    pub fn exchange(&self) -> Exchange {
        match self {
            TopicEntry::Data { exchange, .. }
            | TopicEntry::Policy { exchange, .. }
            | TopicEntry::Chat { exchange, .. } => *exchange,
        }
    }

    pub fn follow_ups(&self) -> &'static [Exchange] {
        match self {
            TopicEntry::Data { follow_ups, .. }
            | TopicEntry::Policy { follow_ups, .. }
            | TopicEntry::Chat { follow_ups, .. } => follow_ups,
        }
    }

    pub fn workflow(&self) -> Workflow {
        match self {
            TopicEntry::Data { sql, .. } => Workflow::DataLookup { sql },
            TopicEntry::Policy { context, .. } => Workflow::PolicyLookup { context },
            TopicEntry::Chat { .. } => Workflow::Chat,
        }
    }

    pub fn route(&self) -> Route {
        self.workflow().route()
    }
}

/// Uniform draw from the pool matching the requested route.
pub fn pick_entry(rng: &mut impl Rng, route: Route) -> &'static TopicEntry {
    let pool = match route {
        Route::Database => DATA_ENTRIES,
        Route::Policy => POLICY_ENTRIES,
        Route::Chat => CHAT_ENTRIES,
    };
    pool.choose(rng).expect("topic pools are never empty")
}

/// Generic wrap-up once a session has burned through its follow-ups.
/// Always runs the chat workflow regardless of the session's topic.
pub const CLOSING: Exchange = Exchange {
    question: "No that's all I needed, thanks.",
    answer: "Great! Come back if you have any other questions.",
};

macro_rules! ex {
    ($q:expr, $a:expr) => {
        Exchange { question: $q, answer: $a }
    };
}

pub static DATA_ENTRIES: &[TopicEntry] = &[
    TopicEntry::Data {
        exchange: ex!(
            "How many AirStream Wireless Earbuds do you have in stock?",
            "The AirStream Wireless Earbuds (AUDIO-103) currently have 47 units in stock."
        ),
        sql: "SELECT stock_level FROM store_inventory si JOIN products p ON si.product_id = p.product_id WHERE p.name LIKE '%AirStream Wireless Earbuds%'",
        follow_ups: &[
            ex!(
                "How much do they cost?",
                "The AirStream Wireless Earbuds are priced at $79.99."
            ),
            ex!(
                "Do they come with a charging case?",
                "Yes, the charging case is included and adds 12 hours of playback on top of the earbuds' own battery."
            ),
        ],
    },
    TopicEntry::Data {
        exchange: ex!(
            "Is the NexGen Pro Gaming Console available?",
            "Yes, the NexGen Pro Gaming Console (GAME-1101) is available with 12 units remaining."
        ),
        sql: "SELECT in_stock, name FROM products WHERE product_id = 'GAME-1101'",
        follow_ups: &[
            ex!(
                "How much does it cost?",
                "The NexGen Pro Gaming Console is priced at $499.99."
            ),
            ex!(
                "Are there any deals on it right now?",
                "There's a 15% discount on all Gaming products at our Downtown store through end of month."
            ),
            ex!(
                "Which stores have it in stock?",
                "All five San Francisco locations carry it right now; Union Square has the most units on hand."
            ),
        ],
    },
    TopicEntry::Data {
        exchange: ex!(
            "Do you have the CrystalView 4K Smart TV in 65 inch?",
            "The CrystalView 4K Smart TV 65\" (TV-1301-65) has 8 units in stock."
        ),
        sql: "SELECT in_stock FROM products WHERE product_id = 'TV-1301-65'",
        follow_ups: &[
            ex!(
                "What does that model cost?",
                "The CrystalView 4K Smart TV 65\" is priced at $899.99."
            ),
            ex!(
                "Is there a discount on it?",
                "Yes, the Downtown store currently has $100 off the CrystalView 4K Smart TV 65\"."
            ),
        ],
    },
    TopicEntry::Data {
        exchange: ex!(
            "What's the stock level for the PlayStation 5?",
            "The PlayStation 5 (GAME-1102) is currently out of stock. We expect restocking next week."
        ),
        sql: "SELECT in_stock FROM products WHERE product_id = 'GAME-1102'",
        follow_ups: &[
            ex!(
                "When will it be back in stock?",
                "Restocking is expected next week. You can set a backorder alert and we'll email you the moment units arrive."
            ),
            ex!(
                "Is the Xbox Series X available instead?",
                "Yes, the Xbox Series X (GAME-1103) is in stock, and the Mission District store has $50 off it right now."
            ),
        ],
    },
    TopicEntry::Data {
        exchange: ex!(
            "How much does the NexusWave Pro Headphones cost?",
            "The NexusWave Pro Headphones (AUDIO-101) are priced at $349.99."
        ),
        sql: "SELECT price FROM products WHERE product_id = 'AUDIO-101'",
        follow_ups: &[
            ex!(
                "Is it on sale anywhere?",
                "The SoMa store is running 30% off the NexusWave Pro Headphones right now."
            ),
            ex!(
                "How long is the battery life?",
                "The NexusWave Pro Headphones are rated for 40 hours of playback on a single charge."
            ),
        ],
    },
    TopicEntry::Data {
        exchange: ex!(
            "Where is my order? My order ID is ORD-10482.",
            "Order ORD-10482 is currently in transit and estimated to arrive within 2 business days."
        ),
        sql: "SELECT status, current_location, days_since_order FROM orders WHERE order_id = 'ORD-10482'",
        follow_ups: &[
            ex!(
                "Can I still change the delivery address?",
                "Orders can only be modified within 1 hour of placement. Since this one has shipped, please call 1-800-555-OHM and we'll coordinate with the carrier."
            ),
            ex!(
                "Will someone need to sign for it?",
                "No signature is required; the carrier will leave the package in a safe location."
            ),
        ],
    },
    TopicEntry::Data {
        exchange: ex!(
            "Can you check the status of order ORD-77210?",
            "Order ORD-77210 shipped yesterday via FedEx. Tracking number: FX-9921047."
        ),
        sql: "SELECT status, current_location FROM orders WHERE order_id = 'ORD-77210'",
        follow_ups: &[
            ex!(
                "Which carrier is delivering it?",
                "It shipped via FedEx. Tracking number FX-9921047 works on their site straight away."
            ),
            ex!(
                "Can you send the tracking link to my email?",
                "Done! The FedEx tracking link for FX-9921047 is on its way to the email on the order."
            ),
        ],
    },
    TopicEntry::Data {
        exchange: ex!(
            "Are there any deals on gaming products right now?",
            "Yes! There's currently a 20% discount on all GAME category products through end of month."
        ),
        sql: "SELECT p.name, pr.discount_percent FROM promotions pr JOIN products p ON pr.product_ids LIKE '%' || p.product_id || '%' WHERE p.category = 'GAME'",
        follow_ups: &[
            ex!(
                "Does that include consoles?",
                "Yes, the 20% discount applies to consoles, controllers, and all other Gaming category products."
            ),
            ex!(
                "How long does the promotion run?",
                "The gaming promotion runs through the end of the month."
            ),
        ],
    },
    TopicEntry::Data {
        exchange: ex!(
            "Which stores carry the Racing Wheel Pro?",
            "The Racing Wheel Pro is stocked at 6 store locations. The nearest to you is Store S-04."
        ),
        sql: "SELECT s.store_id, si.stock_level FROM store_inventory si JOIN stores s ON si.store_id = s.store_id JOIN products p ON si.product_id = p.product_id WHERE p.product_id = 'GAME-1202'",
        follow_ups: &[
            ex!(
                "How much is the Racing Wheel Pro?",
                "The Racing Wheel Pro (GAME-1202) is priced at $299.99."
            ),
            ex!(
                "Can a store hold one for me?",
                "Yes, any location with stock can hold one for 48 hours. I've noted Store S-04 as your pickup preference."
            ),
        ],
    },
];

pub static POLICY_ENTRIES: &[TopicEntry] = &[
    TopicEntry::Policy {
        exchange: ex!(
            "What is your return policy?",
            "We accept returns within 30 days of purchase with proof of receipt for all items in original condition."
        ),
        context: "Return Policy: All items eligible for return within 30 days in original condition with receipt...",
        follow_ups: &[
            ex!(
                "Does that apply to opened items?",
                "Opened items can still be returned within 30 days as long as they're in resellable condition; defective items are always accepted."
            ),
            ex!(
                "How long do refunds take?",
                "Once the return is inspected, refunds post to your original payment method within 5-10 business days."
            ),
        ],
    },
    TopicEntry::Policy {
        exchange: ex!(
            "How long does standard shipping take?",
            "Standard shipping takes 5–7 business days. Express shipping (2-day) is available at checkout."
        ),
        context: "Shipping Policy: Standard 5-7 business days. Express 2-day available. Free standard shipping on orders over $50...",
        follow_ups: &[
            ex!(
                "How much does express shipping cost?",
                "Express shipping (2-3 business days) is $12.99 at checkout."
            ),
            ex!(
                "Is there free shipping?",
                "Standard shipping is free on orders over $50."
            ),
        ],
    },
    TopicEntry::Policy {
        exchange: ex!(
            "Do you offer a warranty on electronics?",
            "All electronics carry a 1-year limited manufacturer warranty covering defects in materials and workmanship."
        ),
        context: "Warranty Policy: 1-year limited warranty on all electronics covering defects in materials and workmanship...",
        follow_ups: &[
            ex!(
                "Can I extend the warranty?",
                "Extended warranties are available for purchase at checkout or at any retail location."
            ),
            ex!(
                "What isn't covered?",
                "Accidental damage, water damage, and normal wear are excluded from the manufacturer warranty."
            ),
        ],
    },
    TopicEntry::Policy {
        exchange: ex!(
            "What happens if my item arrives damaged?",
            "If your item arrives damaged, contact us within 48 hours with a photo and we'll send a replacement or issue a full refund."
        ),
        context: "Damaged Items: Customer must report within 48 hours with photographic evidence. Replacement or full refund issued...",
        follow_ups: &[
            ex!(
                "What do you need from me?",
                "A photo of the damage and your order number within 48 hours of delivery is all we need."
            ),
            ex!(
                "Can I get a replacement instead of a refund?",
                "Absolutely — you can choose either a replacement or a full refund once the damage report is filed."
            ),
        ],
    },
    TopicEntry::Policy {
        exchange: ex!(
            "Is there a restocking fee for returned gaming consoles?",
            "Gaming consoles are subject to a 15% restocking fee if opened. Unopened units carry no restocking fee."
        ),
        context: "Restocking Fees: 15% restocking fee applies to opened gaming hardware. No fee for unopened items...",
        follow_ups: &[
            ex!(
                "What if the box is unopened?",
                "Unopened consoles carry no restocking fee at all."
            ),
            ex!(
                "Does the 15% fee apply to accessories too?",
                "No, the restocking fee only applies to opened gaming consoles, not accessories."
            ),
        ],
    },
    TopicEntry::Policy {
        exchange: ex!(
            "Do you ship internationally?",
            "We ship to over 40 countries. International delivery takes 10–14 business days and customs fees may apply."
        ),
        context: "International Shipping: Available to 40+ countries. 10-14 business day delivery. Customs fees are customer responsibility...",
        follow_ups: &[
            ex!(
                "Who pays the customs fees?",
                "Customs fees and import duties are the customer's responsibility and vary by country."
            ),
            ex!(
                "How long does international delivery take?",
                "International delivery takes 10-14 business days once the order leaves our warehouse."
            ),
        ],
    },
];

pub static CHAT_ENTRIES: &[TopicEntry] = &[
    TopicEntry::Chat {
        exchange: ex!("Hi, can you help me?", "Of course! What can I help you with today?"),
        follow_ups: &[ex!(
            "Actually, I found what I needed — thanks anyway!",
            "No problem at all! We're here whenever you need us."
        )],
    },
    TopicEntry::Chat {
        exchange: ex!("Hello!", "Hi there! How can I assist you today?"),
        follow_ups: &[ex!(
            "I just wanted to say the new site looks great.",
            "Thank you! I'll pass that along to the team."
        )],
    },
    TopicEntry::Chat {
        exchange: ex!(
            "Thanks, that answered my question!",
            "Happy to help! Let me know if anything else comes up."
        ),
        follow_ups: &[ex!(
            "One more thing — are you a real person?",
            "I'm OhmBot, the Ohm Sweet Ohm virtual assistant, but I can connect you to a human agent anytime."
        )],
    },
    TopicEntry::Chat {
        exchange: ex!(
            "Great, I'll go ahead and place the order.",
            "Sounds great! Feel free to reach out if you need anything after your order arrives."
        ),
        follow_ups: &[ex!(
            "Will I get a confirmation email?",
            "Yes, a confirmation email lands in your inbox within a few minutes of checkout."
        )],
    },
    TopicEntry::Chat {
        exchange: ex!(
            "Perfect, that's exactly what I was looking for.",
            "Wonderful! Let me know if you need help with anything else."
        ),
        follow_ups: &[ex!(
            "Is there a way to rate this conversation?",
            "There's a thumbs-up at the end of the chat window, and we read every comment."
        )],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pools_are_populated() {
        assert!(!DATA_ENTRIES.is_empty());
        assert!(!POLICY_ENTRIES.is_empty());
        assert!(!CHAT_ENTRIES.is_empty());
    }

    #[test]
    fn data_entries_carry_sql() {
        for entry in DATA_ENTRIES {
            match entry.workflow() {
                Workflow::DataLookup { sql } => assert!(sql.starts_with("SELECT")),
                other => panic!("data entry with {other:?}"),
            }
        }
    }

    #[test]
    fn policy_entries_carry_context() {
        for entry in POLICY_ENTRIES {
            match entry.workflow() {
                Workflow::PolicyLookup { context } => assert!(!context.is_empty()),
                other => panic!("policy entry with {other:?}"),
            }
        }
    }

    #[test]
    fn console_availability_entry_has_three_follow_ups() {
        let entry = DATA_ENTRIES
            .iter()
            .find(|e| e.exchange().question == "Is the NexGen Pro Gaming Console available?")
            .expect("console entry present");
        assert_eq!(entry.follow_ups().len(), 3);
        assert_eq!(
            entry.exchange().answer,
            "Yes, the NexGen Pro Gaming Console (GAME-1101) is available with 12 units remaining."
        );
    }

    #[test]
    fn every_entry_has_follow_ups() {
        for entry in DATA_ENTRIES.iter().chain(POLICY_ENTRIES).chain(CHAT_ENTRIES) {
            assert!(
                !entry.follow_ups().is_empty(),
                "{:?} has no follow-ups",
                entry.exchange().question
            );
        }
    }

    #[test]
    fn pick_entry_respects_route() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(pick_entry(&mut rng, Route::Database).route(), Route::Database);
            assert_eq!(pick_entry(&mut rng, Route::Policy).route(), Route::Policy);
            assert_eq!(pick_entry(&mut rng, Route::Chat).route(), Route::Chat);
        }
    }

    #[test]
    fn route_labels_and_tags_agree() {
        for route in [Route::Database, Route::Policy, Route::Chat] {
            assert_eq!(route.label().to_lowercase(), route.tag());
        }
    }
}
