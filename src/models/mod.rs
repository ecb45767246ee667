use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Transaction fields extracted from one alert email, before categorization.
///
/// Every field carries a documented default so a partially matching template
/// still yields a record: amount 0.0, merchant "Unknown", card empty, date
/// falls back to the current time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub amount: f64,
    pub merchant: String,
    pub date: NaiveDateTime,
    pub card_last4: String,
    /// Uppercase canonical bank name, e.g. "SBI".
    pub bank: String,
    /// Original message body, kept for diagnostics. Never exported.
    #[serde(skip)]
    pub raw_body: String,
}

/// Terminal transaction record: extraction result plus category pair.
///
/// Field order is the export contract for downstream reporting:
/// date, merchant, amount, category, subcategory, bank, card_last4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDateTime,
    pub merchant: String,
    pub amount: f64,
    pub category: String,
    pub subcategory: String,
    pub bank: String,
    pub card_last4: String,
    #[serde(skip)]
    pub raw_body: String,
}

impl Transaction {
    pub fn from_raw(raw: RawTransaction, category: String, subcategory: String) -> Self {
        Self {
            date: raw.date,
            merchant: raw.merchant,
            amount: raw.amount,
            category,
            subcategory,
            bank: raw.bank,
            card_last4: raw.card_last4,
            raw_body: raw.raw_body,
        }
    }
}

/// Inclusive date window for post-assembly filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// One subcategory label with its display color.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Subcategory {
    pub name: &'static str,
    pub color: &'static str,
}

/// One top-level spending category.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub color: &'static str,
    pub subcategories: [Subcategory; 3],
}

/// Closed label space for categorization.
///
/// Both the remote classifier prompt and the keyword fallback draw from this
/// table; a (category, subcategory) pair outside it is never attached to a
/// transaction.
pub const CATEGORIES: [Category; 5] = [
    Category {
        name: "Food & Dining",
        color: "#FF6B6B",
        subcategories: [
            Subcategory { name: "Restaurants", color: "#FF4757" },
            Subcategory { name: "Fast Food", color: "#FF3838" },
            Subcategory { name: "Groceries", color: "#FF6B6B" },
        ],
    },
    Category {
        name: "Entertainment",
        color: "#4ECDC4",
        subcategories: [
            Subcategory { name: "Netflix", color: "#E50914" },
            Subcategory { name: "Amazon Prime", color: "#FF9900" },
            Subcategory { name: "Movies", color: "#4ECDC4" },
        ],
    },
    Category {
        name: "Shopping",
        color: "#45B7D1",
        subcategories: [
            Subcategory { name: "Clothing", color: "#45B7D1" },
            Subcategory { name: "Electronics", color: "#3498DB" },
            Subcategory { name: "General", color: "#5DADE2" },
        ],
    },
    Category {
        name: "Transportation",
        color: "#FFA07A",
        subcategories: [
            Subcategory { name: "Fuel", color: "#FF7F50" },
            Subcategory { name: "Public Transport", color: "#FFA07A" },
            Subcategory { name: "Taxi/Ride Share", color: "#FF8C69" },
        ],
    },
    Category {
        name: "Bills & Utilities",
        color: "#98D8C8",
        subcategories: [
            Subcategory { name: "Electricity", color: "#98D8C8" },
            Subcategory { name: "Internet", color: "#7FCDCD" },
            Subcategory { name: "Phone", color: "#66CDAA" },
        ],
    },
];

/// Check a (category, subcategory) pair against the taxonomy.
pub fn is_valid_pair(category: &str, subcategory: &str) -> bool {
    CATEGORIES.iter().any(|c| {
        c.name == category && c.subcategories.iter().any(|s| s.name == subcategory)
    })
}
