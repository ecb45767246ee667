//! SBI (State Bank of India) debit card alert template.
//!
//! ATM/POS alerts arrive as a label/value table; after HTML-to-text flattening
//! each value follows its label on the same line.

use super::BankProfile;
use once_cell::sync::Lazy;

/// Alert sender: donotreply.sbiatm@alerts.sbi.co.in
pub const SENDER_KEYS: &[&str] = &["sbi"];

pub static PROFILE: Lazy<BankProfile> = Lazy::new(|| {
    BankProfile::new(
        r"Amount \(INR\)\s*([0-9,]+\.?[0-9]*)",
        r"Terminal Owner Name\s*([^\n\r]+)",
        r"Date & Time\s*([^\n\r]+)",
        r"Last 4 Digit of Card\s*([^\n\r]+)",
    )
});
