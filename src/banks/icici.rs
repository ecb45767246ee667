//! ICICI Bank card alert template.
//!
//! Same sentence shape as HDFC but amounts are prefixed "INR" and the
//! merchant capture runs to end of line (ICICI keeps the merchant last).

use super::BankProfile;
use once_cell::sync::Lazy;

/// Alert senders: alert@icicibank.com, credit_cards@icicibank.com
pub const SENDER_KEYS: &[&str] = &["icici"];

pub static PROFILE: Lazy<BankProfile> = Lazy::new(|| {
    BankProfile::new(
        r"INR\s*([0-9,]+\.?[0-9]*)",
        r"at\s+([^\n\r]+)",
        r"on\s+([0-9]{2}-[0-9]{2}-[0-9]{4})",
        r"Card\s+ending\s+([0-9]{4})",
    )
});
