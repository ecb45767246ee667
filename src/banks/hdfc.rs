//! HDFC Bank card alert template.
//!
//! Alerts are a single sentence: "Rs. <amount> spent on card ending <4> at
//! <merchant> on <DD-MM-YYYY>".

use super::BankProfile;
use once_cell::sync::Lazy;

/// Alert sender: alerts@hdfcbank.net
pub const SENDER_KEYS: &[&str] = &["hdfc"];

pub static PROFILE: Lazy<BankProfile> = Lazy::new(|| {
    BankProfile::new(
        r"Rs\.?\s*([0-9,]+\.?[0-9]*)",
        r"at\s+([^\s]+)",
        r"on\s+([0-9]{2}-[0-9]{2}-[0-9]{4})",
        r"card\s+ending\s+([0-9]{4})",
    )
});
