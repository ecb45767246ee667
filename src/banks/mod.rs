//! Bank Alert Template Registry
//!
//! Each supported bank gets its own module carrying the sender keys and the
//! field extraction patterns tuned to that bank's alert template. Patterns are
//! best-effort heuristics, not a byte-for-byte match of any live template.

pub mod hdfc;
pub mod icici;
pub mod sbi;

use regex::{Regex, RegexBuilder};

/// Extraction ruleset for one bank's alert template.
///
/// All patterns match case-insensitive; the first capture group of the first
/// match wins, independently per field.
pub struct BankProfile {
    pub amount: Regex,
    pub merchant: Regex,
    pub date: Regex,
    pub card: Regex,
}

impl BankProfile {
    fn new(amount: &str, merchant: &str, date: &str, card: &str) -> Self {
        Self {
            amount: compile(amount),
            merchant: compile(merchant),
            date: compile(date),
            card: compile(card),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("invalid bank template pattern")
}

/// Closed set of banks with a defined alert template.
///
/// Adding a bank means adding a variant and its profile module; the rest of
/// the pipeline is untouched. Declaration order doubles as the deterministic
/// match preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    Sbi,
    Hdfc,
    Icici,
}

impl Bank {
    pub const ALL: [Bank; 3] = [Bank::Sbi, Bank::Hdfc, Bank::Icici];

    /// Uppercase canonical name carried on every record.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sbi => "SBI",
            Self::Hdfc => "HDFC",
            Self::Icici => "ICICI",
        }
    }

    /// Case-insensitive substrings that identify this bank in a sender address.
    pub fn sender_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Sbi => sbi::SENDER_KEYS,
            Self::Hdfc => hdfc::SENDER_KEYS,
            Self::Icici => icici::SENDER_KEYS,
        }
    }

    /// Field extraction patterns for this bank's template.
    pub fn profile(&self) -> &'static BankProfile {
        match self {
            Self::Sbi => &sbi::PROFILE,
            Self::Hdfc => &hdfc::PROFILE,
            Self::Icici => &icici::PROFILE,
        }
    }

    /// Identify the bank behind a sender address.
    ///
    /// An unknown sender is a filtering outcome, not an error: the caller
    /// skips the email.
    pub fn identify(sender: &str) -> Option<Bank> {
        let sender = sender.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|bank| bank.sender_keys().iter().any(|key| sender.contains(key)))
    }
}

/// Parse an amount capture, stripping thousands separators.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().replace(',', "").parse::<f64>().ok()
}
