//! Alert Email Parsing
//!
//! Turns raw `{sender, body}` messages into [`RawTransaction`] records. Email
//! transport and authentication live behind the [`EmailSource`] seam; the
//! engine only ever sees sender addresses and message bodies.

pub mod dates;
pub mod mailbox;

use crate::banks::{self, Bank};
use crate::models::RawTransaction;
use serde::{Deserialize, Serialize};

/// One raw message from an email source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub sender: String,
    pub body: String,
}

/// Fetch constraints passed to an email source.
#[derive(Debug, Clone)]
pub struct FetchFilter {
    /// Free-text search term, source-defined semantics.
    pub query: Option<String>,
    pub max_results: usize,
}

impl Default for FetchFilter {
    fn default() -> Self {
        Self {
            query: None,
            max_results: 50,
        }
    }
}

/// Source of alert messages: a mail provider, a mailbox dump, a test fixture.
pub trait EmailSource {
    fn fetch(&self, filter: &FetchFilter) -> anyhow::Result<Vec<EmailMessage>>;
}

/// Extract a transaction record from one alert email.
///
/// Returns `None` when the sender matches no supported bank; the email is
/// skipped, not an error. Fields are extracted independently: a pattern that
/// fails to match leaves that field's documented default in place and never
/// blocks the other fields.
pub fn parse_email(body: &str, sender: &str) -> Option<RawTransaction> {
    let bank = Bank::identify(sender)?;
    let profile = bank.profile();

    let amount = profile
        .amount
        .captures(body)
        .and_then(|caps| banks::parse_amount(&caps[1]))
        .unwrap_or(0.0);

    let merchant = profile
        .merchant
        .captures(body)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let date_text = profile
        .date
        .captures(body)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default();

    let card_last4 = profile
        .card
        .captures(body)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default();

    if amount == 0.0 {
        log::debug!("{} alert without a usable amount, defaulting to 0.0", bank.name());
    }

    Some(RawTransaction {
        amount,
        merchant,
        date: dates::parse_date(&date_text),
        card_last4,
        bank: bank.name().to_string(),
        raw_body: body.to_string(),
    })
}
