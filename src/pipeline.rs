//! Batch processing: alert emails in, categorized transactions out.

use crate::categorize::Categorizer;
use crate::email::{self, EmailSource, FetchFilter};
use crate::models::{DateRange, RawTransaction, Transaction};
use anyhow::Result;

/// Records worth categorizing: extraction produced a positive amount.
/// Classification cost is only spent on plausible transactions.
pub fn is_plausible(raw: &RawTransaction) -> bool {
    raw.amount > 0.0
}

/// Attach a category pair to a parsed record.
pub fn assemble(raw: RawTransaction, category: String, subcategory: String) -> Transaction {
    Transaction::from_raw(raw, category, subcategory)
}

/// Run the extraction pipeline over an email source.
///
/// Emails are processed sequentially and independently; an email from an
/// unknown sender or without a plausible amount is skipped and the batch
/// continues. Only a source fetch failure is surfaced, since with no messages
/// there is nothing to degrade to.
pub async fn process(
    source: &dyn EmailSource,
    filter: &FetchFilter,
    categorizer: &Categorizer,
    range: Option<DateRange>,
) -> Result<Vec<Transaction>> {
    let messages = source.fetch(filter)?;
    let mut transactions = Vec::new();

    for message in &messages {
        let raw = match email::parse_email(&message.body, &message.sender) {
            Some(raw) => raw,
            None => {
                log::debug!("skipping email from unsupported sender {}", message.sender);
                continue;
            }
        };
        if !is_plausible(&raw) {
            log::warn!("skipping {} alert without a positive amount", raw.bank);
            continue;
        }

        let (category, subcategory) = categorizer.categorize(&raw.merchant, raw.amount).await;
        let txn = assemble(raw, category, subcategory);

        if let Some(range) = range {
            if !range.contains(txn.date.date()) {
                continue;
            }
        }
        transactions.push(txn);
    }

    log::info!(
        "extracted {} transactions from {} emails",
        transactions.len(),
        messages.len()
    );
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorize::ClassifierConfig;
    use crate::email::EmailMessage;
    use chrono::NaiveDate;

    struct FixedSource(Vec<EmailMessage>);

    impl EmailSource for FixedSource {
        fn fetch(&self, _filter: &FetchFilter) -> Result<Vec<EmailMessage>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl EmailSource for FailingSource {
        fn fetch(&self, _filter: &FetchFilter) -> Result<Vec<EmailMessage>> {
            anyhow::bail!("mailbox offline")
        }
    }

    fn message(sender: &str, body: &str) -> EmailMessage {
        EmailMessage {
            sender: sender.to_string(),
            body: body.to_string(),
        }
    }

    fn fallback_categorizer() -> Categorizer {
        Categorizer::new(ClassifierConfig::default())
    }

    #[tokio::test]
    async fn test_batch_survives_bad_emails() {
        let source = FixedSource(vec![
            // Unknown sender, skipped
            message("promo@example.com", "Rs. 100.00 at NOWHERE on 01-01-2025"),
            // Known sender but nothing extractable: amount 0.0, filtered
            message("alerts@hdfcbank.net", "Dear customer, your statement is ready."),
            // Good record
            message(
                "alerts@hdfcbank.net",
                "Rs. 500.00 spent via card ending 5521 at SWIGGY on 21-06-2025.",
            ),
        ]);

        let transactions = process(
            &source,
            &FetchFilter::default(),
            &fallback_categorizer(),
            None,
        )
        .await
        .unwrap();

        assert_eq!(transactions.len(), 1);
        let txn = &transactions[0];
        assert_eq!(txn.merchant, "SWIGGY");
        assert_eq!(txn.amount, 500.0);
        assert_eq!(txn.category, "Food & Dining");
        assert_eq!(txn.subcategory, "Fast Food");
        assert_eq!(txn.bank, "HDFC");
    }

    #[tokio::test]
    async fn test_date_range_filter_is_inclusive() {
        let source = FixedSource(vec![
            message(
                "alerts@hdfcbank.net",
                "Rs. 200.00 spent via card ending 1111 at UBER on 01-06-2025.",
            ),
            message(
                "alerts@hdfcbank.net",
                "Rs. 300.00 spent via card ending 1111 at UBER on 15-07-2025.",
            ),
        ]);
        let range = DateRange {
            start: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        };

        let transactions = process(
            &source,
            &FetchFilter::default(),
            &fallback_categorizer(),
            Some(range),
        )
        .await
        .unwrap();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].amount, 200.0);
    }

    #[tokio::test]
    async fn test_source_failure_is_surfaced() {
        let result = process(
            &FailingSource,
            &FetchFilter::default(),
            &fallback_categorizer(),
            None,
        )
        .await;
        assert!(result.is_err());
    }

    #[test]
    fn test_plausibility_predicate() {
        let raw = RawTransaction {
            amount: 0.0,
            merchant: "Unknown".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
            card_last4: String::new(),
            bank: "SBI".to_string(),
            raw_body: String::new(),
        };
        assert!(!is_plausible(&raw));
        assert!(is_plausible(&RawTransaction { amount: 0.01, ..raw }));
    }
}
