//! Two-Tier Transaction Categorization
//!
//! The remote classifier runs first when a token is configured; any failure
//! falls through to the deterministic keyword rules. The fallback is total,
//! so categorization never surfaces an error to the pipeline.

pub mod remote;
pub mod rules;

use crate::models::CATEGORIES;
use remote::{ClassifyError, PollPolicy, RemoteClassifier};

/// Classifier construction settings.
///
/// Credential presence selects the strategy; there is no ambient process
/// state. Repeated identical merchant/amount pairs are re-submitted, results
/// are not cached.
#[derive(Debug, Clone, Default)]
pub struct ClassifierConfig {
    pub api_token: Option<String>,
    pub policy: PollPolicy,
}

pub struct Categorizer {
    remote: Option<RemoteClassifier>,
}

impl Categorizer {
    pub fn new(config: ClassifierConfig) -> Self {
        let remote = config.api_token.and_then(|token| {
            match RemoteClassifier::new(token, config.policy) {
                Ok(client) => Some(client),
                Err(err) => {
                    log::warn!("remote classifier unavailable, keyword rules only: {err}");
                    None
                }
            }
        });
        Self { remote }
    }

    /// Assign a (category, subcategory) pair to a merchant/amount.
    pub async fn categorize(&self, merchant: &str, amount: f64) -> (String, String) {
        let outcome = match &self.remote {
            Some(client) => client.classify(merchant, amount).await,
            None => Err(ClassifyError::NoToken),
        };
        resolve(outcome, merchant)
    }
}

/// Funnel a remote outcome into a final pair.
///
/// Every failure mode lands on the same deterministic fallback for a given
/// merchant, so the remote path is all-or-nothing.
fn resolve(outcome: Result<(String, String), ClassifyError>, merchant: &str) -> (String, String) {
    match outcome {
        Ok(pair) => pair,
        Err(ClassifyError::NoToken) => rules::categorize(merchant),
        Err(err) => {
            log::warn!("remote classification failed ({err}), using keyword rules");
            rules::categorize(merchant)
        }
    }
}

/// Build the classification prompt over the closed taxonomy.
pub fn build_prompt(merchant: &str, amount: f64) -> String {
    let mut category_lines = String::new();
    for category in &CATEGORIES {
        let subs: Vec<&str> = category.subcategories.iter().map(|s| s.name).collect();
        category_lines.push_str(&format!("- {} ({})\n", category.name, subs.join(", ")));
    }

    format!(
        "Categorize this transaction:\n\
         Merchant: {merchant}\n\
         Amount: \u{20b9}{amount}\n\
         \n\
         Choose from these categories:\n\
         {category_lines}\n\
         Respond with only: Category|Subcategory\n\
         Example: Food & Dining|Restaurants"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_remote_failure_mode_falls_back_identically() {
        let merchant = "SWIGGY";
        let expected = rules::categorize(merchant);

        let failures = [
            ClassifyError::MalformedReply("Food & Dining Restaurants".to_string()),
            ClassifyError::Failed(remote::PredictionStatus::Failed),
            ClassifyError::PollCeiling(10),
            ClassifyError::DeadlineExceeded,
            ClassifyError::Rejected(401),
            ClassifyError::SubmitMalformed,
            ClassifyError::OutsideTaxonomy("Gambling".to_string(), "Casinos".to_string()),
        ];
        for failure in failures {
            assert_eq!(resolve(Err(failure), merchant), expected);
        }
    }

    #[test]
    fn test_successful_remote_pair_passes_through() {
        let pair = ("Entertainment".to_string(), "Movies".to_string());
        assert_eq!(resolve(Ok(pair.clone()), "PVR CINEMA"), pair);
    }

    #[test]
    fn test_prompt_names_taxonomy_and_format() {
        let prompt = build_prompt("SWIGGY", 349.0);

        for category in &CATEGORIES {
            assert!(prompt.contains(category.name));
        }
        assert!(prompt.contains("Merchant: SWIGGY"));
        assert!(prompt.contains("\u{20b9}349"));
        assert!(prompt.contains("Category|Subcategory"));
    }

    #[tokio::test]
    async fn test_no_token_uses_keyword_rules() {
        let categorizer = Categorizer::new(ClassifierConfig::default());
        assert_eq!(
            categorizer.categorize("TAJ RESTAURANT", 1200.0).await,
            ("Food & Dining".to_string(), "Restaurants".to_string())
        );
    }
}
