//! Remote classifier client (Replicate predictions API).
//!
//! Submit-then-poll: submission returns a prediction handle, and the handle is
//! polled on a fixed interval until it reports a terminal status or the
//! bounded retry policy gives up. Every failure mode surfaces as a
//! [`ClassifyError`]; the categorizer funnels all of them into the keyword
//! fallback, so nothing here ever reaches a caller as an error.

use crate::models;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

const API_URL: &str = "https://api.replicate.com/v1/models/openai/gpt-4o-mini/predictions";

const SYSTEM_PROMPT: &str =
    "You are a financial categorization expert. Respond only with Category|Subcategory format.";

/// Per-request HTTP timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Why a remote classification attempt produced no usable label.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("no API token configured")]
    NoToken,
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("submission rejected with HTTP {0}")]
    Rejected(u16),
    #[error("submission reply carried no poll URL")]
    SubmitMalformed,
    #[error("prediction finished with status {0:?}")]
    Failed(PredictionStatus),
    #[error("prediction still pending after {0} polls")]
    PollCeiling(u32),
    #[error("deadline expired while polling")]
    DeadlineExceeded,
    #[error("reply not in Category|Subcategory form: {0:?}")]
    MalformedReply(String),
    #[error("reply label outside the taxonomy: {0}|{1}")]
    OutsideTaxonomy(String, String),
}

/// Bounded poll policy.
///
/// A classification blocks for at most `max_polls * interval` unless the
/// optional deadline cuts it short; the deadline is the caller's cancellation
/// handle for an otherwise in-flight poll loop.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_polls: u32,
    pub deadline: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_polls: 10,
            deadline: None,
        }
    }
}

#[derive(Serialize)]
struct PredictionRequest<'a> {
    input: PredictionInput<'a>,
}

#[derive(Serialize)]
struct PredictionInput<'a> {
    prompt: &'a str,
    system_prompt: &'a str,
}

#[derive(Deserialize)]
struct SubmitReply {
    urls: Option<PredictionUrls>,
}

#[derive(Deserialize)]
struct PredictionUrls {
    get: Option<String>,
}

/// Prediction lifecycle states reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

impl PredictionStatus {
    fn is_pending(self) -> bool {
        matches!(self, Self::Starting | Self::Processing)
    }
}

#[derive(Deserialize)]
struct PredictionReply {
    status: PredictionStatus,
    output: Option<PredictionOutput>,
}

/// The service returns output either as one string or as a list of chunks.
#[derive(Deserialize)]
#[serde(untagged)]
enum PredictionOutput {
    Text(String),
    Chunks(Vec<String>),
}

impl PredictionOutput {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Chunks(chunks) => chunks.concat(),
        }
    }
}

pub struct RemoteClassifier {
    client: reqwest::Client,
    token: String,
    policy: PollPolicy,
}

impl RemoteClassifier {
    pub fn new(token: String, policy: PollPolicy) -> Result<Self, ClassifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, token, policy })
    }

    /// Submit a classification request and poll it to completion.
    ///
    /// Fully transactional: either a validated (category, subcategory) pair or
    /// an error, never a partial result.
    pub async fn classify(
        &self,
        merchant: &str,
        amount: f64,
    ) -> Result<(String, String), ClassifyError> {
        let prompt = super::build_prompt(merchant, amount);
        let request = PredictionRequest {
            input: PredictionInput {
                prompt: &prompt,
                system_prompt: SYSTEM_PROMPT,
            },
        };

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if status != reqwest::StatusCode::CREATED {
            return Err(ClassifyError::Rejected(status.as_u16()));
        }

        let submit: SubmitReply = response.json().await?;
        let poll_url = submit
            .urls
            .and_then(|urls| urls.get)
            .ok_or(ClassifyError::SubmitMalformed)?;

        let output = self.poll(&poll_url).await?;
        parse_reply(&output)
    }

    /// Poll the prediction handle under the bounded retry policy.
    async fn poll(&self, url: &str) -> Result<String, ClassifyError> {
        let deadline = self.policy.deadline.map(|d| Instant::now() + d);

        for attempt in 1..=self.policy.max_polls {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    return Err(ClassifyError::DeadlineExceeded);
                }
            }

            let reply: PredictionReply = self
                .client
                .get(url)
                .bearer_auth(&self.token)
                .send()
                .await?
                .json()
                .await?;

            match reply.status {
                PredictionStatus::Succeeded => {
                    return Ok(reply
                        .output
                        .map(PredictionOutput::into_text)
                        .unwrap_or_default());
                }
                status if status.is_pending() => {
                    log::debug!(
                        "prediction pending ({status:?}), poll {attempt}/{}",
                        self.policy.max_polls
                    );
                    tokio::time::sleep(self.policy.interval).await;
                }
                status => return Err(ClassifyError::Failed(status)),
            }
        }

        Err(ClassifyError::PollCeiling(self.policy.max_polls))
    }
}

/// Split a raw reply into a validated (category, subcategory) pair.
///
/// The contract is a single `Category|Subcategory` line. A missing delimiter,
/// an empty half, or a label outside the closed taxonomy all count as a
/// malformed reply.
pub fn parse_reply(output: &str) -> Result<(String, String), ClassifyError> {
    let trimmed = output.trim();
    let (category, subcategory) = trimmed
        .split_once('|')
        .ok_or_else(|| ClassifyError::MalformedReply(trimmed.to_string()))?;

    let category = category.trim().to_string();
    let subcategory = subcategory.trim().to_string();
    if category.is_empty() || subcategory.is_empty() {
        return Err(ClassifyError::MalformedReply(trimmed.to_string()));
    }
    if !models::is_valid_pair(&category, &subcategory) {
        return Err(ClassifyError::OutsideTaxonomy(category, subcategory));
    }

    Ok((category, subcategory))
}
