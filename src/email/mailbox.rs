//! File-backed email source.
//!
//! Reads a mailbox dump: a JSON array of `{sender, body}` objects. Used by
//! the CLI and as a stand-in for a live mail provider in tests.

use super::{EmailMessage, EmailSource, FetchFilter};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub struct MailboxFile {
    path: PathBuf,
}

impl MailboxFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EmailSource for MailboxFile {
    fn fetch(&self, filter: &FetchFilter) -> Result<Vec<EmailMessage>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read mailbox file {}", self.path.display()))?;
        let mut messages: Vec<EmailMessage> =
            serde_json::from_str(&raw).context("mailbox file is not a JSON message array")?;

        if let Some(query) = &filter.query {
            let query = query.to_lowercase();
            messages.retain(|m| m.body.to_lowercase().contains(&query));
        }
        messages.truncate(filter.max_results);

        Ok(messages)
    }
}
