//! CLI harness: run the extraction pipeline over a mailbox dump.
//!
//! Usage: mailspend <mailbox.json> [--from YYYY-MM-DD --to YYYY-MM-DD] [--query TEXT]
//!
//! The mailbox file is a JSON array of {sender, body} objects. Set
//! REPLICATE_API_TOKEN to enable remote classification; without it the
//! keyword fallback runs alone.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use mailspend::email::mailbox::MailboxFile;
use mailspend::{pipeline, Categorizer, ClassifierConfig, DateRange, FetchFilter};
use std::collections::{BTreeMap, BTreeSet};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut path = None;
    let mut from = None;
    let mut to = None;
    let mut query = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--from" => from = Some(parse_day(&mut args, "--from")?),
            "--to" => to = Some(parse_day(&mut args, "--to")?),
            "--query" => match args.next() {
                Some(value) => query = Some(value),
                None => bail!("--query needs a value"),
            },
            _ if path.is_none() => path = Some(arg),
            _ => bail!("unexpected argument: {arg}"),
        }
    }
    let Some(path) = path else {
        bail!("usage: mailspend <mailbox.json> [--from YYYY-MM-DD --to YYYY-MM-DD] [--query TEXT]");
    };
    let range = match (from, to) {
        (Some(start), Some(end)) => Some(DateRange { start, end }),
        (None, None) => None,
        _ => bail!("--from and --to must be given together"),
    };

    let source = MailboxFile::new(&path);
    let filter = FetchFilter {
        query,
        ..Default::default()
    };
    let categorizer = Categorizer::new(ClassifierConfig {
        api_token: env::var("REPLICATE_API_TOKEN").ok().filter(|t| !t.is_empty()),
        ..Default::default()
    });

    let transactions = pipeline::process(&source, &filter, &categorizer, range).await?;

    println!("=== Transactions ===");
    for txn in &transactions {
        println!("{}", serde_json::to_string(txn)?);
    }

    let total: f64 = transactions.iter().map(|t| t.amount).sum();
    let merchants: BTreeSet<&str> = transactions.iter().map(|t| t.merchant.as_str()).collect();

    println!("\n=== Summary ===");
    println!("Transactions: {}", transactions.len());
    println!("Total: \u{20b9}{total:.2}");
    if !transactions.is_empty() {
        println!("Average: \u{20b9}{:.2}", total / transactions.len() as f64);
    }
    println!("Unique merchants: {}", merchants.len());

    let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
    for txn in &transactions {
        *by_category.entry(txn.category.as_str()).or_default() += txn.amount;
    }
    println!("\n=== Spending by Category ===");
    for (category, amount) in by_category {
        println!("{category}: \u{20b9}{amount:.2}");
    }

    Ok(())
}

fn parse_day(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<NaiveDate> {
    let Some(value) = args.next() else {
        bail!("{flag} needs a YYYY-MM-DD value");
    };
    Ok(NaiveDate::parse_from_str(&value, "%Y-%m-%d")?)
}
