use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use sfd_core::{Error, Result, RunSummary};
use sfd_extract::NewsletterDoc;

/// Runs the full extraction pipeline for one `(date, html file)` pair:
/// validate the date, read the export, extract article stubs, write the
/// migration file. Strictly linear; a failure at any step ends the run and
/// leaves no artifact behind.
pub fn run(date: &str, html_path: &Path, output_dir: &Path) -> Result<RunSummary> {
    let date = validate_date(date)?;

    info!("📰 Processing newsletter...");
    let html = fs::read_to_string(html_path)?;
    let doc = NewsletterDoc::parse(&html);

    let result = sfd_extract::extract(&doc)?;
    info!("✓ Found {} articles", result.len());

    let artifact = sfd_artifact::write_artifact(output_dir, date, &result)?;

    Ok(RunSummary {
        date,
        articles_count: result.len(),
        artifact_path: artifact.path,
    })
}

/// Accepts only the exact `YYYY-MM-DD` shape, then checks it names a real
/// calendar date. Runs before any file I/O.
fn validate_date(raw: &str) -> Result<NaiveDate> {
    let shape_ok = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(Error::InvalidDate(format!(
            "{raw}: expected YYYY-MM-DD format"
        )));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(format!("{raw}: not a valid calendar date")))
}
