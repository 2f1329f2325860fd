use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use sfd_core::{ExtractionResult, Result};

use crate::sql;

/// One date's generated migration file. Created once per run; after the
/// write it belongs entirely to the external store-loading process.
#[derive(Debug, Clone)]
pub struct MigrationArtifact {
    pub date: NaiveDate,
    pub sql: String,
    pub path: PathBuf,
}

/// Renders and persists the migration file for one date. The output
/// directory is created if absent; an earlier file for the same date is
/// overwritten, which is safe because re-extraction is idempotent.
pub fn write_artifact(
    output_dir: &Path,
    date: NaiveDate,
    result: &ExtractionResult,
) -> Result<MigrationArtifact> {
    let sql = sql::render(date, result);

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(sql::filename(date));
    fs::write(&path, &sql)?;
    info!("✓ Generated SQL file: {}", path.display());

    Ok(MigrationArtifact { date, sql, path })
}
