//! CSV export of recommendation lists.

use crate::error::{PalateError, Result};
use crate::recommend::Recommendation;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Serialize)]
struct TitleRow<'a> {
    title: &'a str,
}

/// Write the recommended titles to `path` as a one-column CSV with a
/// `title` header.
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub fn write_recommendations(path: &Path, recommendations: &[Recommendation]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| PalateError::io(path, e))?;
    write_recommendations_to(file, recommendations)?;
    info!(rows = recommendations.len(), path = %path.display(), "saved recommendations");
    Ok(())
}

/// Same as [`write_recommendations`] over any writer.
///
/// # Errors
///
/// Returns [`PalateError::Csv`] when serialization or the final flush fails.
pub fn write_recommendations_to<W: Write>(writer: W, recommendations: &[Recommendation]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    if recommendations.is_empty() {
        csv.write_record(["title"])?;
    }
    for rec in recommendations {
        csv.serialize(TitleRow { title: &rec.title })?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}
