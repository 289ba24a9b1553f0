//! Zip packaging of generation content.
//!
//! Archives are published atomically: entries are written to an
//! exclusively created `.part` sibling and renamed onto the final path
//! only after the zip directory is finalized. A job record therefore
//! never references a partial file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use zip::write::FileOptions;
use zip::ZipWriter;

use super::content::GenerationContent;
use super::jobs::JobId;

/// Archive packaging errors, wrapped by the orchestrator as the only
/// caller-visible failure kind.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip encoding error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Basename of the published archive for a job.
pub fn archive_file_name(id: JobId) -> String {
    format!("site_{}.zip", id)
}

/// Package content into `{output_root}/site_{id}.zip`.
///
/// Creates the output root if missing. Entries in order: `index.html`,
/// `styles.css`, then each asset at its relative path. The job id
/// partitions the namespace, so concurrent writes never share a path.
pub fn write_archive(
    content: GenerationContent,
    output_root: &Path,
    id: JobId,
) -> Result<PathBuf, ArchiveError> {
    fs::create_dir_all(output_root)?;

    let final_path = output_root.join(archive_file_name(id));
    let part_path = output_root.join(format!("{}.part", archive_file_name(id)));

    tracing::debug!(archive = %final_path.display(), "Writing archive");

    let published = write_entries(&part_path, &content)
        .and_then(|_| fs::rename(&part_path, &final_path).map_err(ArchiveError::from));

    match published {
        Ok(()) => Ok(final_path),
        Err(e) => {
            // Never leave a half-written part file behind.
            let _ = fs::remove_file(&part_path);
            Err(e)
        }
    }
}

fn write_entries(part_path: &Path, content: &GenerationContent) -> Result<(), ArchiveError> {
    // create_new: a reused job id must fail loudly, not overwrite an
    // in-flight write.
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(part_path)?;

    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file("index.html", options)?;
    zip.write_all(content.html.as_bytes())?;

    zip.start_file("styles.css", options)?;
    zip.write_all(content.css.as_bytes())?;

    for asset in &content.assets {
        zip.start_file(asset.path.as_str(), options)?;
        zip.write_all(&asset.bytes)?;
    }

    zip.finish()?;
    Ok(())
}
