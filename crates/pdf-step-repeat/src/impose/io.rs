//! Document I/O operations for imposition

use crate::constants::DEFAULT_OUTPUT_SUFFIX;
use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Save the imposed document.
///
/// The document is serialized in memory first, so a failure never leaves
/// a partial file behind.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, StepRepeatError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Output path used when none is given: `<stem>_PRINT<ext>` next to the
/// input, with `.pdf` when the input has no extension.
pub fn default_output_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pdf".to_string());

    input.with_file_name(format!("{stem}{DEFAULT_OUTPUT_SUFFIX}.{extension}"))
}
