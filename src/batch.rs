use crate::constants::{ELIGIBLE_EXTENSIONS, TARGET_EXTENSION};
use crate::error::{ConvertError, Result};
use crate::processing::convert_file;
use crate::{fail, info, ok};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Aggregate outcome of one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Converts every eligible image under `source_root` into a mirrored WebP
/// tree under `destination_root`.
///
/// A missing source root and an empty selection are both reported and
/// treated as a completed batch with zero work, not as errors. Individual
/// file failures are caught, reported, and counted; they never abort the
/// remaining batch. The destination root is only created once there is at
/// least one file to convert.
///
/// # Returns
/// * `Ok(BatchSummary)` - Counts of converted and failed files
/// * `Err(ConvertError)` - Only if the traversal itself fails
pub fn convert_tree(source_root: &Path, destination_root: &Path) -> Result<BatchSummary> {
    if !source_root.exists() {
        crate::error!("source directory does not exist: {}", source_root.display());
        return Ok(BatchSummary::default());
    }

    let image_files = collect_image_files(source_root)?;
    if image_files.is_empty() {
        info!(
            "no jpg/jpeg/png images found under: {}",
            source_root.display()
        );
        return Ok(BatchSummary::default());
    }

    info!("found {} images to convert", image_files.len());

    let progress = ProgressBar::new(image_files.len() as u64);
    progress.set_style(ProgressStyle::default_bar());

    let mut summary = BatchSummary::default();
    for input_path in &image_files {
        match convert_single_image(input_path, source_root, destination_root) {
            Ok(output_path) => {
                summary.converted += 1;
                ok!("{} -> {}", input_path.display(), output_path.display());
            }
            Err(e) => {
                summary.failed += 1;
                fail!("{}: {}", input_path.display(), e);
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    info!(
        "done: {} converted, {} failed. output directory: {}",
        summary.converted,
        summary.failed,
        destination_root.display()
    );

    Ok(summary)
}

/// Walks `source_root` recursively and returns every eligible image file in
/// traversal order. Directories and symbolic links are skipped.
pub fn collect_image_files(source_root: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    for entry in WalkDir::new(source_root) {
        let entry = entry?;
        if entry.file_type().is_file() && is_eligible_file(entry.path()) {
            image_files.push(entry.path().to_path_buf());
        }
    }

    Ok(image_files)
}

pub fn is_eligible_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ELIGIBLE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn convert_single_image(
    input_path: &Path,
    source_root: &Path,
    destination_root: &Path,
) -> Result<PathBuf> {
    let output_path = output_path_for(source_root, destination_root, input_path)?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|_| ConvertError::DirectoryCreationFailed(parent.to_path_buf()))?;
    }

    convert_file(input_path, &output_path)?;
    Ok(output_path)
}

/// Mirrors `input_path`'s location relative to `source_root` into
/// `destination_root`, swapping the extension for the target format:
/// `src/a/b/img.png` becomes `dst/a/b/img.webp`.
pub fn output_path_for(
    source_root: &Path,
    destination_root: &Path,
    input_path: &Path,
) -> Result<PathBuf> {
    let relative = input_path
        .strip_prefix(source_root)
        .map_err(|_| ConvertError::InvalidFileName(input_path.to_path_buf()))?;
    let file_stem = input_path
        .file_stem()
        .ok_or_else(|| ConvertError::InvalidFileName(input_path.to_path_buf()))?;

    let mut output_path = destination_root.to_path_buf();
    if let Some(parent) = relative.parent() {
        output_path.push(parent);
    }
    output_path.push(format!(
        "{}.{}",
        file_stem.to_string_lossy(),
        TARGET_EXTENSION
    ));

    Ok(output_path)
}
