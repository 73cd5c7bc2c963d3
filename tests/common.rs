use assert_cmd::cargo::cargo_bin;
use image::DynamicImage;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Copies the built binary into `temp_dir` so that its fixed `pictures/`
/// and `covers/` roots resolve inside the temp directory instead of
/// `target/debug/`.
pub fn stage_binary(temp_dir: &Path) -> PathBuf {
    let staged = temp_dir.join("cover-press");
    fs::copy(cargo_bin("cover-press"), &staged).unwrap();
    staged
}

/// Writes a real encoded image; the format is inferred from the path's
/// extension by `DynamicImage::save`.
pub fn write_valid_image(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    DynamicImage::new_rgb8(width, height).save(path).unwrap();
}

pub fn write_zero_byte_file(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    File::create(path).unwrap();
}
