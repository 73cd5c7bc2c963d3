use cover_press::constants::{DESTINATION_DIR_NAME, SOURCE_DIR_NAME};
use cover_press::error::Result;
use cover_press::{convert_tree, error};
use std::env;
use std::path::PathBuf;

fn main() {
    // Per-file failures are already counted and reported inside the batch;
    // setup failures are reported here. Neither changes the exit status.
    if let Err(e) = run() {
        error!("{}", e);
    }
}

fn run() -> Result<()> {
    let (source_root, destination_root) = default_roots()?;
    convert_tree(&source_root, &destination_root)?;
    Ok(())
}

/// Source and destination are fixed siblings of the executable:
/// `pictures/` in, `covers/` out.
fn default_roots() -> Result<(PathBuf, PathBuf)> {
    let exe = env::current_exe()?;
    let base = exe
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok((base.join(SOURCE_DIR_NAME), base.join(DESTINATION_DIR_NAME)))
}
