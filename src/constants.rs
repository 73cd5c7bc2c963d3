/// Lossy WebP quality on libwebp's 0-100 scale. Higher keeps more detail
/// at a larger file size.
pub const WEBP_QUALITY: f32 = 80.0;

/// libwebp compression effort (`method`) on its 0-6 scale. Higher spends
/// more CPU time for a smaller result.
pub const WEBP_METHOD: i32 = 6;

pub const TARGET_EXTENSION: &str = "webp";

/// Extensions selected during traversal, compared case-insensitively.
pub const ELIGIBLE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

// Fixed source/destination directories, resolved next to the executable.
pub const SOURCE_DIR_NAME: &str = "pictures";
pub const DESTINATION_DIR_NAME: &str = "covers";
