pub mod batch;
pub mod constants;
pub mod error;
pub mod logger;
pub mod processing;

pub use batch::{collect_image_files, convert_tree, is_eligible_file, output_path_for, BatchSummary};
pub use error::{ConvertError, Result};
pub use processing::{convert_file, normalize_color_mode};
