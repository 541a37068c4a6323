pub mod constants;
pub mod impose;
pub mod layout;
mod options;
pub mod render;
mod summary;
mod types;

pub use impose::{crop_page_all_sides, default_output_path, impose, load_pdf, save_pdf};
pub use options::*;
pub use summary::{ImpositionSummary, calculate_summary};
pub use types::*;
