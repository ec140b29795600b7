//! Display formatting for terminal output
//!
//! Provides helpers shared by the report views and table formatting for
//! categories.

pub mod category;
pub mod report;

pub use category::{format_category_list, format_palette};
pub use report::{format_bar, format_percentage, truncate};
