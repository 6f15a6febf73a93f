pub mod format;
pub mod html;
pub mod text;

pub use format::{escape_html, format_date, format_price};
