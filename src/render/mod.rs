pub mod text;

pub use text::{render_record, render_summary};
