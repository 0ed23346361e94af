mod collection;
mod library;
mod record;

pub use collection::Collection;
pub use library::{filter_by_category, filter_by_difficulty, get_all, get_by_id, library, Library};
pub use record::{ContentRecord, Difficulty, TestCase};
