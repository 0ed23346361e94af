//! Interview question collections with read-only lookup.
//!
//! Bundled collections are parsed once on first use and shared for the rest
//! of the process; see [`library`].

pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod render;

pub use content::{
    filter_by_category, filter_by_difficulty, get_all, get_by_id, library, Collection,
    ContentRecord, Difficulty, Library, TestCase,
};
pub use error::{Error, Result};
