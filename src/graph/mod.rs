// src/graph/mod.rs
pub mod index;
pub mod sanitize;

pub use index::GraphIndex;
pub use sanitize::{clean, clean_with_report, CleanReport, SanitizeOptions};
