//! Product catalog — loaded once at startup, immutable afterwards.

pub mod matcher;
pub mod types;

pub use matcher::{match_by_style_tags, FALLBACK_COUNT};
pub use types::{Catalog, Product};
