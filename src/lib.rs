pub mod error;
pub mod rewrite;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use rewrite::{rewrite_tree, RunSummary};
