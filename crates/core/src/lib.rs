//! # depbump-core
//!
//! Shared types for depbump: the replacement target, the per-dialect
//! [`LineRewriter`] trait with its read-modify-write cycle, per-file outcomes
//! and the traversal configuration.

pub mod config;
pub mod dialect;
pub mod error;
pub mod file_lines;
pub mod line_change;
pub mod line_rewriter;
pub mod replacement_spec;
pub mod rewrite_outcome;

pub use config::{Config, RootConfig};
pub use dialect::Dialect;
pub use error::{RewriteError, TraverseError};
pub use file_lines::FileLines;
pub use line_change::LineChange;
pub use line_rewriter::LineRewriter;
pub use replacement_spec::ReplacementSpec;
pub use rewrite_outcome::RewriteOutcome;
