//! # depbump-maven
//!
//! Maven support for depbump.
//!
//! Rewrites the `<version>` of one dependency in `pom.xml` files using line
//! matching rather than XML parsing.

pub mod rewriter;

pub use rewriter::{MavenRewriter, update_version_tag};
