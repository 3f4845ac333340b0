//! # depbump-gradle
//!
//! Gradle support for depbump.
//!
//! Rewrites `group:artifact:version` dependency coordinates in Groovy
//! `build.gradle` files, one line at a time.

pub mod rewriter;

pub use rewriter::GradleRewriter;
