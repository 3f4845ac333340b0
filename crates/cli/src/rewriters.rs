use anyhow::Result;
use depbump_core::{LineRewriter, ReplacementSpec};
use depbump_gradle::GradleRewriter;
use depbump_maven::MavenRewriter;

// rewriter list

/// # Errors
/// Returns error if a rewriter cannot compile its pattern for `spec`.
pub fn get_rewriters(spec: &ReplacementSpec) -> Result<Vec<Box<dyn LineRewriter>>> {
    Ok(vec![
        Box::new(MavenRewriter::new(spec)),
        Box::new(GradleRewriter::new(spec)?),
    ])
}
