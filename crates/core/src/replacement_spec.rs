use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

/// What to rewrite and where not to look.
///
/// Built once per run and shared read-only by the traversal and every
/// rewriter. Exclusions are stored as absolute paths and matched by exact
/// equality against the absolute path of each visited directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementSpec {
    artifact_id: String,
    new_version: String,
    exclusions: HashSet<PathBuf>,
}

impl ReplacementSpec {
    pub fn new(
        artifact_id: impl Into<String>,
        new_version: impl Into<String>,
        exclusions: impl IntoIterator<Item = PathBuf>,
    ) -> Self {
        Self {
            artifact_id: artifact_id.into(),
            new_version: new_version.into(),
            exclusions: exclusions.into_iter().map(|p| absolute(&p)).collect(),
        }
    }

    #[must_use]
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    #[must_use]
    pub fn new_version(&self) -> &str {
        &self.new_version
    }

    #[must_use]
    pub fn is_excluded(&self, dir: &Path) -> bool {
        self.exclusions.contains(&absolute(dir))
    }
}

// Lexical only: symlinks are not resolved, matching how the traversal builds
// entry paths.
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
