use serde::Deserialize;
use std::path::PathBuf;

/// Directory tree to scan, with subtrees to skip.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RootConfig {
    pub path: PathBuf,

    /// Directories relative to `path` that are never descended into
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl RootConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            exclude: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_exclude(mut self, exclude: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude = exclude.into_iter().map(Into::into).collect();
        self
    }

    /// Exclusions joined to this root
    pub fn exclusions(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.exclude.iter().map(|e| self.path.join(e))
    }
}

/// Traversal layout, loaded from a JSON file or built from command-line roots.
///
/// Roots are processed in order. The default reproduces the checkout layout
/// the tool was written for: the shared `all-projects` tree with four
/// checked-out projects excluded, then those four projects scanned from their
/// own locations.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub roots: Vec<RootConfig>,
}

impl Config {
    /// Every exclusion of every root, as joined paths
    pub fn exclusions(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.roots.iter().flat_map(RootConfig::exclusions)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: vec![
                RootConfig::new("/Users/user/projects/all-projects").with_exclude([
                    "eff/web.git",
                    "eff/api",
                    "context_ad",
                    "qiberty",
                ]),
                RootConfig::new("/Users/user/projects/effector/effector-web"),
                RootConfig::new("/Users/user/projects/effector/effector-api"),
                RootConfig::new("/Users/user/projects/effector/context_ad"),
                RootConfig::new("/Users/user/projects/qiberty"),
            ],
        }
    }
}
