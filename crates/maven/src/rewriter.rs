use depbump_core::{Dialect, LineRewriter, ReplacementSpec};
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<version>([0-9A-Za-z\-.]+)</version>").expect("hardcoded regex must compile")
});

/// Marker of the first line that may belong to a dependency list.
const DEPENDENCY_MARKER: &str = "<dependenc";

/// Rewrites `<version>` of a dependency in `pom.xml`.
///
/// The version is expected on the line right after the matching
/// `<artifactId>` line. Anything before the first `<dependenc` line is
/// ignored so the project's own coordinates are never touched.
#[derive(Debug)]
pub struct MavenRewriter {
    artifact_tag: String,
    version_tag: String,
}

impl MavenRewriter {
    #[must_use]
    pub fn new(spec: &ReplacementSpec) -> Self {
        Self {
            artifact_tag: format!("<artifactId>{}</artifactId>", spec.artifact_id()),
            version_tag: format!("<version>{}</version>", spec.new_version()),
        }
    }
}

/// Update the first `<version>` token in a line
#[must_use]
pub fn update_version_tag(line: &str, version_tag: &str) -> String {
    VERSION_PATTERN
        .replace(line, NoExpand(version_tag))
        .into_owned()
}

impl LineRewriter for MavenRewriter {
    fn dialect(&self) -> Dialect {
        Dialect::Maven
    }

    // Skip the pom header
    fn scan_start(&self, lines: &[String]) -> usize {
        lines
            .iter()
            .position(|line| line.contains(DEPENDENCY_MARKER))
            .unwrap_or(lines.len())
    }

    fn rewrite_at(&self, lines: &[String], index: usize) -> Option<(usize, String)> {
        if !lines[index].contains(&self.artifact_tag) {
            return None;
        }
        let target = index + 1;
        let version_line = lines.get(target)?;
        Some((target, update_version_tag(version_line, &self.version_tag)))
    }
}
