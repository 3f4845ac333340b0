use depbump_core::{Dialect, LineRewriter, ReplacementSpec};
use regex::{NoExpand, Regex};

/// Rewrites `:artifact:version` coordinates in `build.gradle`.
///
/// Every line is inspected; only the first coordinate on a line is replaced.
#[derive(Debug)]
pub struct GradleRewriter {
    coordinate_pattern: Regex,
    coordinate: String,
}

impl GradleRewriter {
    /// # Errors
    /// Returns error if the coordinate pattern exceeds the regex size limit.
    pub fn new(spec: &ReplacementSpec) -> Result<Self, regex::Error> {
        let artifact_id = spec.artifact_id();
        Ok(Self {
            coordinate_pattern: Regex::new(&format!(
                r":{}:([0-9A-Za-z\-.]+)",
                regex::escape(artifact_id)
            ))?,
            coordinate: format!(":{artifact_id}:{}", spec.new_version()),
        })
    }

    /// Update the first coordinate in a line, if any
    #[must_use]
    pub fn update_coordinate(&self, line: &str) -> Option<String> {
        self.coordinate_pattern
            .is_match(line)
            .then(|| {
                self.coordinate_pattern
                    .replace(line, NoExpand(&self.coordinate))
                    .into_owned()
            })
    }
}

impl LineRewriter for GradleRewriter {
    fn dialect(&self) -> Dialect {
        Dialect::Gradle
    }

    fn rewrite_at(&self, lines: &[String], index: usize) -> Option<(usize, String)> {
        self.update_coordinate(&lines[index])
            .map(|new_line| (index, new_line))
    }
}
