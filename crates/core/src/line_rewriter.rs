use std::path::Path;

use crate::{Dialect, FileLines, LineChange, RewriteOutcome};

/// Line-oriented version rewriting for one build-file dialect.
///
/// Each dialect decides which line carries the version and how to rewrite it;
/// the read-modify-write cycle is shared. The traversal selects a rewriter by
/// comparing a file's name with [`LineRewriter::file_name`].
pub trait LineRewriter: std::fmt::Debug + Send + Sync {
    fn dialect(&self) -> Dialect;

    fn file_name(&self) -> &'static str {
        self.dialect().file_name()
    }

    /// Index of the first line to inspect.
    fn scan_start(&self, _lines: &[String]) -> usize {
        0
    }

    /// Inspects the line at `index` and, if it triggers a rewrite, returns the
    /// index of the line to replace together with its replacement text.
    ///
    /// The replacement may equal the current text; such candidates are
    /// discarded without writing.
    fn rewrite_at(&self, lines: &[String], index: usize) -> Option<(usize, String)>;

    /// Rewrites `path` in place.
    ///
    /// Every differing candidate is applied and the whole file is written
    /// back immediately, so a file with several matches is written once per
    /// match. The first failed write abandons the file.
    fn rewrite(&self, path: &Path) -> RewriteOutcome {
        let mut file = match FileLines::read(path) {
            Ok(file) => file,
            Err(error) => return RewriteOutcome::ReadFailed(error),
        };

        let mut applied = Vec::new();
        let mut index = self.scan_start(file.lines());
        while index < file.lines().len() {
            if let Some((target, new_line)) = self.rewrite_at(file.lines(), index)
                && file.lines()[target] != new_line
            {
                let old_line = file.replace(target, new_line.clone());
                if let Err(error) = file.write() {
                    return RewriteOutcome::WriteFailed { applied, error };
                }
                applied.push(LineChange::new(
                    path.to_path_buf(),
                    target,
                    old_line,
                    new_line,
                ));
            }
            index += 1;
        }

        if applied.is_empty() {
            RewriteOutcome::Unchanged
        } else {
            RewriteOutcome::Changed(applied)
        }
    }
}
