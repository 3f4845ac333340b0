use depbump_core::{LineRewriter, ReplacementSpec, TraverseError};
use std::{io, path::Path};
use walkdir::WalkDir;

use crate::RunReport;

/// Walk `root` depth-first and rewrite every descriptor file a rewriter claims.
///
/// Directories whose absolute path is excluded by `spec` are not descended
/// into; the root itself is always walked. Symlinks are followed. Per-file I/O
/// failures end up in `report`; a root that is not a directory or a directory
/// that cannot be listed aborts the walk.
///
/// # Errors
/// Returns `TraverseError::InvalidArgument` if `root` is not a directory and
/// `TraverseError::ListDir` if any directory in the tree cannot be listed.
pub fn replace_in(
    root: &Path,
    spec: &ReplacementSpec,
    rewriters: &[Box<dyn LineRewriter>],
    report: &mut RunReport,
) -> Result<(), TraverseError> {
    if !root.is_dir() {
        return Err(TraverseError::InvalidArgument(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !(entry.file_type().is_dir() && spec.is_excluded(entry.path()))
        });

    for entry in walker {
        let entry = entry.map_err(|err| TraverseError::ListDir {
            path: err.path().unwrap_or(root).to_path_buf(),
            source: io::Error::from(err),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(file_name) = entry.file_name().to_str()
            && let Some(rewriter) = rewriters.iter().find(|r| r.file_name() == file_name)
        {
            report.record(rewriter.dialect(), &rewriter.rewrite(entry.path()));
        }
    }
    Ok(())
}
