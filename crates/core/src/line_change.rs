use std::{fmt::Display, path::PathBuf};

/// One rewritten line of a descriptor file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    path: PathBuf,
    line_index: usize,
    old: String,
    new: String,
}

impl LineChange {
    #[must_use]
    pub const fn new(path: PathBuf, line_index: usize, old: String, new: String) -> Self {
        Self {
            path,
            line_index,
            old,
            new,
        }
    }
}

impl Display for LineChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "file: {}, old: {}, new: {}",
            self.path.display(),
            self.old.trim(),
            self.new.trim()
        )
    }
}
