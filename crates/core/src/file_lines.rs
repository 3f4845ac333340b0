use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::RewriteError;

/// Lines of one descriptor file, held in memory for a single rewrite.
///
/// Reading accepts `\n` and `\r\n` endings; writing always terminates every
/// line with `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLines {
    path: PathBuf,
    lines: Vec<String>,
}

impl FileLines {
    /// # Errors
    /// Returns `RewriteError::Read` if the file cannot be read as UTF-8 text.
    pub fn read(path: &Path) -> Result<Self, RewriteError> {
        let content = fs::read_to_string(path).map_err(|source| RewriteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: content.lines().map(str::to_string).collect(),
        })
    }

    /// Overwrites the whole file with the current lines.
    ///
    /// # Errors
    /// Returns `RewriteError::Write` if the file cannot be opened or written.
    pub fn write(&self) -> Result<(), RewriteError> {
        fs::write(&self.path, self.to_content()).map_err(|source| RewriteError::Write {
            path: self.path.clone(),
            source,
        })
    }

    #[must_use]
    pub fn to_content(&self) -> String {
        let mut content = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            content.push_str(line);
            content.push('\n');
        }
        content
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replaces the line at `index`, returning the previous text.
    pub fn replace(&mut self, index: usize, line: String) -> String {
        std::mem::replace(&mut self.lines[index], line)
    }
}
