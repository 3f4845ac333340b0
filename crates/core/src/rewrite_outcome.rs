use crate::{LineChange, RewriteError};

/// Result of rewriting one descriptor file.
///
/// Changes written before a failed write are kept in `WriteFailed::applied`;
/// they already reached the disk.
#[derive(Debug)]
pub enum RewriteOutcome {
    Changed(Vec<LineChange>),
    Unchanged,
    ReadFailed(RewriteError),
    WriteFailed {
        applied: Vec<LineChange>,
        error: RewriteError,
    },
}

impl RewriteOutcome {
    /// Lines that were written to disk
    #[must_use]
    pub fn changes(&self) -> &[LineChange] {
        match self {
            Self::Changed(changes) | Self::WriteFailed {
                applied: changes, ..
            } => changes,
            Self::Unchanged | Self::ReadFailed(_) => &[],
        }
    }

    #[must_use]
    pub const fn error(&self) -> Option<&RewriteError> {
        match self {
            Self::ReadFailed(error) | Self::WriteFailed { error, .. } => Some(error),
            Self::Changed(_) | Self::Unchanged => None,
        }
    }

    #[must_use]
    pub fn is_changed(&self) -> bool {
        !self.changes().is_empty()
    }
}
