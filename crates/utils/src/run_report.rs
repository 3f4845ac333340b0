use colored::Colorize;
use depbump_core::{Dialect, RewriteError, RewriteOutcome};
use std::fmt::Display;

/// Accumulates per-file outcomes over a run and prints the change log.
///
/// Every written line goes to stdout as it is recorded. Files skipped
/// because of I/O failures are silent unless `verbose` is set, in which case
/// they are reported on stderr.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    verbose: bool,
    files_visited: usize,
    files_changed: usize,
    lines_changed: usize,
    files_skipped: usize,
}

impl RunReport {
    #[must_use]
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    pub fn record(&mut self, dialect: Dialect, outcome: &RewriteOutcome) {
        self.files_visited += 1;
        for change in outcome.changes() {
            println!("{change}");
        }
        if outcome.is_changed() {
            self.files_changed += 1;
            self.lines_changed += outcome.changes().len();
        }
        if let Some(error) = outcome.error() {
            self.files_skipped += 1;
            if self.verbose {
                eprintln!("{}", skip_message(dialect, error));
            }
        }
    }

    #[must_use]
    pub const fn files_visited(&self) -> usize {
        self.files_visited
    }

    #[must_use]
    pub const fn files_changed(&self) -> usize {
        self.files_changed
    }

    #[must_use]
    pub const fn lines_changed(&self) -> usize {
        self.lines_changed
    }

    #[must_use]
    pub const fn files_skipped(&self) -> usize {
        self.files_skipped
    }
}

/// Line printed on stderr for a file abandoned because of an I/O failure
#[must_use]
pub fn skip_message(dialect: Dialect, error: &RewriteError) -> String {
    format!("{} {} {}", "skipped".yellow().bold(), dialect, error)
}

impl Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} descriptor files, {} changed ({} lines), {} skipped",
            "Scanned".bright_cyan().bold(),
            self.files_visited,
            self.files_changed.to_string().bright_green(),
            self.lines_changed,
            self.files_skipped.to_string().yellow()
        )
    }
}
