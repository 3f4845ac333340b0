use colored::Colorize;
use std::fmt::Display;

/// Build-file flavour handled by one rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dialect {
    Maven,
    Gradle,
}

impl Dialect {
    /// Exact descriptor file name this dialect claims
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Maven => "pom.xml",
            Self::Gradle => "build.gradle",
        }
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Maven => "Maven".red().bold(),
                Self::Gradle => "Gradle".green().bold(),
            }
        )
    }
}
