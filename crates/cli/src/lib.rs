use anyhow::Result;
use clap::{Parser, error::ErrorKind};
use colored::Colorize;
use depbump_utils::RunReport;
use std::path::PathBuf;

use crate::context::{RunContext, resolve_config};

pub mod context;
mod rewriters;

pub use rewriters::get_rewriters;

/// Printed when the positional arguments are not exactly `artifactId version`.
pub const USAGE: &str = "depbump artifactId version";

#[derive(Parser, Debug)]
#[command(
    name = "depbump",
    author,
    version,
    about = "Bump one dependency's version across every pom.xml and build.gradle in a checkout",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    /// Artifact identifier followed by the new version
    #[arg(value_name = "ARTIFACT_ID VERSION")]
    args: Vec<String>,

    /// JSON file listing roots and their exclusions
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to scan instead of the configured roots
    #[arg(long = "root", value_name = "DIR")]
    roots: Vec<PathBuf>,

    /// Directory under the first --root to skip
    #[arg(long, value_name = "REL", requires = "roots")]
    exclude: Vec<String>,

    /// Report skipped files and a summary on stderr
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

/// Malformed arguments, including a version that starts with `-` and is not
/// preceded by `--`, print the usage line and succeed without touching files.
///
/// # Errors
/// Returns error if the config cannot be loaded, a root is not a directory or
/// a directory cannot be listed.
pub fn main(args: &[String]) -> Result<()> {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            err.exit()
        }
        Err(err) => {
            eprintln!("{err}");
            println!("{USAGE}");
            return Ok(());
        }
    };
    let [artifact_id, new_version] = cli.args.as_slice() else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = resolve_config(&cli.roots, &cli.exclude, cli.config.as_deref())?;
    let context = RunContext::new(artifact_id, new_version, config)?;
    let mut report = RunReport::new(cli.verbose);
    let result = context.run(&mut report);
    if cli.verbose {
        eprintln!("{report}");
        if result.is_ok() && report.files_changed() == 0 {
            eprintln!(
                "{}",
                format!("No versions of {artifact_id} needed updating").bright_black()
            );
        }
    }
    result
}
