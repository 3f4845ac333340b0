use crate::rewriters::get_rewriters;
use anyhow::Result;
use depbump_core::{Config, LineRewriter, ReplacementSpec, RootConfig};
use depbump_utils::{RunReport, load_config, replace_in};
use std::path::{Path, PathBuf};

pub struct RunContext {
    pub config: Config,
    pub spec: ReplacementSpec,
    pub rewriters: Vec<Box<dyn LineRewriter>>,
}

impl RunContext {
    /// # Errors
    /// Returns error if the rewriters cannot be built for the given artifact.
    pub fn new(artifact_id: &str, new_version: &str, config: Config) -> Result<Self> {
        let spec = ReplacementSpec::new(artifact_id, new_version, config.exclusions());
        let rewriters = get_rewriters(&spec)?;
        Ok(Self {
            config,
            spec,
            rewriters,
        })
    }

    /// Walk every configured root in order.
    ///
    /// # Errors
    /// Returns error on the first root that is not a directory or directory
    /// that cannot be listed; roots after it are not processed.
    pub fn run(&self, report: &mut RunReport) -> Result<()> {
        for root in &self.config.roots {
            replace_in(&root.path, &self.spec, &self.rewriters, report)?;
        }
        Ok(())
    }
}

/// Pick the traversal layout: explicit roots, then a config file, then the
/// built-in layout. `exclude` applies to the first explicit root.
///
/// # Errors
/// Returns error if the config file cannot be loaded.
pub fn resolve_config(
    roots: &[PathBuf],
    exclude: &[String],
    config_path: Option<&Path>,
) -> Result<Config> {
    if let Some((first, rest)) = roots.split_first() {
        let mut roots = vec![RootConfig::new(first.clone()).with_exclude(exclude.iter().cloned())];
        roots.extend(rest.iter().cloned().map(RootConfig::new));
        return Ok(Config { roots });
    }
    match config_path {
        Some(path) => load_config(path),
        None => Ok(Config::default()),
    }
}
