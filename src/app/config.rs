//! Application configuration
//!
//! This module handles application-wide configuration settings.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Working directory
    pub working_dir: PathBuf,
    /// Root for the output directories, defaults to the working directory
    pub output_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Result<Self> {
        let working_dir = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get current directory: {}", e))?;

        Ok(Self {
            verbose,
            working_dir,
            output_dir: None,
        })
    }

    /// Set the working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set the output root
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    /// Directory under which cleansed and invalid outputs are written
    ///
    /// A relative output directory is resolved against the working directory.
    pub fn output_root(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => self.working_dir.join(dir),
            None => self.working_dir.clone(),
        }
    }

    /// Resolve a user-supplied path against the working directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            working_dir: PathBuf::from("."),
            output_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_by_verbosity() {
        let levels: Vec<_> = (0..4)
            .map(|verbose| AppConfig {
                verbose,
                ..AppConfig::default()
            })
            .map(|c| c.log_level())
            .collect();
        assert_eq!(levels, vec!["info", "debug", "trace", "trace"]);
    }

    #[test]
    fn test_output_root_defaults_to_working_dir() {
        let config = AppConfig::default().with_working_dir(PathBuf::from("/work"));
        assert_eq!(config.output_root(), PathBuf::from("/work"));
    }

    #[test]
    fn test_output_root_resolution() {
        let config = AppConfig::default()
            .with_working_dir(PathBuf::from("/work"))
            .with_output_dir(Some(PathBuf::from("reports")));
        assert_eq!(config.output_root(), PathBuf::from("/work/reports"));

        let config = config.with_output_dir(Some(PathBuf::from("/var/out")));
        assert_eq!(config.output_root(), PathBuf::from("/var/out"));
    }

    #[test]
    fn test_resolve_relative_source() {
        let config = AppConfig::default().with_working_dir(PathBuf::from("/work"));
        assert_eq!(
            config.resolve(Path::new("data/in.csv")),
            PathBuf::from("/work/data/in.csv")
        );
        assert_eq!(
            config.resolve(Path::new("/abs/in.csv")),
            PathBuf::from("/abs/in.csv")
        );
    }
}
