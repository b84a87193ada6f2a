//! Run settings resolved from CLI flags, the project config file and environment
//!
//! Precedence:
//! - Credentials: `--token` > `GITHUB_TOKEN` > none
//! - API base: `--api-url` > `GITHUB_API_URL` > `https://api.github.com`
//! - Check options: CLI flags enable / extend `.github/aver.toml`

use crate::cli::CliArgs;
use crate::error::ConfigError;
use crate::orchestrator::CheckOptions;
use crate::registry::GITHUB_API_URL;
use crate::resolve::Strictness;
use crate::workflow::find_project_root;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file location relative to the project root
pub const CONFIG_FILE: &str = ".github/aver.toml";

/// Token environment variable
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// API base environment variable
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Contents of `.github/aver.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub ignore_sha: bool,
    pub major_only: bool,
    pub exclude: Vec<String>,
}

impl ProjectConfig {
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load the config file of the project containing `start`, if any
    pub fn load(start: &Path) -> Result<Option<Self>, ConfigError> {
        let Ok(root) = find_project_root(start) else {
            return Ok(None);
        };
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(None);
        }

        debug!(path = %path.display(), "loading config file");
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;
        Self::parse(&content, &path).map(Some)
    }
}

/// Values read from the process environment
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub token: Option<String>,
    pub api_url: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            token: non_empty(std::env::var(TOKEN_ENV).ok()),
            api_url: non_empty(std::env::var(API_URL_ENV).ok()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub path: PathBuf,
    pub json: bool,
    pub quiet: bool,
    pub verbose: u8,
    pub show_progress: bool,
    pub check: CheckOptions,
    pub token: Option<String>,
    pub api_url: String,
}

impl Settings {
    /// Resolve settings from CLI args, the project config file and the environment
    pub fn load(args: &CliArgs) -> Result<Self, ConfigError> {
        let config = ProjectConfig::load(&args.path)?;
        Self::resolve(args, config.unwrap_or_default(), EnvOverrides::from_env())
    }

    pub fn resolve(
        args: &CliArgs,
        config: ProjectConfig,
        env: EnvOverrides,
    ) -> Result<Self, ConfigError> {
        if args.quiet && args.verbose > 0 {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be used together".to_string(),
            });
        }

        let mut exclude = config.exclude;
        for name in &args.exclude {
            if !exclude.contains(name) {
                exclude.push(name.clone());
            }
        }

        let strictness = if args.major_only || config.major_only {
            Strictness::MajorOnly
        } else {
            Strictness::RespectSpecifierPrecision
        };

        let api_url = args
            .api_url
            .clone()
            .or(env.api_url)
            .unwrap_or_else(|| GITHUB_API_URL.to_string());

        Ok(Self {
            path: args.path.clone(),
            json: args.json,
            quiet: args.quiet,
            verbose: args.verbose,
            show_progress: args.show_progress(),
            check: CheckOptions {
                ignore_sha: args.ignore_sha || config.ignore_sha,
                strictness,
                exclude,
            },
            token: non_empty(args.token.clone()).or(env.token),
            api_url,
        })
    }
}
