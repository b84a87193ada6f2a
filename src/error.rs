//! Application error types using thiserror
//!
//! Error hierarchy:
//! - RegistryError: Issues talking to the repository host
//! - DiscoveryError: Issues locating or reading workflow files
//! - ConfigError: Issues with CLI or config file settings
//! - CheckError: Fatal failures during a check run

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Repository host related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Workflow discovery related errors
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Check run errors
    #[error(transparent)]
    Check(#[from] CheckError),
}

/// Errors related to repository host communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The host reported not-found or forbidden for the repository
    #[error("repository {repo} not accessible (status {status})")]
    RepositoryInaccessible { repo: String, status: u16 },

    /// Network request failed
    #[error("failed to fetch {repo} from {registry}: {message}")]
    NetworkError {
        repo: String,
        registry: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry}")]
    RateLimitExceeded { registry: String },

    /// Invalid response from the host
    #[error("invalid response from {registry} for '{repo}': {message}")]
    InvalidResponse {
        repo: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{repo}' from {registry}")]
    Timeout { repo: String, registry: String },

    /// The HTTP client could not be built (bad token, TLS setup)
    #[error("failed to set up HTTP client: {message}")]
    ClientSetup { message: String },
}

/// Errors related to workflow discovery
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// No `.git` or `.github` directory above the start directory
    #[error("could not find project root from {start}")]
    ProjectRootNotFound { start: PathBuf },

    /// Failed to walk or read a workflow file
    #[error("failed to read workflow {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Workflow YAML could not be parsed
    #[error("failed to parse workflow {path}: {message}")]
    YamlParseError { path: PathBuf, message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected schema
    #[error("failed to parse config file {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

/// Fatal errors during a check run
#[derive(Error, Debug)]
pub enum CheckError {
    /// A non-recoverable host failure while resolving a reference
    #[error("failed to check {action}: {source}")]
    Resolve {
        action: String,
        #[source]
        source: RegistryError,
    },
}

impl RegistryError {
    /// Creates a new RepositoryInaccessible error
    pub fn inaccessible(repo: impl Into<String>, status: u16) -> Self {
        RegistryError::RepositoryInaccessible {
            repo: repo.into(),
            status,
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        repo: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            repo: repo.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        repo: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            repo: repo.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimitExceeded error
    pub fn rate_limit_exceeded(registry: impl Into<String>) -> Self {
        RegistryError::RateLimitExceeded {
            registry: registry.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(repo: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            repo: repo.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new ClientSetup error
    pub fn client_setup(message: impl Into<String>) -> Self {
        RegistryError::ClientSetup {
            message: message.into(),
        }
    }

    /// Returns true for the recoverable not-found / forbidden class
    pub fn is_inaccessible(&self) -> bool {
        matches!(self, RegistryError::RepositoryInaccessible { .. })
    }
}

impl DiscoveryError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiscoveryError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new YamlParseError
    pub fn yaml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DiscoveryError::YamlParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl CheckError {
    /// Wraps a host error with the action that triggered it
    pub fn resolve(action: impl Into<String>, source: RegistryError) -> Self {
        CheckError::Resolve {
            action: action.into(),
            source,
        }
    }
}
