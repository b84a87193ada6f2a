//! Action reference structures and pin classification

use std::fmt;

/// Shortest string accepted as a commit hash pin
pub const MIN_HASH_LEN: usize = 7;

/// Longest string accepted as a commit hash pin (a full SHA-1)
pub const MAX_HASH_LEN: usize = 40;

/// What a reference's version string is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinKind {
    /// Pinned to a commit hash
    Hash,
    /// Pinned to a tag-like version string
    Tag,
}

impl PinKind {
    /// Classify a version string
    ///
    /// Hash precedence policy: a string of 7 to 40 hex digits is a hash pin,
    /// even when it would also parse as a version (e.g. `1234567`). Hash pins
    /// never carry a `v` prefix, and bare numeric version tags that long are
    /// rare, so the hash reading wins.
    pub fn classify(version: &str) -> Self {
        if is_hash_pin(version) {
            PinKind::Hash
        } else {
            PinKind::Tag
        }
    }
}

/// Returns true if the version string is a commit hash pin
///
/// Strings shorter than 7 characters are rejected since they are ambiguous
/// with small decimal version numbers.
pub fn is_hash_pin(version: &str) -> bool {
    (MIN_HASH_LEN..=MAX_HASH_LEN).contains(&version.len())
        && version.chars().all(|c| c.is_ascii_hexdigit())
}

/// The `owner/repo` a reference resolves against
///
/// Several actions (`actions/cache/restore`, `actions/cache/save`) map to
/// one repository; caches and remote lookups are keyed by this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepositoryIdentity(String);

impl RepositoryIdentity {
    /// Derive the repository from an action name by keeping the first two path segments
    pub fn from_action_name(name: &str) -> Self {
        let mut parts = name.splitn(3, '/');
        match (parts.next(), parts.next()) {
            (Some(owner), Some(repo)) => Self(format!("{}/{}", owner, repo)),
            _ => Self(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `uses:` reference found in a workflow file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionReference {
    /// Action name (`owner/repo[/subpath]`)
    pub name: String,
    /// Raw specifier after `@`: a version string or a commit hash
    pub version: String,
    /// File the reference came from, relative to the project root
    pub source_location: String,
}

impl ActionReference {
    /// Creates a new action reference
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        source_location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            source_location: source_location.into(),
        }
    }

    /// Parse a `uses:` value (`owner/repo@ref`) into name and version
    ///
    /// Returns `None` for local actions, docker references and values
    /// without an `@`.
    pub fn from_uses(uses: &str, source_location: impl Into<String>) -> Option<Self> {
        if uses.starts_with("./") || uses.starts_with("docker://") {
            return None;
        }
        let (name, version) = uses.split_once('@')?;
        if name.is_empty() || version.is_empty() {
            return None;
        }
        Some(Self::new(name, version, source_location))
    }

    pub fn repository(&self) -> RepositoryIdentity {
        RepositoryIdentity::from_action_name(&self.name)
    }

    pub fn pin_kind(&self) -> PinKind {
        PinKind::classify(&self.version)
    }
}

impl fmt::Display for ActionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} ({})", self.name, self.version, self.source_location)
    }
}
