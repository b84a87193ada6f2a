//! Check orchestrator for coordinating a run over discovered references
//!
//! This module provides:
//! - Routing: hash pins → commit distance, everything else → tags + staleness
//! - Run-scoped caches so each repository is fetched at most once
//! - Degradation of inaccessible repositories to one warning each
//! - Exclusion filters applied before any remote call
//!
//! References are processed strictly in input order, one remote call at a
//! time, so findings keep their source order.

use crate::config::Settings;
use crate::domain::{
    ActionReference, BehindFinding, CheckReport, OutdatedFinding, PinKind, RepositoryIdentity,
};
use crate::error::{CheckError, RegistryError};
use crate::progress::Progress;
use crate::registry::{GitHost, GitHubAdapter, HttpClient};
use crate::resolve::{
    latest_stale_candidate, CommitCache, CommitDistanceResolver, Strictness, TagCache,
    TagDirectory,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Options controlling how references are judged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Route hash pins through the tag path instead of commit comparison
    pub ignore_sha: bool,
    pub strictness: Strictness,
    /// Action names or repository identities to skip
    pub exclude: Vec<String>,
}

impl CheckOptions {
    /// Check if a reference is filtered out by name or by repository
    pub fn is_excluded(&self, reference: &ActionReference) -> bool {
        let repo = reference.repository();
        self.exclude
            .iter()
            .any(|e| e == &reference.name || e == repo.as_str())
    }
}

/// Per-run mutable state
#[derive(Default)]
struct RunState {
    tags: TagCache,
    commits: CommitCache,
    inaccessible: HashSet<RepositoryIdentity>,
    report: CheckReport,
}

/// Orchestrator for a single check run
pub struct Orchestrator {
    host: Arc<dyn GitHost>,
    options: CheckOptions,
    show_progress: bool,
}

impl Orchestrator {
    /// Create an orchestrator talking to GitHub with the resolved settings
    pub fn new(settings: &Settings) -> Result<Self, RegistryError> {
        let client = HttpClient::new(settings.token.as_deref())?;
        let host = GitHubAdapter::with_base_url(client, &settings.api_url);

        Ok(Self {
            host: Arc::new(host),
            options: settings.check.clone(),
            show_progress: settings.show_progress,
        })
    }

    /// Create an orchestrator over a custom host (for testing)
    pub fn with_host(host: Arc<dyn GitHost>, options: CheckOptions) -> Self {
        Self {
            host,
            options,
            show_progress: false,
        }
    }

    /// Check every reference and aggregate the findings
    ///
    /// Inaccessible repositories become warnings. Any other host failure
    /// aborts the run.
    pub async fn run(&self, references: &[ActionReference]) -> Result<CheckReport, CheckError> {
        let mut progress = Progress::new(self.show_progress);
        let mut state = RunState::default();

        progress.start(references.len() as u64, "Checking actions");

        for reference in references {
            progress.set_message(&reference.name);

            if self.options.is_excluded(reference) {
                debug!(action = %reference.name, "excluded");
                progress.inc();
                continue;
            }

            let repo = reference.repository();
            if state.inaccessible.contains(&repo) {
                debug!(%repo, "skipping known inaccessible repository");
                progress.inc();
                continue;
            }

            match self.check_reference(&mut state, reference, &repo).await {
                Ok(()) => {}
                Err(e) if e.is_inaccessible() => {
                    warn!(%repo, error = %e, "repository not accessible, skipping");
                    state.report.warnings.push(format!("skipping {}: {}", repo, e));
                    state.inaccessible.insert(repo);
                }
                Err(e) => return Err(CheckError::resolve(&reference.name, e)),
            }

            progress.inc();
        }

        progress.finish_and_clear();

        let report = state.report;
        info!(
            references = references.len(),
            outdated = report.outdated.len(),
            behind = report.behind.len(),
            warnings = report.warnings.len(),
            "check finished"
        );
        Ok(report)
    }

    async fn check_reference(
        &self,
        state: &mut RunState,
        reference: &ActionReference,
        repo: &RepositoryIdentity,
    ) -> Result<(), RegistryError> {
        let host = self.host.as_ref();

        let is_hash = reference.pin_kind() == PinKind::Hash;

        if is_hash && !self.options.ignore_sha {
            let distance = CommitDistanceResolver::new(host)
                .resolve(&mut state.commits, repo, &reference.version)
                .await?;
            if let Some(finding) =
                BehindFinding::new(reference, distance.latest_hash, distance.commits_behind)
            {
                state.report.behind.push(finding);
            }
            return Ok(());
        }

        let tags = TagDirectory::new(host).tags(&mut state.tags, repo).await?;
        // a hash is never a version specifier, even when it is all digits
        if is_hash {
            return Ok(());
        }
        if let Some(latest) =
            latest_stale_candidate(tags, &reference.version, self.options.strictness)
        {
            state.report.outdated.push(OutdatedFinding::new(reference, latest));
        }
        Ok(())
    }
}
