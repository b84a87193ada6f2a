//! CLI argument parsing module for aver

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// GitHub Actions version checker
#[derive(Parser, Debug, Clone)]
#[command(name = "aver", version, about = "GitHub Actions version checker")]
pub struct CliArgs {
    /// Directory inside the project to check (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Enable quiet mode - findings only, no progress
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    // Check options
    /// Treat SHA-pinned actions like tag references instead of comparing commits
    #[arg(long)]
    pub ignore_sha: bool,

    /// Only report a newer major version
    #[arg(long)]
    pub major_only: bool,

    /// Exclude an action or repository from the check (can be specified multiple times)
    #[arg(long, action = ArgAction::Append)]
    pub exclude: Vec<String>,

    // Host options
    /// GitHub token (default: GITHUB_TOKEN environment variable)
    #[arg(long)]
    pub token: Option<String>,

    /// GitHub API base URL (default: GITHUB_API_URL or https://api.github.com)
    #[arg(long)]
    pub api_url: Option<String>,
}

impl CliArgs {
    /// Whether a progress bar should be drawn
    pub fn show_progress(&self) -> bool {
        !(self.quiet || self.json || self.no_progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["aver"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert!(!args.json);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert!(!args.no_progress);
        assert!(!args.ignore_sha);
        assert!(!args.major_only);
        assert!(args.exclude.is_empty());
        assert!(args.token.is_none());
        assert!(args.api_url.is_none());
    }

    #[test]
    fn test_path_argument() {
        let args = CliArgs::parse_from(["aver", "/some/path"]);
        assert_eq!(args.path, PathBuf::from("/some/path"));
    }

    #[test]
    fn test_verbose_count() {
        let args = CliArgs::parse_from(["aver", "-v"]);
        assert_eq!(args.verbose, 1);

        let args = CliArgs::parse_from(["aver", "-vv"]);
        assert_eq!(args.verbose, 2);

        let args = CliArgs::parse_from(["aver", "--verbose", "--verbose", "--verbose"]);
        assert_eq!(args.verbose, 3);
    }

    #[test]
    fn test_quiet_flags() {
        let args = CliArgs::parse_from(["aver", "-q"]);
        assert!(args.quiet);

        let args = CliArgs::parse_from(["aver", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_check_flags() {
        let args = CliArgs::parse_from(["aver", "--ignore-sha", "--major-only"]);
        assert!(args.ignore_sha);
        assert!(args.major_only);
    }

    #[test]
    fn test_exclude_multiple() {
        let args = CliArgs::parse_from([
            "aver",
            "--exclude",
            "actions/checkout",
            "--exclude",
            "docker/build-push-action",
        ]);
        assert_eq!(
            args.exclude,
            vec!["actions/checkout", "docker/build-push-action"]
        );
    }

    #[test]
    fn test_host_options() {
        let args = CliArgs::parse_from([
            "aver",
            "--token",
            "ghp_secret",
            "--api-url",
            "https://ghe.example.com/api/v3",
        ]);
        assert_eq!(args.token.as_deref(), Some("ghp_secret"));
        assert_eq!(
            args.api_url.as_deref(),
            Some("https://ghe.example.com/api/v3")
        );
    }

    #[test]
    fn test_show_progress() {
        assert!(CliArgs::parse_from(["aver"]).show_progress());
        assert!(!CliArgs::parse_from(["aver", "--json"]).show_progress());
        assert!(!CliArgs::parse_from(["aver", "-q"]).show_progress());
        assert!(!CliArgs::parse_from(["aver", "--no-progress"]).show_progress());
    }

    #[test]
    fn test_combined_flags() {
        let args = CliArgs::parse_from([
            "aver",
            "/path/to/project",
            "-v",
            "--json",
            "--ignore-sha",
            "--exclude",
            "actions/cache",
        ]);
        assert_eq!(args.path, PathBuf::from("/path/to/project"));
        assert_eq!(args.verbose, 1);
        assert!(args.json);
        assert!(args.ignore_sha);
        assert!(!args.major_only);
        assert_eq!(args.exclude, vec!["actions/cache"]);
    }
}
