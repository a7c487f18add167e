use anyhow::Result;
use clap::{ArgAction, Parser};
use ghrd::commands::{config::TrackConfig, track};
use ghrd::github::GitHubRepo;
use ghrd::report::VersionFilter;
use std::path::PathBuf;

/// ghrd - GitHub Release Downloads
///
/// Record the download counts of a repository's release assets.
///
/// Each run fetches the release list, keeps the assets whose file name contains
/// the version filter, and appends one timestamped row per asset to a CSV file.
/// The header is written only when the file is created.
///
/// Examples:
///   ghrd owner/repo --filter 1.0.2                  # append to ./GitHubDownloads.csv
///   ghrd owner/repo --filter 1.0.2 --csv stats.csv  # append to stats.csv
///   ghrd owner/repo --filter 1.0.2 --dry-run        # print rows, write nothing
#[derive(Parser, Debug)]
#[command(author, version = ghrd::VERSION, about)]
struct Cli {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO", env = "GHRD_REPO")]
    pub repo: String,

    /// Track only assets whose name contains this text (case-sensitive)
    #[arg(long = "filter", short = 'f', value_name = "VERSION", env = "GHRD_FILTER")]
    pub version_filter: String,

    /// CSV file to append to
    #[arg(
        long = "csv",
        value_name = "PATH",
        env = "GHRD_CSV",
        default_value = ghrd::DEFAULT_CSV_PATH
    )]
    pub csv_path: PathBuf,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", env = "GHRD_API_URL")]
    pub api_url: Option<String>,

    /// User-Agent header sent to the API
    #[arg(
        long = "user-agent",
        value_name = "ID",
        env = "GHRD_USER_AGENT",
        default_value = ghrd::DEFAULT_USER_AGENT
    )]
    pub user_agent: String,

    /// Extra attempts after a connection failure or server error
    #[arg(long, value_name = "N", env = "GHRD_RETRIES", default_value_t = 0)]
    pub retries: usize,

    /// Print the rows to stdout instead of appending them
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    fn into_config(self) -> Result<TrackConfig> {
        let repo = self.repo.parse::<GitHubRepo>()?;
        Ok(TrackConfig {
            repo,
            csv_path: self.csv_path,
            version_filter: VersionFilter::new(self.version_filter),
            api_url: self.api_url,
            user_agent: self.user_agent,
            retries: self.retries,
            dry_run: self.dry_run,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let options = cli.into_config()?;
    track(ghrd::runtime::RealRuntime, options).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_minimal_parsing() {
        let cli = Cli::try_parse_from(["ghrd", "owner/repo", "--filter", "1.0.2"]).unwrap();
        assert_eq!(cli.repo, "owner/repo");
        assert_eq!(cli.version_filter, "1.0.2");
        assert_eq!(cli.csv_path, PathBuf::from("GitHubDownloads.csv"));
        assert_eq!(cli.api_url, None);
        assert_eq!(cli.retries, 0);
        assert!(!cli.dry_run);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_cli_all_options_parsing() {
        let cli = Cli::try_parse_from([
            "ghrd",
            "udo-nabe/Command-Analyzer",
            "-f",
            "1.0.2",
            "--csv",
            "/tmp/stats.csv",
            "--api-url",
            "http://localhost:8080",
            "--user-agent",
            "Python",
            "--retries",
            "2",
            "--dry-run",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.log_level(), "debug");
        let config = cli.into_config().unwrap();
        assert_eq!(config.repo, GitHubRepo::new("udo-nabe", "Command-Analyzer"));
        assert_eq!(config.csv_path, PathBuf::from("/tmp/stats.csv"));
        assert_eq!(config.version_filter, VersionFilter::new("1.0.2"));
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.user_agent, "Python");
        assert_eq!(config.retries, 2);
        assert!(config.dry_run);
    }

    #[test]
    fn test_cli_largest_retry_count_keeps_attempting() {
        let max = usize::MAX.to_string();
        let cli = Cli::try_parse_from(["ghrd", "owner/repo", "-f", "1.0.2", "--retries", &max])
            .unwrap();

        let config = cli.into_config().unwrap();
        let policy = ghrd::http::RetryPolicy::new(config.retries);
        assert_eq!(policy.max_attempts(), usize::MAX);
    }

    #[test]
    fn test_cli_default_user_agent() {
        let cli = Cli::try_parse_from(["ghrd", "owner/repo", "--filter", "1.0.2"]).unwrap();
        assert!(cli.user_agent.starts_with("ghrd/"));
    }

    #[test]
    fn test_cli_filter_is_required() {
        let result = Cli::try_parse_from(["ghrd", "owner/repo"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_invalid_repo_fails_on_conversion() {
        let cli = Cli::try_parse_from(["ghrd", "owner", "--filter", "1.0.2"]).unwrap();
        assert!(cli.into_config().is_err());
    }
}
