//! CLI argument parsing and GitHub remote configuration.
use clap::{Parser, Subcommand};
use color_eyre::eyre::ContextCompat;
use git_url_parse::GitUrl;
use secrecy::SecretString;
use std::env;

use crate::{
    error::ReleaseManagerError, forge::config::RemoteConfig,
    release::next::BumpLevel, result::Result,
};

/// Global CLI arguments for forge configuration and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "", global = true)]
    /// GitHub repository URL (https://github.com/owner/repo).
    pub github_repo: String,

    #[arg(long, default_value = "", global = true)]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, default_value_t = false, global = true)]
    /// Log branch and release creation instead of performing it.
    pub dry_run: bool,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Release manager subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print repository, latest release and release branch as JSON.
    Info {
        #[arg(long)]
        /// Write JSON to this file instead of stdout.
        out_file: Option<String>,
    },

    /// Cut a release candidate branch and prerelease.
    CreateRc {
        #[arg(long, value_enum, default_value_t = BumpLevel::Minor)]
        /// Semver component to bump (ignored for calver).
        bump: BumpLevel,

        #[arg(long)]
        /// Write the created release candidate as JSON to this file.
        out_file: Option<String>,
    },
}

impl Args {
    /// Configure remote repository connection from CLI arguments.
    pub fn get_remote(&self) -> Result<RemoteConfig> {
        if self.github_repo.is_empty() {
            return Err(ReleaseManagerError::invalid_args(
                "must configure --github-repo",
            )
            .into());
        }

        get_github_remote(&self.github_repo, &self.github_token, self.dry_run)
    }
}

/// Validate repository URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: git_url_parse::Scheme) -> Result<()> {
    match scheme {
        git_url_parse::Scheme::Http => Ok(()),
        git_url_parse::Scheme::Https => Ok(()),
        _ => Err(ReleaseManagerError::invalid_args(
            "only http and https schemes are supported for repo urls",
        )
        .into()),
    }
}

/// Configure GitHub remote with URL parsing and token resolution.
fn get_github_remote(
    github_repo: &str,
    github_token: &str,
    dry_run: bool,
) -> Result<RemoteConfig> {
    let parsed =
        GitUrl::parse(github_repo).map_err(ReleaseManagerError::from)?;

    validate_scheme(parsed.scheme)?;

    let mut token = github_token.to_string();

    if token.is_empty()
        && let Some(parsed_token) = parsed.token
    {
        token = parsed_token;
    }

    if token.is_empty()
        && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
    {
        token = env_var_token;
    }

    if token.is_empty() {
        return Err(
            ReleaseManagerError::invalid_args("must set github token").into()
        );
    }

    let host = parsed
        .host
        .wrap_err("unable to parse host from github repo")?;

    let owner = parsed
        .owner
        .wrap_err("unable to parse owner from github repo")?;

    let project_path = parsed
        .path
        .strip_prefix("/")
        .wrap_err("failed to process project path")?
        .trim_end_matches(".git")
        .to_string();

    let repo_link_base_url =
        format!("{}://{}/{}/{}", parsed.scheme, host, owner, parsed.name);

    Ok(RemoteConfig {
        host,
        scheme: parsed.scheme.to_string(),
        owner,
        repo: parsed.name,
        path: project_path,
        token: SecretString::from(token),
        repo_link_base_url,
        dry_run,
    })
}
