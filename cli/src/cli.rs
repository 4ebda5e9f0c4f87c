use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relnotes")]
#[command(
    author,
    version,
    about = "Create release notes from specifically formatted pull request descriptions"
)]
pub struct Cli {
    /// GitHub repository identifier in format "owner/repo" (defaults to the remote of the current branch)
    #[clap(long, env = "TRAVIS_REPO_SLUG", global = true)]
    pub repo: Option<String>,

    /// Tag to start collecting release notes from (defaults to the greatest version tag below the stop tag)
    #[clap(long, global = true)]
    pub from_tag: Option<String>,

    /// GitHub access token for private repositories and higher rate limits
    #[clap(long, env = "GH_TOKEN", hide_env_values = true, global = true)]
    pub github_access_token: Option<String>,

    /// Notes configuration file (defaults to relnotes.toml when present)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate release notes only
    Gen {
        /// Tag to stop collecting release notes at (defaults to the current HEAD)
        #[clap(long)]
        to_tag: Option<String>,

        /// Name of the file to export to, without extension (defaults to "release_notes")
        #[clap(long)]
        file_name: Option<String>,

        /// Output a text file with release notes
        #[clap(long, default_value_t = false)]
        text: bool,

        /// Output a markdown file with release notes
        #[clap(long, default_value_t = false)]
        markdown: bool,

        /// Output an html file with release notes
        #[clap(long, default_value_t = false)]
        html: bool,
    },

    /// Create a git tag annotated with the release notes
    Tag {
        /// The new tag to create
        new_tag: String,
    },

    /// Update the GitHub release of a tag with the release notes
    Release {
        /// Tag to stop collecting release notes at and whose release is updated
        #[clap(long, env = "TRAVIS_TAG")]
        release_tag: String,
    },
}
