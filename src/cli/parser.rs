use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "shear")]
#[command(about = "Stale Git branch discovery and cleanup")]
#[command(
    version,
    long_about = "Discovers local and remote branches whose last commit is older than an \
                  age threshold, and deletes them in bulk or through an interactive picker."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean up stale local branches
    Local(LocalArgs),
    /// Clean up stale branches on a remote
    Remote(RemoteArgs),
    /// Generate shell completion script
    Completion(CompletionArgs),
}

#[derive(Args, Debug)]
pub struct LocalArgs {
    /// Delete all stale branches without interaction
    #[arg(long)]
    pub bulk: bool,

    /// Age threshold for stale branches (e.g. 2w, 14d, 336h; default 2w)
    #[arg(long)]
    pub age: Option<String>,

    /// Show what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,

    /// Show detailed error messages
    #[arg(long, short)]
    pub verbose: bool,

    /// Force delete branches (git branch -D) even if not fully merged
    #[arg(long, short)]
    pub force: bool,

    /// Skip confirmation prompts (for CI/CD)
    #[arg(long)]
    pub no_prompt: bool,
}

#[derive(Args, Debug)]
pub struct RemoteArgs {
    /// Delete all stale branches without interaction
    #[arg(long)]
    pub bulk: bool,

    /// Age threshold for stale branches (e.g. 4w, 28d, 672h; default 4w)
    #[arg(long)]
    pub age: Option<String>,

    /// Show what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,

    /// Show detailed error messages
    #[arg(long, short)]
    pub verbose: bool,

    /// Kept for CLI symmetry with `local`; remote deletion is always forced
    #[arg(long, short)]
    pub force: bool,

    /// Skip confirmation prompts (for CI/CD)
    #[arg(long)]
    pub no_prompt: bool,

    /// Remote to clean up (default origin)
    #[arg(long)]
    pub remote: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
