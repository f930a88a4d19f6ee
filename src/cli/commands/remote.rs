use super::{run_cleanup_flow, FlowOptions};
use crate::cli::parser::RemoteArgs;
use crate::config::{parse_age_threshold, Config};
use crate::core::git::{stale_candidates, BranchCatalog, DeletionTarget, GitRepository};
use crate::utils::Result;

pub fn execute(config: Config, args: RemoteArgs) -> Result<()> {
    let age_input = args.age.as_deref().unwrap_or(&config.remote.age_threshold);
    let threshold = parse_age_threshold(age_input)?;
    let remote = args
        .remote
        .as_deref()
        .unwrap_or(&config.remote.remote_name);

    let repo = GitRepository::discover()?;
    let catalog = BranchCatalog::new(&repo, &config.git.protected_branches);
    let branches = catalog.list_remote(remote)?;
    let candidates = stale_candidates(&branches, threshold);

    run_cleanup_flow(
        repo,
        candidates,
        threshold,
        DeletionTarget::Remote,
        "remote",
        FlowOptions {
            bulk: args.bulk,
            dry_run: args.dry_run,
            verbose: args.verbose,
            force: args.force,
            no_prompt: args.no_prompt,
        },
    )
}
