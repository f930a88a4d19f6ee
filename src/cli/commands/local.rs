use super::{run_cleanup_flow, FlowOptions};
use crate::cli::parser::LocalArgs;
use crate::config::{parse_age_threshold, Config};
use crate::core::git::{stale_candidates, BranchCatalog, DeletionTarget, GitRepository};
use crate::utils::Result;

pub fn execute(config: Config, args: LocalArgs) -> Result<()> {
    let age_input = args.age.as_deref().unwrap_or(&config.local.age_threshold);
    let threshold = parse_age_threshold(age_input)?;

    let repo = GitRepository::discover()?;
    let catalog = BranchCatalog::new(&repo, &config.git.protected_branches);
    let branches = catalog.list_local()?;
    let candidates = stale_candidates(&branches, threshold);

    run_cleanup_flow(
        repo,
        candidates,
        threshold,
        DeletionTarget::Local { force: args.force },
        "local",
        FlowOptions {
            bulk: args.bulk,
            dry_run: args.dry_run,
            verbose: args.verbose,
            force: args.force,
            no_prompt: args.no_prompt,
        },
    )
}
