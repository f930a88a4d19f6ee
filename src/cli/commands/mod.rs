pub mod bulk;
pub mod completion;
pub mod local;
pub mod remote;

use crate::core::git::{Branch, DeletionTarget, GitRepository};
use crate::ui::report;
use crate::ui::select::{run_interactive, SessionEnd};
use crate::utils::Result;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct FlowOptions {
    pub bulk: bool,
    pub dry_run: bool,
    pub verbose: bool,
    pub force: bool,
    pub no_prompt: bool,
}

/// Shared tail of the local and remote flows: summary, dry-run short
/// circuit, then either the bulk runner or the interactive picker.
pub fn run_cleanup_flow(
    repo: GitRepository,
    candidates: Vec<Branch>,
    threshold: Duration,
    target: DeletionTarget,
    scope: &str,
    opts: FlowOptions,
) -> Result<()> {
    if candidates.is_empty() {
        report::print_no_candidates(scope);
        return Ok(());
    }

    report::print_candidate_summary(&candidates, scope, threshold, opts.dry_run);

    if opts.dry_run {
        return Ok(());
    }

    if opts.bulk {
        return bulk::execute(&repo, &candidates, target, scope, opts);
    }

    match run_interactive(repo, candidates, target, scope)? {
        SessionEnd::Cancelled => {
            report::print_cancelled();
            Ok(())
        }
        SessionEnd::Completed(batch) => {
            report::print_outcome_report(&batch, opts.verbose, opts.force, scope);
            Ok(())
        }
    }
}
