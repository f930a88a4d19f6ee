use super::FlowOptions;
use crate::core::git::{
    deleter_for, Branch, DeletionOutcome, DeletionTarget, GitRepository, OutcomeBatch,
};
use crate::ui::report;
use crate::utils::{Result, ShearError};
use dialoguer::Confirm;

/// Non-interactive counterpart of the selector: one confirmation, then a
/// sequential pass over every candidate, printing per-branch progress.
pub fn execute(
    repo: &GitRepository,
    candidates: &[Branch],
    target: DeletionTarget,
    scope: &str,
    opts: FlowOptions,
) -> Result<()> {
    if !opts.no_prompt {
        if is_non_interactive() {
            return Err(ShearError::invalid_args(
                "Cannot confirm bulk deletion in non-interactive mode. \
                 Use --no-prompt to skip the confirmation.",
            ));
        }

        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete {} branch(es)? This cannot be undone.",
                candidates.len()
            ))
            .default(false)
            .interact()
            .map_err(|e| ShearError::terminal(format!("Confirmation prompt failed: {}", e)))?;

        if !confirmed {
            report::print_cancelled();
            return Ok(());
        }
    }

    let deleter = deleter_for(repo, target);
    let mut batch = OutcomeBatch::default();

    for branch in candidates {
        match deleter.delete_ref(branch) {
            Ok(()) => {
                println!("  ✓ Deleted {}", branch.full_name());
                batch.outcomes.push(DeletionOutcome::success(branch));
            }
            Err(e) => {
                if opts.verbose {
                    println!("  ✗ Failed to delete {}: {}", branch.full_name(), e);
                } else {
                    println!("  ✗ Failed to delete {}", branch.full_name());
                }
                batch.outcomes.push(DeletionOutcome::failed(branch, e.to_string()));
            }
        }
    }

    println!();
    report::print_outcome_report(&batch, opts.verbose, opts.force, scope);
    Ok(())
}

fn is_non_interactive() -> bool {
    std::env::var("CI").is_ok() || !atty::is(atty::Stream::Stdin)
}
