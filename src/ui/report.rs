use crate::core::git::{Branch, OutcomeBatch};
use std::time::Duration;

const DAY_SECS: u64 = 24 * 60 * 60;

/// Rough human age for candidate rows ("today", "3 days ago", "2 weeks ago").
pub fn format_age(age: Duration) -> String {
    let days = age.as_secs() / DAY_SECS;
    match days {
        0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=29 => plural(days / 7, "week"),
        30..=364 => plural(days / 30, "month"),
        _ => plural(days / 365, "year"),
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

pub fn print_no_candidates(scope: &str) {
    println!("No stale {} branches found.", scope);
}

pub fn print_candidate_summary(
    candidates: &[Branch],
    scope: &str,
    threshold: Duration,
    dry_run: bool,
) {
    let mode = if dry_run { " [dry run]" } else { "" };
    println!(
        "Found {} stale {} branch(es) older than {}{}",
        candidates.len(),
        scope,
        humantime::format_duration(threshold),
        mode
    );

    for branch in candidates {
        println!(
            "  {}  ({}, {})",
            branch.full_name(),
            format_age(branch.age()),
            branch.last_author
        );
    }
    println!();

    if dry_run {
        println!("Dry run: no changes will be made to the repository.");
    }
}

pub fn print_cancelled() {
    println!("Cancelled. Repository unchanged.");
}

/// Final summary for both the bulk and the interactive path. Verbose mode
/// appends the ordered failure list and, when applicable, the --force hint.
pub fn print_outcome_report(batch: &OutcomeBatch, verbose: bool, force: bool, scope: &str) {
    println!(
        "Deleted {} branch(es), {} failed",
        batch.success_count(),
        batch.failed_count()
    );

    if !verbose || batch.failed_count() == 0 {
        return;
    }

    println!();
    println!("Failures:");
    for (i, outcome) in batch.failures().enumerate() {
        let detail = outcome
            .failure
            .as_ref()
            .map(|f| f.detail.as_str())
            .unwrap_or("");
        println!("  {}. {}: {}", i + 1, outcome.branch, detail);
    }

    if let Some(hint) = force_hint(batch, force, scope) {
        println!();
        println!("{}", hint);
    }
}

/// Best-effort suggestion when deletions were refused as not fully merged
/// and --force was not already set. The detection rides on git's error text,
/// so it is only ever a hint. Only the local deleter has a safe mode, so
/// only the local scope can usefully suggest the flag.
pub fn force_hint(batch: &OutcomeBatch, force: bool, scope: &str) -> Option<String> {
    if scope != "local" {
        return None;
    }

    let unmerged = batch.unmerged_count();
    if force || unmerged == 0 {
        return None;
    }

    Some(format!(
        "{} branch(es) failed because they are not fully merged.\n\
         To force delete unmerged branches, re-run with --force:\n\
         \x20 shear {} --force",
        unmerged, scope
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::git::DeletionOutcome;
    use chrono::Utc;

    #[test]
    fn test_format_age_buckets() {
        assert_eq!(format_age(Duration::from_secs(3600)), "today");
        assert_eq!(format_age(Duration::from_secs(DAY_SECS)), "1 day ago");
        assert_eq!(format_age(Duration::from_secs(3 * DAY_SECS)), "3 days ago");
        assert_eq!(format_age(Duration::from_secs(7 * DAY_SECS)), "1 week ago");
        assert_eq!(
            format_age(Duration::from_secs(21 * DAY_SECS)),
            "3 weeks ago"
        );
        assert_eq!(
            format_age(Duration::from_secs(90 * DAY_SECS)),
            "3 months ago"
        );
        assert_eq!(
            format_age(Duration::from_secs(800 * DAY_SECS)),
            "2 years ago"
        );
    }

    fn batch_with_details(details: &[&str]) -> OutcomeBatch {
        let branch = Branch {
            name: "feature".to_string(),
            last_commit_at: Utc::now(),
            last_commit_message: "msg".to_string(),
            last_author: "author".to_string(),
            is_remote: false,
            remote_name: String::new(),
            is_current: false,
            is_protected: false,
        };

        OutcomeBatch {
            outcomes: details
                .iter()
                .map(|d| DeletionOutcome::failed(&branch, d.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_hint_for_unmerged_failures() {
        let batch = batch_with_details(&["error: the branch 'feature' is not fully merged"]);

        let hint = force_hint(&batch, false, "local").expect("expected a hint");
        assert!(hint.contains("--force"));
        assert!(hint.contains("shear local"));
    }

    #[test]
    fn test_no_hint_when_force_already_set() {
        let batch = batch_with_details(&["error: the branch 'feature' is not fully merged"]);
        assert!(force_hint(&batch, true, "local").is_none());
    }

    #[test]
    fn test_no_hint_for_other_failures() {
        let batch = batch_with_details(&["remote rejected the push"]);
        assert!(force_hint(&batch, false, "local").is_none());
    }

    #[test]
    fn test_no_hint_on_remote_scope() {
        let batch = batch_with_details(&["error: the branch 'feature' is not fully merged"]);
        assert!(force_hint(&batch, false, "remote").is_none());
    }
}
