use super::catalog::Branch;
use std::time::Duration;

/// Selects deletion candidates: never the checked-out branch, never a
/// protected branch, and only tips strictly older than the threshold.
/// Order-preserving; a branch exactly at the threshold is kept.
pub fn stale_candidates(branches: &[Branch], threshold: Duration) -> Vec<Branch> {
    branches
        .iter()
        .filter(|branch| !branch.is_current && !branch.is_protected && branch.is_stale(threshold))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, Utc};

    const DAY: u64 = 24 * 60 * 60;

    fn branch_aged_days(name: &str, days: i64) -> Branch {
        Branch {
            name: name.to_string(),
            last_commit_at: Utc::now() - ChronoDuration::days(days),
            last_commit_message: "msg".to_string(),
            last_author: "author".to_string(),
            is_remote: false,
            remote_name: String::new(),
            is_current: false,
            is_protected: false,
        }
    }

    #[test]
    fn test_strictly_older_than_threshold() {
        let branches = vec![branch_aged_days("old", 15), branch_aged_days("young", 13)];
        let candidates = stale_candidates(&branches, Duration::from_secs(14 * DAY));

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "old");
    }

    #[test]
    fn test_exactly_at_threshold_is_not_stale() {
        let mut branch = branch_aged_days("edge", 0);
        branch.last_commit_at = Utc::now() - ChronoDuration::days(14);
        // The measured age is a hair over 14d by the time the filter runs, so
        // probe the boundary through Branch::is_stale with a threshold just
        // past the real age instead.
        let age = branch.age();
        assert!(!branch.is_stale(age + Duration::from_secs(1)));
        assert!(branch.is_stale(age.saturating_sub(Duration::from_secs(1))));
    }

    #[test]
    fn test_current_branch_never_a_candidate() {
        let mut branch = branch_aged_days("checked-out", 100);
        branch.is_current = true;

        let candidates = stale_candidates(&[branch], Duration::from_secs(DAY));
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_protected_branch_never_a_candidate() {
        let mut branch = branch_aged_days("main", 400);
        branch.is_protected = true;

        let candidates = stale_candidates(&[branch], Duration::from_secs(DAY));
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_future_dated_tip_is_not_stale() {
        let branch = branch_aged_days("from-the-future", -2);
        let candidates = stale_candidates(&[branch], Duration::from_secs(DAY));
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_mixed_set_scenario() {
        let mut c = branch_aged_days("c-protected", 40);
        c.is_protected = true;
        let mut d = branch_aged_days("d-current", 20);
        d.is_current = true;

        let branches = vec![
            branch_aged_days("a-stale", 30),
            branch_aged_days("b-young", 5),
            c,
            d,
        ];

        let candidates = stale_candidates(&branches, Duration::from_secs(14 * DAY));
        let names: Vec<&str> = candidates.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["a-stale"]);
    }

    #[test]
    fn test_order_preserved() {
        let branches = vec![
            branch_aged_days("z", 30),
            branch_aged_days("a", 40),
            branch_aged_days("m", 50),
        ];

        let candidates = stale_candidates(&branches, Duration::from_secs(14 * DAY));
        let names: Vec<&str> = candidates.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }
}
