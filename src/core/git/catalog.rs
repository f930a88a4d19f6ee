use super::repository::{execute_git_command, GitRepository};
use crate::utils::Result;
use chrono::{DateTime, Utc};
use std::time::Duration;

const REF_FORMAT: &str = "%(refname:short)|%(committerdate:iso8601)|%(subject)|%(authorname)";

/// One branch tip with the metadata needed for staleness classification.
#[derive(Debug, Clone)]
pub struct Branch {
    /// Unqualified branch name, remote prefix already stripped.
    pub name: String,
    pub last_commit_at: DateTime<Utc>,
    pub last_commit_message: String,
    pub last_author: String,
    pub is_remote: bool,
    /// Empty for local branches.
    pub remote_name: String,
    pub is_current: bool,
    pub is_protected: bool,
}

impl Branch {
    pub fn full_name(&self) -> String {
        if self.is_remote {
            format!("{}/{}", self.remote_name, self.name)
        } else {
            self.name.clone()
        }
    }

    /// Time since the last commit. A tip dated in the future counts as zero.
    pub fn age(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.last_commit_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    pub fn is_stale(&self, threshold: Duration) -> bool {
        self.age() > threshold
    }
}

pub struct BranchCatalog<'a> {
    repo: &'a GitRepository,
    protected: &'a [String],
}

impl<'a> BranchCatalog<'a> {
    pub fn new(repo: &'a GitRepository, protected: &'a [String]) -> Self {
        Self { repo, protected }
    }

    pub fn list_local(&self) -> Result<Vec<Branch>> {
        let format = format!("--format={}", REF_FORMAT);
        let output = execute_git_command(self.repo, &["for-each-ref", &format, "refs/heads/"])?;
        let current_branch = self.repo.current_branch()?;

        Ok(parse_ref_lines(
            &output,
            Some(&current_branch),
            None,
            self.protected,
        ))
    }

    pub fn list_remote(&self, remote: &str) -> Result<Vec<Branch>> {
        let format = format!("--format={}", REF_FORMAT);
        let ref_pattern = format!("refs/remotes/{}/", remote);
        let output = execute_git_command(self.repo, &["for-each-ref", &format, &ref_pattern])?;

        Ok(parse_ref_lines(&output, None, Some(remote), self.protected))
    }
}

/// Parses `for-each-ref` output, one branch per line. Malformed lines (wrong
/// field count, unparsable timestamp) are dropped; a listing is never failed
/// by its content.
pub fn parse_ref_lines(
    output: &str,
    current_branch: Option<&str>,
    remote: Option<&str>,
    protected: &[String],
) -> Vec<Branch> {
    let mut branches = Vec::new();

    for line in output.lines() {
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.splitn(4, '|').collect();
        if parts.len() != 4 {
            continue;
        }

        let Some(last_commit_at) = parse_commit_timestamp(parts[1]) else {
            continue;
        };

        let raw_name = parts[0];
        let name = match remote {
            Some(remote_name) => raw_name
                .strip_prefix(&format!("{}/", remote_name))
                .unwrap_or(raw_name)
                .to_string(),
            None => raw_name.to_string(),
        };

        // A remote listing includes the `origin/HEAD` symref, which is not a
        // deletable branch.
        if remote.is_some() && name == "HEAD" {
            continue;
        }

        branches.push(Branch {
            is_current: current_branch.is_some_and(|current| current == name),
            is_protected: is_protected_branch(&name, protected),
            name,
            last_commit_at,
            last_commit_message: parts[2].to_string(),
            last_author: parts[3].to_string(),
            is_remote: remote.is_some(),
            remote_name: remote.unwrap_or("").to_string(),
        });
    }

    branches
}

/// Tries git's iso8601 committerdate form first, then strict RFC 3339.
fn parse_commit_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S %z")
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// Protection is evaluated on the unqualified last path segment, so a
/// remote-qualified `origin/main` stays protected.
pub fn is_protected_branch(name: &str, protected: &[String]) -> bool {
    let unqualified = name.rsplit('/').next().unwrap_or(name);
    protected.iter().any(|p| p == unqualified)
}
