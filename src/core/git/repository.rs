use crate::utils::{Result, ShearError};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone)]
pub struct GitRepository {
    pub root: PathBuf,
}

impl GitRepository {
    pub fn discover() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            ShearError::git_operation(format!("Failed to get current directory: {}", e))
        })?;

        Self::discover_from(&current_dir)
    }

    pub fn discover_from(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .current_dir(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .map_err(|e| ShearError::git_operation(format!("Failed to execute git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ShearError::git_operation(format!(
                "Not a git repository or git not found: {}",
                stderr.trim()
            )));
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();

        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    pub fn current_branch(&self) -> Result<String> {
        execute_git_command(self, &["rev-parse", "--abbrev-ref", "HEAD"])
    }
}

/// Runs a git command with captured output. Child stdout/stderr never reach
/// the terminal, so this is safe to call while the TUI owns the screen;
/// stderr is folded into the error so callers can surface git's own
/// explanation (e.g. an unmerged-branch rejection).
pub fn execute_git_command(repo: &GitRepository, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .current_dir(&repo.root)
        .args(args)
        .output()
        .map_err(|e| ShearError::git_operation(format!("Failed to execute git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ShearError::git_operation(format!(
            "Git command failed ({}): {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.trim().to_string())
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    pub fn setup_test_repo() -> (TempDir, GitRepository) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo_path = temp_dir.path();

        run_git(repo_path, &["init", "--initial-branch=main"]);
        run_git(repo_path, &["config", "user.name", "Test User"]);
        run_git(repo_path, &["config", "user.email", "test@example.com"]);

        fs::write(repo_path.join("README.md"), "# Test Repository")
            .expect("Failed to write README");
        run_git(repo_path, &["add", "README.md"]);
        run_git(repo_path, &["commit", "-m", "initial commit"]);

        let repo = GitRepository::discover_from(repo_path).expect("Failed to discover repo");
        (temp_dir, repo)
    }

    pub fn run_git(repo_path: &Path, args: &[&str]) {
        let status = Command::new("git")
            .current_dir(repo_path)
            .args(args)
            .output()
            .expect("Failed to run git");
        assert!(status.status.success(), "git {:?} failed", args);
    }

    /// Commits an empty change on a new branch with a pinned commit time, so
    /// tests can fabricate branch ages deterministically.
    pub fn commit_branch_at(repo_path: &Path, branch: &str, date: &str, message: &str) {
        run_git(repo_path, &["checkout", "-b", branch]);

        let status = Command::new("git")
            .current_dir(repo_path)
            .args(["commit", "--allow-empty", "-m", message])
            .env("GIT_AUTHOR_DATE", date)
            .env("GIT_COMMITTER_DATE", date)
            .output()
            .expect("Failed to run git commit");
        assert!(status.status.success(), "pinned commit on {} failed", branch);

        run_git(repo_path, &["checkout", "main"]);
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::setup_test_repo;
    use super::*;

    #[test]
    fn test_discover_inside_repo() {
        let (_temp_dir, repo) = setup_test_repo();
        assert!(repo.root.join(".git").exists());
    }

    #[test]
    fn test_discover_outside_repo_fails() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let result = GitRepository::discover_from(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_current_branch() {
        let (_temp_dir, repo) = setup_test_repo();
        assert_eq!(repo.current_branch().unwrap(), "main");
    }

    #[test]
    fn test_failed_command_surfaces_stderr() {
        let (_temp_dir, repo) = setup_test_repo();
        let err = execute_git_command(&repo, &["branch", "-d", "no-such-branch"]).unwrap_err();
        assert!(err.to_string().contains("no-such-branch"));
    }
}
