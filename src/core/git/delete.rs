use super::catalog::Branch;
use super::repository::{execute_git_command, GitRepository};
use crate::utils::Result;

/// Capability for removing one branch ref. Local and remote targets differ
/// in mechanics, not in call shape, so callers batch over this trait instead
/// of branching on a remote flag.
pub trait RefDeleter {
    fn delete_ref(&self, branch: &Branch) -> Result<()>;
}

pub struct LocalRefDeleter<'a> {
    repo: &'a GitRepository,
    force: bool,
}

impl<'a> LocalRefDeleter<'a> {
    pub fn new(repo: &'a GitRepository, force: bool) -> Self {
        Self { repo, force }
    }
}

impl RefDeleter for LocalRefDeleter<'_> {
    fn delete_ref(&self, branch: &Branch) -> Result<()> {
        let flag = if self.force { "-D" } else { "-d" };
        execute_git_command(self.repo, &["branch", flag, &branch.name])?;
        Ok(())
    }
}

/// Pushes a ref-delete to the branch's remote. There is no safe/force
/// distinction here: a remote delete is inherently forced.
pub struct RemoteRefDeleter<'a> {
    repo: &'a GitRepository,
}

impl<'a> RemoteRefDeleter<'a> {
    pub fn new(repo: &'a GitRepository) -> Self {
        Self { repo }
    }
}

impl RefDeleter for RemoteRefDeleter<'_> {
    fn delete_ref(&self, branch: &Branch) -> Result<()> {
        execute_git_command(
            self.repo,
            &["push", &branch.remote_name, "--delete", &branch.name],
        )?;
        Ok(())
    }
}

/// Which kind of ref a deletion pass operates on. Remote branches carry
/// their remote name on the record itself, so no extra data is needed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionTarget {
    Local { force: bool },
    Remote,
}

pub fn deleter_for(repo: &GitRepository, target: DeletionTarget) -> Box<dyn RefDeleter + '_> {
    match target {
        DeletionTarget::Local { force } => Box::new(LocalRefDeleter::new(repo, force)),
        DeletionTarget::Remote => Box::new(RemoteRefDeleter::new(repo)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionFailureKind {
    /// Best-effort classification from git's stderr text; only ever used to
    /// decide whether the --force hint is worth printing.
    Unmerged,
    Backend,
}

#[derive(Debug, Clone)]
pub struct DeletionFailure {
    pub kind: DeletionFailureKind,
    pub detail: String,
}

#[derive(Debug, Clone)]
pub struct DeletionOutcome {
    /// Fully qualified branch name, for unambiguous attribution in reports.
    pub branch: String,
    pub failure: Option<DeletionFailure>,
}

impl DeletionOutcome {
    pub fn success(branch: &Branch) -> Self {
        Self {
            branch: branch.full_name(),
            failure: None,
        }
    }

    pub fn failed(branch: &Branch, detail: String) -> Self {
        let kind = if detail.contains("not fully merged") {
            DeletionFailureKind::Unmerged
        } else {
            DeletionFailureKind::Backend
        };

        Self {
            branch: branch.full_name(),
            failure: Some(DeletionFailure { kind, detail }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Aggregated result of one deletion pass, in input order.
#[derive(Debug, Clone, Default)]
pub struct OutcomeBatch {
    pub outcomes: Vec<DeletionOutcome>,
}

impl OutcomeBatch {
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &DeletionOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn unmerged_count(&self) -> usize {
        self.failures()
            .filter(|o| {
                o.failure
                    .as_ref()
                    .is_some_and(|f| f.kind == DeletionFailureKind::Unmerged)
            })
            .count()
    }
}

/// Deletes every branch sequentially, in input order, one blocking git call
/// per branch. A failed deletion records an outcome and the pass continues;
/// nothing here ever aborts the batch.
pub fn run_batch(deleter: &dyn RefDeleter, branches: &[Branch]) -> OutcomeBatch {
    let mut batch = OutcomeBatch::default();

    for branch in branches {
        let outcome = match deleter.delete_ref(branch) {
            Ok(()) => DeletionOutcome::success(branch),
            Err(e) => DeletionOutcome::failed(branch, e.to_string()),
        };
        batch.outcomes.push(outcome);
    }

    batch
}
