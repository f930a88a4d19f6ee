pub mod catalog;
pub mod delete;
pub mod filter;
pub mod repository;

pub use catalog::{Branch, BranchCatalog};
pub use delete::{
    deleter_for, run_batch, DeletionFailureKind, DeletionOutcome, DeletionTarget, LocalRefDeleter,
    OutcomeBatch, RefDeleter, RemoteRefDeleter,
};
pub use filter::stale_candidates;
pub use repository::{execute_git_command, GitRepository};
