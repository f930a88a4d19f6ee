use super::state::{SelectMode, SelectState};
use crate::core::git::{deleter_for, run_batch, Branch, DeletionTarget, GitRepository, OutcomeBatch};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::mpsc;

/// Key handling and state transitions for one selection session. All
/// selection mutation happens on the event-loop thread; the only other
/// thread is the deletion worker, which communicates exclusively through
/// the completion channel.
pub struct SelectCoordinator {
    pub state: SelectState,
    repo: GitRepository,
    target: DeletionTarget,
    completion_rx: Option<mpsc::Receiver<OutcomeBatch>>,
}

impl SelectCoordinator {
    pub fn new(repo: GitRepository, candidates: Vec<Branch>, target: DeletionTarget) -> Self {
        Self {
            state: SelectState::new(candidates),
            repo,
            target,
            completion_rx: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // One event is processed to completion before the next is read, and
        // while deleting only the completion message can move the session on.
        if self.state.mode != SelectMode::Browsing {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.state.cancel(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.cancel()
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.previous_item(),
            KeyCode::Down | KeyCode::Char('j') => self.state.next_item(),
            KeyCode::Char(' ') | KeyCode::Char('x') => self.state.toggle_current(),
            KeyCode::Char('a') => self.state.select_all(),
            KeyCode::Char('n') => self.state.select_none(),
            KeyCode::Enter | KeyCode::Char('d') => self.confirm_deletion(),
            _ => {}
        }
    }

    /// Captures the selected subset and hands it to a background worker so
    /// the event loop stays responsive and git output cannot reach the
    /// terminal the TUI owns. With nothing selected this is a no-op.
    fn confirm_deletion(&mut self) {
        let snapshot = self.state.selected_snapshot();
        if snapshot.is_empty() {
            return;
        }

        self.state.begin_deleting();

        let (tx, rx) = mpsc::channel();
        self.completion_rx = Some(rx);

        let repo = self.repo.clone();
        let target = self.target;
        std::thread::spawn(move || {
            let deleter = deleter_for(&repo, target);
            let batch = run_batch(deleter.as_ref(), &snapshot);
            let _ = tx.send(batch);
        });
    }

    /// Delivers the worker's single completion message, if it has arrived.
    /// Returns true when the session just transitioned to `Finished`.
    pub fn poll_completion(&mut self) -> bool {
        let Some(rx) = &self.completion_rx else {
            return false;
        };

        match rx.try_recv() {
            Ok(batch) => {
                self.completion_rx = None;
                self.state.finish(batch);
                true
            }
            Err(_) => false,
        }
    }
}
