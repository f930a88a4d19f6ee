use crate::core::git::{Branch, OutcomeBatch};
use ratatui::widgets::ListState;

/// Session lifecycle. `Finished` and `Cancelled` are terminal; `Cancelled`
/// is reachable only from `Browsing`, so a cancelled session is guaranteed
/// to have touched nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    Browsing,
    Deleting,
    Finished,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct SelectionItem {
    pub branch: Branch,
    pub selected: bool,
}

pub struct SelectState {
    pub items: Vec<SelectionItem>,
    pub cursor: usize,
    pub list_state: ListState,
    pub mode: SelectMode,
    pub outcome: Option<OutcomeBatch>,
}

impl SelectState {
    pub fn new(candidates: Vec<Branch>) -> Self {
        let mut list_state = ListState::default();
        if !candidates.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            items: candidates
                .into_iter()
                .map(|branch| SelectionItem {
                    branch,
                    selected: false,
                })
                .collect(),
            cursor: 0,
            list_state,
            mode: SelectMode::Browsing,
            outcome: None,
        }
    }

    pub fn previous_item(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.list_state.select(Some(self.cursor));
        }
    }

    pub fn next_item(&mut self) {
        if self.cursor < self.items.len().saturating_sub(1) {
            self.cursor += 1;
            self.list_state.select(Some(self.cursor));
        }
    }

    pub fn toggle_current(&mut self) {
        if let Some(item) = self.items.get_mut(self.cursor) {
            item.selected = !item.selected;
        }
    }

    pub fn select_all(&mut self) {
        for item in &mut self.items {
            item.selected = true;
        }
    }

    pub fn select_none(&mut self) {
        for item in &mut self.items {
            item.selected = false;
        }
    }

    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.selected).count()
    }

    /// Immutable snapshot of the selected branches, in candidate order.
    pub fn selected_snapshot(&self) -> Vec<Branch> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.branch.clone())
            .collect()
    }

    pub fn begin_deleting(&mut self) {
        self.mode = SelectMode::Deleting;
    }

    pub fn finish(&mut self, batch: OutcomeBatch) {
        self.outcome = Some(batch);
        self.mode = SelectMode::Finished;
    }

    pub fn cancel(&mut self) {
        if self.mode == SelectMode::Browsing {
            self.mode = SelectMode::Cancelled;
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.mode, SelectMode::Finished | SelectMode::Cancelled)
    }
}
