use super::coordinator::SelectCoordinator;
use super::renderer::SelectRenderer;
use super::state::SelectMode;
use crate::core::git::{Branch, DeletionTarget, GitRepository, OutcomeBatch};
use crate::utils::{Result, ShearError};
use anyhow::Result as AnyhowResult;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Duration;

/// How an interactive session ended. Reporting happens on plain stdout once
/// the terminal is restored, so the result travels back to the caller.
pub enum SessionEnd {
    Cancelled,
    Completed(OutcomeBatch),
}

struct SelectApp {
    coordinator: SelectCoordinator,
    renderer: SelectRenderer,
}

impl SelectApp {
    fn new(
        repo: GitRepository,
        candidates: Vec<Branch>,
        target: DeletionTarget,
        scope: &str,
    ) -> Self {
        Self {
            coordinator: SelectCoordinator::new(repo, candidates, target),
            renderer: SelectRenderer::new(scope),
        }
    }

    fn run(&mut self) -> AnyhowResult<SessionEnd> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AnyhowResult<SessionEnd> {
        terminal.draw(|f| self.renderer.render(f, &mut self.coordinator.state))?;

        loop {
            // Poll with a timeout so the completion message is picked up
            // promptly even when no keys arrive.
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.coordinator.handle_key(key);
                }
            }

            self.coordinator.poll_completion();

            match self.coordinator.state.mode {
                SelectMode::Cancelled => return Ok(SessionEnd::Cancelled),
                SelectMode::Finished => {
                    let batch = self.coordinator.state.outcome.take().unwrap_or_default();
                    return Ok(SessionEnd::Completed(batch));
                }
                SelectMode::Browsing | SelectMode::Deleting => {}
            }

            terminal.draw(|f| self.renderer.render(f, &mut self.coordinator.state))?;
        }
    }
}

pub fn run_interactive(
    repo: GitRepository,
    candidates: Vec<Branch>,
    target: DeletionTarget,
    scope: &str,
) -> Result<SessionEnd> {
    let mut app = SelectApp::new(repo, candidates, target, scope);
    app.run()
        .map_err(|e| ShearError::terminal(format!("Interactive selection failed: {}", e)))
}
