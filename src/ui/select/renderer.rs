use super::state::{SelectMode, SelectState};
use crate::ui::report::format_age;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub struct SelectRenderer {
    scope: String,
}

impl SelectRenderer {
    pub fn new(scope: &str) -> Self {
        Self {
            scope: scope.to_string(),
        }
    }

    pub fn render(&self, f: &mut Frame, state: &mut SelectState) {
        match state.mode {
            SelectMode::Browsing => self.render_browsing(f, state),
            SelectMode::Deleting => self.render_deleting(f, state),
            // Terminal modes are reported on plain stdout after the
            // alternate screen is torn down.
            SelectMode::Finished | SelectMode::Cancelled => {}
        }
    }

    fn render_browsing(&self, f: &mut Frame, state: &mut SelectState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(2),
            ])
            .split(f.area());

        let title = Paragraph::new(format!(
            " Stale {} branches ({})",
            self.scope,
            state.items.len()
        ))
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, layout[0]);

        let items: Vec<ListItem> = state.items.iter().map(branch_row).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().bg(Color::Rgb(30, 41, 59)))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, layout[1], &mut state.list_state);

        let status = if state.selected_count() > 0 {
            Line::from(Span::styled(
                format!(" {} branch(es) selected for deletion", state.selected_count()),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                " space/x toggle • a all • n none • enter/d delete • q quit",
                Style::default().fg(Color::DarkGray),
            ))
        };
        f.render_widget(Paragraph::new(status), layout[2]);
    }

    fn render_deleting(&self, f: &mut Frame, state: &SelectState) {
        let area = centered_rect(60, 20, f.area());
        let message = Paragraph::new(format!(
            "Deleting {} selected branch(es)...",
            state.selected_count()
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(message, area);
    }
}

fn branch_row(item: &super::state::SelectionItem) -> ListItem<'_> {
    let (checkbox, checkbox_style) = if item.selected {
        ("●", Style::default().fg(Color::Green))
    } else {
        ("○", Style::default().fg(Color::DarkGray))
    };

    let mut message = item.branch.last_commit_message.clone();
    if message.chars().count() > 60 {
        message = message.chars().take(57).collect();
        message.push_str("...");
    }

    ListItem::new(Line::from(vec![
        Span::styled(checkbox, checkbox_style),
        Span::raw(" "),
        Span::styled(
            item.branch.full_name(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})", format_age(item.branch.age())),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("  {} — {}", item.branch.last_author, message),
            Style::default().fg(Color::Gray),
        ),
    ]))
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
