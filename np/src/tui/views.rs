//! Form views and rendering

use prefstore::SOURCE_CATALOG;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::state::{Field, FormState};

/// Main render function
pub fn render(state: &FormState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Email
            Constraint::Length(3), // Sources
            Constraint::Min(6),    // Interests
            Constraint::Length(3), // Frequency
            Constraint::Length(3), // Save
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_email(state, frame, chunks[1]);
    render_sources(state, frame, chunks[2]);
    render_interests(state, frame, chunks[3]);
    render_frequency(state, frame, chunks[4]);
    render_save(state, frame, chunks[5]);
    render_footer(state, frame, chunks[6]);
}

/// Bordered block for a form field, highlighted when focused
fn field_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(border_style)
}

/// Render the title bar
fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        "One Newsletter to rule them all",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the email input
fn render_email(state: &FormState, frame: &mut Frame, area: Rect) {
    let content = if state.record.email.is_empty() {
        Line::from(Span::styled("Enter your email", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(state.record.email.as_str())
    };

    let email = Paragraph::new(content).block(field_block("Email address", state.focus == Field::Email));

    frame.render_widget(email, area);
}

/// Render the source catalog as a row of checkboxes
fn render_sources(state: &FormState, frame: &mut Frame, area: Rect) {
    let focused = state.focus == Field::Sources;

    let mut spans = Vec::new();
    for (i, source) in SOURCE_CATALOG.iter().enumerate() {
        let mark = if state.record.has_source(source.id) { "x" } else { " " };

        let mut style = if state.record.has_source(source.id) {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        if focused && i == state.source_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        spans.push(Span::styled(format!("[{}] {}", mark, source.label), style));
        spans.push(Span::raw("  "));
    }

    let sources = Paragraph::new(Line::from(spans)).block(field_block("Select your news sources", focused));

    frame.render_widget(sources, area);
}

/// Render the interest draft input and the committed list
fn render_interests(state: &FormState, frame: &mut Frame, area: Rect) {
    let focused = state.focus == Field::Interests;

    let block = field_block("Your interests", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Draft input
            Constraint::Min(1),    // Committed list
        ])
        .split(inner);

    let draft = if state.new_interest.is_empty() {
        Line::from(Span::styled("Add an interest...", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(vec![
            Span::raw(state.new_interest.as_str()),
            Span::styled("  (Enter to add)", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(draft), chunks[0]);

    let items: Vec<ListItem> = state
        .record
        .interests
        .iter()
        .enumerate()
        .map(|(i, interest)| {
            let content = Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(interest.as_str()),
            ]);

            if focused && i == state.interest_cursor {
                ListItem::new(content).style(Style::default().bg(Color::DarkGray).fg(Color::White))
            } else {
                ListItem::new(content)
            }
        })
        .collect();

    frame.render_widget(List::new(items), chunks[1]);
}

/// Render the frequency selector
fn render_frequency(state: &FormState, frame: &mut Frame, area: Rect) {
    let content = match state.record.frequency {
        Some(frequency) => Line::from(vec![
            Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
            Span::raw(frequency.label()),
            Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
        ]),
        None => Line::from(Span::styled("Select frequency", Style::default().fg(Color::DarkGray))),
    };

    let frequency =
        Paragraph::new(content).block(field_block("Newsletter frequency", state.focus == Field::Frequency));

    frame.render_widget(frequency, area);
}

/// Render the save button, with the transient acknowledgment label
fn render_save(state: &FormState, frame: &mut Frame, area: Rect) {
    let label = if state.save_ack() {
        Span::styled(
            "✓ Preferences saved",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("Save Preferences", Style::default().add_modifier(Modifier::BOLD))
    };

    let save = Paragraph::new(Line::from(label))
        .alignment(Alignment::Center)
        .block(field_block("Save", state.focus == Field::Save));

    frame.render_widget(save, area);
}

/// Render the footer: error message if any, key hints otherwise
fn render_footer(state: &FormState, frame: &mut Frame, area: Rect) {
    let content = if let Some(ref error) = state.error_message {
        Line::from(Span::styled(error.as_str(), Style::default().fg(Color::Red)))
    } else {
        let hint = match state.focus {
            Field::Email => "Type to edit · Tab next field · Ctrl+S save · Esc quit",
            Field::Sources => "←/→ choose · Space toggle · Tab next field · Esc quit",
            Field::Interests => "Type draft · Enter add · ↑/↓ select · Del remove · Tab next field",
            Field::Frequency => "←/→ change · Tab next field · Esc quit",
            Field::Save => "Enter save · Tab next field · Esc quit",
        };
        Line::from(vec![
            Span::styled(state.focus.display_name(), Style::default().fg(Color::Yellow)),
            Span::raw(" │ "),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ])
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL).title(" Keys "));

    frame.render_widget(footer, area);
}
