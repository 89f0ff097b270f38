//! TUI rendering with ratatui
//!
//! Criteria editor, compiled condition and paged results.

use super::app::{App, Field, InputMode, MessageStyle};
use crate::core::Criterion;
use crate::filter::LoadStatus;
use crate::output::formatters::{letters_placeholder, predicate_text, window_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let criteria_height = (app.session.criteria().len().clamp(1, 8) + 2) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(criteria_height), // Criteria
            Constraint::Length(3),               // Condition
            Constraint::Min(6),                  // Results
            Constraint::Length(5),               // Messages
            Constraint::Length(1),               // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_criteria(f, app, chunks[1]);
    render_condition(f, app, chunks[2]);
    render_results(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔎 WORD FILTER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_criteria(f: &mut Frame, app: &App, area: Rect) {
    let criteria = app.session.criteria();

    // Keep the selected row visible when the list is taller than the panel
    let visible = area.height.saturating_sub(2) as usize;
    let first = app.selected.saturating_sub(visible.saturating_sub(1));

    let items: Vec<ListItem> = if criteria.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No filters - press 'a' to add one",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        criteria
            .iter()
            .enumerate()
            .skip(first)
            .take(visible.max(1))
            .map(|(i, criterion)| ListItem::new(criterion_line(app, i, criterion)))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Filters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn criterion_line<'a>(app: &App, index: usize, criterion: &'a Criterion) -> Line<'a> {
    let is_selected = index == app.selected;
    let editing = is_selected && app.input_mode == InputMode::EditLetters;

    let field_style = |field: Field| {
        if is_selected && app.field == field {
            let color = if editing { Color::Cyan } else { Color::Yellow };
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let letters = if criterion.is_empty() && !editing {
        Span::styled(
            format!("{:<6}", letters_placeholder(criterion.kind())),
            field_style(Field::Letters).add_modifier(Modifier::DIM),
        )
    } else {
        let cursor = if editing { "▏" } else { "" };
        Span::styled(
            format!("{:<6}", format!("{}{cursor}", criterion.letters())),
            field_style(Field::Letters),
        )
    };

    let marker = if is_selected { "▶ " } else { "  " };

    Line::from(vec![
        Span::raw(format!("{marker}{:>2}. ", index + 1)),
        Span::raw("Position "),
        Span::styled(format!(" {:<3} ", criterion.scope()), field_style(Field::Scope)),
        Span::raw("  Value "),
        letters,
        Span::raw("  Filter "),
        Span::styled(format!(" {:<7} ", criterion.kind()), field_style(Field::Kind)),
    ])
}

fn render_condition(f: &mut Frame, app: &App, area: Rect) {
    let predicate = app.session.predicate();
    let style = if predicate.is_always() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let condition = Paragraph::new(predicate_text(predicate))
        .style(style)
        .block(Block::default().title(" Condition ").borders(Borders::ALL));
    f.render_widget(condition, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let engine = app.session.engine();

    let content = match app.session.status() {
        LoadStatus::Loading => Line::from(Span::styled(
            "Loading word list...",
            Style::default().fg(Color::DarkGray),
        )),
        LoadStatus::Failed(reason) => Line::from(Span::styled(
            format!("Word list unavailable: {reason} (press 'r' to retry)"),
            Style::default().fg(Color::Red),
        )),
        LoadStatus::Loaded(_) if engine.result_count() == 0 => Line::from(Span::styled(
            "No results",
            Style::default().fg(Color::DarkGray),
        )),
        LoadStatus::Loaded(_) => Line::from(
            engine
                .window()
                .map(|word| Span::raw(format!("{}  ", word.text())))
                .collect::<Vec<_>>(),
        ),
    };

    let title = format!(
        " Results [{}] {}/{}{} ",
        window_bar(engine.window_len(), engine.result_count(), 10),
        engine.window_len(),
        engine.result_count(),
        if engine.has_more() {
            " | m: load more"
        } else {
            ""
        }
    );

    let results = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((app.results_scroll, 0))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(results, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(3)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let status = Paragraph::new(app.session.status().to_string()).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::EditLetters => "Type letters | Backspace: delete | Esc/Enter: done",
        InputMode::Navigate => "q: Quit | a: Add | d: Remove | Enter: Edit | m: More | ?: Help",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
