//! UI Rendering Module
//!
//! Handles drawing the TUI interface using ratatui.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use solace_core::llm::MessageRole;
use solace_core::wellness::Mood;

use crate::tui::app::{App, Focus, InputMode, Overlay, UiState};

/// Draw the complete UI
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    draw_header(f, app, rows[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(rows[1]);

    draw_chat_panel(f, app, body[0]);
    draw_sidebar(f, app, body[1]);
    draw_status_line(f, app, rows[2]);
    draw_help_line(f, app, rows[3]);

    match app.overlay {
        Overlay::Journal => draw_journal_overlay(f, app, size),
        Overlay::Mood => draw_mood_overlay(f, size),
        Overlay::None => {}
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let settings = app.companion.settings();
    let mode = match app.input_mode {
        InputMode::Text => "text",
        InputMode::Speech => "speech",
    };
    let header = Line::from(vec![
        Span::styled(
            " Solace ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("your companion for mental wellness   "),
        Span::styled(
            format!(
                "{} · temp {:.1} · input: {}",
                settings.model, settings.temperature, mode
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(header), area);
}

fn draw_chat_panel(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    draw_messages(f, app, chunks[0]);
    draw_input_box(f, app, chunks[1]);
}

fn draw_messages(f: &mut Frame, app: &mut App, area: Rect) {
    let border_style = if app.focus == Focus::Chat {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Chat ");
    let inner = block.inner(area);

    let mut lines: Vec<Line> = Vec::new();
    for message in app.companion.messages() {
        let (prefix, style) = match message.role {
            MessageRole::User => ("You", Style::default().fg(Color::Cyan)),
            MessageRole::Assistant => ("Solace", Style::default().fg(Color::Green)),
        };
        lines.push(Line::from(Span::styled(
            format!("{}:", prefix),
            style.add_modifier(Modifier::BOLD),
        )));
        for text_line in message.content.lines() {
            lines.push(Line::from(format!("  {}", text_line)));
        }
        lines.push(Line::default());
    }

    if app.state == UiState::Thinking {
        let dots = ".".repeat((app.tick_count % 4) as usize);
        lines.push(Line::from(Span::styled(
            format!("Solace is thinking{}", dots),
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Rough wrapped height so auto-scroll pins the latest message
    let width = inner.width.max(1) as usize;
    let total_rows: usize = lines
        .iter()
        .map(|l| (l.width().max(1) + width - 1) / width)
        .sum();
    let max_scroll = total_rows.saturating_sub(inner.height as usize) as u16;
    if app.chat_auto_scroll {
        app.chat_scroll = max_scroll;
    } else {
        app.chat_scroll = app.chat_scroll.min(max_scroll);
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.chat_scroll, 0));
    f.render_widget(paragraph, area);
}

fn draw_input_box(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.input_mode {
        InputMode::Text => " Chat with Solace... ",
        InputMode::Speech => " Press Enter to speak ",
    };
    let text = match app.input_mode {
        InputMode::Text => app.input.as_str(),
        InputMode::Speech => {
            if app.state == UiState::Listening {
                "Listening... please speak into your microphone"
            } else {
                ""
            }
        }
    };

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);

    if app.input_mode == InputMode::Text && app.focus == Focus::Chat && app.overlay == Overlay::None
    {
        let max_col = area.width.saturating_sub(2) as usize;
        let cursor_x = area.x + 1 + app.input.chars().count().min(max_col) as u16;
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(6)])
        .split(area);

    draw_history_panel(f, app, chunks[0]);
    draw_wellness_panel(f, app, chunks[1]);
}

fn draw_history_panel(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus == Focus::History {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Chat History ");

    let archive = app.companion.archive();
    if archive.is_empty() {
        let empty = Paragraph::new("No chat history yet.\nSaved chats will appear here.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = archive
        .iter()
        .map(|session| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    session.created_at.clone(),
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(session.summary.clone()),
            ])
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(app.history_index.min(archive.len() - 1)));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_wellness_panel(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Wellness ");

    let today_mood = app
        .wellness
        .moods()
        .last()
        .map(|entry| format!("{} {}", entry.mood.emoji(), entry.mood.label()))
        .unwrap_or_else(|| "not logged".to_string());

    let lines = vec![
        Line::from(format!("Today's mood: {}", today_mood)),
        Line::from(format!(
            "Journal entries: {}",
            app.wellness.journal().len()
        )),
        Line::from(format!("Saved chats: {}", app.companion.archive().len())),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status_line(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match (&app.status_message, app.state) {
        (Some(message), _) => (message.clone(), Style::default().fg(Color::Yellow)),
        (None, UiState::Thinking) => (
            "Thinking...".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        (None, UiState::Listening) => (
            "Listening...".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        (None, UiState::Idle) => (String::new(), Style::default()),
    };
    f.render_widget(Paragraph::new(Span::styled(format!(" {}", text), style)), area);
}

fn draw_help_line(f: &mut Frame, app: &App, area: Rect) {
    let help = match (app.overlay, app.focus) {
        (Overlay::Journal, _) => "Enter save · Esc cancel",
        (Overlay::Mood, _) => "1-5 log mood · Esc cancel",
        (Overlay::None, Focus::History) => {
            "Enter load · d delete · Tab chat · ^S save · ^E export · ^C quit"
        }
        (Overlay::None, Focus::Chat) => {
            "Enter send · Tab history · ^S save · ^T input mode · ^N journal · ^D mood · ^E export · ^C quit"
        }
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", help),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Left),
        area,
    );
}

fn draw_journal_overlay(f: &mut Frame, app: &App, size: Rect) {
    let area = centered_rect(60, 30, size);
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(app.journal_input.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Quick Journal: write your thoughts... "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_mood_overlay(f: &mut Frame, size: Rect) {
    let area = centered_rect(44, 20, size);
    f.render_widget(Clear, area);

    let scale: Vec<Span> = Mood::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, mood)| {
            vec![
                Span::styled(
                    format!(" {} ", i + 1),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{} {}   ", mood.emoji(), mood.label())),
            ]
        })
        .collect();

    let lines = vec![
        Line::from("How are you feeling today?"),
        Line::default(),
        Line::from(scale),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Daily Mood "))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Centered overlay rectangle, percentage-sized
fn centered_rect(percent_x: u16, percent_y: u16, size: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(size);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
