//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::Alert;
use crate::dictionary::Dictionary;
use crate::output::formatters::{count_badge, spaced_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<D: Dictionary>(f: &mut Frame, app: &App<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(6),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    render_used_words(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, chunks[3]);

    if let Some(alert) = &app.alert {
        render_alert(f, alert);
    }
}

fn render_header<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let header = Paragraph::new(spaced_letters(app.session.root_word()))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word Scramble ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);

    if app.alert.is_none() {
        // Cursor sits after the typed text, inside the border
        let offset = u16::try_from(app.input_buffer.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(offset);
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_used_words<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let words = app.session.used_words();
    let items: Vec<ListItem> = if words.is_empty() {
        vec![ListItem::new("No words yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        words
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        count_badge(word.chars().count()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(" "),
                    Span::raw(word.as_str()),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Words Found ({}) ", words.len()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_side_panel<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let stats = vec![
        Line::from(format!("Round:   {}", app.rounds_played)),
        Line::from(format!("Words:   {}", app.session.used_words().len())),
        Line::from(format!("Letters: {}", app.letters_found())),
    ];
    let stats = Paragraph::new(stats).block(
        Block::default()
            .title(" Round ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(stats, chunks[0]);

    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages, chunks[1]);
}

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Enter: Submit | Ctrl+R/F5: New Word | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert(f: &mut Frame, alert: &Alert) {
    let area = centered_rect(f.area(), 50, 7);

    let content = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of at most `width` x `height` centered in `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
