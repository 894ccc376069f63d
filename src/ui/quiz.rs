use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use super::layout::wrap_text;
use crate::app::App;
use crate::models::Question;
use crate::session::Session;

/// Narrowest content area that still has room for the mascot. The card skin
/// leaves 66 columns.
const MASCOT_MIN_WIDTH: u16 = 64;

/// Rows taken by everything except the prompt and the options.
const FIXED_ROWS: u16 = 9;
const MIN_OPTION_ROWS: u16 = 3;
const MIN_PROMPT_ROWS: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };

    let prompt = wrap_text(
        &format!("{}. {}", question.id, question.prompt),
        usize::from(area.width.saturating_sub(4)),
    );
    let prompt_rows = prompt_height(prompt.len(), area.height);

    let chunks = Layout::vertical([
        Constraint::Length(2), // Title
        Constraint::Length(1),
        Constraint::Length(1), // Progress bar
        Constraint::Length(1), // Counts
        Constraint::Length(1),
        Constraint::Length(prompt_rows),
        Constraint::Fill(1),   // Options
        Constraint::Length(1), // Notice
        Constraint::Length(1), // Navigation
        Constraint::Length(1), // Controls
    ])
    .split(area);

    render_header(frame, chunks[0]);
    render_progress_bar(frame, chunks[2], session);
    render_counts(frame, chunks[3], session);
    render_prompt(frame, chunks[5], prompt);
    render_options(frame, chunks[6], session, question, app.option_cursor());
    render_notice(frame, chunks[7], app.notice());
    render_navigation(frame, chunks[8], session);
    render_controls(frame, chunks[9]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "Test Your Knowledge",
            Style::default().fg(Color::Cyan).bold().italic(),
        )),
        Line::from("Answer all questions to see your results".fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_progress_bar(frame: &mut Frame, area: Rect, session: &Session) {
    let percent = session.progress_percent().unwrap_or(0.0);
    let widget = Gauge::default()
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{percent:.0}%"))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray));
    frame.render_widget(widget, area);
}

fn render_counts(frame: &mut Frame, area: Rect, session: &Session) {
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);
    let position = format!(
        "Question {} of {}",
        session.current_index().unwrap_or(0) + 1,
        session.total_questions()
    );
    let answered = format!("{} answered", session.answered_count());

    frame.render_widget(Paragraph::new(position).fg(Color::DarkGray), left);
    frame.render_widget(
        Paragraph::new(answered)
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        right,
    );
}

/// Bordered prompt rows: the wrapped text plus two borders, giving way to the
/// options only when the terminal is too short for both.
fn prompt_height(text_lines: usize, available: u16) -> u16 {
    let wanted = u16::try_from(text_lines)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .max(MIN_PROMPT_ROWS);
    let room = available
        .saturating_sub(FIXED_ROWS + MIN_OPTION_ROWS)
        .max(MIN_PROMPT_ROWS);
    wanted.min(room)
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: Vec<String>) {
    let lines: Vec<Line> = prompt.into_iter().map(Line::from).collect();
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    question: &Question,
    cursor: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_selected = session.is_option_selected(question, option);
        let has_cursor = index == cursor;
        let style = match (is_selected, has_cursor) {
            (true, _) => Style::default().fg(Color::Cyan).bold(),
            (false, true) => Style::default().fg(Color::White),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let marker = if has_cursor { ">" } else { " " };
        let check = if is_selected { "[x]" } else { "[ ]" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), style),
            Span::styled(format!("{check} "), style),
            Span::styled(format!("{}. ", index + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let offset = options_offset(cursor, area.height);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

/// Line offset that keeps the cursor's option on screen. Each option takes
/// two lines.
fn options_offset(cursor: usize, height: u16) -> u16 {
    let visible = (usize::from(height) + 1) / 2;
    let first = (cursor + 1).saturating_sub(visible.max(1));
    u16::try_from(first * 2).unwrap_or(u16::MAX)
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    if let Some(notice) = notice {
        let widget = Paragraph::new(notice)
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(widget, area);
    }
}

fn render_navigation(frame: &mut Frame, area: Rect, session: &Session) {
    let [left, middle, right] = Layout::horizontal([
        Constraint::Length(14),
        Constraint::Fill(1),
        Constraint::Length(14),
    ])
    .areas(area);

    let previous_style = if session.can_go_previous() {
        Style::default().fg(Color::White).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let next_style = if session.can_go_next() {
        Style::default().fg(Color::Green).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let next_label = if session.is_last_question() {
        "Submit >"
    } else {
        "Next >"
    };

    frame.render_widget(Paragraph::new("< Previous").style(previous_style), left);
    frame.render_widget(
        Paragraph::new(next_label)
            .alignment(Alignment::Right)
            .style(next_style),
        right,
    );

    if area.width >= MASCOT_MIN_WIDTH {
        let mascot = Line::from(vec![
            Span::styled("=^.^= ", Style::default().fg(Color::LightMagenta)),
            Span::styled("Best of luck!", Style::default().fg(Color::Gray).italic()),
        ]);
        frame.render_widget(
            Paragraph::new(mascot).alignment(Alignment::Center),
            middle,
        );
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k move  ·  enter select  ·  n next  ·  p back  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
