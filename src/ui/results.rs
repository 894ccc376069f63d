use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::layout::wrap_text;
use crate::app::App;
use crate::session::Session;

const ANSWER_LABEL: &str = "   Your answer: ";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();

    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .split(area);

    render_summary(frame, chunks[0], session);
    render_review(frame, chunks[1], session, app.result_scroll());
    render_controls(frame, chunks[2]);
}

fn render_summary(frame: &mut Frame, area: Rect, session: &Session) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quiz Complete!",
            Style::default().fg(Color::Cyan).bold().italic(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "You answered {} out of {} questions",
                session.answered_count(),
                session.total_questions()
            ),
            Style::default().fg(Color::Gray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

/// `scroll` counts questions. Text is wrapped here so each question's line
/// count is known and the offset lands on a question boundary.
fn render_review(frame: &mut Frame, area: Rect, session: &Session, scroll: usize) {
    let width = usize::from(area.width.saturating_sub(2));
    let mut lines: Vec<Line> = Vec::with_capacity(session.total_questions() * 3);
    let mut offset = 0;

    for (position, (question, answer)) in session.review().enumerate() {
        if position == scroll {
            offset = lines.len();
        }

        let prompt_style = Style::default().fg(Color::White).bold();
        for text in wrap_text(&format!("{}. {}", question.id, question.prompt), width) {
            lines.push(Line::from(Span::styled(text, prompt_style)));
        }

        let (answer, answer_style) = match answer {
            Some(answer) => (answer, Style::default().fg(Color::Cyan)),
            None => ("Not answered", Style::default().fg(Color::DarkGray).italic()),
        };
        let label = Span::styled(ANSWER_LABEL, Style::default().fg(Color::Gray));
        if ANSWER_LABEL.len() + answer.chars().count() <= width {
            lines.push(Line::from(vec![label, Span::styled(answer, answer_style)]));
        } else {
            lines.push(Line::from(label));
            for text in wrap_text(answer, width.saturating_sub(3)) {
                lines.push(Line::from(Span::styled(format!("   {text}"), answer_style)));
            }
        }
        lines.push(Line::from(""));
    }

    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::new(1, 1, 1, 0)))
        .scroll((offset, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r start over  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::data::QuizDataset;
    use crate::models::Question;
    use crate::ui::Skin;
    use crate::ui::testing::{contains, draw};

    fn finished(skin: Skin, picks: &[usize]) -> App {
        let mut app = App::new(QuizDataset::sample(), skin);
        for &number in picks {
            app.choose_numbered(number);
            app.advance();
        }
        assert!(app.session().is_finished());
        app
    }

    #[test]
    fn test_lists_all_answers() {
        let app = finished(Skin::Fluid, &[2, 2, 2]);
        let rows = draw(&app, 80, 30);

        assert!(contains(&rows, "Quiz Complete!"));
        assert!(contains(&rows, "You answered 3 out of 3 questions"));
        assert!(contains(&rows, "1. What sound does a cat make?"));
        assert!(contains(&rows, "Your answer: Meow-Meow"));
        assert!(contains(&rows, "Your answer: Jupiter"));
        assert!(contains(&rows, "Your answer: JavaScript"));
        assert!(!contains(&rows, "Test Your Knowledge"));
    }

    #[test]
    fn test_card_skin_shows_same_results() {
        let app = finished(Skin::Card, &[1, 3, 1]);
        let rows = draw(&app, 100, 40);

        assert!(contains(&rows, "You answered 3 out of 3 questions"));
        assert!(contains(&rows, "Your answer: Bhau-Bhau"));
        assert!(contains(&rows, "Your answer: Saturn"));
        assert!(contains(&rows, "Your answer: Python"));
    }

    #[test]
    fn test_scroll_lands_on_next_question_after_wrapped_prompt() {
        let long_prompt = "Which of these statements about ownership, borrowing \
                           and lifetimes holds for every program that compiles?";
        let dataset = QuizDataset::new(vec![
            Question::new(1, long_prompt, ["a1"]),
            Question::new(2, "Second question?", ["b2"]),
            Question::new(3, "Third?", ["c3"]),
        ])
        .unwrap();
        let mut app = App::new(dataset, Skin::Fluid);
        for _ in 0..3 {
            app.choose_numbered(1);
            app.advance();
        }
        assert!(app.session().is_finished());

        let rows = draw(&app, 40, 30);
        assert!(contains(&rows, "Your answer: a1"));

        app.scroll_results_down();
        let rows = draw(&app, 40, 30);
        assert!(!contains(&rows, "ownership"));
        assert!(!contains(&rows, "Your answer: a1"));
        assert!(contains(&rows, "2. Second question?"));
        assert!(contains(&rows, "Your answer: b2"));
        assert!(contains(&rows, "Your answer: c3"));
    }
}
