use std::mem;

use clap::ValueEnum;
use ratatui::{
    layout::Margin,
    prelude::*,
    widgets::{Block, BorderType, Borders},
};

/// Fixed card size used by [`Skin::Card`].
pub const CARD_WIDTH: u16 = 72;
pub const CARD_HEIGHT: u16 = 28;

/// How the quiz is framed on screen. Both skins show the same content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Skin {
    /// Use the whole terminal.
    #[default]
    Fluid,
    /// A fixed-size card centred in the terminal.
    Card,
}

/// Draw the frame for `skin` and return the area left for content.
pub fn card(frame: &mut Frame, area: Rect, skin: Skin) -> Rect {
    match skin {
        Skin::Fluid => area.inner(Margin::new(2, 1)),
        Skin::Card => {
            let card = centered(area, CARD_WIDTH, CARD_HEIGHT);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Color::Cyan);
            let inner = block.inner(card);
            frame.render_widget(block, card);
            inner.inner(Margin::new(2, 1))
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
///
/// Callers render the returned lines without `Wrap`, so the line count used
/// for layout and scrolling is exactly what ends up on screen.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if current_len > 0 && current_len + 1 + word.len() > width {
            lines.push(mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
