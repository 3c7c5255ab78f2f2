use crate::ui::layout::inner;
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, TEXT};
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PLACEHOLDER: &str = "What needs to be done?";

/// Single-line text input for new items.
pub struct AddTodo<'a> {
    input: &'a str,
    focused: bool,
}

impl<'a> AddTodo<'a> {
    pub fn new(input: &'a str, focused: bool) -> Self {
        Self { input, focused }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let line = if self.input.is_empty() && !self.focused {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(DIM_TEXT)))
        } else {
            let width = inner(area).width as usize;
            Line::from(Span::styled(
                visible_tail(self.input, width).to_string(),
                Style::default().fg(TEXT),
            ))
        };

        let border = if self.focused { ACCENT } else { GLOBAL_BORDER };
        Paragraph::new(line).block(
            Block::default()
                .title(Span::styled(" Add Todo ", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }

    /// Cursor cell after the last typed character, if there is room for one.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let content = inner(area);
        if content.width == 0 || content.height == 0 {
            return None;
        }
        let width = content.width as usize;
        let typed = visible_tail(self.input, width).width() as u16;
        Some(Position::new(content.x + typed, content.y))
    }
}

/// The end of `input` that fits in `width` cells with one cell left for the
/// cursor. Measured in display cells, so wide characters count twice.
fn visible_tail(input: &str, width: usize) -> &str {
    let room = width.saturating_sub(1);
    let mut remaining = input.width();
    if remaining <= room {
        return input;
    }
    for (byte, ch) in input.char_indices() {
        if remaining <= room {
            return &input[byte..];
        }
        remaining -= ch.width().unwrap_or(0);
    }
    ""
}
