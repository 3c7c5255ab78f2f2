use crate::todos::{TodoList, VisibilityFilter};
use crate::ui::theme::{ACCENT, COMPLETED, DIM_TEXT, GLOBAL_BORDER, SELECTED_HIGHLIGHT, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const HINTS: &str = " Tab: Focus │ Space: Toggle │ 1-3: Filter │ Ctrl+Q: Quit ";

/// The filtered item list.
pub struct TodoListView<'a> {
    visible: &'a TodoList,
    filter: VisibilityFilter,
    selected: Option<usize>,
    offset: usize,
    focused: bool,
}

impl<'a> TodoListView<'a> {
    pub fn new(visible: &'a TodoList, filter: VisibilityFilter) -> Self {
        Self {
            visible,
            filter,
            selected: None,
            offset: 0,
            focused: false,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn widget(&self, rows: usize) -> Paragraph<'static> {
        let lines: Vec<Line> = if self.visible.is_empty() {
            vec![Line::from(Span::styled(
                " Nothing to show",
                Style::default().fg(DIM_TEXT),
            ))]
        } else {
            self.visible
                .iter()
                .enumerate()
                .skip(self.offset)
                .take(rows)
                .map(|(idx, todo)| {
                    let (marker, text_style) = if todo.completed {
                        (
                            " [x] ",
                            Style::default()
                                .fg(COMPLETED)
                                .add_modifier(Modifier::CROSSED_OUT),
                        )
                    } else {
                        (" [ ] ", Style::default().fg(TEXT))
                    };
                    let line = Line::from(vec![
                        Span::styled(marker, Style::default().fg(DIM_TEXT)),
                        Span::styled(todo.text.clone(), text_style),
                    ]);
                    if self.focused && self.selected == Some(idx) {
                        line.style(Style::default().bg(SELECTED_HIGHLIGHT))
                    } else {
                        line
                    }
                })
                .collect()
        };

        let title = format!(" Todos: {} ({}) ", self.filter, self.visible.len());
        let border = if self.focused { ACCENT } else { GLOBAL_BORDER };
        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(ACCENT)))
                .title_bottom(Line::from(Span::styled(
                    HINTS,
                    Style::default().fg(DIM_TEXT),
                )))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }
}
