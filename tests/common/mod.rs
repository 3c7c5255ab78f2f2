//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::buffer::Buffer;
use todo_tui::todos::{Todo, TodoList};

/// `[{0, "Learn Redux", false}, {1, "Go shopping", false}]`
pub fn two_active() -> TodoList {
    TodoList::from(vec![
        Todo::new(0, "Learn Redux", false),
        Todo::new(1, "Go shopping", false),
    ])
}

/// One completed item and two active ones.
pub fn mixed_three() -> TodoList {
    TodoList::from(vec![
        Todo::new(0, "Learn Redux", true),
        Todo::new(1, "Go shopping", false),
        Todo::new(2, "Walk the dog", false),
    ])
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

/// Buffer contents, one line per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
