use crate::todos::VisibilityFilter;
use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::AddTodo => handle_add_todo_key(app, key),
        Focus::TodoList => handle_list_key(app, key),
    }
}

fn handle_add_todo_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.clear_input();
        return;
    }

    match key.code {
        KeyCode::Enter => {
            app.submit_input();
        }
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Esc | KeyCode::Down => app.set_focus(Focus::TodoList),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.insert_char(ch)
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('a') | KeyCode::Char('i') => app.set_focus(Focus::AddTodo),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char(ch) => {
            if let Some(filter) = filter_for_digit(ch) {
                app.set_filter(filter);
            }
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.on_click(mouse.column, mouse.row),
        MouseEventKind::ScrollUp => app.move_selection(-1),
        MouseEventKind::ScrollDown => app.move_selection(1),
        _ => {}
    }
}

/// Bracketed paste goes into the add control; line breaks are dropped.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.focus() == Focus::AddTodo {
        app.insert_str(text);
    }
}

/// `1`, `2`, `3` select the footer links in order.
fn filter_for_digit(ch: char) -> Option<VisibilityFilter> {
    let index = ch.to_digit(10)? as usize;
    VisibilityFilter::ALL.get(index.checked_sub(1)?).copied()
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_footer_order() {
        assert_eq!(filter_for_digit('1'), Some(VisibilityFilter::All));
        assert_eq!(filter_for_digit('2'), Some(VisibilityFilter::Active));
        assert_eq!(filter_for_digit('3'), Some(VisibilityFilter::Completed));
        assert_eq!(filter_for_digit('0'), None);
        assert_eq!(filter_for_digit('4'), None);
        assert_eq!(filter_for_digit('x'), None);
    }
}
