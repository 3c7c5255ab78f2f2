use crate::config::Config;
use crate::store::Store;
use crate::todos::{
    ActionCreator, AppState, TodoAction, TodoAppReducer, TodoId, TodoList, VisibilityFilter,
};
use crate::ui::footer::filter_link_areas;
use crate::ui::layout::{hit, inner, layout_regions};
use ratatui::layout::Rect;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    AddTodo,
    TodoList,
}

/// View-side application: the store plus the state that only the terminal
/// view needs (text being typed, focus, list cursor).
pub struct App {
    store: Store<TodoAppReducer>,
    actions: ActionCreator,
    input: String,
    focus: Focus,
    /// Cursor into the visible list.
    selected: usize,
    /// First visible row of the list.
    offset: usize,
    area: Rect,
    should_quit: bool,
    /// Set by the store subscription and by local view changes.
    redraw: Rc<Cell<bool>>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut store = Store::new(AppState::with_filter(config.ui.initial_filter));
        let redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&redraw);
        store.subscribe(move |_: &AppState| flag.set(true));

        Self {
            store,
            actions: ActionCreator::starting_at(config.todos.first_id),
            input: String::new(),
            focus: Focus::AddTodo,
            selected: 0,
            offset: 0,
            area: Rect::new(0, 0, 80, 24),
            should_quit: false,
            redraw,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn visible_todos(&self) -> TodoList {
        self.state().visible_todos()
    }

    pub fn filter(&self) -> VisibilityFilter {
        self.state().visibility_filter
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the highlighted row in the visible list, if it has any rows.
    pub fn selected(&self) -> Option<usize> {
        (!self.visible_todos().is_empty()).then_some(self.selected)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }

    fn mark_dirty(&self) {
        self.redraw.set(true);
    }

    fn dispatch(&mut self, action: TodoAction) {
        self.store.dispatch(action);
        self.clamp_selection();
    }

    // ========================================================================
    // Store-facing operations
    // ========================================================================

    /// Dispatch an add action unless `text` is blank. Returns the new id.
    pub fn add_todo(&mut self, text: &str) -> Option<TodoId> {
        if text.trim().is_empty() {
            return None;
        }
        let id = self.actions.peek_next_id();
        let action = self.actions.add_todo(text);
        self.dispatch(action);
        Some(id)
    }

    pub fn toggle_todo(&mut self, id: TodoId) {
        self.dispatch(ActionCreator::toggle_todo(id));
    }

    pub fn set_filter(&mut self, filter: VisibilityFilter) {
        self.dispatch(ActionCreator::set_visibility_filter(filter));
    }

    pub fn toggle_selected(&mut self) {
        let visible = self.visible_todos();
        if let Some(todo) = visible.get(self.selected) {
            self.toggle_todo(todo.id);
        }
    }

    // ========================================================================
    // Add control
    // ========================================================================

    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
        self.mark_dirty();
    }

    pub fn insert_str(&mut self, text: &str) {
        self.input
            .extend(text.chars().filter(|ch| !ch.is_control()));
        self.mark_dirty();
    }

    pub fn delete_char(&mut self) {
        if self.input.pop().is_some() {
            self.mark_dirty();
        }
    }

    pub fn clear_input(&mut self) {
        if !self.input.is_empty() {
            self.input.clear();
            self.mark_dirty();
        }
    }

    /// Add the typed text as a new item and clear the input.
    ///
    /// Blank input is left as is and nothing is dispatched.
    pub fn submit_input(&mut self) -> Option<TodoId> {
        let text = self.input.clone();
        let id = self.add_todo(&text)?;
        self.clear_input();
        Some(id)
    }

    // ========================================================================
    // Focus and list cursor
    // ========================================================================

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.mark_dirty();
        }
    }

    pub fn toggle_focus(&mut self) {
        let next = match self.focus {
            Focus::AddTodo => Focus::TodoList,
            Focus::TodoList => Focus::AddTodo,
        };
        self.set_focus(next);
    }

    /// Move the list cursor, wrapping at both ends.
    pub fn move_selection(&mut self, direction: i32) {
        let len = self.visible_todos().len();
        if len == 0 {
            self.selected = 0;
            return;
        }

        let current = self.selected.min(len - 1);
        self.selected = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
        self.scroll_to_selection();
        self.mark_dirty();
    }

    fn list_rows(&self) -> usize {
        inner(layout_regions(self.area).list).height as usize
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_todos().len();
        self.selected = self.selected.min(len.saturating_sub(1));
        self.scroll_to_selection();
    }

    fn scroll_to_selection(&mut self) {
        let rows = self.list_rows();
        let len = self.visible_todos().len();
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if rows > 0 && self.selected >= self.offset + rows {
            self.offset = self.selected + 1 - rows;
        }
        self.offset = self.offset.min(len.saturating_sub(rows.max(1)));
    }

    // ========================================================================
    // Terminal events
    // ========================================================================

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.area = Rect::new(0, 0, cols, rows);
        self.scroll_to_selection();
        self.mark_dirty();
    }

    /// Left click at a screen cell: focus the input, toggle a list row, or
    /// follow a footer link.
    pub fn on_click(&mut self, column: u16, row: u16) {
        let regions = layout_regions(self.area);

        if hit(regions.add_todo, column, row) {
            self.set_focus(Focus::AddTodo);
            return;
        }

        let list = inner(regions.list);
        if hit(list, column, row) {
            let index = self.offset + (row - list.y) as usize;
            let visible = self.visible_todos();
            if let Some(todo) = visible.get(index) {
                self.set_focus(Focus::TodoList);
                self.selected = index;
                self.toggle_todo(todo.id);
                self.mark_dirty();
            }
            return;
        }

        if let Some((filter, _)) = filter_link_areas(regions.footer)
            .into_iter()
            .find(|(_, link)| hit(*link, column, row))
        {
            self.set_filter(filter);
        }
    }
}
