use crate::store::StoreState;
use crate::todos::model::{TodoList, VisibilityFilter};
use crate::todos::selector::visible_todos;

/// Top-level state: the item list and the active filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub todos: TodoList,
    pub visibility_filter: VisibilityFilter,
}

impl StoreState for AppState {}

impl AppState {
    pub fn with_filter(visibility_filter: VisibilityFilter) -> Self {
        Self {
            todos: TodoList::default(),
            visibility_filter,
        }
    }

    pub fn visible_todos(&self) -> TodoList {
        visible_todos(&self.todos, self.visibility_filter)
    }
}
