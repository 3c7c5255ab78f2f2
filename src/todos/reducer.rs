//! Reducers for the to-do list.
//!
//! Each slice of [`AppState`] has its own reducer; [`TodoAppReducer`] hands
//! every action to every slice. Actions a slice does not handle come back
//! unchanged, down to the same allocation.

use std::sync::Arc;

use crate::store::{Reducer, StoreState};
use crate::todos::action::TodoAction;
use crate::todos::model::{Todo, TodoList, VisibilityFilter};
use crate::todos::state::AppState;

impl StoreState for Option<Arc<Todo>> {}
impl StoreState for TodoList {}
impl StoreState for VisibilityFilter {}

/// Reducer for a single item. `None` means the item does not exist yet.
pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = Option<Arc<Todo>>;
    type Action = TodoAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            TodoAction::AddTodo { id, text } => Some(Arc::new(Todo {
                id: *id,
                text: text.clone(),
                completed: false,
            })),
            TodoAction::ToggleTodo { id } => match state {
                Some(todo) if todo.id == *id => Some(Arc::new(Todo {
                    completed: !todo.completed,
                    ..Todo::clone(&todo)
                })),
                other => other,
            },
            TodoAction::SetVisibilityFilter { .. } => state,
        }
    }
}

pub struct TodosReducer;

impl Reducer for TodosReducer {
    type State = TodoList;
    type Action = TodoAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            TodoAction::AddTodo { .. } => match TodoReducer::reduce(None, action) {
                Some(todo) => state.appended(todo),
                None => state,
            },
            TodoAction::ToggleTodo { .. } => {
                let mut changed = false;
                let next: TodoList = state
                    .iter()
                    .filter_map(|todo| {
                        let reduced = TodoReducer::reduce(Some(Arc::clone(todo)), action);
                        if !matches!(&reduced, Some(r) if Arc::ptr_eq(r, todo)) {
                            changed = true;
                        }
                        reduced
                    })
                    .collect();
                if changed {
                    next
                } else {
                    state
                }
            }
            TodoAction::SetVisibilityFilter { .. } => state,
        }
    }
}

pub struct VisibilityFilterReducer;

impl Reducer for VisibilityFilterReducer {
    type State = VisibilityFilter;
    type Action = TodoAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        match action {
            TodoAction::SetVisibilityFilter { filter } => *filter,
            _ => state,
        }
    }
}

/// Root reducer: combines the slice reducers into [`AppState`].
pub struct TodoAppReducer;

impl Reducer for TodoAppReducer {
    type State = AppState;
    type Action = TodoAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        AppState {
            todos: TodosReducer::reduce(state.todos, action),
            visibility_filter: VisibilityFilterReducer::reduce(state.visibility_filter, action),
        }
    }
}
