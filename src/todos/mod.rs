//! To-do list domain: items, actions, reducers and the visible-items selector.

mod action;
mod model;
mod reducer;
mod selector;
mod state;

pub use action::{ActionCreator, TodoAction};
pub use model::{FilterParseError, Todo, TodoId, TodoList, VisibilityFilter};
pub use reducer::{TodoAppReducer, TodoReducer, TodosReducer, VisibilityFilterReducer};
pub use selector::visible_todos;
pub use state::AppState;
