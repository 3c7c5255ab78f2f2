//! Terminal view: the add control, the filtered list and the filter footer,
//! re-rendered from store state.

pub mod add_todo;
pub mod app;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod todo_list;

pub use runtime::run;
