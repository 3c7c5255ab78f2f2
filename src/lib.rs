//! A to-do list for the terminal, built on unidirectional data flow.
//!
//! ```text
//! ui (key/mouse) ──→ ActionCreator ──→ Store::dispatch ──→ TodoAppReducer
//!        ↑                                                      │
//!        └──────── render(visible_todos(state)) ←── AppState ←──┘
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod store;
pub mod todos;
pub mod ui;
