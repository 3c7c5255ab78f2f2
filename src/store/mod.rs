//! Unidirectional data flow primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of everything the view needs
//! - **Action**: Plain-data record describing an intended change
//! - **Reducer**: Pure function that computes the next state
//! - **Store**: Owns the current state, dispatches actions, notifies subscribers

mod action;
mod reducer;
mod state;
#[allow(clippy::module_inception)]
mod store;

pub use action::Action;
pub use reducer::Reducer;
pub use state::StoreState;
pub use store::{Store, SubscriptionId};
