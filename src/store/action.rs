//! Base trait for actions.

use std::fmt::Debug;

/// Marker trait for action records.
///
/// Actions represent:
/// - User interactions (submitting text, clicking an item or a link)
/// - Startup seeding from the command line
///
/// Reducers receive actions by reference; an action is never modified once
/// created.
pub trait Action: Debug + 'static {}
