use crate::store::Action;
use crate::todos::model::{TodoId, VisibilityFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new, not yet completed item.
    AddTodo { id: TodoId, text: String },
    /// Flip the completed flag of the item with this id, if present.
    ToggleTodo { id: TodoId },
    SetVisibilityFilter { filter: VisibilityFilter },
}

impl Action for TodoAction {}

/// Builds action records. Owns the id sequence so that ids are never reused
/// within a session.
#[derive(Debug, Clone)]
pub struct ActionCreator {
    next_id: u64,
}

impl Default for ActionCreator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl ActionCreator {
    pub fn starting_at(first_id: u64) -> Self {
        Self { next_id: first_id }
    }

    pub fn add_todo(&mut self, text: impl Into<String>) -> TodoAction {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        TodoAction::AddTodo {
            id,
            text: text.into(),
        }
    }

    pub fn toggle_todo(id: TodoId) -> TodoAction {
        TodoAction::ToggleTodo { id }
    }

    pub fn set_visibility_filter(filter: VisibilityFilter) -> TodoAction {
        TodoAction::SetVisibilityFilter { filter }
    }

    /// Id the next `add_todo` call will assign.
    pub fn peek_next_id(&self) -> TodoId {
        TodoId(self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_todo_assigns_increasing_ids() {
        let mut creator = ActionCreator::default();
        let first = creator.add_todo("Learn Redux");
        let second = creator.add_todo("Go shopping");

        assert_eq!(
            first,
            TodoAction::AddTodo {
                id: TodoId(1),
                text: "Learn Redux".to_string()
            }
        );
        assert!(matches!(second, TodoAction::AddTodo { id: TodoId(2), .. }));
        assert_eq!(creator.peek_next_id(), TodoId(3));
    }

    #[test]
    fn starting_at_overrides_first_id() {
        let mut creator = ActionCreator::starting_at(0);
        assert!(matches!(
            creator.add_todo("x"),
            TodoAction::AddTodo { id: TodoId(0), .. }
        ));
    }
}
