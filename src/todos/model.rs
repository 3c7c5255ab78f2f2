use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Identifier of a to-do item. Assigned once and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id: TodoId(id),
            text: text.into(),
            completed,
        }
    }
}

/// Ordered, immutable sequence of to-do items.
///
/// Items are shared between successive lists, so a transition that leaves an
/// item alone keeps its allocation. Equality compares by value; use
/// [`TodoList::ptr_eq`] for identity.
#[derive(Debug, Clone)]
pub struct TodoList {
    items: Arc<[Arc<Todo>]>,
}

impl Default for TodoList {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl TodoList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Todo>> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Todo>> {
        self.items.iter()
    }

    /// True when both lists are the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// New list with `todo` appended; `self` is left untouched.
    pub fn appended(&self, todo: Arc<Todo>) -> Self {
        self.items
            .iter()
            .cloned()
            .chain(std::iter::once(todo))
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|todo| todo.completed).count()
    }
}

impl PartialEq for TodoList {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.items == other.items
    }
}

impl Eq for TodoList {}

impl FromIterator<Arc<Todo>> for TodoList {
    fn from_iter<I: IntoIterator<Item = Arc<Todo>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<Todo> for TodoList {
    fn from_iter<I: IntoIterator<Item = Todo>>(iter: I) -> Self {
        iter.into_iter().map(Arc::new).collect()
    }
}

impl From<Vec<Todo>> for TodoList {
    fn from(todos: Vec<Todo>) -> Self {
        todos.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Arc<Todo>;
    type IntoIter = std::slice::Iter<'a, Arc<Todo>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Which items the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityFilter {
    #[default]
    #[serde(alias = "SHOW_ALL")]
    All,
    #[serde(alias = "SHOW_ACTIVE")]
    Active,
    #[serde(alias = "SHOW_COMPLETED")]
    Completed,
}

impl VisibilityFilter {
    /// Footer order.
    pub const ALL: [VisibilityFilter; 3] = [Self::All, Self::Active, Self::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.completed,
            Self::Completed => todo.completed,
        }
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown visibility filter '{0}' (expected all, active or completed)")]
pub struct FilterParseError(pub String);

impl FromStr for VisibilityFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "show_all" => Ok(Self::All),
            "active" | "show_active" => Ok(Self::Active),
            "completed" | "show_completed" => Ok(Self::Completed),
            _ => Err(FilterParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appended_leaves_original_alone() {
        let before = TodoList::from(vec![Todo::new(0, "Learn Redux", false)]);
        let after = before.appended(Arc::new(Todo::new(1, "Go shopping", false)));

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert!(Arc::ptr_eq(
            before.get(0).expect("first"),
            after.get(0).expect("first")
        ));
    }

    #[test]
    fn filter_parses_case_insensitively() {
        assert_eq!("Active".parse::<VisibilityFilter>(), Ok(VisibilityFilter::Active));
        assert_eq!("SHOW_COMPLETED".parse::<VisibilityFilter>(), Ok(VisibilityFilter::Completed));
        assert_eq!(
            "done".parse::<VisibilityFilter>(),
            Err(FilterParseError("done".to_string()))
        );
    }

    #[test]
    fn filter_default_is_all() {
        assert_eq!(VisibilityFilter::default(), VisibilityFilter::All);
    }
}
