use crate::todos::model::{TodoList, VisibilityFilter};

/// Items shown under `filter`, in list order.
///
/// `All` hands back the same list; the other filters build a new one. The
/// input is never modified.
pub fn visible_todos(todos: &TodoList, filter: VisibilityFilter) -> TodoList {
    match filter {
        VisibilityFilter::All => todos.clone(),
        VisibilityFilter::Active | VisibilityFilter::Completed => todos
            .iter()
            .filter(|todo| filter.matches(todo))
            .cloned()
            .collect(),
    }
}
