mod common;

use todo_tui::todos::{visible_todos, VisibilityFilter};

#[test]
fn all_returns_every_item() {
    let todos = common::mixed_three();
    let visible = visible_todos(&todos, VisibilityFilter::All);
    assert_eq!(visible.len(), 3);
    assert!(visible.ptr_eq(&todos));
}

#[test]
fn completed_returns_only_completed() {
    let todos = common::mixed_three();
    let visible = visible_todos(&todos, VisibilityFilter::Completed);
    let ids: Vec<u64> = visible.iter().map(|todo| todo.id.0).collect();
    assert_eq!(ids, vec![0]);
}

#[test]
fn active_returns_only_active_in_order() {
    let todos = common::mixed_three();
    let visible = visible_todos(&todos, VisibilityFilter::Active);
    let ids: Vec<u64> = visible.iter().map(|todo| todo.id.0).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn selector_leaves_input_untouched() {
    let todos = common::mixed_three();
    let snapshot = todos.clone();
    for filter in VisibilityFilter::ALL {
        let _ = visible_todos(&todos, filter);
    }
    assert_eq!(todos, snapshot);
    assert!(todos.ptr_eq(&snapshot));
}

#[test]
fn empty_list_stays_empty_under_every_filter() {
    let todos = todo_tui::todos::TodoList::default();
    for filter in VisibilityFilter::ALL {
        assert!(visible_todos(&todos, filter).is_empty());
    }
}
