use std::cell::RefCell;
use std::rc::Rc;
use todo_tui::store::Store;
use todo_tui::todos::{ActionCreator, AppState, TodoAppReducer, TodoId, VisibilityFilter};

#[test]
fn dispatch_runs_root_reducer() {
    let mut store: Store<TodoAppReducer> = Store::default();
    let mut creator = ActionCreator::default();

    assert!(store.dispatch(creator.add_todo("Learn Redux")));
    assert!(store.dispatch(ActionCreator::toggle_todo(TodoId(1))));

    let todo = store.state().todos.get(0).expect("item");
    assert_eq!(todo.id, TodoId(1));
    assert!(todo.completed);
}

#[test]
fn previous_state_survives_dispatch() {
    let mut store: Store<TodoAppReducer> = Store::default();
    let mut creator = ActionCreator::default();
    store.dispatch(creator.add_todo("Learn Redux"));

    let held = store.state().clone();
    store.dispatch(ActionCreator::toggle_todo(TodoId(1)));

    assert!(!held.todos.get(0).expect("held item").completed);
    assert!(store.state().todos.get(0).expect("new item").completed);
    assert!(!held.todos.ptr_eq(&store.state().todos));
}

#[test]
fn identity_dispatch_reports_no_change() {
    let mut store: Store<TodoAppReducer> = Store::new(AppState::with_filter(VisibilityFilter::Active));
    let before = store.state().clone();

    assert!(!store.dispatch(ActionCreator::toggle_todo(TodoId(3))));
    assert!(!store.dispatch(ActionCreator::set_visibility_filter(VisibilityFilter::Active)));
    assert_eq!(store.state(), &before);
}

#[test]
fn subscribers_are_notified_once_per_dispatch() {
    let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let mut store: Store<TodoAppReducer> = Store::default();
    let sink = Rc::clone(&seen);
    let id = store.subscribe(move |state: &AppState| sink.borrow_mut().push(state.todos.len()));

    let mut creator = ActionCreator::default();
    store.dispatch(creator.add_todo("a"));
    store.dispatch(ActionCreator::toggle_todo(TodoId(404)));
    store.dispatch(creator.add_todo("b"));
    assert_eq!(*seen.borrow(), vec![1, 1, 2]);

    assert!(store.unsubscribe(id));
    store.dispatch(creator.add_todo("c"));
    assert_eq!(seen.borrow().len(), 3);
}
