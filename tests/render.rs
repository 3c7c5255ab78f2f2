mod common;

use ratatui::backend::TestBackend;
use ratatui::layout::Position;
use ratatui::style::Modifier;
use ratatui::Terminal;
use todo_tui::config::Config;
use todo_tui::todos::{TodoId, VisibilityFilter};
use todo_tui::ui::app::App;
use todo_tui::ui::render::draw;

fn render(app: &App) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal
}

fn make_app() -> App {
    let mut app = App::new(&Config::default());
    app.on_resize(60, 12);
    app
}

#[test]
fn renders_all_three_regions() {
    let app = make_app();
    let terminal = render(&app);
    let lines = common::buffer_lines(terminal.backend().buffer());

    assert!(lines[0].contains("Add Todo"));
    assert!(lines[3].contains("Todos: All (0)"));
    assert!(lines[4].contains("Nothing to show"));
    assert!(lines[10].contains("Show: All Active Completed"));
}

#[test]
fn items_render_in_order_with_markers() {
    let mut app = make_app();
    app.add_todo("Learn Redux");
    app.add_todo("Go shopping");
    app.toggle_todo(TodoId(2));

    let terminal = render(&app);
    let lines = common::buffer_lines(terminal.backend().buffer());

    assert!(lines[4].contains("[ ] Learn Redux"));
    assert!(lines[5].contains("[x] Go shopping"));
}

#[test]
fn completed_items_are_crossed_out() {
    let mut app = make_app();
    app.add_todo("Learn Redux");
    app.add_todo("Go shopping");
    app.toggle_todo(TodoId(2));

    let terminal = render(&app);
    let buffer = terminal.backend().buffer();

    // " [x] " is five cells wide after the left border.
    assert!(buffer[Position::new(6, 5)]
        .modifier
        .contains(Modifier::CROSSED_OUT));
    assert!(!buffer[Position::new(6, 4)]
        .modifier
        .contains(Modifier::CROSSED_OUT));
}

#[test]
fn filter_changes_visible_rows() {
    let mut app = make_app();
    app.add_todo("Learn Redux");
    app.add_todo("Go shopping");
    app.toggle_todo(TodoId(1));
    app.set_filter(VisibilityFilter::Active);

    let terminal = render(&app);
    let lines = common::buffer_lines(terminal.backend().buffer());

    assert!(lines[3].contains("Todos: Active (1)"));
    assert!(lines[4].contains("Go shopping"));
    assert!(!lines.iter().any(|line| line.contains("Learn Redux")));
}

#[test]
fn active_filter_link_is_plain_text() {
    let mut app = make_app();
    app.set_filter(VisibilityFilter::Active);

    let terminal = render(&app);
    let buffer = terminal.backend().buffer();

    // Footer links on row 10: All at 8, Active at 12, Completed at 19.
    assert!(buffer[Position::new(8, 10)].modifier.contains(Modifier::UNDERLINED));
    assert!(!buffer[Position::new(12, 10)].modifier.contains(Modifier::UNDERLINED));
    assert!(buffer[Position::new(19, 10)].modifier.contains(Modifier::UNDERLINED));
}

#[test]
fn typed_text_is_shown_in_add_box() {
    let mut app = make_app();
    app.insert_str("Walk the dog");

    let terminal = render(&app);
    let lines = common::buffer_lines(terminal.backend().buffer());

    assert!(lines[1].contains("Walk the dog"));
}
