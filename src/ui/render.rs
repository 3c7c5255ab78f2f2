use crate::ui::add_todo::AddTodo;
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::layout::{inner, layout_regions};
use crate::ui::todo_list::TodoListView;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    let add_focused = app.focus() == Focus::AddTodo;
    let add_todo = AddTodo::new(app.input(), add_focused);
    frame.render_widget(add_todo.widget(regions.add_todo), regions.add_todo);
    if add_focused {
        if let Some(position) = add_todo.cursor_position(regions.add_todo) {
            frame.set_cursor_position(position);
        }
    }

    let visible = app.visible_todos();
    let rows = inner(regions.list).height as usize;
    let list = TodoListView::new(&visible, app.filter())
        .selected(app.selected())
        .offset(app.offset())
        .focused(app.focus() == Focus::TodoList);
    frame.render_widget(Clear, regions.list);
    frame.render_widget(list.widget(rows), regions.list);

    let footer = Footer::new(app.filter());
    frame.render_widget(footer.widget(regions.footer), regions.footer);
}
