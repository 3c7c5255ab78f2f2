use ratatui::layout::{Position, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub add_todo: Rect,
    pub list: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let add_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(add_height));
    let add_todo = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: add_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let list = Rect {
        x: area.x,
        y: area.y + add_height,
        width: area.width,
        height: area.height.saturating_sub(add_height + footer_height),
    };
    Regions {
        add_todo,
        list,
        footer,
    }
}

/// Area inside a one-cell border.
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}
