use crate::todos::VisibilityFilter;
use crate::ui::layout::inner;
use crate::ui::theme::{DIM_TEXT, GLOBAL_BORDER, LINK, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PREFIX: &str = " Show: ";
const SEPARATOR: &str = " ";

/// Filter links. The link for the active filter is plain text; the others
/// are clickable.
pub struct Footer {
    active: VisibilityFilter,
}

impl Footer {
    pub fn new(active: VisibilityFilter) -> Self {
        Self { active }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let dim_style = Style::default().fg(DIM_TEXT);
        let link_style = Style::default()
            .fg(LINK)
            .add_modifier(Modifier::UNDERLINED);

        let mut spans = vec![Span::styled(PREFIX, dim_style)];
        for (idx, filter) in VisibilityFilter::ALL.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(SEPARATOR, dim_style));
            }
            let style = if *filter == self.active {
                text_style.add_modifier(Modifier::BOLD)
            } else {
                link_style
            };
            spans.push(Span::styled(filter.label(), style));
        }

        // Calculate padding using char count, not byte count (for Unicode)
        let version = format!("v{} ", VERSION);
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), dim_style));
        spans.push(Span::styled(version, dim_style.add_modifier(Modifier::DIM)));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// Screen cells occupied by each filter link inside the footer `area`.
///
/// Mirrors the span layout of [`Footer::widget`]; links clipped by a narrow
/// terminal are shortened or left out.
pub fn filter_link_areas(area: Rect) -> Vec<(VisibilityFilter, Rect)> {
    let content = inner(area);
    if content.height == 0 {
        return Vec::new();
    }
    let right = content.x.saturating_add(content.width);
    let mut x = content.x.saturating_add(PREFIX.chars().count() as u16);
    let mut links = Vec::with_capacity(VisibilityFilter::ALL.len());

    for (idx, filter) in VisibilityFilter::ALL.iter().enumerate() {
        if idx > 0 {
            x = x.saturating_add(SEPARATOR.chars().count() as u16);
        }
        if x >= right {
            break;
        }
        let width = (filter.label().chars().count() as u16).min(right - x);
        links.push((*filter, Rect::new(x, content.y, width, 1)));
        x = x.saturating_add(width);
    }
    links
}
