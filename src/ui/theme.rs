use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DIM_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const LINK: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const COMPLETED: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const SELECTED_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
