use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BUTTON_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const BUTTON_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
