use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 0, g: 255, b: 204 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };
pub const RESULT: Color = Color::TrueColor { r: 0, g: 255, b: 204 };
pub const FAILURE: Color = Color::TrueColor { r: 255, g: 95, b: 95 };
