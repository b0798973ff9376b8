use colored::Color;

pub const PRIMARY: Color = Color::BrightWhite;
pub const ACCENT: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const ADDRESS: Color = Color::Magenta;

// Signal tiers; the classification itself lives in the domain model.
pub const SIGNAL_STRONG: Color = Color::Green;
pub const SIGNAL_MEDIUM: Color = Color::Yellow;
pub const SIGNAL_WEAK: Color = Color::Red;
