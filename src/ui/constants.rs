use ratatui::style::{Color, Style};

// Type aliases for clarity
pub type CharBuffer = Vec<Vec<char>>;
pub type StyleBuffer = Vec<Vec<Style>>;

pub const SPHERE_DOT: char = '·';
pub const LIGHT_MARKER: char = '●';
pub const HELPER_DOT: char = '∙';

/// Dots drawn along a light's aim line, target excluded.
pub const HELPER_STEPS: usize = 4;

pub const SPHERE_COLOR: Color = Color::DarkGray;

pub const APP_NAME: &str = "typesphere";
pub const HELP_HINT: &str = "Press ESC or q to close help";
