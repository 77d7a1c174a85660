use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub muted: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub bar: Color,        // Resting bars
    pub bar_active: Color, // Search probe under test
    pub bar_match: Color,  // Search hit
    pub bar_swap: Color,   // Sort comparison/swap pair
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    muted: Color::Rgb(108, 112, 134),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for editing
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),
    bar: Color::Rgb(127, 179, 255),      // #7fb3ff
    bar_active: Color::Rgb(255, 165, 0), // #ffa500
    bar_match: Color::Rgb(111, 224, 127), // #6fe07f
    bar_swap: Color::Rgb(255, 99, 71),   // #ff6347
};
