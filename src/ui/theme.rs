use crate::parser::lexer::TokenClass;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub operator: Color,
    pub identifier: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
}

impl Theme {
    /// Foreground color for a token class.
    pub fn token(&self, class: TokenClass) -> Color {
        match class {
            TokenClass::Identifier => self.identifier,
            TokenClass::ReservedWord => self.keyword,
            TokenClass::IntegerConstant => self.number,
            TokenClass::Operator => self.operator,
            TokenClass::StringLiteral => self.string,
            TokenClass::Unrecognized => self.error,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    string: Color::Rgb(250, 179, 135),         // Orange for strings
    number: Color::Rgb(245, 194, 231),         // Pink for numbers
    operator: Color::Rgb(148, 226, 213),       // Teal for operators
    identifier: Color::Rgb(249, 226, 175),     // Yellow for identifiers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for status bar
};
