use crossterm::style::Color;

pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn day_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn hour_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
}
pub fn flag_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn link_fg() -> Color {
    Color::AnsiValue(201)
} // Bright magenta
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red

/// 256-color index of `color`, or `fallback` for non-indexed colors.
pub fn ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}
