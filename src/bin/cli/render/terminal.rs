use runku_lib::Familiarity;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
}

/// Wrap text in a color when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Rating label for a stored familiarity value
pub fn familiarity_label(value: i32, use_color: bool) -> String {
    match Familiarity::from_value(value) {
        Some(level) => {
            let color = match level {
                Familiarity::Unknown | Familiarity::Hard => Color::RED,
                Familiarity::Good => Color::YELLOW,
                Familiarity::Easy => Color::BLUE,
                Familiarity::Perfect => Color::GREEN,
            };
            paint(level.label(), color, use_color)
        }
        None => format!("?{}", value),
    }
}

/// Horizontal bar scaled against `max`
pub fn bar(value: u32, max: u32, width: usize) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let filled = ((value as f64 / max as f64) * width as f64).round().max(1.0) as usize;
    "\u{2588}".repeat(filled.min(width))
}

/// Truncate to `width` characters, marking the cut with "..."
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
