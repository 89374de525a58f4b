//! Name Badge Colors
//!
//! Fixed palette for name badges and the text color that stays readable on
//! top of a given background.

pub const BLACK_TEXT: &str = "#000000";
pub const WHITE_TEXT: &str = "#ffffff";

/// Badge background for names without a chosen color
pub const DEFAULT_BADGE_COLOR: &str = "#6366f1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub hex: &'static str,
    pub label: &'static str,
}

pub const PALETTE: [NamedColor; 3] = [
    NamedColor { hex: "#3b82f6", label: "Blue" },
    NamedColor { hex: "#10b981", label: "Green" },
    NamedColor { hex: "#ec4899", label: "Pink" },
];

/// `#RRGGBB` -> channels; anything else is `None`
pub(crate) fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Perceived brightness `(299 R + 587 G + 114 B) / 1000`
pub fn brightness(hex: &str) -> Option<f64> {
    let (r, g, b) = parse_hex(hex)?;
    Some((299.0 * r as f64 + 587.0 * g as f64 + 114.0 * b as f64) / 1000.0)
}

/// Black text on bright backgrounds, white otherwise; black for bad input
pub fn contrast_color(hex: &str) -> &'static str {
    match brightness(hex) {
        Some(y) if y > 128.0 => BLACK_TEXT,
        Some(_) => WHITE_TEXT,
        None => BLACK_TEXT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bright_backgrounds_get_black() {
        assert_eq!(contrast_color("#ffffff"), BLACK_TEXT);
        assert_eq!(contrast_color("#10b981"), BLACK_TEXT);
        assert_eq!(contrast_color("#FFFF00"), BLACK_TEXT);
    }

    #[test]
    fn test_dark_backgrounds_get_white() {
        assert_eq!(contrast_color("#000000"), WHITE_TEXT);
        assert_eq!(contrast_color(DEFAULT_BADGE_COLOR), WHITE_TEXT);
        assert_eq!(contrast_color("#3b82f6"), WHITE_TEXT);
    }

    #[test]
    fn test_threshold_is_strict() {
        // 128 exactly stays white
        assert_eq!(brightness("#808080"), Some(128.0));
        assert_eq!(contrast_color("#808080"), WHITE_TEXT);
        assert_eq!(contrast_color("#818181"), BLACK_TEXT);
    }

    #[test]
    fn test_malformed_input_gets_black() {
        for bad in ["", "#", "123456", "#12345", "#1234567", "#gg0000", "#12 456"] {
            assert_eq!(contrast_color(bad), BLACK_TEXT, "input {:?}", bad);
        }
    }

    #[test]
    fn test_palette_parses() {
        assert!(PALETTE.iter().all(|c| parse_hex(c.hex).is_some()));
    }
}
