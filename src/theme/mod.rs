//! Color derivation for widget theming.
//!
//! The widget is themed from a single configured accent color; hover and
//! light variants are derived from it. Everything here is a pure function
//! over `#RRGGBB` strings:
//! - [`darken`]: scale each channel toward 0
//! - [`lighten`]: scale each channel toward 255
//!
//! Input that does not look like `#RRGGBB` is returned unchanged rather
//! than rejected, so a host-supplied named color simply passes through
//! underived.

use crate::types::DEFAULT_ACCENT;

// =============================================================================
// Channel Helpers
// =============================================================================

/// Decode `#RRGGBB` into channels, or `None` when the input is not that
/// shape.
fn channels(color: &str) -> Option<[u8; 3]> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some([
        (value >> 16) as u8,
        (value >> 8 & 0xff) as u8,
        (value & 0xff) as u8,
    ])
}

/// Re-encode channels as lowercase `#rrggbb`.
fn encode(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Scale one channel, floored and clamped to 0-255.
fn scale(channel: u8, factor: f32) -> u8 {
    (channel as f32 * factor).floor().clamp(0.0, 255.0) as u8
}

// =============================================================================
// Lightness Modifiers
// =============================================================================

/// Darken a `#RRGGBB` color by scaling each channel toward 0.
///
/// Amount is 0.0-1.0 where 0.1 = 10% darker. Non-matching input is
/// returned unchanged.
pub fn darken(color: &str, amount: f32) -> String {
    match channels(color) {
        Some([r, g, b]) => {
            let factor = 1.0 - amount;
            encode([scale(r, factor), scale(g, factor), scale(b, factor)])
        }
        None => color.to_string(),
    }
}

/// Lighten a `#RRGGBB` color by scaling each channel toward 255.
///
/// Amount is 0.0-1.0 where 1.0 saturates to white. Non-matching input is
/// returned unchanged.
pub fn lighten(color: &str, amount: f32) -> String {
    match channels(color) {
        Some(rgb) => {
            let lift = |c: u8| {
                let lifted = c as f32 + (255.0 - c as f32) * amount;
                lifted.floor().clamp(0.0, 255.0) as u8
            };
            encode([lift(rgb[0]), lift(rgb[1]), lift(rgb[2])])
        }
        None => color.to_string(),
    }
}

// =============================================================================
// Derived Theme
// =============================================================================

/// The three colors one instance renders with, derived from its accent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizTheme {
    /// The configured accent color (or the neutral default).
    pub accent: String,
    /// Hover variant: `darken(accent, 0.1)`.
    pub hover: String,
    /// Light background variant: `lighten(accent, 0.9)`.
    pub light: String,
}

impl QuizTheme {
    /// How far hover shifts toward black.
    pub const HOVER_SHIFT: f32 = 0.1;
    /// How far the light variant shifts toward white.
    pub const LIGHT_SHIFT: f32 = 0.9;

    /// Derive a theme from an optionally configured accent color.
    pub fn derive(color: Option<&str>) -> Self {
        let accent = color.unwrap_or(DEFAULT_ACCENT).to_string();
        Self {
            hover: darken(&accent, Self::HOVER_SHIFT),
            light: lighten(&accent, Self::LIGHT_SHIFT),
            accent,
        }
    }
}

impl Default for QuizTheme {
    fn default() -> Self {
        Self::derive(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darken_black_is_well_formed() {
        let darker = darken("#000000", 0.5);
        assert_eq!(darker, "#000000");
        assert_eq!(darker.len(), 7);
    }

    #[test]
    fn test_lighten_black_half() {
        // Each channel: 0 + 255 * 0.5, floored.
        assert_eq!(lighten("#000000", 0.5), "#7f7f7f");
    }

    #[test]
    fn test_lighten_saturates_to_white() {
        assert_eq!(lighten("#000000", 1.0), "#ffffff");
        assert_eq!(lighten("#3a7bd5", 1.0), "#ffffff");
    }

    #[test]
    fn test_darken_zero_is_identity() {
        assert_eq!(darken("#3a7bd5", 0.0), "#3a7bd5");
        assert_eq!(lighten("#3a7bd5", 0.0), "#3a7bd5");
    }

    #[test]
    fn test_darken_scales_channels() {
        // 0x80 = 128; 128 * 0.5 floored = 64 = 0x40.
        assert_eq!(darken("#808080", 0.5), "#404040");
    }

    #[test]
    fn test_non_hex_input_unchanged() {
        assert_eq!(darken("rebeccapurple", 0.5), "rebeccapurple");
        assert_eq!(lighten("#fff", 0.5), "#fff");
        assert_eq!(darken("#zzzzzz", 0.5), "#zzzzzz");
    }

    #[test]
    fn test_zero_padding() {
        // 0x10 * 0.5 = 8 = 0x08: must stay two digits per channel.
        assert_eq!(darken("#101010", 0.5), "#080808");
    }

    #[test]
    fn test_theme_derivation() {
        let theme = QuizTheme::derive(Some("#808080"));
        assert_eq!(theme.accent, "#808080");
        assert_eq!(theme.hover, darken("#808080", 0.1));
        assert_eq!(theme.light, lighten("#808080", 0.9));
    }

    #[test]
    fn test_theme_default_accent() {
        let theme = QuizTheme::derive(None);
        assert_eq!(theme.accent, "#000000");
        assert_eq!(theme.hover, "#000000");
        // Black lifted 90% toward white.
        assert_eq!(theme.light, lighten("#000000", 0.9));
    }
}
