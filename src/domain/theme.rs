//! Theme registry
//!
//! Themes are fixed palettes; nothing is loaded from disk.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
    pub success: Color,
    pub error: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub palette: Palette,
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

const fn theme(
    value: &'static str,
    label: &'static str,
    [background, foreground, accent, muted, success, error]: [u32; 6],
) -> ThemeOption {
    ThemeOption {
        value,
        label,
        palette: Palette {
            background: rgb(background),
            foreground: rgb(foreground),
            accent: rgb(accent),
            muted: rgb(muted),
            success: rgb(success),
            error: rgb(error),
        },
    }
}

pub const THEMES: &[ThemeOption] = &[
    theme(
        "light",
        "Light",
        [0xFFFFFF, 0x000000, 0x0000FF, 0x6E7781, 0x116329, 0xCF222E],
    ),
    theme(
        "vs-dark",
        "VS Dark",
        [0x1E1E1E, 0xD4D4D4, 0x569CD6, 0x808080, 0x6A9955, 0xF44747],
    ),
    theme(
        "oceanic-next",
        "Oceanic Next",
        [0x1B2B34, 0xCDD3DE, 0x6699CC, 0x65737E, 0x99C794, 0xEC5F67],
    ),
    theme(
        "cobalt",
        "Cobalt",
        [0x002240, 0xFFFFFF, 0xFFC600, 0x0088FF, 0x3AD900, 0xFF628C],
    ),
    theme(
        "dracula",
        "Dracula",
        [0x282A36, 0xF8F8F2, 0xBD93F9, 0x6272A4, 0x50FA7B, 0xFF5555],
    ),
    theme(
        "monokai",
        "Monokai",
        [0x272822, 0xF8F8F2, 0xF92672, 0x75715E, 0xA6E22E, 0xF92672],
    ),
    theme(
        "github",
        "GitHub",
        [0xF8F8FF, 0x24292E, 0x005CC5, 0x6A737D, 0x22863A, 0xD73A49],
    ),
    theme(
        "solarized-dark",
        "Solarized-dark",
        [0x002B36, 0x839496, 0x268BD2, 0x586E75, 0x859900, 0xDC322F],
    ),
    theme(
        "solarized-light",
        "Solarized-light",
        [0xFDF6E3, 0x657B83, 0x268BD2, 0x93A1A1, 0x859900, 0xDC322F],
    ),
    theme(
        "night-owl",
        "Night Owl",
        [0x011627, 0xD6DEEB, 0x82AAFF, 0x637777, 0xADDB67, 0xEF5350],
    ),
];

pub const DEFAULT_THEME_INDEX: usize = 2;

pub fn theme_at(index: usize) -> &'static ThemeOption {
    THEMES.get(index).unwrap_or(&THEMES[DEFAULT_THEME_INDEX])
}

pub fn index_of(value: &str) -> Option<usize> {
    THEMES
        .iter()
        .position(|theme| theme.value.eq_ignore_ascii_case(value.trim()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_theme_is_oceanic_next() {
        assert_eq!(theme_at(DEFAULT_THEME_INDEX).value, "oceanic-next");
    }

    #[test]
    fn test_builtin_themes_are_present() {
        assert_eq!(index_of("light"), Some(0));
        assert_eq!(index_of("vs-dark"), Some(1));
        assert_eq!(index_of("Cobalt"), Some(3));
        assert_eq!(index_of("unknown"), None);
    }

    #[test]
    fn test_rgb_unpacks_channels() {
        assert_eq!(rgb(0x1B2B34), Color::Rgb(0x1B, 0x2B, 0x34));
    }

    #[test]
    fn test_theme_at_out_of_range_falls_back() {
        assert_eq!(theme_at(100), &THEMES[DEFAULT_THEME_INDEX]);
    }
}
