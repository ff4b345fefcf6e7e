// src/theme.rs  —  Theme palettes for the TUI
use crate::settings::Theme;
use ratatui::style::Color;

/// Concrete colors for one theme. Every draw call goes through a palette so
/// the persisted theme restyles the whole UI at once.
pub struct Palette {
    pub header_fg: Color,
    pub header_bg: Color,
    pub accent:    Color,
    pub text:      Color,
    pub dim:       Color,
    pub border:    Color,
    pub good:      Color,
    pub warn:      Color,
    pub bad:       Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Modern => Self {
                header_fg: Color::Black,
                header_bg: Color::Cyan,
                accent:    Color::Cyan,
                text:      Color::White,
                dim:       Color::DarkGray,
                border:    Color::Cyan,
                good:      Color::Green,
                warn:      Color::Yellow,
                bad:       Color::Red,
            },
            Theme::Classic => Self {
                header_fg: Color::Black,
                header_bg: Color::Gray,
                accent:    Color::Yellow,
                text:      Color::Gray,
                dim:       Color::DarkGray,
                border:    Color::Gray,
                good:      Color::Green,
                warn:      Color::Yellow,
                bad:       Color::Red,
            },
            Theme::Dark => Self {
                header_fg: Color::Gray,
                header_bg: Color::Black,
                accent:    Color::Magenta,
                text:      Color::Gray,
                dim:       Color::DarkGray,
                border:    Color::DarkGray,
                good:      Color::LightGreen,
                warn:      Color::LightYellow,
                bad:       Color::LightRed,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_have_distinct_accents() {
        let modern = Palette::for_theme(Theme::Modern);
        let classic = Palette::for_theme(Theme::Classic);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(modern.accent, classic.accent);
        assert_ne!(classic.accent, dark.accent);
        assert_ne!(modern.accent, dark.accent);
    }
}
