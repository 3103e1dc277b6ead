use crate::config::ConfigError;
use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub warning: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
    pub snackbar_bg: ColorSpec,
    pub snackbar_fg: ColorSpec,

    // Footer mode colors
    pub footer_debug: ColorSpec,
    pub footer_home: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// RGB color used by the palettes.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(122, 162, 247),   // Blue
            secondary: ColorSpec::rgb(158, 206, 106), // Green
            banner: ColorSpec::rgb(187, 154, 247),    // Magenta
            text: ColorSpec::rgb(192, 202, 245),
            text_muted: ColorSpec::rgb(86, 95, 137),
            warning: ColorSpec::rgb(224, 175, 104), // Yellow
            info: ColorSpec::rgb(125, 207, 255),    // Cyan
            border_active: ColorSpec::rgb(122, 162, 247),
            border_normal: ColorSpec::rgb(65, 72, 104),
            highlight_bg: ColorSpec::rgb(40, 52, 87),
            highlight_fg: ColorSpec::rgb(192, 202, 245),
            snackbar_bg: ColorSpec::rgb(192, 202, 245),
            snackbar_fg: ColorSpec::rgb(26, 27, 38),
            footer_debug: ColorSpec::rgb(247, 118, 142),
            footer_home: ColorSpec::rgb(122, 162, 247),
            footer_normal: ColorSpec::rgb(158, 206, 106),
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: ColorSpec::rgb(196, 167, 231),   // Iris
            secondary: ColorSpec::rgb(156, 207, 216), // Foam
            banner: ColorSpec::rgb(235, 188, 186),    // Rose
            text: ColorSpec::rgb(224, 222, 244),
            text_muted: ColorSpec::rgb(110, 106, 134),
            warning: ColorSpec::rgb(246, 193, 119), // Gold
            info: ColorSpec::rgb(156, 207, 216),
            border_active: ColorSpec::rgb(196, 167, 231),
            border_normal: ColorSpec::rgb(64, 61, 82),
            highlight_bg: ColorSpec::rgb(38, 35, 58),
            highlight_fg: ColorSpec::rgb(224, 222, 244),
            snackbar_bg: ColorSpec::rgb(224, 222, 244),
            snackbar_fg: ColorSpec::rgb(25, 23, 36),
            footer_debug: ColorSpec::rgb(235, 111, 146),
            footer_home: ColorSpec::rgb(196, 167, 231),
            footer_normal: ColorSpec::rgb(49, 116, 143),
        }
    }

    /// Catppuccin Mocha theme.
    ///
    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha".to_string(),
            primary: ColorSpec::rgb(203, 166, 247),   // Mauve
            secondary: ColorSpec::rgb(166, 227, 161), // Green
            banner: ColorSpec::rgb(245, 194, 231),    // Pink
            text: ColorSpec::rgb(205, 214, 244),
            text_muted: ColorSpec::rgb(127, 132, 156),
            warning: ColorSpec::rgb(249, 226, 175), // Yellow
            info: ColorSpec::rgb(137, 220, 235),    // Sky
            border_active: ColorSpec::rgb(203, 166, 247),
            border_normal: ColorSpec::rgb(69, 71, 90),
            highlight_bg: ColorSpec::rgb(49, 50, 68),
            highlight_fg: ColorSpec::rgb(205, 214, 244),
            snackbar_bg: ColorSpec::rgb(205, 214, 244),
            snackbar_fg: ColorSpec::rgb(30, 30, 46),
            footer_debug: ColorSpec::rgb(243, 139, 168),
            footer_home: ColorSpec::rgb(137, 180, 250),
            footer_normal: ColorSpec::rgb(166, 227, 161),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),   // Purple
            secondary: ColorSpec::rgb(80, 250, 123),  // Green
            banner: ColorSpec::rgb(255, 121, 198),    // Pink
            text: ColorSpec::rgb(248, 248, 242),
            text_muted: ColorSpec::rgb(98, 114, 164),
            warning: ColorSpec::rgb(241, 250, 140), // Yellow
            info: ColorSpec::rgb(139, 233, 253),    // Cyan
            border_active: ColorSpec::rgb(189, 147, 249),
            border_normal: ColorSpec::rgb(68, 71, 90),
            highlight_bg: ColorSpec::rgb(68, 71, 90),
            highlight_fg: ColorSpec::rgb(248, 248, 242),
            snackbar_bg: ColorSpec::rgb(248, 248, 242),
            snackbar_fg: ColorSpec::rgb(40, 42, 54),
            footer_debug: ColorSpec::rgb(255, 85, 85),
            footer_home: ColorSpec::rgb(189, 147, 249),
            footer_normal: ColorSpec::rgb(80, 250, 123),
        }
    }

    /// Get theme by name.
    ///
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "tokyo-night" => Ok(Self::tokyo_night()),
            "rose-pine" => Ok(Self::rose_pine()),
            "catppuccin-mocha" => Ok(Self::catppuccin_mocha()),
            "dracula" => Ok(Self::dracula()),
            _ => Err(ConfigError::UnknownTheme(name.to_string())),
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine".to_string(),
            "catppuccin-mocha".to_string(),
            "dracula".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_available_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(matches!(
            Theme::from_name("neon"),
            Err(ConfigError::UnknownTheme(_))
        ));
    }

    #[test]
    fn default_is_tokyo_night() {
        assert_eq!(Theme::default(), Theme::tokyo_night());
    }

    #[test]
    fn color_spec_to_color() {
        assert_eq!(ColorSpec::rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
