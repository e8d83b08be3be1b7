use crossterm::style::Color;

/// Terminal background theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Detect theme from the `COLORFGBG` variable ("fg;bg"), defaulting to dark.
    #[must_use]
    pub fn detect() -> Self {
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg) = colorfgbg.split(';').nth(1)
            && let Ok(bg_num) = bg.parse::<u8>()
        {
            // Background colors 8-15 are typically light
            return if bg_num >= 8 { Self::Light } else { Self::Dark };
        }
        Self::Dark
    }
}

/// Semantic color scheme for terminal output
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColorScheme {
    pub header_major: Color,
    pub header_minor: Color,
    pub inline_code: Color,
    pub link: Color,
    pub quote: Color,
    pub marker: Color,
}

impl ColorScheme {
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            header_major: Color::Cyan,
            header_minor: Color::Blue,
            inline_code: Color::Yellow,
            link: Color::Blue,
            quote: Color::DarkGrey,
            marker: Color::Grey,
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            header_major: Color::DarkCyan,
            header_minor: Color::DarkBlue,
            inline_code: Color::DarkYellow,
            link: Color::DarkBlue,
            quote: Color::Grey,
            marker: Color::DarkGrey,
        }
    }

    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    /// Color for a header of `level` (1-6).
    #[must_use]
    pub const fn header(&self, level: u8) -> Color {
        if level <= 2 {
            self.header_major
        } else {
            self.header_minor
        }
    }
}

/// Parse a color name from a style override (`red`, `dark_grey`, `#ff8800`).
pub(crate) fn parse_color(name: &str) -> Option<Color> {
    let name = name.trim().to_lowercase().replace('-', "_");
    if let Some(hex) = name.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        };
        return Some(Color::Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        });
    }
    let color = match name.as_str() {
        "black" => Color::Black,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        "red" => Color::Red,
        "dark_red" => Color::DarkRed,
        "green" => Color::Green,
        "dark_green" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "dark_yellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "dark_blue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "dark_magenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "dark_cyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color("Red"), Some(Color::Red));
        assert_eq!(parse_color("dark-grey"), Some(Color::DarkGrey));
        assert_eq!(parse_color("gray"), Some(Color::Grey));
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(
            parse_color("#ff8800"),
            Some(Color::Rgb {
                r: 255,
                g: 136,
                b: 0
            })
        );
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("#gg0000"), None);
    }

    #[test]
    fn test_header_colors() {
        let colors = ColorScheme::dark();
        assert_eq!(colors.header(1), colors.header_major);
        assert_eq!(colors.header(4), colors.header_minor);
    }
}
