use crossterm::tty::IsTty;

/// Terminal capability detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    /// Terminal accepts ANSI styling
    pub color: bool,
    /// Terminal supports Unicode bullets and box drawing characters
    pub unicode: bool,
    /// Terminal supports OSC 8 hyperlinks
    pub osc8_links: bool,
}

impl Capabilities {
    /// Detect terminal capabilities from environment
    #[must_use]
    pub fn detect() -> Self {
        Self {
            color: Self::detect_color(),
            unicode: Self::detect_unicode(),
            osc8_links: Self::detect_osc8(),
        }
    }

    /// No styling, ASCII only. Output is stable across environments.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
            osc8_links: false,
        }
    }

    /// Styling is disabled when `NO_COLOR` is set or stdout is not a terminal
    fn detect_color() -> bool {
        if std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            return false;
        }
        std::io::stdout().is_tty()
    }

    /// Detect Unicode support from locale environment variables
    fn detect_unicode() -> bool {
        for var in ["LC_ALL", "LC_CTYPE", "LANG"] {
            if let Ok(value) = std::env::var(var) {
                let value_upper = value.to_uppercase();
                if value_upper.contains("UTF-8") || value_upper.contains("UTF8") {
                    return true;
                }
            }
        }

        // Default to assuming Unicode support (most modern terminals)
        true
    }

    /// Detect OSC 8 hyperlink support from TERM environment variable
    fn detect_osc8() -> bool {
        if let Ok(term) = std::env::var("TERM") {
            let term_lower = term.to_lowercase();
            return term_lower.contains("kitty")
                || term_lower.contains("wezterm")
                || term_lower.contains("ghostty")
                || term_lower.contains("alacritty")
                || term_lower.contains("foot");
        }
        false
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}
