use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the folio CLI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";

    // Filter chips (for the browse picker).
    pub const ACTIVE: &str = "●";
    pub const INACTIVE: &str = "○";

    // Command identifiers (used in headers).
    pub const BUILD: &str = "📦";
    pub const WATCH: &str = "⟳";
    pub const CHECK: &str = "🔍";
    pub const DIFF: &str = "Δ";
    pub const TAG: &str = "#";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";

    pub const ACTIVE: &str = "(*)";
    pub const INACTIVE: &str = "( )";

    pub const BUILD: &str = "[BUILD]";
    pub const WATCH: &str = "[~]";
    pub const CHECK: &str = "[CHECK]";
    pub const DIFF: &str = "[DIFF]";
    pub const TAG: &str = "#";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

// ----------------------------------------------------------------------------
// FolioTheme - dialoguer theme marking the active filter with ●/○
// ----------------------------------------------------------------------------

/// Custom theme for the filter picker.
///
/// `ColorfulTheme` with a plain `>` cursor; filter markers live in the
/// item labels built by `item_label`.
pub struct FolioTheme {
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl FolioTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }

    pub fn active_icon(&self) -> &'static str {
        if self.unicode {
            icons::ACTIVE
        } else {
            icons_ascii::ACTIVE
        }
    }

    pub fn inactive_icon(&self) -> &'static str {
        if self.unicode {
            icons::INACTIVE
        } else {
            icons_ascii::INACTIVE
        }
    }

    /// Picker label for a filter control
    pub fn item_label(&self, label: &str, active: bool) -> String {
        let icon = if active {
            self.active_icon()
        } else {
            self.inactive_icon()
        };
        format!("{} {}", icon, label)
    }
}

impl Theme for FolioTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_select_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if active {
            write!(f, "> {}", text)
        } else {
            write!(f, "  {}", text)
        }
    }
}
