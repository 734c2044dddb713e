use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Build,
    Watch,
    Check,
    Diff,
    Tag,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Build) => theme::icons::BUILD,
            (true, Icon::Watch) => theme::icons::WATCH,
            (true, Icon::Check) => theme::icons::CHECK,
            (true, Icon::Diff) => theme::icons::DIFF,
            (true, Icon::Tag) => theme::icons::TAG,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Build) => theme::icons_ascii::BUILD,
            (false, Icon::Watch) => theme::icons_ascii::WATCH,
            (false, Icon::Check) => theme::icons_ascii::CHECK,
            (false, Icon::Diff) => theme::icons_ascii::DIFF,
            (false, Icon::Tag) => theme::icons_ascii::TAG,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow | Icon::Tag => theme::colors::DIM,
            Icon::Build | Icon::Watch | Icon::Check | Icon::Diff => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
