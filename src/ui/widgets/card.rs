use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardStyle {
    #[default]
    Info,
    /// Highlighted (featured contributor, active filter)
    Featured,
    Success,
    Warning,
}

/// Rounded box with a title row, used for project and contributor cards
#[derive(Debug, Default, Clone)]
pub struct Card {
    title: Option<String>,
    content: Vec<String>,
    /// Maximum outer width; longer lines are wrapped at word boundaries
    max_width: Option<usize>,
    style: CardStyle,
}

impl Card {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: CardStyle) -> Self {
        self.style = style;
        self
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (tl, tr, bl, br, h, v) = if supports_unicode {
            (
                theme::borders::TOP_LEFT,
                theme::borders::TOP_RIGHT,
                theme::borders::BOTTOM_LEFT,
                theme::borders::BOTTOM_RIGHT,
                theme::borders::HORIZONTAL,
                theme::borders::VERTICAL,
            )
        } else {
            (
                theme::borders_ascii::TOP_LEFT,
                theme::borders_ascii::TOP_RIGHT,
                theme::borders_ascii::BOTTOM_LEFT,
                theme::borders_ascii::BOTTOM_RIGHT,
                theme::borders_ascii::HORIZONTAL,
                theme::borders_ascii::VERTICAL,
            )
        };

        // Border, one space padding each side.
        let wrap_at = self.max_width.map(|w| w.saturating_sub(4).max(8));
        let mut lines: Vec<String> = Vec::new();
        if let Some(title) = &self.title {
            lines.extend(wrap(title, wrap_at));
        }
        for line in &self.content {
            lines.extend(wrap(line, wrap_at));
        }

        let inner = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);

        let mut out = String::new();
        out.push_str(&self.paint(&format!("{}{}{}", tl, h.repeat(inner + 2), tr), supports_color));
        out.push('\n');
        for (i, line) in lines.iter().enumerate() {
            let text = if i == 0 && self.title.is_some() && supports_color {
                format!("{}", line.as_str().bold())
            } else {
                line.clone()
            };
            out.push_str(&self.paint(v, supports_color));
            out.push(' ');
            out.push_str(&text);
            out.push_str(&" ".repeat(inner - visible_width(line) + 1));
            out.push_str(&self.paint(v, supports_color));
            out.push('\n');
        }
        out.push_str(&self.paint(&format!("{}{}{}", bl, h.repeat(inner + 2), br), supports_color));
        out.push('\n');
        out
    }

    fn paint(&self, s: &str, supports_color: bool) -> String {
        if !supports_color {
            return s.to_string();
        }
        let color = match self.style {
            CardStyle::Info => theme::colors::DIM,
            CardStyle::Featured => theme::colors::INFO,
            CardStyle::Success => theme::colors::SUCCESS,
            CardStyle::Warning => theme::colors::WARNING,
        };
        format!("{}", s.with(color))
    }
}

/// Greedy word wrap by display width
fn wrap(line: &str, width: Option<usize>) -> Vec<String> {
    let Some(width) = width else {
        return vec![line.to_string()];
    };
    if visible_width(line) <= width {
        return vec![line.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn strip_ansi(s: &str) -> std::borrow::Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return std::borrow::Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    std::borrow::Cow::Owned(out)
}
