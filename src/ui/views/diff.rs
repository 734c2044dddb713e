use folio::application::DiffResult;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_diff(result: &DiffResult, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Diff, "Folio Diff");
    header.add("Page", result.path.display().to_string());
    if !result.exists {
        header.add("Status", "not built yet");
    }
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');

    if !result.has_changes() {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success("No changes").render(supports_color)
        ));
        return out;
    }

    for line in result.unified.lines() {
        let colored = if line.starts_with("+++") || line.starts_with("---") {
            ColoredText::plain(line).bold()
        } else if line.starts_with("@@") {
            ColoredText::info(line)
        } else if line.starts_with('+') {
            ColoredText::success(line)
        } else if line.starts_with('-') {
            ColoredText::error(line)
        } else {
            ColoredText::plain(line)
        };
        out.push_str(&colored.render(supports_color));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!(
        "{} {}\n",
        Icon::Arrow.colored(supports_color, supports_unicode),
        result.summary()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::application::diff::unified_diff;
    use std::path::PathBuf;

    #[test]
    fn unchanged_page_reports_no_changes() {
        let result = unified_diff("a\n", "a\n", PathBuf::from("dist/index.html"), true);
        let rendered = render_diff(&result, false, false);
        assert!(rendered.contains("[OK] No changes"));
    }

    #[test]
    fn changed_page_lists_hunks_and_summary() {
        let result = unified_diff("a\nb\n", "a\nc\n", PathBuf::from("dist/index.html"), true);
        let rendered = render_diff(&result, false, false);
        assert!(rendered.contains("-b"));
        assert!(rendered.contains("+c"));
        assert!(rendered.contains("-> +1, -1"));
    }

    #[test]
    fn missing_page_is_flagged() {
        let result = unified_diff("", "a\n", PathBuf::from("dist/index.html"), false);
        let rendered = render_diff(&result, false, false);
        assert!(rendered.contains("Status: not built yet"));
    }
}
