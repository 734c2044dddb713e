use folio::domain::value_objects::{Selection, Tag};

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

/// Filter choices as the page shows them: "All" first, then derived tags
pub fn render_tags(
    counts: &[(Tag, usize)],
    total: usize,
    active: &Selection,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&tag_line(&Selection::Unfiltered, total, active, supports_color, supports_unicode));
    for (tag, count) in counts {
        let selection = Selection::FilteredBy(tag.clone());
        out.push_str(&tag_line(&selection, *count, active, supports_color, supports_unicode));
    }
    out
}

fn tag_line(
    selection: &Selection,
    count: usize,
    active: &Selection,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let is_active = selection == active;
    let marker = match (supports_unicode, is_active) {
        (true, true) => theme::icons::ACTIVE,
        (true, false) => theme::icons::INACTIVE,
        (false, true) => theme::icons_ascii::ACTIVE,
        (false, false) => theme::icons_ascii::INACTIVE,
    };
    let label = if is_active {
        ColoredText::info(selection.label()).bold()
    } else {
        ColoredText::plain(selection.label())
    };
    format!(
        "{} {} {}\n",
        marker,
        label.render(supports_color),
        ColoredText::dim(format!("({})", count)).render(supports_color)
    )
}
