use folio::domain::entities::Project;
use folio::domain::value_objects::Selection;
use folio::render::EMPTY_STATE_MESSAGE;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::card::Card;

/// Terminal rendition of the project grid
pub struct ProjectListView<'a> {
    projects: &'a [&'a Project],
    selection: &'a Selection,
    total: usize,
    width: usize,
}

impl<'a> ProjectListView<'a> {
    pub fn new(projects: &'a [&'a Project], selection: &'a Selection, total: usize) -> Self {
        Self {
            projects,
            selection,
            total,
            width: 80,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut header = CommandHeader::new(Icon::Tag, "Projects");
        header.add("Filter", self.selection.label());
        header.add("Showing", format!("{} of {}", self.projects.len(), self.total));
        let mut out = header.render(supports_color, supports_unicode);
        out.push('\n');

        if self.projects.is_empty() {
            out.push_str(&ColoredText::dim(EMPTY_STATE_MESSAGE).render(supports_color));
            out.push('\n');
            return out;
        }

        for project in self.projects {
            out.push_str(&project_card(project, self.width).render(supports_color, supports_unicode));
        }
        out
    }
}

fn project_card(project: &Project, width: usize) -> Card {
    let mut card = Card::with_title(project.title.as_str()).max_width(width);
    let tags: Vec<String> = project.tags.iter().map(|t| format!("#{}", t)).collect();
    card.add_line(tags.join(" "));
    card.add_line(project.description.as_str());
    card.add_empty();
    for link in project.links() {
        card.add_line(format!("{}: {}", link.caption(), link.href));
    }
    card
}
