//! HTML fragments for each page section
//!
//! Every function returns a fragment ending in a newline. Text goes
//! through `escape_html`, attribute values through `escape_attr`.

use super::escaping::{escape_attr, escape_html};
use super::{FilterControl, EMPTY_STATE_MESSAGE};
use crate::domain::entities::{Contributor, Project, Site};
use crate::domain::value_objects::{ExternalLink, LinkKind, Selection, Tag};

/// Gradient rule between sections
pub const DIVIDER: &str = "<hr class=\"divider\">\n";

const THEME_ICON: &str = "\u{25D0}";

/// Anchor that opens in a new browsing context
fn external_anchor(href: &str, class: &str, title: Option<&str>, body: &str) -> String {
    let title_attr = title
        .map(|t| format!(" title=\"{}\"", escape_attr(t)))
        .unwrap_or_default();
    format!(
        "<a href=\"{}\" class=\"{}\"{} target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape_attr(href),
        class,
        title_attr,
        body
    )
}

fn badges(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let mut out = String::from("<div class=\"badges\">");
    for tag in tags {
        out.push_str(&format!(
            "<span class=\"badge\">{}</span>",
            escape_html(tag.as_str())
        ));
    }
    out.push_str("</div>");
    out
}

pub fn navbar(site: &Site) -> String {
    let mut out = String::from("<nav class=\"navbar\">\n");
    out.push_str(&format!(
        "<span class=\"brand\">{}</span>\n",
        escape_html(&site.title)
    ));
    out.push_str("<div class=\"nav-actions\">\n");
    out.push_str(&format!(
        "<label for=\"theme-toggle\" class=\"theme-switch\" title=\"Toggle theme\">{}</label>\n",
        THEME_ICON
    ));
    if let Some(homepage) = &site.homepage {
        out.push_str(&external_anchor(homepage, "button outline", None, "Main Website"));
        out.push('\n');
    }
    out.push_str("</div>\n</nav>\n");
    out
}

pub fn hero(site: &Site) -> String {
    let mut out = String::from("<section class=\"hero\">\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(&site.heading)));
    if !site.tagline.trim().is_empty() {
        out.push_str(&format!(
            "<p class=\"tagline\">{}</p>\n",
            escape_html(&site.tagline)
        ));
    }
    out.push_str("</section>\n");
    out
}

/// One contributor card; the avatar falls back to the name initial
pub fn contributor_card(contributor: &Contributor) -> String {
    let class = if contributor.is_featured() {
        "contributor-card featured"
    } else {
        "contributor-card"
    };
    let mut out = format!("<div class=\"{}\">\n", class);

    match &contributor.avatar_url {
        Some(url) => out.push_str(&format!(
            "<img class=\"avatar\" src=\"{}\" alt=\"{}\">\n",
            escape_attr(url),
            escape_attr(&contributor.name)
        )),
        None => out.push_str(&format!(
            "<div class=\"avatar initial\" aria-hidden=\"true\">{}</div>\n",
            escape_html(&contributor.initial().to_string())
        )),
    }

    out.push_str(&format!(
        "<div class=\"name\">{}</div>\n",
        escape_html(&contributor.name)
    ));
    let tags = badges(&contributor.tags);
    if !tags.is_empty() {
        out.push_str(&tags);
        out.push('\n');
    }

    let links = contributor.links();
    if !links.is_empty() {
        out.push_str("<div class=\"links\">");
        for link in &links {
            out.push_str(&contact_link(link));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
    out
}

fn contact_link(link: &ExternalLink) -> String {
    external_anchor(
        &link.href,
        "icon-link",
        Some(link.caption()),
        &escape_html(link.caption()),
    )
}

pub fn contributors(contributors: &[Contributor]) -> String {
    let mut out = String::from("<section class=\"contributors\">\n<h2>Contributors</h2>\n");
    out.push_str("<div class=\"contributor-grid\">\n");
    for contributor in contributors {
        out.push_str(&contributor_card(contributor));
    }
    out.push_str("</div>\n</section>\n");
    out
}

/// One project card; `index` is the card's position in the catalog
pub fn project_card(index: usize, project: &Project) -> String {
    let markers: Vec<&str> = project.tags.iter().map(Tag::as_str).collect();
    let mut out = format!(
        "<article class=\"project-card\" id=\"project-{}\" data-tags=\"{}\">\n",
        index,
        escape_attr(&markers.join("|"))
    );
    out.push_str(&format!(
        "<h3 class=\"title\">{}</h3>\n",
        escape_html(&project.title)
    ));
    out.push_str(&badges(&project.tags));
    out.push('\n');
    out.push_str(&format!(
        "<p class=\"description\">{}</p>\n",
        escape_html(&project.description)
    ));

    out.push_str("<div class=\"actions\">");
    for link in project.links() {
        let class = match link.kind {
            LinkKind::Demo => "button primary",
            _ => "button outline",
        };
        out.push_str(&external_anchor(&link.href, class, None, link.caption()));
    }
    out.push_str("</div>\n</article>\n");
    out
}

/// Hidden radio group followed by the visible filter chips
pub fn filter_inputs(controls: &[FilterControl], initial: &Selection) -> String {
    let mut out = String::new();
    for control in controls {
        let checked = if &control.selection == initial {
            " checked"
        } else {
            ""
        };
        out.push_str(&format!(
            "<input type=\"radio\" name=\"filter\" id=\"{}\" class=\"filter-input\"{}>\n",
            control.id, checked
        ));
    }
    out
}

pub fn filter_bar(controls: &[FilterControl]) -> String {
    let mut out = String::from("<div class=\"filter-bar\">\n");
    for control in controls {
        out.push_str(&format!(
            "<label for=\"{}\" class=\"chip\">{}</label>\n",
            control.id,
            escape_html(control.selection.label())
        ));
    }
    out.push_str("</div>\n");
    out
}

/// Filter section plus grid
///
/// The empty-state message is only emitted when some control matches
/// nothing; CSS shows it while such a control is checked.
pub fn projects(projects: &[Project], controls: &[FilterControl], initial: &Selection) -> String {
    let mut out = String::from("<section class=\"projects\" id=\"projects\">\n");
    out.push_str(&filter_inputs(controls, initial));
    out.push_str(&filter_bar(controls));
    out.push_str("<h2>Projects</h2>\n");
    out.push_str("<div class=\"project-grid\">\n");
    if controls.iter().any(FilterControl::is_empty) {
        out.push_str(&format!(
            "<div class=\"empty-state\">{}</div>\n",
            EMPTY_STATE_MESSAGE
        ));
    }
    for (index, project) in projects.iter().enumerate() {
        out.push_str(&project_card(index, project));
    }
    out.push_str("</div>\n</section>\n");
    out
}

pub fn footer(site: &Site) -> String {
    if site.footer.trim().is_empty() {
        return String::new();
    }
    format!(
        "<footer class=\"footer\">{}</footer>\n",
        escape_html(&site.footer)
    )
}
