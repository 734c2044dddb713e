//! Page renderer
//!
//! Turns a `Catalog` plus `RenderOptions` into one self-contained HTML
//! document: inline CSS, no scripts. Tag filtering is done with a radio
//! group; `styles` emits one rule set per filter control, computed with
//! `filtered_projects`, so the browser only toggles which radio is checked.
//!
//! Rendering is a pure function. Equal inputs give byte-identical output.

pub mod components;
pub mod escaping;
pub mod styles;

use crate::config::Config;
use crate::domain::entities::Catalog;
use crate::domain::services::filtered_projects;
use crate::domain::value_objects::{AnimationConfig, Selection, ThemeMode};

pub use escaping::{escape_attr, escape_html};

/// Text shown when the active selection matches no project
pub const EMPTY_STATE_MESSAGE: &str = "No projects found for this category.";

/// Everything besides the catalog that shapes the page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderOptions {
    /// Filter control checked when the page loads
    pub selection: Selection,
    pub animation: AnimationConfig,
    pub theme: ThemeMode,
}

impl RenderOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            selection: Selection::Unfiltered,
            animation: config.animation.clone(),
            theme: config.theme.default_mode,
        }
    }

    pub fn with_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selection = selection.into();
        self
    }
}

/// One radio input of the filter bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    /// DOM id of the radio input
    pub id: String,
    pub selection: Selection,
    /// Indices into `catalog.projects()` visible under this control
    pub visible: Vec<usize>,
}

impl FilterControl {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Filter controls in display order: "All", each derived tag, then the
/// initial selection if it names a tag no project carries.
pub fn filter_controls(catalog: &Catalog, initial: &Selection) -> Vec<FilterControl> {
    let tags = catalog.tags();
    let mut selections: Vec<(String, Selection)> = Vec::with_capacity(tags.len() + 2);
    selections.push(("filter-all".to_string(), Selection::Unfiltered));
    for (i, tag) in tags.iter().enumerate() {
        selections.push((format!("filter-{}", i), Selection::FilteredBy(tag.clone())));
    }
    if let Some(tag) = initial.tag() {
        if !tags.contains(tag) {
            selections.push(("filter-extra".to_string(), initial.clone()));
        }
    }

    selections
        .into_iter()
        .map(|(id, selection)| {
            let visible = filtered_projects(catalog.projects(), &selection)
                .into_iter()
                .filter_map(|p| catalog.projects().iter().position(|q| q.title == p.title))
                .collect();
            FilterControl {
                id,
                selection,
                visible,
            }
        })
        .collect()
}

/// Render the complete page
pub fn render_page(catalog: &Catalog, options: &RenderOptions) -> String {
    let controls = filter_controls(catalog, &options.selection);
    let css = styles::stylesheet(&controls, catalog.projects().len(), options);
    let site = catalog.site();

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!(
        "<meta name=\"generator\" content=\"folio {}\">\n",
        crate::VERSION
    ));
    html.push_str(&format!("<title>{}</title>\n", escape_html(&site.title)));
    html.push_str("<style>\n");
    html.push_str(&escaping::escape_style(&css));
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(
        "<input type=\"checkbox\" id=\"theme-toggle\" class=\"theme-toggle\" aria-label=\"Toggle theme\">\n",
    );
    html.push_str("<div class=\"page\">\n");
    html.push_str(&components::navbar(site));
    html.push_str("<main>\n");
    html.push_str(&components::hero(site));
    html.push_str(components::DIVIDER);
    html.push_str(&components::contributors(catalog.contributors()));
    html.push_str(components::DIVIDER);
    html.push_str(&components::projects(catalog.projects(), &controls, &options.selection));
    html.push_str(components::DIVIDER);
    html.push_str("</main>\n");
    html.push_str(&components::footer(site));
    html.push_str("</div>\n</body>\n</html>\n");
    html
}
