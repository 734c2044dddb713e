//! Property tests for the page renderer.

use proptest::prelude::*;

use folio::domain::entities::{Catalog, Site};
use folio::domain::value_objects::{Selection, Tag};
use folio::{render_page, RenderOptions};

use super::{projects, tag};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering is deterministic and never emits scripts.
    #[test]
    fn property_render_is_deterministic(projects in projects(), label in proptest::option::of(tag())) {
        let catalog = Catalog::new(Site::default(), vec![], projects).unwrap();
        let options = RenderOptions::default()
            .with_selection(Selection::from(label.map(Tag::new)));

        let first = render_page(&catalog, &options);
        let second = render_page(&catalog, &options);
        prop_assert_eq!(&first, &second);
        prop_assert!(!first.contains("<script"));
    }

    /// PROPERTY: user text cannot open elements.
    #[test]
    fn property_descriptions_are_escaped(description in ".{0,40}") {
        let hostile = format!("<b>{}</b>", description);
        let project = folio::Project::new("Hostile", hostile, "https://github.com/o/h")
            .with_tags(["AI"]);
        let catalog = Catalog::new(Site::default(), vec![], vec![project]).unwrap();

        let html = render_page(&catalog, &RenderOptions::default());
        prop_assert!(!html.contains("<b>"));
        prop_assert!(html.contains("&lt;b&gt;"));
    }

    /// PROPERTY: one card per project, one control per derived tag plus "All".
    #[test]
    fn property_cards_and_controls_match_catalog(projects in projects()) {
        let count = projects.len();
        let catalog = Catalog::new(Site::default(), vec![], projects).unwrap();
        let html = render_page(&catalog, &RenderOptions::default());

        prop_assert_eq!(html.matches("<article ").count(), count);
        prop_assert_eq!(
            html.matches("class=\"filter-input\"").count(),
            catalog.tags().len() + 1
        );
    }
}
