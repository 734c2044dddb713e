#![no_main]

use std::path::Path;

use folio::parser::{parse_catalog_str, CatalogFormat};
use folio::{render_page, RenderOptions};
use libfuzzer_sys::fuzz_target;

// A catalog that parses must also render, without emitting markup from input.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok((catalog, _)) = parse_catalog_str(s, CatalogFormat::Toml, Path::new("fuzz.toml")) {
            let html = render_page(&catalog, &RenderOptions::default());
            assert!(!html.contains("<script"));
        }
    }
});
