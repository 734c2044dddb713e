#![no_main]

use std::path::Path;

use folio::parser::{parse_catalog_str, CatalogFormat};
use folio::{render_page, RenderOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok((catalog, _)) = parse_catalog_str(s, CatalogFormat::Yaml, Path::new("fuzz.yaml")) {
            let _ = render_page(&catalog, &RenderOptions::default());
        }
    }
});
