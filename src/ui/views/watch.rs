use std::path::PathBuf;

use folio::application::{WatchEvent, WriteStatus};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_watch_header(
    watched: &[PathBuf],
    out_dir: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Folio Watch");
    for path in watched {
        header.add("Watching", path.display().to_string());
    }
    header.add("Output", out_dir);
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);

    match event {
        WatchEvent::Started { paths } => format!(
            "{} {} Watching {} file(s)\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            paths.len()
        ),
        WatchEvent::FileChanged { path } => format!(
            "{} {} Changed: {}\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            path.display()
        ),
        WatchEvent::BuildStarted => format!(
            "{} {} Building...\n",
            prefix,
            Icon::Build.colored(supports_color, supports_unicode)
        ),
        WatchEvent::BuildComplete {
            path,
            status,
            projects,
        } => {
            let verb = match status {
                WriteStatus::Written => "Wrote",
                WriteStatus::Unchanged => "Unchanged",
                WriteStatus::WouldWrite => "Would write",
            };
            format!(
                "{} {} {} {} ({} projects)\n",
                prefix,
                Icon::Success.colored(supports_color, supports_unicode),
                verb,
                path.display(),
                projects
            )
        }
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_complete_names_the_page() {
        let event = WatchEvent::BuildComplete {
            path: PathBuf::from("dist/index.html"),
            status: WriteStatus::Written,
            projects: 9,
        };
        let rendered = render_watch_event("12:00:00", &event, false, false);
        assert_eq!(rendered, "[12:00:00] [OK] Wrote dist/index.html (9 projects)\n");
    }

    #[test]
    fn errors_keep_the_message() {
        let event = WatchEvent::Error {
            message: "invalid catalog".to_string(),
        };
        let rendered = render_watch_event("12:00:00", &event, false, false);
        assert!(rendered.contains("[FAIL] Error: invalid catalog"));
    }

    #[test]
    fn header_lists_watched_files() {
        let rendered = render_watch_header(
            &[PathBuf::from("catalog.toml"), PathBuf::from("folio.toml")],
            "dist",
            false,
            false,
        );
        assert!(rendered.contains("Watching: catalog.toml\nWatching: folio.toml"));
        assert!(rendered.contains("Hint: Press Ctrl+C to stop"));
    }
}
