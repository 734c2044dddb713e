use folio::application::CheckResult;

use crate::ui::blocks::check_item::render_check_item;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_check_header(
    result: &CheckResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "Folio Check");
    header.add("Catalog", result.catalog.display().to_string());
    if result.strict_warnings {
        header.add("Strict", "failing on warnings");
    }
    header.render(supports_color, supports_unicode)
}

/// Checks grouped under their subject, in report order
pub fn render_check_report(
    result: &CheckResult,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    let mut current: Option<&str> = None;

    for check in &result.report.checks {
        // Passing checks are noise unless asked for.
        if verbose == 0 && check.status == folio::domain::services::CheckStatus::Pass {
            continue;
        }
        if current != Some(check.subject.as_str()) {
            if current.is_some() {
                out.push('\n');
            }
            out.push_str(&ColoredText::plain(check.subject.as_str()).bold().render(supports_color));
            out.push('\n');
            current = Some(check.subject.as_str());
        }
        out.push_str(&render_check_item(check, supports_color, supports_unicode));
    }

    out
}

pub fn render_check_summary(
    result: &CheckResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let report = &result.report;
    let title = if !result.is_success() {
        "Check FAILED"
    } else if report.warnings() > 0 {
        "Check passed with warnings"
    } else {
        "All checks passed"
    };

    let mut summary = if result.is_clean() {
        ResultSummary::success(title)
    } else {
        ResultSummary::partial(title)
    };
    summary.add_stat("passed", report.passes());
    summary.add_stat("warnings", report.warnings());
    summary.add_stat("errors", report.errors());
    if result.is_success() {
        summary.with_next_step("folio build");
    }
    summary.render(supports_color, supports_unicode)
}
