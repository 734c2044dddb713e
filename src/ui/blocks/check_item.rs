use folio::domain::services::{AuditCheck, CheckStatus};

use crate::ui::primitives::icon::Icon;

/// One audit line plus its optional recommendation
pub fn render_check_item(check: &AuditCheck, supports_color: bool, supports_unicode: bool) -> String {
    let icon = match check.status {
        CheckStatus::Pass => Icon::Success,
        CheckStatus::Warning => Icon::Warning,
        CheckStatus::Error => Icon::Error,
    }
    .colored(supports_color, supports_unicode);

    let mut out = format!("  {} {} - {}\n", icon, check.name, check.message);
    if let Some(rec) = &check.recommendation {
        out.push_str(&format!(
            "    {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            rec
        ));
    }
    out
}
