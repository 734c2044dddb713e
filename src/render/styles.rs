//! Inline stylesheet: palette, layout, animation and filter rules
//!
//! The filter rules are the part that carries behaviour. For each control
//! `#filter-x`, cards outside its visible set get `display:none`, the
//! visible ones get their stagger delay, and a control with no matches
//! reveals `.empty-state`.

use super::{FilterControl, RenderOptions};
use crate::domain::value_objects::{css_seconds, AnimationConfig, ThemeMode};

const LIGHT_PALETTE: &str = "--bg:#ffffff;--fg:#0f172a;--muted:#64748b;--card:#f8fafc;\
--border:#e2e8f0;--primary:#2563eb;--primary-fg:#ffffff;--shadow:rgba(15,23,42,0.08);";

const DARK_PALETTE: &str = "--bg:#0b1120;--fg:#e2e8f0;--muted:#94a3b8;--card:#111827;\
--border:#1f2937;--primary:#60a5fa;--primary-fg:#0b1120;--shadow:rgba(0,0,0,0.4);";

const BASE: &str = r#"*,*::before,*::after{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;line-height:1.5}
.theme-toggle,.filter-input{position:absolute;opacity:0;pointer-events:none}
.page{min-height:100vh;background:linear-gradient(135deg,var(--bg),var(--card),var(--bg));color:var(--fg)}
a{color:inherit}
.navbar{position:sticky;top:0;z-index:20;display:flex;align-items:center;justify-content:space-between;padding:1rem 1.5rem;border-bottom:1px solid var(--border);background:var(--bg);box-shadow:0 1px 3px var(--shadow)}
.brand{font-weight:700;font-size:1.25rem;color:var(--primary)}
.nav-actions{display:flex;align-items:center;gap:.5rem}
.theme-switch{cursor:pointer;font-size:1.25rem;padding:.25rem .5rem;border-radius:.5rem}
.button{display:inline-flex;align-items:center;gap:.25rem;padding:.35rem .9rem;border-radius:.5rem;font-size:.875rem;text-decoration:none;border:1px solid var(--primary);transition:transform .2s}
.button:hover{transform:scale(1.05)}
.button.primary{background:var(--primary);color:var(--primary-fg)}
.button.outline{background:transparent;color:var(--primary)}
main{display:block}
.hero{max-width:48rem;margin:0 auto;padding:3rem 1rem;text-align:center}
.hero h1{font-size:clamp(1.875rem,5vw,3rem);font-weight:800;color:var(--primary);margin:0 0 1.5rem}
.tagline{font-size:1.125rem;color:var(--muted);margin:0}
.divider{border:0;height:2px;margin:3rem 0;background:linear-gradient(to right,transparent,var(--primary),transparent);opacity:.3}
h2{text-align:center;font-size:1.5rem;margin:0 0 1.5rem}
.contributors{max-width:64rem;margin:0 auto;padding:2rem 1rem}
.contributor-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr));gap:2rem;justify-items:center}
.contributor-card{display:flex;flex-direction:column;align-items:center;gap:.75rem;padding:1.5rem;width:100%;max-width:20rem;border:2px solid var(--border);border-radius:1rem;background:var(--card);box-shadow:0 4px 12px var(--shadow);transition:all .2s}
.contributor-card.featured{border-color:var(--primary);box-shadow:0 8px 24px var(--shadow)}
.avatar{width:5rem;height:5rem;border-radius:50%;border:2px solid var(--primary)}
.avatar.initial{display:flex;align-items:center;justify-content:center;font-size:1.875rem;font-weight:700;background:var(--border);border:0}
.name{font-weight:600;font-size:1.125rem;text-align:center}
.badges{display:flex;flex-wrap:wrap;gap:.5rem;justify-content:center}
.badge{font-size:.75rem;padding:.125rem .5rem;border-radius:999px;background:var(--border)}
.links{display:flex;gap:.75rem}
.icon-link{text-decoration:none;font-size:.875rem;transition:transform .2s}
.icon-link:hover{transform:scale(1.1);color:var(--primary)}
.projects{max-width:72rem;margin:0 auto;padding:2rem 1rem 3rem}
.filter-bar{display:flex;flex-wrap:wrap;gap:.75rem;justify-content:center;margin-bottom:2rem}
.chip{cursor:pointer;padding:.25rem 1rem;border-radius:999px;border:1px solid var(--border);font-size:.875rem;font-weight:500;background:var(--bg);transition:all .15s}
.chip:hover{color:var(--primary)}
.project-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:2rem}
.project-card{display:flex;flex-direction:column;gap:1rem;padding:1.5rem;border:2px solid transparent;border-radius:1rem;background:var(--card);box-shadow:0 4px 12px var(--shadow);transition:all .2s}
.project-card:hover{border-color:var(--primary)}
.project-card .title{font-size:1.125rem;font-weight:600;margin:0}
.project-card .badges{justify-content:flex-start}
.description{flex:1;margin:0;font-size:.875rem;color:var(--muted)}
.actions{display:flex;gap:.5rem}
.empty-state{display:none;grid-column:1/-1;text-align:center;color:var(--muted);padding:3rem 0}
.footer{text-align:center;color:var(--muted);padding:2rem 0}
"#;

/// Palette rules for the initial theme and the toggled one
pub fn theme_css(mode: ThemeMode) -> String {
    let (initial, toggled) = match mode {
        ThemeMode::Dark => (DARK_PALETTE, LIGHT_PALETTE),
        ThemeMode::Light | ThemeMode::System => (LIGHT_PALETTE, DARK_PALETTE),
    };
    let mut css = format!(
        ".page{{{}}}\n#theme-toggle:checked ~ .page{{{}}}\n",
        initial, toggled
    );
    if mode == ThemeMode::System {
        css.push_str(&format!(
            "@media (prefers-color-scheme: dark){{.page{{{}}}#theme-toggle:checked ~ .page{{{}}}}}\n",
            DARK_PALETTE, LIGHT_PALETTE
        ));
    }
    css
}

/// Keyframes and hero timings; empty when animation is disabled
pub fn animation_css(animation: &AnimationConfig) -> String {
    if !animation.enabled {
        return String::new();
    }
    let mut css = String::new();
    css.push_str(&format!(
        "@keyframes rise{{from{{opacity:0;transform:translateY({}px)}}to{{opacity:1;transform:none}}}}\n",
        animation.item_offset_px
    ));
    css.push_str(
        "@keyframes hero-in{from{opacity:0;transform:translateY(var(--hero-offset))}to{opacity:1;transform:none}}\n",
    );
    css.push_str(&format!(
        ".hero h1{{--hero-offset:20px;animation:hero-in {} ease-out both}}\n",
        css_seconds(animation.hero_duration)
    ));
    css.push_str(&format!(
        ".tagline{{--hero-offset:10px;animation:hero-in {} ease-out {} both}}\n",
        css_seconds(animation.hero_duration),
        css_seconds(animation.hero_delay)
    ));
    css.push_str(&format!(
        ".project-card{{animation:rise {} {} both}}\n",
        css_seconds(animation.spring_duration()),
        animation.spring_easing()
    ));
    css.push_str(
        "@media (prefers-reduced-motion: reduce){.hero h1,.tagline,.project-card{animation:none}}\n",
    );
    css
}

/// Rules attached to one filter control
pub fn filter_css(
    control: &FilterControl,
    project_count: usize,
    animation: &AnimationConfig,
) -> String {
    let checked = format!("#{}:checked", control.id);
    let mut css = format!(
        "{} ~ .filter-bar label[for={}]{{background:var(--primary);color:var(--primary-fg);border-color:var(--primary);box-shadow:0 1px 3px var(--shadow)}}\n",
        checked, control.id
    );

    let hidden: Vec<String> = (0..project_count)
        .filter(|i| !control.visible.contains(i))
        .map(|i| format!("{} ~ .project-grid > #project-{}", checked, i))
        .collect();
    if !hidden.is_empty() {
        css.push_str(&hidden.join(",\n"));
        css.push_str("{display:none}\n");
    }

    if control.is_empty() {
        css.push_str(&format!(
            "{} ~ .project-grid > .empty-state{{display:block}}\n",
            checked
        ));
    }

    if animation.enabled {
        for (position, index) in control.visible.iter().enumerate() {
            css.push_str(&format!(
                "{} ~ .project-grid > #project-{}{{animation-delay:{}}}\n",
                checked,
                index,
                css_seconds(animation.item_delay(position))
            ));
        }
    }
    css
}

/// Complete stylesheet for the page
pub fn stylesheet(controls: &[FilterControl], project_count: usize, options: &RenderOptions) -> String {
    let mut css = String::with_capacity(8 * 1024);
    css.push_str(&theme_css(options.theme));
    css.push_str(BASE);
    css.push_str(&animation_css(&options.animation));
    for control in controls {
        css.push_str(&filter_css(control, project_count, &options.animation));
    }
    css
}
