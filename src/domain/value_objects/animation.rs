//! Entry animation parameters
//!
//! Opaque to the filter engine; only the renderer reads these. Cards rise
//! into place one after another: card `n` starts at
//! `child_delay + n * stagger_delay`.

use serde::{Deserialize, Serialize};

/// Entry animation configuration (`[animation]` in folio.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Master switch; `false` renders a static page
    pub enabled: bool,
    /// Seconds between consecutive cards
    pub stagger_delay: f64,
    /// Seconds before the first card starts
    pub child_delay: f64,
    /// Vertical distance cards travel, in pixels
    pub item_offset_px: u32,
    /// Spring stiffness (mass 1); drives duration and overshoot
    pub spring_stiffness: f64,
    /// Hero heading/tagline fade duration, seconds
    pub hero_duration: f64,
    /// Extra delay before the hero tagline, seconds
    pub hero_delay: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stagger_delay: 0.1,
            child_delay: 0.3,
            item_offset_px: 20,
            spring_stiffness: 100.0,
            hero_duration: 0.7,
            hero_delay: 0.2,
        }
    }
}

impl AnimationConfig {
    /// Config with every effect switched off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Start delay for the card at `index` (0-based), in seconds
    pub fn item_delay(&self, index: usize) -> f64 {
        self.child_delay + index as f64 * self.stagger_delay
    }

    /// Undamped period of the spring, used as the card animation duration
    pub fn spring_duration(&self) -> f64 {
        let k = self.spring_stiffness.max(1.0);
        std::f64::consts::TAU / k.sqrt()
    }

    /// CSS easing approximating the spring's overshoot
    pub fn spring_easing(&self) -> String {
        let overshoot = 1.0 + (0.56 * self.spring_stiffness.max(0.0) / 100.0).min(1.0);
        format!("cubic-bezier(0.34, {:.2}, 0.64, 1)", overshoot)
    }

    /// Negative values are clamped to zero.
    pub fn normalized(mut self) -> Self {
        self.stagger_delay = self.stagger_delay.max(0.0);
        self.child_delay = self.child_delay.max(0.0);
        self.hero_duration = self.hero_duration.max(0.0);
        self.hero_delay = self.hero_delay.max(0.0);
        self.spring_stiffness = self.spring_stiffness.max(1.0);
        self
    }
}

/// Format seconds for CSS (`0.30s`)
pub fn css_seconds(value: f64) -> String {
    format!("{:.2}s", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_timings() {
        let cfg = AnimationConfig::default();
        assert!(cfg.enabled);
        assert_eq!(cfg.stagger_delay, 0.1);
        assert_eq!(cfg.child_delay, 0.3);
        assert_eq!(cfg.item_offset_px, 20);
        assert_eq!(cfg.hero_duration, 0.7);
        assert_eq!(cfg.hero_delay, 0.2);
    }

    #[test]
    fn item_delay_staggers_children() {
        let cfg = AnimationConfig::default();
        assert_eq!(css_seconds(cfg.item_delay(0)), "0.30s");
        assert_eq!(css_seconds(cfg.item_delay(1)), "0.40s");
        assert_eq!(css_seconds(cfg.item_delay(4)), "0.70s");
    }

    #[test]
    fn spring_duration_for_default_stiffness() {
        let cfg = AnimationConfig::default();
        assert_eq!(css_seconds(cfg.spring_duration()), "0.63s");
        assert_eq!(cfg.spring_easing(), "cubic-bezier(0.34, 1.56, 0.64, 1)");
    }

    #[test]
    fn normalized_clamps_negative_values() {
        let cfg = AnimationConfig {
            stagger_delay: -1.0,
            spring_stiffness: 0.0,
            ..AnimationConfig::default()
        }
        .normalized();
        assert_eq!(cfg.stagger_delay, 0.0);
        assert_eq!(cfg.spring_stiffness, 1.0);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: AnimationConfig = toml::from_str("stagger_delay = 0.25").unwrap();
        assert_eq!(cfg.stagger_delay, 0.25);
        assert_eq!(cfg.child_delay, 0.3);
        assert!(cfg.enabled);
    }
}
