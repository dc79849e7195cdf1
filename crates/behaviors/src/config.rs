use serde::Deserialize;

use crate::anchor::AnchorScroll;
use crate::parallax::Parallax;
use crate::reveal::Reveal;
use crate::skills::SkillMeters;
use foundation::time::Millis;

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.12;
pub const DEFAULT_SKILLS_THRESHOLD: f64 = 0.2;
pub const DEFAULT_ANCHOR_OFFSET_PX: f64 = 20.0;
pub const DEFAULT_PARALLAX_STRENGTH: f64 = 12.0;
pub const DEFAULT_PARALLAX_SCALE: f64 = 1.05;
pub const DEFAULT_SKILL_FILL_DELAY_MS: f64 = 120.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid page config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// CSS selectors for the elements the behaviors attach to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub year: String,
    pub reveal: String,
    pub anchors: String,
    pub background: String,
    pub mobile_toggle: String,
    pub nav: String,
    pub skills: String,
    pub meter_fill: String,
    pub overlay: String,
    pub overlay_image: String,
    /// Looked up inside the overlay element.
    pub overlay_close: String,
    pub thumbnails: String,
    pub demo_links: String,
    pub code_links: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            year: "#year".to_string(),
            reveal: ".anim".to_string(),
            anchors: "a[href^=\"#\"]".to_string(),
            background: ".bg-image".to_string(),
            mobile_toggle: "#mobileToggle".to_string(),
            nav: ".nav".to_string(),
            skills: ".skills-grid".to_string(),
            meter_fill: ".meter-fill".to_string(),
            overlay: "#imgOverlay".to_string(),
            overlay_image: "#overlayImg".to_string(),
            overlay_close: ".close-btn".to_string(),
            thumbnails: ".project-img".to_string(),
            demo_links: "[data-open=\"demo\"]".to_string(),
            code_links: "[data-open=\"code\"]".to_string(),
        }
    }
}

impl Selectors {
    fn fields_mut(&mut self) -> [(&'static str, &mut String); 14] {
        [
            ("year", &mut self.year),
            ("reveal", &mut self.reveal),
            ("anchors", &mut self.anchors),
            ("background", &mut self.background),
            ("mobile_toggle", &mut self.mobile_toggle),
            ("nav", &mut self.nav),
            ("skills", &mut self.skills),
            ("meter_fill", &mut self.meter_fill),
            ("overlay", &mut self.overlay),
            ("overlay_image", &mut self.overlay_image),
            ("overlay_close", &mut self.overlay_close),
            ("thumbnails", &mut self.thumbnails),
            ("demo_links", &mut self.demo_links),
            ("code_links", &mut self.code_links),
        ]
    }
}

/// Class names toggled by the behaviors; styling lives in the page's CSS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub in_view: String,
    pub overlay_shown: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            in_view: "in-view".to_string(),
            overlay_shown: "show".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Pixels of travel per unit of normalized pointer position.
    pub strength: f64,
    pub scale: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            strength: DEFAULT_PARALLAX_STRENGTH,
            scale: DEFAULT_PARALLAX_SCALE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Wire the page automatically once the document is ready.
    pub autostart: bool,
    /// `EnvFilter` directives, e.g. `"info"` or `"portfolio_web=debug"`.
    pub log_filter: String,
    pub selectors: Selectors,
    pub classes: Classes,
    pub reveal_threshold: f64,
    pub skills_threshold: f64,
    pub anchor_offset_px: f64,
    pub parallax: ParallaxConfig,
    pub skill_fill_delay_ms: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            autostart: true,
            log_filter: "info".to_string(),
            selectors: Selectors::default(),
            classes: Classes::default(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            skills_threshold: DEFAULT_SKILLS_THRESHOLD,
            anchor_offset_px: DEFAULT_ANCHOR_OFFSET_PX,
            parallax: ParallaxConfig::default(),
            skill_fill_delay_ms: DEFAULT_SKILL_FILL_DELAY_MS,
        }
    }
}

impl PageConfig {
    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: PageConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate();
        Ok(config)
    }

    /// Repairs values the browser would reject or misrender.
    ///
    /// Non-finite numbers and empty selectors fall back to their defaults;
    /// thresholds are clamped into `[0, 1]`.
    pub fn validate(&mut self) {
        self.reveal_threshold = unit_interval(
            "reveal_threshold",
            self.reveal_threshold,
            DEFAULT_REVEAL_THRESHOLD,
        );
        self.skills_threshold = unit_interval(
            "skills_threshold",
            self.skills_threshold,
            DEFAULT_SKILLS_THRESHOLD,
        );
        self.anchor_offset_px = finite_or(
            "anchor_offset_px",
            self.anchor_offset_px,
            DEFAULT_ANCHOR_OFFSET_PX,
        );
        self.parallax.strength = finite_or(
            "parallax.strength",
            self.parallax.strength,
            DEFAULT_PARALLAX_STRENGTH,
        );
        if !(self.parallax.scale.is_finite() && self.parallax.scale > 0.0) {
            tracing::warn!(
                value = self.parallax.scale,
                "parallax.scale out of range, using default"
            );
            self.parallax.scale = DEFAULT_PARALLAX_SCALE;
        }
        if !(self.skill_fill_delay_ms.is_finite() && self.skill_fill_delay_ms >= 0.0) {
            tracing::warn!(
                value = self.skill_fill_delay_ms,
                "skill_fill_delay_ms out of range, using default"
            );
            self.skill_fill_delay_ms = DEFAULT_SKILL_FILL_DELAY_MS;
        }
        if self.log_filter.trim().is_empty() {
            self.log_filter = PageConfig::default().log_filter;
        }

        let mut defaults = Selectors::default();
        for ((name, value), (_, default)) in self
            .selectors
            .fields_mut()
            .into_iter()
            .zip(defaults.fields_mut())
        {
            if value.trim().is_empty() {
                tracing::warn!(selector = name, "empty selector, using default");
                *value = default.clone();
            }
        }

        let class_defaults = Classes::default();
        if self.classes.in_view.trim().is_empty() {
            self.classes.in_view = class_defaults.in_view;
        }
        if self.classes.overlay_shown.trim().is_empty() {
            self.classes.overlay_shown = class_defaults.overlay_shown;
        }
    }

    pub fn reveal(&self) -> Reveal {
        Reveal::new(self.reveal_threshold)
    }

    pub fn anchor_scroll(&self) -> AnchorScroll {
        AnchorScroll::new(self.anchor_offset_px)
    }

    pub fn parallax(&self) -> Parallax {
        Parallax::new(self.parallax.strength, self.parallax.scale)
    }

    pub fn skill_meters(&self) -> SkillMeters {
        SkillMeters::new(
            self.skills_threshold,
            Millis::from_f64_lossy(self.skill_fill_delay_ms),
        )
    }
}

fn finite_or(name: &'static str, value: f64, default: f64) -> f64 {
    if value.is_finite() {
        return value;
    }
    tracing::warn!(field = name, "non-finite value, using default");
    default
}

fn unit_interval(name: &'static str, value: f64, default: f64) -> f64 {
    finite_or(name, value, default).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, PageConfig, Selectors};
    use foundation::time::Millis;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_is_all_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
        assert!(config.autostart);
        assert_eq!(config.reveal_threshold, 0.12);
        assert_eq!(config.skills_threshold, 0.2);
        assert_eq!(config.anchor_offset_px, 20.0);
        assert_eq!(config.skill_meters().delay(), Millis(120));
        assert_eq!(config.selectors.reveal, ".anim");
        assert_eq!(config.classes.in_view, "in-view");
    }

    #[test]
    fn partial_nested_overrides_keep_other_defaults() {
        let config = PageConfig::from_json(
            r##"{
                "autostart": false,
                "selectors": { "nav": "#site-nav" },
                "parallax": { "strength": 20 },
                "unknown_key": 1
            }"##,
        )
        .unwrap();
        assert!(!config.autostart);
        assert_eq!(config.selectors.nav, "#site-nav");
        assert_eq!(config.selectors.mobile_toggle, "#mobileToggle");
        assert_eq!(config.parallax.strength, 20.0);
        assert_eq!(config.parallax.scale, 1.05);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PageConfig::from_json("{ autostart: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid page config:"));
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let err = PageConfig::from_json(r#"{ "reveal_threshold": "high" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn validate_clamps_and_restores() {
        let mut config = PageConfig {
            reveal_threshold: 3.0,
            skills_threshold: -1.0,
            anchor_offset_px: f64::NAN,
            skill_fill_delay_ms: -5.0,
            log_filter: "  ".to_string(),
            ..PageConfig::default()
        };
        config.parallax.scale = 0.0;
        config.selectors.overlay = String::new();
        config.classes.overlay_shown = String::new();
        config.validate();

        assert_eq!(config.reveal_threshold, 1.0);
        assert_eq!(config.skills_threshold, 0.0);
        assert_eq!(config.anchor_offset_px, 20.0);
        assert_eq!(config.skill_fill_delay_ms, 120.0);
        assert_eq!(config.parallax.scale, 1.05);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.selectors, Selectors::default());
        assert_eq!(config.classes.overlay_shown, "show");
    }
}
