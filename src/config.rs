use std::rc::Rc;

use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;
use yew::prelude::*;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Name of the `<meta>` tag whose `content` may override [`LandingConfig`].
pub const CONFIG_META: &str = "landing-config";

/// Tunables shared by the landing page behaviors.
///
/// Every field has a default, so a page can override just the values it
/// cares about, e.g. `<meta name="landing-config" content='{"anchor_gap":32}'>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Offset past which the header may hide.
    pub header_threshold: f64,
    /// Offset past which the header gets its background. Replaced by the
    /// announcement bar height when the page has one.
    pub scrolled_offset: f64,
    /// Widths at or below this are treated as touch / mobile.
    pub desktop_breakpoint: f64,
    /// Gap left between the header and an anchor target.
    pub anchor_gap: f64,
    /// Header height used when `#header` is missing.
    pub fallback_header_height: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub parallax_range: f64,
    pub bg_scroll_speed: f64,
    pub grid_scroll_speed: f64,
    pub magnet_strength: f64,
    pub glow_delay_ms: u32,
    pub resize_debounce_ms: u32,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            header_threshold: 100.0,
            scrolled_offset: 50.0,
            desktop_breakpoint: 768.0,
            anchor_gap: 20.0,
            fallback_header_height: 80.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -80px 0px".to_string(),
            parallax_range: 30.0,
            bg_scroll_speed: 0.3,
            grid_scroll_speed: 0.15,
            magnet_strength: 0.2,
            glow_delay_ms: 1000,
            resize_debounce_ms: 150,
        }
    }
}

impl LandingConfig {
    /// Parses an override document. Malformed input falls back to defaults.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed {}: {}", CONFIG_META, e);
                Self::default()
            }
        }
    }

    /// Reads overrides from the page's `<meta name="landing-config">`, if any.
    pub fn from_document(document: &Document) -> Self {
        document
            .query_selector(&format!("meta[name=\"{}\"]", CONFIG_META))
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"))
            .map(|raw| Self::from_json(&raw))
            .unwrap_or_default()
    }

    pub fn load() -> Self {
        crate::dom::document()
            .map(|document| Self::from_document(&document))
            .unwrap_or_default()
    }

    pub fn is_desktop(&self, viewport_width: f64) -> bool {
        crate::motion::pointer::effects_enabled(viewport_width, self.desktop_breakpoint)
    }
}

/// The page-wide config provided by `App`, or defaults outside a provider.
#[hook]
pub fn use_landing_config() -> Rc<LandingConfig> {
    use_context::<Rc<LandingConfig>>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = LandingConfig::from_json(r#"{"anchor_gap": 32, "header_threshold": 140}"#);
        assert_eq!(config.anchor_gap, 32.0);
        assert_eq!(config.header_threshold, 140.0);
        assert_eq!(config.desktop_breakpoint, 768.0);
        assert_eq!(config.reveal_root_margin, "0px 0px -80px 0px");
    }

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        assert_eq!(LandingConfig::from_json("{not json"), LandingConfig::default());
    }

    #[test]
    fn breakpoint_is_exclusive() {
        let config = LandingConfig::default();
        assert!(!config.is_desktop(768.0));
        assert!(config.is_desktop(769.0));
    }
}
