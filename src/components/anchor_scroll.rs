use log::debug;
use web_sys::{Event, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::{use_landing_config, LandingConfig};
use crate::dom::{self, Listener};
use crate::error::FxResult;
use crate::motion::anchor::{fragment_of, scroll_offset};

/// One delegated listener covers every same-page link, including ones
/// rendered after startup.
fn install(config: &LandingConfig) -> FxResult<Listener> {
    let window = dom::window()?;
    let document = dom::document()?;
    let gap = config.anchor_gap;
    let fallback_height = config.fallback_header_height;

    Listener::new(&document.clone(), "click", move |event: Event| {
        let Some(link) = dom::closest_to_target(&event, "a[href^=\"#\"]") else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(selector) = fragment_of(&href) else {
            return;
        };
        // Fragments that are not valid selectors fall through to the browser.
        let Ok(Some(target)) = document.query_selector(selector) else {
            return;
        };
        event.prevent_default();

        let header_height = dom::query("#header")
            .map(|header| f64::from(header.offset_height()))
            .unwrap_or(fallback_height);
        let top = scroll_offset(
            target.get_bounding_client_rect().top(),
            dom::scroll_y(&window),
            header_height,
            gap,
        );

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(if dom::prefers_reduced_motion(&window) {
            ScrollBehavior::Auto
        } else {
            ScrollBehavior::Smooth
        });
        window.scroll_to_with_scroll_to_options(&options);
    })
}

#[hook]
pub fn use_anchor_scroll() {
    let config = use_landing_config();
    use_effect_with_deps(
        move |_| {
            let listener = install(&config)
                .map_err(|e| debug!("Smooth anchor scrolling disabled: {}", e))
                .ok();
            move || drop(listener)
        },
        (),
    );
}
