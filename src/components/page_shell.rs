use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{DocumentReadyState, Event, HtmlElement};
use yew::prelude::*;

use crate::dom::{self, Listener};
use crate::error::FxResult;

const HINTED: &str = ".feature-card, .testimonial-card, .stat-item";

fn mark_loaded() {
    if let Ok(body) = dom::body() {
        dom::set_style(&body, "opacity", "1");
        let _ = body.class_list().add_1("loaded");
    }
}

fn respect_reduced_motion() -> FxResult<()> {
    let window = dom::window()?;
    if dom::prefers_reduced_motion(&window) {
        if let Some(root) = dom::document()?
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            dom::set_style(&root, "scroll-behavior", "auto");
        }
    }
    Ok(())
}

/// Hints the compositor only while a card is actually hovered.
fn will_change_hints() -> FxResult<Vec<Listener>> {
    let mut listeners = Vec::new();
    for card in dom::query_all(HINTED)? {
        let enter = card.clone();
        listeners.push(Listener::new(&card, "mouseenter", move |_: Event| {
            dom::set_style(&enter, "will-change", "transform");
        })?);
        let leave = card.clone();
        listeners.push(Listener::new(&card, "mouseleave", move |_: Event| {
            dom::set_style(&leave, "will-change", "auto");
        })?);
    }
    Ok(listeners)
}

/// The wasm bundle often finishes loading after the window `load` event, in
/// which case waiting for it would leave the body hidden.
fn needs_load_listener(state: DocumentReadyState) -> bool {
    state != DocumentReadyState::Complete
}

fn install() -> FxResult<Option<Listener>> {
    respect_reduced_motion()?;

    if needs_load_listener(dom::document()?.ready_state()) {
        let window = dom::window()?;
        let listener = Listener::new(&window, "load", |_: Event| mark_loaded())?;
        return Ok(Some(listener));
    }
    mark_loaded();
    Ok(None)
}

/// Fades the body in and applies the reduced-motion preference. Mounted by
/// the app root so every route becomes visible.
#[hook]
pub fn use_page_shell() {
    use_effect_with_deps(
        |_| {
            let listener = install()
                .map_err(|e| debug!("Page shell setup incomplete: {}", e))
                .ok()
                .flatten();
            move || drop(listener)
        },
        (),
    );
}

#[hook]
pub fn use_will_change_hints() {
    use_effect_with_deps(
        |_| {
            let listeners = will_change_hints()
                .map_err(|e| debug!("Hover hints skipped: {}", e))
                .unwrap_or_default();
            move || drop(listeners)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_listener_only_while_document_is_loading() {
        assert!(needs_load_listener(DocumentReadyState::Loading));
        assert!(needs_load_listener(DocumentReadyState::Interactive));
        assert!(!needs_load_listener(DocumentReadyState::Complete));
    }
}
