use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{FxError, FxResult};

pub fn window() -> FxResult<Window> {
    web_sys::window().ok_or(FxError::NoWindow)
}

pub fn document() -> FxResult<Document> {
    window()?.document().ok_or(FxError::NoDocument)
}

pub fn body() -> FxResult<HtmlElement> {
    document()?
        .body()
        .ok_or_else(|| FxError::MissingNode("body".to_string()))
}

pub fn query(selector: &str) -> FxResult<HtmlElement> {
    document()?
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| FxError::MissingNode(selector.to_string()))
}

pub fn query_all(selector: &str) -> FxResult<Vec<HtmlElement>> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Nearest ancestor-or-self of the event target matching `selector`.
pub fn closest_to_target(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

pub fn viewport_width(window: &Window) -> f64 {
    window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn viewport_height(window: &Window) -> f64 {
    window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn clear_style(el: &HtmlElement, property: &str) {
    let _ = el.style().remove_property(property);
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// An event listener that stays attached for as long as this value lives.
///
/// Dropping it removes the listener, so a Yew effect can hold listeners
/// and release them all from its destructor.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> FxResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Registers a listener that promises never to call `preventDefault`,
    /// which keeps scroll and pointer-move handling off the compositor's path.
    pub fn passive<F>(target: &EventTarget, event: &'static str, callback: F) -> FxResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
