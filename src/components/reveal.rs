use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Reflect};
use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{use_landing_config, LandingConfig};
use crate::dom;
use crate::error::{FxError, FxResult};
use crate::motion::reveal::{RevealOutcome, RevealTracker};

pub const REVEAL_SELECTOR: &str = ".reveal, .reveal-left, .reveal-right, .stagger-children";
const INDEX_ATTR: &str = "data-reveal-index";
const ACTIVE_CLASS: &str = "active";

/// Watches the page's reveal targets until each has been shown once.
pub struct ViewportObserver {
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl ViewportObserver {
    pub fn install(config: &LandingConfig) -> FxResult<Self> {
        let targets = dom::query_all(REVEAL_SELECTOR)?;
        if targets.is_empty() {
            return Err(FxError::MissingNode(REVEAL_SELECTOR.to_string()));
        }
        for (index, target) in targets.iter().enumerate() {
            target.set_attribute(INDEX_ATTR, &index.to_string())?;
        }
        let tracker = Rc::new(RefCell::new(RevealTracker::new(
            targets.len(),
            config.reveal_threshold,
        )));

        let window = dom::window()?;
        if !Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
            info!("IntersectionObserver unavailable, revealing {} targets", targets.len());
            for index in tracker.borrow_mut().reveal_all() {
                mark_revealed(&targets[index]);
            }
            return Ok(Self {
                observer: None,
                _callback: None,
            });
        }

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(INDEX_ATTR)
                    .and_then(|raw| raw.parse::<usize>().ok())
                else {
                    continue;
                };
                let outcome = tracker
                    .borrow_mut()
                    .observe(index, entry.is_intersecting(), entry.intersection_ratio());
                if outcome == RevealOutcome::Reveal {
                    mark_revealed(&target);
                    observer.unobserve(&target);
                }
            }
            if tracker.borrow().pending() == 0 {
                debug!("All reveal targets shown, disconnecting observer");
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&config.reveal_root_margin);
        options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in &targets {
            observer.observe(target);
        }
        debug!("Observing {} reveal targets", targets.len());

        Ok(Self {
            observer: Some(observer),
            _callback: Some(callback),
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

fn mark_revealed(target: &Element) {
    let _ = target.class_list().add_1(ACTIVE_CLASS);
}

/// Starts reveal tracking once the page has rendered its targets.
#[hook]
pub fn use_reveal_on_scroll() {
    let config = use_landing_config();
    use_effect_with_deps(
        move |_| {
            let observer = ViewportObserver::install(&config)
                .map_err(|e| debug!("Reveal animations skipped: {}", e))
                .ok();
            move || drop(observer)
        },
        (),
    );
}
