use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config::{use_landing_config, LandingConfig};
use crate::dom::{self, Listener};
use crate::error::FxResult;
use crate::motion::pointer::{
    magnetic_offset, parallax_offset, particle_factor, Offset, Translate, TranslateY,
};
use crate::timing::{FrameLatest, FrameThrottle};

struct ParallaxLayers {
    background: HtmlElement,
    grid: Option<HtmlElement>,
    product: Option<HtmlElement>,
    glow: Option<HtmlElement>,
    particles: Vec<HtmlElement>,
}

impl ParallaxLayers {
    fn collect() -> FxResult<Self> {
        Ok(Self {
            background: dom::query(".parallax-bg")?,
            grid: dom::query(".cyber-grid").ok(),
            product: dom::query(".hero-product-image").ok(),
            glow: dom::query(".hero-glow").ok(),
            particles: dom::query_all(".particle").unwrap_or_default(),
        })
    }

    fn on_scroll(&self, scroll_y: f64, config: &LandingConfig) {
        let bg = TranslateY(scroll_y * config.bg_scroll_speed).to_string();
        dom::set_style(&self.background, "transform", &bg);
        if let Some(grid) = &self.grid {
            let shift = TranslateY(scroll_y * config.grid_scroll_speed).to_string();
            dom::set_style(grid, "transform", &shift);
        }
    }

    fn on_pointer(&self, offset: Offset) {
        if let Some(product) = &self.product {
            dom::set_style(product, "transform", &Translate(offset.scaled(0.5)).to_string());
        }
        if let Some(glow) = &self.glow {
            dom::set_style(glow, "transform", &Translate(offset.scaled(-0.3)).to_string());
        }
        for (index, particle) in self.particles.iter().enumerate() {
            let margin = format!("{}px", offset.x * particle_factor(index));
            dom::set_style(particle, "margin-left", &margin);
        }
    }
}

fn install_parallax(config: Rc<LandingConfig>) -> FxResult<Vec<Listener>> {
    let window = dom::window()?;
    let layers = Rc::new(ParallaxLayers::collect()?);
    let mut listeners = Vec::new();

    let frame = FrameThrottle::new();
    listeners.push(Listener::passive(&window, "scroll", {
        let layers = layers.clone();
        let config = config.clone();
        let window = window.clone();
        move |_: Event| {
            let layers = layers.clone();
            let config = config.clone();
            let window = window.clone();
            frame.schedule(move || layers.on_scroll(dom::scroll_y(&window), &config));
        }
    })?);

    // Pointer parallax is decided once, at startup width.
    if config.is_desktop(dom::viewport_width(&window)) {
        let range = config.parallax_range;
        let pointer = FrameLatest::new();
        listeners.push(Listener::passive(&window, "mousemove", {
            let window = window.clone();
            move |event: Event| {
                let Some(e) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let client = Offset::new(f64::from(e.client_x()), f64::from(e.client_y()));
                let layers = layers.clone();
                let window = window.clone();
                pointer.push(client, move |client| {
                    let viewport = Offset::new(dom::viewport_width(&window), dom::viewport_height(&window));
                    layers.on_pointer(parallax_offset(client, viewport, range));
                });
            }
        })?);
    }
    Ok(listeners)
}

#[hook]
pub fn use_parallax() {
    let config = use_landing_config();
    use_effect_with_deps(
        move |_| {
            let listeners = install_parallax(config)
                .map_err(|e| debug!("Parallax disabled: {}", e))
                .unwrap_or_default();
            move || drop(listeners)
        },
        (),
    );
}

const GLOW_STYLE: &str = "position: fixed; width: 400px; height: 400px; \
    background: radial-gradient(circle, rgba(0, 245, 255, 0.08) 0%, transparent 70%); \
    border-radius: 50%; pointer-events: none; z-index: -1; \
    transform: translate(-50%, -50%); transition: opacity 0.3s; opacity: 0;";

/// The single node this crate adds to the page: a soft glow under the cursor.
struct CursorGlow {
    element: HtmlElement,
    _fade_in: Timeout,
    _follow: Listener,
}

impl CursorGlow {
    fn install(config: &LandingConfig) -> FxResult<Option<Self>> {
        let window = dom::window()?;
        if !config.is_desktop(dom::viewport_width(&window)) {
            return Ok(None);
        }
        let document = dom::document()?;
        let element = document.create_element("div")?.unchecked_into::<HtmlElement>();
        element.set_class_name("cursor-glow");
        element.style().set_css_text(GLOW_STYLE);
        dom::body()?.append_child(&element)?;

        let fade_in = {
            let element = element.clone();
            Timeout::new(config.glow_delay_ms, move || dom::set_style(&element, "opacity", "1"))
        };

        let pointer = FrameLatest::new();
        let follow = {
            let element = element.clone();
            Listener::passive(&document, "mousemove", move |event: Event| {
                let Some(e) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let element = element.clone();
                let client = Offset::new(f64::from(e.client_x()), f64::from(e.client_y()));
                pointer.push(client, move |at| {
                    dom::set_style(&element, "left", &format!("{}px", at.x));
                    dom::set_style(&element, "top", &format!("{}px", at.y));
                });
            })?
        };

        Ok(Some(Self {
            element,
            _fade_in: fade_in,
            _follow: follow,
        }))
    }
}

impl Drop for CursorGlow {
    fn drop(&mut self) {
        self.element.remove();
    }
}

#[hook]
pub fn use_cursor_glow() {
    let config = use_landing_config();
    use_effect_with_deps(
        move |_| {
            let glow = CursorGlow::install(&config)
                .map_err(|e| debug!("Cursor glow disabled: {}", e))
                .ok()
                .flatten();
            move || drop(glow)
        },
        (),
    );
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// A `.btn-primary` link that leans toward the pointer on desktop.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let config = use_landing_config();
    let node = use_node_ref();
    let pointer = use_memo(|_| FrameLatest::<Offset>::new(), ());
    let enabled = *use_memo(
        |breakpoint| {
            dom::window()
                .map(|w| dom::viewport_width(&w) > *breakpoint)
                .unwrap_or(false)
        },
        config.desktop_breakpoint,
    );

    let onmousemove = {
        let node = node.clone();
        let pointer = pointer.clone();
        let strength = config.magnet_strength;
        Callback::from(move |e: MouseEvent| {
            if !enabled {
                return;
            }
            let node = node.clone();
            let client = Offset::new(f64::from(e.client_x()), f64::from(e.client_y()));
            pointer.push(client, move |client| {
                let Some(button) = node.cast::<HtmlElement>() else {
                    return;
                };
                let rect = button.get_bounding_client_rect();
                let pull = magnetic_offset(client, rect.left(), rect.top(), rect.width(), rect.height(), strength);
                dom::set_style(&button, "transform", &Translate(pull).to_string());
            });
        })
    };

    let onmouseleave = {
        let node = node.clone();
        Callback::from(move |_: MouseEvent| {
            // A frame queued by the last move would undo the snap-back.
            pointer.cancel();
            if let Some(button) = node.cast::<HtmlElement>() {
                dom::clear_style(&button, "transform");
            }
        })
    };

    html! {
        <a
            ref={node}
            href={props.href.clone()}
            class={classes!("btn", "btn-primary", props.class.clone())}
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
        </a>
    }
}
