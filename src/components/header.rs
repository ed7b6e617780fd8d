use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{use_landing_config, LandingConfig};
use crate::dom::{self, Listener};
use crate::error::FxResult;
use crate::motion::header::HeaderState;
use crate::motion::toggles::MenuState;
use crate::timing::Debounce;

pub enum MenuAction {
    Toggle,
    Close,
    Key(String),
    Resize { width: f64, breakpoint: f64 },
    OutsideClick { inside: bool },
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        let changed = match action {
            MenuAction::Toggle => {
                next.toggle();
                true
            }
            MenuAction::Close => next.close(),
            MenuAction::Key(key) => next.on_key(&key),
            MenuAction::Resize { width, breakpoint } => next.on_resize(width, breakpoint),
            MenuAction::OutsideClick { inside } => next.on_outside_click(inside),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Clone, Copy, PartialEq, Default)]
struct HeaderView {
    hidden: bool,
    scrolled: bool,
}

/// The background flag follows the announcement bar when the page has one.
fn scrolled_offset(config: &LandingConfig) -> f64 {
    dom::query(".announcement-bar")
        .map(|bar| f64::from(bar.offset_height()))
        .unwrap_or(config.scrolled_offset)
}

fn watch_scroll(config: &LandingConfig, view: UseStateHandle<HeaderView>) -> FxResult<Listener> {
    let window = dom::window()?;
    let state = Rc::new(RefCell::new(HeaderState::new(
        config.header_threshold,
        scrolled_offset(config),
    )));

    let apply = {
        let window = window.clone();
        move || {
            let mut state = state.borrow_mut();
            if state.on_scroll(dom::scroll_y(&window)) {
                view.set(HeaderView {
                    hidden: state.is_hidden(),
                    scrolled: state.is_scrolled(),
                });
            }
        }
    };

    // The page may load already scrolled
    apply();
    Listener::passive(&window, "scroll", move |_| apply())
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub links: Vec<(AttrValue, AttrValue)>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let config = use_landing_config();
    let view = use_state_eq(HeaderView::default);
    let menu = use_reducer_eq(MenuState::default);
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    {
        let view = view.clone();
        let config = config.clone();
        use_effect_with_deps(
            move |_| {
                let listener = watch_scroll(&config, view)
                    .map_err(|e| debug!("Header scroll tracking disabled: {}", e))
                    .ok();
                move || drop(listener)
            },
            (),
        );
    }

    // Body marker lets the stylesheet lock page scroll while the menu is open
    use_effect_with_deps(
        |open| {
            if let Ok(body) = dom::body() {
                let _ = body.class_list().toggle_with_force("menu-open", *open);
            }
            || ()
        },
        menu.is_open(),
    );

    {
        let menu = menu.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if menu.is_open() {
                menu.dispatch(MenuAction::Key(e.key()));
            }
        });
    }

    {
        let menu = menu.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            if !menu.is_open() {
                return;
            }
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let contains = |node_ref: &NodeRef| {
                node_ref
                    .get()
                    .map(|node| node.contains(target.as_ref()))
                    .unwrap_or(false)
            };
            let inside = contains(&menu_ref) || contains(&toggle_ref);
            menu.dispatch(MenuAction::OutsideClick { inside });
        });
    }

    {
        let menu = menu.clone();
        let breakpoint = config.desktop_breakpoint;
        let debounce = use_memo(|ms| Debounce::new(*ms), config.resize_debounce_ms);
        use_event_with_window("resize", move |_: Event| {
            let dispatcher = menu.dispatcher();
            debounce.call(move || {
                if let Ok(window) = dom::window() {
                    dispatcher.dispatch(MenuAction::Resize {
                        width: dom::viewport_width(&window),
                        breakpoint,
                    });
                }
            });
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    let open = menu.is_open().then_some("active");

    html! {
        <header
            id="header"
            class={classes!("header", view.scrolled.then_some("scrolled"), view.hidden.then_some("hidden"))}
        >
            <div class="header-inner">
                <a href="#hero" class="logo">
                    <span class="logo-mark">{"◎"}</span>
                    {"Covasol Gear"}
                </a>
                <nav id="navMenu" ref={menu_ref} class={classes!("nav-menu", open)}>
                    { for props.links.iter().map(|(href, label)| html! {
                        <a href={href.clone()} class="nav-link" onclick={close_menu.clone()}>
                            {label.clone()}
                        </a>
                    }) }
                </nav>
                <button
                    id="menuToggle"
                    ref={toggle_ref}
                    class={classes!("menu-toggle", open)}
                    aria-label="Toggle navigation"
                    aria-expanded={menu.is_open().to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
    }
}
