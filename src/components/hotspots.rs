use std::rc::Rc;

use web_sys::{MouseEvent, PointerEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;
use crate::motion::toggles::HotspotGroup;

pub enum HotspotAction {
    Hover(usize),
    Leave(usize),
    Tap(usize),
    CloseAll,
}

impl Reducible for HotspotGroup {
    type Action = HotspotAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            HotspotAction::Hover(index) => next.hover(index),
            HotspotAction::Leave(index) => next.leave(index),
            HotspotAction::Tap(index) => next.tap(index),
            HotspotAction::CloseAll => next.close_all(),
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct Hotspot {
    pub title: AttrValue,
    pub detail: AttrValue,
    /// Position over the image, in percent.
    pub left: f64,
    pub top: f64,
}

#[derive(Properties, PartialEq)]
pub struct ProductShowcaseProps {
    pub image: AttrValue,
    pub alt: AttrValue,
    pub hotspots: Vec<Hotspot>,
}

fn is_touch(e: &PointerEvent) -> bool {
    e.pointer_type() == "touch"
}

/// Product image with hover/tap tooltips. Touch taps are exclusive and a
/// click anywhere off the markers closes them.
#[function_component(ProductShowcase)]
pub fn product_showcase(props: &ProductShowcaseProps) -> Html {
    let group = use_reducer_eq(HotspotGroup::default);

    {
        let group = group.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            if group.open().is_some() && dom::closest_to_target(&e, ".hotspot").is_none() {
                group.dispatch(HotspotAction::CloseAll);
            }
        });
    }

    html! {
        <div class="hero-product">
            <div class="hero-glow"></div>
            <div class="hero-product-image">
                <img src={props.image.clone()} alt={props.alt.clone()} />
                { for props.hotspots.iter().enumerate().map(|(index, spot)| {
                    let enter = {
                        let group = group.clone();
                        Callback::from(move |e: PointerEvent| {
                            if !is_touch(&e) {
                                group.dispatch(HotspotAction::Hover(index));
                            }
                        })
                    };
                    let leave = {
                        let group = group.clone();
                        Callback::from(move |e: PointerEvent| {
                            if !is_touch(&e) {
                                group.dispatch(HotspotAction::Leave(index));
                            }
                        })
                    };
                    let tap = {
                        let group = group.clone();
                        Callback::from(move |e: PointerEvent| {
                            if is_touch(&e) {
                                group.dispatch(HotspotAction::Tap(index));
                            }
                        })
                    };
                    html! {
                        <div
                            class={classes!("hotspot", group.is_open(index).then_some("active"))}
                            style={format!("left: {}%; top: {}%;", spot.left, spot.top)}
                            onpointerenter={enter}
                            onpointerleave={leave}
                            onpointerup={tap}
                        >
                            <span class="hotspot-marker"></span>
                            <div class="hotspot-tooltip" role="tooltip">
                                <strong>{spot.title.clone()}</strong>
                                <p>{spot.detail.clone()}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
