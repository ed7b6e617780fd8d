use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::motion::toggles::AccordionState;

impl Reducible for AccordionState {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        let mut next = (*self).clone();
        next.toggle(index);
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let len = props.entries.len();
    let accordion = use_reducer_eq(move || AccordionState::new(len));

    html! {
        <div class="faq-list stagger-children">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let is_open = accordion.is_open(index);
                let toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        accordion.dispatch(index);
                    })
                };
                html! {
                    <div class={classes!("faq-item", is_open.then_some("active"))}>
                        <button class="faq-question" aria-expanded={is_open.to_string()} onclick={toggle}>
                            <span class="question-text">{entry.question.clone()}</span>
                            <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        <div class="faq-answer">
                            <p>{entry.answer.clone()}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
