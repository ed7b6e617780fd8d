use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod error;
mod timing;
mod motion {
    pub mod anchor;
    pub mod header;
    pub mod pointer;
    pub mod reveal;
    pub mod toggles;
}
mod components {
    pub mod anchor_scroll;
    pub mod faq;
    pub mod header;
    pub mod hotspots;
    pub mod page_shell;
    pub mod pointer_fx;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use components::header::SiteHeader;
use components::page_shell::use_page_shell;
use config::LandingConfig;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => html! {
            <section class="not-found">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Back to Covasol Gear"}
                </Link<Route>>
            </section>
        },
    }
}

fn nav_links() -> Vec<(AttrValue, AttrValue)> {
    [
        ("#features", "Features"),
        ("#specs", "Specs"),
        ("#reviews", "Reviews"),
        ("#faq", "FAQ"),
        ("#contact", "Contact"),
    ]
    .into_iter()
    .map(|(href, label)| (AttrValue::from(href), AttrValue::from(label)))
    .collect()
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| LandingConfig::load(), ());
    use_page_shell();

    html! {
        <ContextProvider<Rc<LandingConfig>> context={config}>
            <BrowserRouter>
                <SiteHeader links={nav_links()} />
                <main>
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<Rc<LandingConfig>>>
    }
}

fn print_branding() {
    gloo_console::log!(
        "%cCovasol Gear",
        "font-size: 28px; font-weight: bold; background: linear-gradient(135deg, #00f5ff, #a855f7, #ec4899); -webkit-background-clip: text; -webkit-text-fill-color: transparent;"
    );
    gloo_console::log!("%cPremium Headphones by covasol.com.vn", "font-size: 14px; color: #888;");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    print_branding();
    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
