use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod format;
mod motion;
mod scroll_lock;
mod styles;
mod gate {
    pub mod controller;
    pub mod modal;
    pub mod record;
    pub mod storage;
}
mod nav {
    pub mod navbar;
    pub mod state;
}
mod reveal {
    pub mod observer;
    pub mod set;
}
mod contact {
    pub mod form;
    pub mod message;
    pub mod sink;
    pub mod validate;
}
mod components {
    pub mod portfolio;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod not_found;
}

use gate::modal::AgeGate;
use nav::navbar::Navbar;
use pages::{contact::Contact, home::Home, not_found::NotFound};
use reveal::observer::RevealController;
use scroll_lock::ScrollLock;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let scroll_lock = use_memo(|_| ScrollLock::body(), ());
    let reveal = use_memo(|_| RevealController::new(), ());

    html! {
        <BrowserRouter>
            <ContextProvider<ScrollLock> context={(*scroll_lock).clone()}>
                <ContextProvider<RevealController> context={(*reveal).clone()}>
                    <style>{styles::GLOBAL_CSS}</style>
                    <AgeGate />
                    <Navbar />
                    <Switch<Route> render={switch} />
                    <footer class="site-footer">
                        <div class="container">
                            {"© K Entertainment Studio Inc. All rights reserved."}
                        </div>
                    </footer>
                </ContextProvider<RevealController>>
            </ContextProvider<ScrollLock>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting K Entertainment Studio site");
    yew::Renderer::<App>::new().render();
}
