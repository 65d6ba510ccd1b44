//! Lintel marketing landing page, rendered client-side with Yew.
//!
//! `motion` holds the browser-free animation state machines; `utils` binds
//! them to the window, and `hooks` expose them to components.

use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod error;
pub mod theme;
pub mod motion {
    pub mod counter;
    pub mod header;
    pub mod progress;
    pub mod reveal;
}
pub mod utils {
    pub mod dom;
    pub mod observer;
    pub mod scroll;
}
pub mod hooks {
    pub mod counter;
    pub mod reveal;
    pub mod scroll;
    pub mod theme;
}
pub mod components {
    pub mod classic_header;
    pub mod footer;
    pub mod header;
    pub mod slides_button;
}
pub mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::landing::Landing;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
