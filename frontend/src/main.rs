use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod anchor;
mod config;
mod content;
mod dom;
mod error;
mod structured_data;
mod state {
    pub mod contact_form;
    pub mod deferred;
    pub mod filter;
    pub mod visibility;
}
mod hooks {
    pub mod reveal;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod navigation;
    pub mod notification;
    pub mod portfolio;
    pub mod services;
}
mod pages {
    pub mod index;
    pub mod not_found;
}

use pages::{
    index::Index,
    not_found::NotFound,
};


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
            info!("Rendering portfolio page");
            html! { <Index /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
