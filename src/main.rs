use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod media;
mod components {
    pub mod header;
    pub mod footer;
    pub mod hero;
    pub mod layout;
}
mod pages {
    pub mod home;
}
mod contact {
    pub mod validation;
    pub mod controller;
    pub mod submit;
    pub mod form;
}
mod showcase {
    pub mod catalog;
    pub mod scroll;
    pub mod state;
    pub mod view;
}

use pages::home::Home;


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
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
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

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
