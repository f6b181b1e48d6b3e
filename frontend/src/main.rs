use log::{debug, info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod campaign;
mod config;
mod reveal;
mod components {
    pub mod reveal_block;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod returns;
    pub mod story;
}

use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
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
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
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

    match serde_json::to_string(&campaign::progress()) {
        Ok(json) => debug!("campaign progress: {}", json),
        Err(e) => warn!("could not serialize campaign progress: {}", e),
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
