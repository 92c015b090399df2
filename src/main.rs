use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod handles;
mod hooks;
mod motion;
mod styles;
mod components {
    pub mod animated_text;
    pub mod dashboard;
    pub mod hydration;
    pub mod icons;
    pub mod navigation;
    pub mod parallax;
    pub mod scroll_progress;
}
mod sections {
    pub mod footer;
    pub mod hero;
    pub mod problem;
    pub mod promise;
}
mod pages {
    pub mod home;
}

use pages::home::Home;
use styles::GlobalStyles;

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
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyles />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
