use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod content;
mod components {
    pub mod accordion;
    pub mod carousel;
    pub mod counter;
    pub mod marquee;
    pub mod scroll_reveal;
}
mod pages {
    pub mod landing;
}

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
            info!("Rendering sales page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, rendering sales page");
            html! { <Landing /> }
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
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");

    let document = web_sys::window().and_then(|w| w.document());
    match document.as_ref().and_then(|d| d.get_element_by_id("root")) {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            gloo_console::error!("Mount point #root not found");
            if let Some(body) = document.and_then(|d| d.body()) {
                body.set_inner_html(
                    "<div style='color: white; text-align: center; padding-top: 50px;'>Erro ao carregar a página. Verifique o console.</div>",
                );
            }
        }
    }
}
