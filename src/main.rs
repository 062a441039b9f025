use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod agreement;
mod config;
mod onboarding {
    pub mod portal;
    pub mod print_view;
    pub mod state;
}
mod pages {
    pub mod home;
    pub mod privacy;
    pub mod resources;
    pub mod terms;
}

use pages::{
    home::Home,
    privacy::PrivacyPolicy,
    resources::PartnerResources,
    terms::TermsOfUse,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[at("/resources")]
    Resources,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfUse /> }
        }
        Route::Resources => {
            info!("Rendering Resources page");
            html! { <PartnerResources /> }
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
    yew::Renderer::<App>::new().render();
}
