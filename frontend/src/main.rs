use log::info;
use yew::prelude::*;

mod config;
mod content;
mod components {
    pub mod icons;
    pub mod logo;
}
mod navigation {
    pub mod bar;
    pub mod scroll;
    pub mod state;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod portfolio;
    pub mod services;
}
mod pages {
    pub mod landing;
}

use navigation::bar::Navigation;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Navigation />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
