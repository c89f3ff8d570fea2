use log::{info, Level};
use yew::prelude::*;

mod config;
mod lead {
    pub mod models;
    pub mod form_state;
}
mod components {
    pub mod modal;
    pub mod lead_form;
}
mod pages {
    pub mod landing;
}
mod utils {
    pub mod smooth_scroll;
    pub mod reveal;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting landing page, leads go to {}", config::get_lead_api_url());
    yew::Renderer::<App>::new().render();
}
