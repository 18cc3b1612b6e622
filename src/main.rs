use yew::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod components {
    pub mod chart;
    pub mod navbar;
}
mod pages {
    pub mod landing;
}

use components::navbar::Navbar;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    info!("Rendering landing page");
    html! {
        <>
            <Navbar />
            <Landing />
        </>
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
