use log::{info, Level};
use yew::prelude::*;

mod config;
mod components {
    pub mod nav;
}
mod effects {
    pub mod frame;
    pub mod particles;
    pub mod reveal;
    pub mod scroll;
    pub mod tilt;
}
mod pages {
    pub mod home;
}

use components::nav::Nav;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Home />
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
