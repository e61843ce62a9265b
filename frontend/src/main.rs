use log::info;
use yew::prelude::*;

mod config;
mod contact;
mod content;
mod events;
mod icons;
mod styles;
mod animation {
    pub mod animator;
    pub mod dom;
    pub mod easing;
    pub mod pose;
    pub mod timeline;
}
mod components {
    pub mod backdrop;
    pub mod motion_card;
    pub mod nav;
}
mod pages {
    pub mod landing;
}

use components::{backdrop::Backdrop, nav::Nav};
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let handle_contact = Callback::from(|_: ()| contact::open_contact());

    html! {
        <div class="app">
            <Backdrop />
            <Nav on_contact={handle_contact.clone()} />
            <Landing on_contact={handle_contact} />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    styles::install();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
