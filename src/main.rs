use log::{info, Level};
use yew::prelude::*;

mod assets;
mod catalog;
mod config;
mod forms;
mod intake;
mod navigation;
mod registry;
mod theme;
mod viewport;
mod visibility;
mod components {
    pub mod carousel;
    pub mod fade_in;
    pub mod footer;
    pub mod header;
    pub mod layout;
    pub mod marquee;
    pub mod newsletter;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod resources;
    pub mod service_detail;
    pub mod services;
}

use components::{footer::Footer, header::Header};
use intake::IntakeHandle;
use navigation::{NavContext, NavState};
use theme::GlobalStyle;
use viewport::use_scrolled;

#[function_component]
fn App() -> Html {
    let nav = use_reducer(NavState::from_location);
    let intake = use_state(IntakeHandle::from_config);
    // One scroll listener for the whole shell; the header only reads it.
    let scrolled = use_scrolled();
    let page = nav.page;

    html! {
        <ContextProvider<NavContext> context={nav}>
            <ContextProvider<IntakeHandle> context={(*intake).clone()}>
                <GlobalStyle />
                <Header scrolled={scrolled} />
                <main>{ registry::resolve(page) }</main>
                <Footer />
            </ContextProvider<IntakeHandle>>
        </ContextProvider<NavContext>>
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
