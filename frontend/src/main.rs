use log::info;
use yew::prelude::*;

mod background;
mod config;
mod cursor;
mod dom;
mod i18n;
mod scroll;
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod glass_card;
    pub mod hero;
    pub mod navbar;
    pub mod portfolio;
    pub mod services;
}
mod pages {
    pub mod landing;
}

use background::Background;
use cursor::Cursor;
use i18n::context::LanguageProvider;
use i18n::meta::DocumentMeta;
use i18n::store::{LanguageStore, LocalStorage};
use pages::landing::Landing;
use scroll::SmoothScrollProvider;

#[function_component]
fn App() -> Html {
    // One store for the whole page; every component reads it through the provider.
    let store = use_memo(|_| LanguageStore::load(LocalStorage), ());

    html! {
        <LanguageProvider store={(*store).clone()}>
            <DocumentMeta />
            <Cursor />
            <Background />
            <SmoothScrollProvider>
                <Landing />
            </SmoothScrollProvider>
        </LanguageProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
