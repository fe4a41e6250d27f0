use log::{debug, warn};
use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, navbar::Navbar,
    portfolio::Portfolio, services::Services,
};

/// Only the dark palette is styled, so the root element always carries it.
fn force_dark_theme() {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    if let Err(e) = classes.add_1("dark").and_then(|_| classes.remove_1("light")) {
        warn!("Could not set dark theme: {:?}", e);
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_effect_with_deps(
        move |_| {
            force_dark_theme();
            debug!("Landing mounted");
            || ()
        },
        (),
    );

    html! {
        <div class="page">
            <Navbar />
            <main class="sections">
                <Hero />
                <Services />
                <Portfolio />
                <About />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
