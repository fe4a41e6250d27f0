use gloo_events::EventListener;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::i18n::context::use_language;
use crate::scroll::{go_to_section, use_smooth_scroll};

/// Section anchors in page order, paired with their label keys.
pub const SECTIONS: [(&str, &str); 5] = [
    ("home", "navbar.home"),
    ("services", "navbar.services"),
    ("portfolio", "navbar.portfolio"),
    ("about", "navbar.about"),
    ("contact", "navbar.contact"),
];

/// Scroll depth past which the bar gets its solid backdrop.
const SCROLLED_AFTER_PX: f64 = 40.0;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let language = use_language();
    let scroll = use_smooth_scroll();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let viewport = window.clone();
                    EventListener::new(&window, "scroll", move |_| {
                        let scroll_y = viewport.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > SCROLLED_AFTER_PX);
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_language = {
        let language = language.clone();
        Callback::from(move |_: MouseEvent| {
            language.toggle();
        })
    };

    let links = SECTIONS.iter().map(|&(id, key)| {
        let onclick = {
            let scroll = scroll.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                go_to_section(scroll.as_ref(), id);
            })
        };
        html! {
            <a key={id} class="nav-link" href={format!("#{}", id)} {onclick}>
                { language.t(key) }
            </a>
        }
    });

    let next = language.language().toggled();

    html! {
        <div class="nav-shell">
            <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-links", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for links }
                </div>
                <div class="nav-divider" />
                <button
                    class="language-toggle"
                    onclick={toggle_language}
                    aria-label={language.t("navbar.switchLanguage")}
                    title={language.t("navbar.switchLanguage")}
                >
                    { next.label() }
                </button>
            </nav>
        </div>
    }
}
