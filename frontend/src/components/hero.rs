use web_sys::MouseEvent;
use yew::prelude::*;

use super::glass_card::GlassCard;
use crate::i18n::context::use_language;
use crate::scroll::{go_to_section, use_smooth_scroll};

#[function_component(Hero)]
pub fn hero() -> Html {
    let language = use_language();
    let t = |key: &str| language.t(key);
    let scroll = use_smooth_scroll();

    let view_work = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        go_to_section(scroll.as_ref(), "portfolio");
    });

    let title_part2 = t("hero.titlePart2");

    html! {
        <section id="home" class="section hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <h1 class="hero-title">
                        { t("hero.titlePart1") }
                        if !title_part2.is_empty() {
                            <>{" "}{ title_part2 }</>
                        }
                        <br />
                        <span class="highlight">{ t("hero.locationHighlight") }</span>
                        {" "}{ t("hero.titlePart3") }
                    </h1>
                    <p class="hero-description">{ t("hero.description") }</p>
                    <div class="hero-actions">
                        <a href="#portfolio" class="cta-button" onclick={view_work}>
                            { t("hero.cta") }
                            <span class="cta-arrow">{"→"}</span>
                        </a>
                    </div>
                </div>

                <div class="hero-visual" aria-hidden="true">
                    <GlassCard class="hero-screen" tilt=true>
                        <div class="screen-header">
                            <span class="light red"></span>
                            <span class="light yellow"></span>
                            <span class="light green"></span>
                        </div>
                        <div class="screen-body">
                            <div class="screen-column">
                                <div class="block tall pulse"></div>
                                <div class="block wide"></div>
                                <div class="block half"></div>
                            </div>
                            <div class="screen-column chip">{"⚙"}</div>
                        </div>
                    </GlassCard>
                    <div class="floating-snippet">
                        <GlassCard class="snippet-card">
                            <span class="snippet-icon">{"</>"}</span>
                            <div class="snippet-line long"></div>
                            <div class="snippet-line short"></div>
                        </GlassCard>
                    </div>
                </div>
            </div>
        </section>
    }
}
