use yew::prelude::*;

use super::glass_card::GlassCard;
use crate::i18n::context::use_language;

const CREDENTIALS: [&str; 3] = [
    "about.credential1",
    "about.credential2",
    "about.credential3",
];

#[function_component(About)]
pub fn about() -> Html {
    let language = use_language();

    html! {
        <section id="about" class="section about">
            <div class="container narrow centered">
                <h2 class="section-title">{ language.t("about.title") }</h2>
                <GlassCard class="about-card">
                    <p class="lead">{ language.t("about.paragraph1") }</p>
                    <p class="muted">{ language.t("about.paragraph2") }</p>
                    <ul class="credentials">
                        { for CREDENTIALS.iter().map(|key| html! {
                            <li key={*key}>{ language.t(key) }</li>
                        }) }
                    </ul>
                </GlassCard>
            </div>
        </section>
    }
}
