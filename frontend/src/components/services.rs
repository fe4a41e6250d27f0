use yew::prelude::*;

use super::glass_card::GlassCard;
use crate::i18n::context::use_language;

pub struct Service {
    pub key: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        key: "webDesign",
        icon: "◇",
        accent: "cyan",
    },
    Service {
        key: "automation",
        icon: "⚡",
        accent: "purple",
    },
    Service {
        key: "business",
        icon: "◎",
        accent: "emerald",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    let language = use_language();
    let t = |key: &str| language.t(key);

    html! {
        <section id="services" class="section services">
            <div class="container">
                <header class="section-header centered">
                    <h2 class="section-title">{ t("services.title") }</h2>
                    <p class="section-subtitle">{ t("services.subtitle") }</p>
                </header>
                <div class="card-grid three">
                    { for SERVICES.iter().map(|service| html! {
                        <GlassCard key={service.key} class="service-card" tilt=true>
                            <div class={classes!("service-icon", service.accent)}>{ service.icon }</div>
                            <h3>{ t(&format!("services.{}.title", service.key)) }</h3>
                            <p class="muted">{ t(&format!("services.{}.description", service.key)) }</p>
                        </GlassCard>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, Translations};

    #[test]
    fn every_service_has_copy_in_both_languages() {
        let translations = Translations::builtin();
        for service in &SERVICES {
            for field in ["title", "description"] {
                let key = format!("services.{}.{}", service.key, field);
                for language in [Language::En, Language::El] {
                    assert!(translations.lookup(language, &key).is_some(), "{} missing", key);
                }
            }
        }
    }
}
