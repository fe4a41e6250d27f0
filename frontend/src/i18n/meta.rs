use log::{debug, warn};
use yew::prelude::*;

use super::context::use_language;
use super::{Language, Translations};

/// Document-level strings that follow the active language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTags {
    pub lang: &'static str,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_description: String,
}

impl MetaTags {
    pub fn for_language(translations: &Translations, language: Language) -> Self {
        Self {
            lang: language.tag(),
            title: translations.resolve(language, "meta.title"),
            description: translations.resolve(language, "meta.description"),
            keywords: translations.resolve(language, "meta.keywords"),
            og_description: translations.resolve(language, "meta.ogDescription"),
        }
    }

    /// `(selector, content)` for every `<meta>` tag mirroring these strings.
    pub fn meta_contents(&self) -> [(&'static str, &str); 6] {
        [
            ("meta[name=\"description\"]", &self.description),
            ("meta[name=\"keywords\"]", &self.keywords),
            ("meta[property=\"og:title\"]", &self.title),
            ("meta[property=\"og:description\"]", &self.og_description),
            ("meta[property=\"twitter:title\"]", &self.title),
            ("meta[property=\"twitter:description\"]", &self.og_description),
        ]
    }
}

pub fn apply_meta_tags(tags: &MetaTags) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("No document to apply meta tags to");
        return;
    };

    document.set_title(&tags.title);
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", tags.lang);
    }
    for (selector, content) in tags.meta_contents() {
        // Tags missing from index.html are skipped.
        if let Ok(Some(element)) = document.query_selector(selector) {
            let _ = element.set_attribute("content", content);
        }
    }
    debug!("Applied meta tags for {}", tags.lang);
}

/// Renders nothing; keeps the document head in sync with the language.
#[function_component(DocumentMeta)]
pub fn document_meta() -> Html {
    let language = use_language().language();

    use_effect_with_deps(
        |language: &Language| {
            apply_meta_tags(&MetaTags::for_language(Translations::builtin(), *language));
            || ()
        },
        language,
    );

    html! {}
}
