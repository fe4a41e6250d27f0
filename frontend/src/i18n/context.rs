use log::warn;
use yew::prelude::*;

use super::store::{LanguageStore, MemoryStorage};
use super::{Language, Translations};

/// What components see of the language store: the language for this render
/// plus the handle to change it.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageContext {
    language: Language,
    store: LanguageStore,
}

impl LanguageContext {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t(&self, key: &str) -> String {
        Translations::builtin().resolve(self.language, key)
    }

    pub fn set(&self, language: Language) {
        self.store.set(language);
    }

    pub fn toggle(&self) -> Language {
        self.store.toggle()
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub store: LanguageStore,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let language = use_state_eq(|| props.store.current());

    {
        let language = language.clone();
        use_effect_with_deps(
            move |store: &LanguageStore| {
                // The store may have changed between first render and this effect.
                language.set(store.current());
                let subscription = store.subscribe(move |next| language.set(next));
                move || drop(subscription)
            },
            props.store.clone(),
        );
    }

    let context = LanguageContext {
        language: *language,
        store: props.store.clone(),
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            { props.children.clone() }
        </ContextProvider<LanguageContext>>
    }
}

/// Language of the surrounding [`LanguageProvider`]. Outside of one, falls
/// back to a session-only English store so the component still renders.
#[hook]
pub fn use_language() -> LanguageContext {
    let context = use_context::<LanguageContext>();
    let detached = use_memo(|_| LanguageStore::load(MemoryStorage::new()), ());

    context.unwrap_or_else(|| {
        warn!("use_language called outside of a LanguageProvider");
        LanguageContext {
            language: detached.current(),
            store: (*detached).clone(),
        }
    })
}
