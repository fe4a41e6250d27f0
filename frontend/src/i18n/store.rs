use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, info, warn};
use thiserror::Error;

use super::Language;
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("persistent storage is unavailable")]
    Unavailable,
    #[error("storage rejected write of {key}: {reason}")]
    WriteRejected { key: String, reason: String },
}

/// Key-value backend the language preference is persisted to.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The browser's `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteRejected {
                key: key.to_owned(),
                reason: format!("{:?}", e),
            })
    }
}

/// Session-only storage. Clones share the same entries, so a second store
/// loaded from a clone behaves like a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that fails every read and write.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

type Listener = Rc<dyn Fn(Language)>;

struct Inner {
    language: Cell<Language>,
    storage: Box<dyn PreferenceStorage>,
    key: String,
    listeners: RefCell<Vec<(usize, Listener)>>,
    next_id: Cell<usize>,
}

/// Active display language shared by every component on the page.
///
/// Cloning is cheap and every clone observes the same state. Changes are
/// written to storage first and then pushed to all subscribers before
/// [`set`](Self::set) or [`toggle`](Self::toggle) returns.
#[derive(Clone)]
pub struct LanguageStore {
    inner: Rc<Inner>,
}

impl LanguageStore {
    pub fn load(storage: impl PreferenceStorage + 'static) -> Self {
        Self::load_with_key(storage, config::LANGUAGE_STORAGE_KEY)
    }

    pub fn load_with_key(storage: impl PreferenceStorage + 'static, key: &str) -> Self {
        let language = match storage.read(key) {
            Ok(Some(tag)) => Language::from_tag(&tag).unwrap_or_else(|| {
                debug!("Ignoring unknown saved language {:?}", tag);
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                warn!("Could not read saved language: {}", e);
                Language::default()
            }
        };
        debug!("Language store initialized with {}", language);

        Self {
            inner: Rc::new(Inner {
                language: Cell::new(language),
                storage: Box::new(storage),
                key: key.to_owned(),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn current(&self) -> Language {
        self.inner.language.get()
    }

    pub fn set(&self, language: Language) {
        self.inner.language.set(language);
        if let Err(e) = self.inner.storage.write(&self.inner.key, language.tag()) {
            warn!("Could not persist language {}: {}", language, e);
        }
        info!("Language set to {}", language);

        // Snapshot so listeners may subscribe, unsubscribe or set again.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            (*listener)(language);
        }
    }

    pub fn toggle(&self) -> Language {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    pub fn subscribe(&self, listener: impl Fn(Language) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl PartialEq for LanguageStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageStore")
            .field("language", &self.current())
            .field("key", &self.inner.key)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    id: usize,
    store: Weak<Inner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            // Released after the borrow ends; the listener may own other subscriptions.
            let removed = {
                let mut listeners = inner.listeners.borrow_mut();
                listeners
                    .iter()
                    .position(|(id, _)| *id == self.id)
                    .map(|index| listeners.remove(index))
            };
            drop(removed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_storage_defaults_to_english() {
        let store = LanguageStore::load(MemoryStorage::new());
        assert_eq!(store.current(), Language::En);
    }

    #[test]
    fn invalid_saved_tag_defaults_to_english() {
        let storage = MemoryStorage::new();
        storage.write(config::LANGUAGE_STORAGE_KEY, "fr").unwrap();
        let store = LanguageStore::load(storage);
        assert_eq!(store.current(), Language::En);
    }

    #[test]
    fn reads_saved_greek() {
        let storage = MemoryStorage::new();
        storage.write(config::LANGUAGE_STORAGE_KEY, "el").unwrap();
        assert_eq!(LanguageStore::load(storage).current(), Language::El);
    }

    #[test]
    fn toggle_flips_and_double_toggle_restores() {
        let store = LanguageStore::load(MemoryStorage::new());
        assert_eq!(store.toggle(), Language::El);
        assert_eq!(store.current(), Language::El);
        assert_eq!(store.toggle(), Language::En);
        assert_eq!(store.current(), Language::En);
    }

    #[test]
    fn set_survives_reload() {
        let storage = MemoryStorage::new();
        let store = LanguageStore::load(storage.clone());
        store.set(Language::El);

        let reloaded = LanguageStore::load(storage);
        assert_eq!(reloaded.current(), Language::El);
    }

    #[test]
    fn first_toggle_persists_greek_for_next_load() {
        let storage = MemoryStorage::new();
        let store = LanguageStore::load(storage.clone());
        assert_eq!(store.current(), Language::En);

        store.toggle();
        assert_eq!(
            storage.get(config::LANGUAGE_STORAGE_KEY).as_deref(),
            Some("el")
        );
        assert_eq!(LanguageStore::load(storage).current(), Language::El);
    }

    #[test]
    fn subscribers_see_change_before_set_returns() {
        let store = LanguageStore::load(MemoryStorage::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _first = {
            let seen = Rc::clone(&seen);
            store.subscribe(move |language| seen.borrow_mut().push(("first", language)))
        };
        let _second = {
            let seen = Rc::clone(&seen);
            store.subscribe(move |language| seen.borrow_mut().push(("second", language)))
        };

        store.set(Language::El);
        assert_eq!(
            *seen.borrow(),
            vec![("first", Language::El), ("second", Language::El)]
        );
    }

    #[test]
    fn storage_is_written_before_listeners_run() {
        let storage = MemoryStorage::new();
        let store = LanguageStore::load(storage.clone());
        let persisted = Rc::new(RefCell::new(None));
        let _subscription = {
            let persisted = Rc::clone(&persisted);
            let storage = storage.clone();
            store.subscribe(move |_| {
                *persisted.borrow_mut() = storage.get(config::LANGUAGE_STORAGE_KEY);
            })
        };

        store.toggle();
        assert_eq!(persisted.borrow().as_deref(), Some("el"));
    }

    #[test]
    fn dropping_subscription_stops_notifications() {
        let store = LanguageStore::load(MemoryStorage::new());
        let calls = Rc::new(Cell::new(0));
        let subscription = {
            let calls = Rc::clone(&calls);
            store.subscribe(move |_| calls.set(calls.get() + 1))
        };
        store.toggle();
        drop(subscription);
        store.toggle();

        assert_eq!(calls.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn listener_may_read_the_store_it_listens_to() {
        let store = LanguageStore::load(MemoryStorage::new());
        let observed = Rc::new(Cell::new(Language::En));
        let _subscription = {
            let observed = Rc::clone(&observed);
            let reader = store.clone();
            store.subscribe(move |_| observed.set(reader.current()))
        };
        store.set(Language::El);
        assert_eq!(observed.get(), Language::El);
    }

    #[test]
    fn unavailable_storage_degrades_to_memory_only() {
        let store = LanguageStore::load(MemoryStorage::unavailable());
        assert_eq!(store.current(), Language::En);
        store.set(Language::El);
        assert_eq!(store.current(), Language::El);
    }

    #[test]
    fn clones_share_state() {
        let store = LanguageStore::load(MemoryStorage::new());
        let other = store.clone();
        other.toggle();
        assert_eq!(store.current(), Language::El);
        assert_eq!(store, other);
        assert_ne!(store, LanguageStore::load(MemoryStorage::new()));
    }
}
