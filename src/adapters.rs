//! Browser Adapters
//!
//! Implementations of the form ports on top of the store bridge, the toast
//! list and the history API.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::commands;
use crate::form::{MenuStore, Navigator, NormalizedItem, Notifier, SessionCell};
use crate::form::FormSession;
use crate::models::{ItemRecord, ShopRecord, ToastKind};
use crate::routes::Route;
use crate::store::{store_dismiss_toast, store_push_toast, store_set_route, AppStore};

/// Menu store reached through `window.__MENU_STORE__`
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteMenuStore;

#[async_trait(?Send)]
impl MenuStore for RemoteMenuStore {
    type File = web_sys::File;

    async fn fetch_shop_by_username(&self, username: &str) -> Result<Option<ShopRecord>, String> {
        commands::fetch_shop_by_username(username).await
    }

    async fn fetch_item(&self, item_id: &str) -> Result<Option<ItemRecord>, String> {
        commands::fetch_item(item_id).await
    }

    async fn create_item(&self, shop_id: &str, item: &NormalizedItem, image: Option<&web_sys::File>) -> Result<(), String> {
        commands::create_item(shop_id, item, image).await
    }

    async fn update_item(&self, item_id: &str, item: &NormalizedItem, image: Option<&web_sys::File>) -> Result<(), String> {
        commands::update_item(item_id, item, image).await
    }
}

/// Pushes toasts into the app store and removes them after a delay
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    store: AppStore,
    duration_ms: u32,
}

impl ToastNotifier {
    pub fn new(store: AppStore, duration_ms: u32) -> Self {
        Self { store, duration_ms }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: ToastKind, title: &str, description: &str) {
        let id = store_push_toast(&self.store, kind, title, description);
        if self.duration_ms == 0 {
            return;
        }
        let store = self.store;
        let duration_ms = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            store_dismiss_toast(&store, id);
        });
    }
}

/// Client-side navigation through `history.pushState`
#[derive(Clone, Copy)]
pub struct BrowserNavigator {
    store: AppStore,
}

impl BrowserNavigator {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate_to(&self, route: &Route) {
        let path = route.to_path();
        let pushed = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&path)));
        if let Some(Err(e)) = pushed {
            log::warn!("[NAV] pushState to {} failed: {:?}", path, e);
        }
        log::debug!("[NAV] -> {}", path);
        store_set_route(&self.store, route.clone());
    }
}

/// Form session held in a local signal. Disposed signals (form unmounted
/// while a request was in flight) are skipped.
impl<F: 'static> SessionCell<F> for RwSignal<FormSession<F>, LocalStorage> {
    fn with_session<T>(&self, f: impl FnOnce(&mut FormSession<F>) -> T) -> Option<T> {
        self.try_update(f)
    }
}
