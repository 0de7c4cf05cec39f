//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::adapters::{BrowserNavigator, RemoteMenuStore, ToastNotifier};
use crate::config::AppConfig;
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Toast lifetime from config
    toast_duration_ms: u32,
    /// Shop opened from `/` (if configured)
    pub default_username: StoredValue<Option<String>>,
}

impl AppContext {
    pub fn new(store: AppStore, config: &AppConfig) -> Self {
        Self {
            store,
            toast_duration_ms: config.toast_duration_ms,
            default_username: StoredValue::new(config.default_username.clone()),
        }
    }

    pub fn notifier(&self) -> ToastNotifier {
        ToastNotifier::new(self.store, self.toast_duration_ms)
    }

    pub fn navigator(&self) -> BrowserNavigator {
        BrowserNavigator::new(self.store)
    }

    pub fn menu_store(&self) -> RemoteMenuStore {
        RemoteMenuStore
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
