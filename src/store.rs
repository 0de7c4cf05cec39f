//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Toast, ToastKind};
use crate::routes::Route;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Route the shell renders
    pub route: Route,
    /// Toasts currently on screen, oldest first
    pub toasts: Vec<Toast>,
    /// Next toast ID
    pub next_toast_id: u32,
}

impl AppState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            next_toast_id: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_current_route(store: &AppStore) -> Route {
    store.route().get()
}

/// Replace the route, skipping the write when nothing changed
pub fn store_set_route(store: &AppStore, route: Route) {
    if store.route().with_untracked(|current| *current != route) {
        store.route().set(route);
    }
}

/// Add a toast and return its ID
pub fn store_push_toast(store: &AppStore, kind: ToastKind, title: &str, description: &str) -> u32 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    store.toasts().write().push(Toast {
        id,
        kind,
        title: title.to_string(),
        description: description.to_string(),
    });
    id
}

/// Remove a toast by ID (no-op if already gone)
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    if store.toasts().with_untracked(|toasts| toasts.iter().any(|t| t.id == toast_id)) {
        store.toasts().write().retain(|t| t.id != toast_id);
    }
}

pub fn store_toasts(store: &AppStore) -> Vec<Toast> {
    store.toasts().get()
}
