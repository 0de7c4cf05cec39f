//! Menu Admin App
//!
//! Application shell: provides the store and context, follows the browser
//! location and renders the page for the current route.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::{MenuItemForm, RewardClaimsPanel, ShopSettingsPage, ToastStack};
use crate::config::AppConfig;
use crate::context::{use_app_context, AppContext};
use crate::form::controller::failure_message;
use crate::form::{FormMode, Navigator, Notifier};
use crate::models::ToastKind;
use crate::routes::Route;
use crate::store::{store_current_route, store_set_route, AppState, AppStore};

/// Keep the store's route in sync with back/forward navigation
fn bind_popstate(store: AppStore) {
    let on_popstate = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |_ev: web_sys::PopStateEvent| {
        let route = Route::current();
        log::debug!("[NAV] popstate -> {}", route.to_path());
        store_set_route(&store, route);
    });
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    }
    on_popstate.forget();
}

/// Link that navigates without reloading the page
#[component]
fn NavLink(route: Route, #[prop(into)] label: String, #[prop(optional)] active: bool) -> impl IntoView {
    let ctx = use_app_context();
    let href = route.to_path();
    view! {
        <a
            href=href
            class=if active { "nav-link active" } else { "nav-link" }
            on:click=move |ev| {
                ev.prevent_default();
                ctx.navigator().navigate_to(&route);
            }
        >
            {label}
        </a>
    }
}

#[component]
fn DashboardNav(username: String, current: Route) -> impl IntoView {
    let menu = Route::Menu { username: username.clone() };
    let settings = Route::Settings { username: username.clone() };
    let rewards = Route::Rewards { username: username.clone() };
    let on_menu = matches!(current, Route::Menu { .. } | Route::NewItem { .. } | Route::EditItem { .. });
    view! {
        <nav class="dashboard-nav">
            <span class="shop-handle">{format!("@{}", username)}</span>
            <NavLink route=menu label="Menu" active=on_menu />
            <NavLink route=settings.clone() label="Settings" active={current == settings} />
            <NavLink route=rewards.clone() label="Rewards" active={current == rewards} />
        </nav>
    }
}

/// Menu landing page: pick a category to add an item under
#[component]
fn MenuOverview(username: String) -> impl IntoView {
    let ctx = use_app_context();
    let categories = RwSignal::new(None::<Vec<String>>);

    {
        let username = username.clone();
        spawn_local(async move {
            let notifier = ctx.notifier();
            match commands::fetch_shop_by_username(&username).await {
                Ok(Some(shop)) => {
                    let _ = categories.try_set(Some(shop.categories));
                }
                Ok(None) => {
                    notifier.notify(ToastKind::Error, "Shop not found", &format!("No shop named \"{}\"", username));
                    ctx.navigator().navigate_to(&Route::Home);
                }
                Err(message) => {
                    notifier.notify(ToastKind::Error, "Could not load shop", failure_message(&message));
                    ctx.navigator().navigate_to(&Route::Home);
                }
            }
        });
    }

    let username = StoredValue::new(username);
    view! {
        <section class="menu-overview">
            <h2>"Menu"</h2>
            {move || match categories.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(list) => {
                    let uncategorized = Route::NewItem { username: username.get_value(), category: None };
                    view! {
                        <ul class="category-list">
                            {list.into_iter().map(|category| {
                                let route = Route::NewItem {
                                    username: username.get_value(),
                                    category: Some(category.clone()),
                                };
                                view! {
                                    <li>
                                        <span>{category}</span>
                                        <NavLink route=route label="+ New item" />
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                        <NavLink route=uncategorized label="+ New item without category" />
                    }.into_any()
                }
            }}
        </section>
    }
}

/// Landing page: open a shop dashboard by username
#[component]
fn Home() -> impl IntoView {
    let ctx = use_app_context();
    let username = RwSignal::new(ctx.default_username.get_value().unwrap_or_default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = username.get_untracked().trim().to_string();
        if !name.is_empty() {
            ctx.navigator().navigate_to(&Route::Menu { username: name });
        }
    };

    view! {
        <section class="home">
            <h2>"Open your shop dashboard"</h2>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Shop username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <button type="submit">"Open"</button>
            </form>
        </section>
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store: AppStore = Store::new(AppState::new(Route::current()));
    provide_context(store);
    provide_context(AppContext::new(store, &config));
    bind_popstate(store);

    let page = move || {
        let route = store_current_route(&store);
        log::debug!("[APP] rendering {}", route.to_path());
        let nav = match &route {
            Route::Menu { username }
            | Route::NewItem { username, .. }
            | Route::EditItem { username, .. }
            | Route::Settings { username }
            | Route::Rewards { username } => Some(view! { <DashboardNav username=username.clone() current=route.clone() /> }),
            Route::Home | Route::NotFound => None,
        };
        let body = match route {
            Route::Home => view! { <Home /> }.into_any(),
            Route::Menu { username } => view! { <MenuOverview username=username /> }.into_any(),
            Route::NewItem { username, category } => {
                let mode = FormMode::Create { category };
                view! { <MenuItemForm username=username mode=mode /> }.into_any()
            }
            Route::EditItem { username, item_id } => {
                let mode = FormMode::Edit { item_id };
                view! { <MenuItemForm username=username mode=mode /> }.into_any()
            }
            Route::Settings { username } => view! { <ShopSettingsPage username=username /> }.into_any(),
            Route::Rewards { username } => view! { <RewardClaimsPanel username=username /> }.into_any(),
            Route::NotFound => view! {
                <section class="not-found">
                    <h2>"Page not found"</h2>
                    <NavLink route=Route::Home label="Go home" />
                </section>
            }
            .into_any(),
        };
        view! {
            {nav}
            <main class="main-content">{body}</main>
        }
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Menu Admin"</h1>
            </header>
            {page}
            <ToastStack />
        </div>
    }
}
