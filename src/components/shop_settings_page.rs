//! Shop Settings Page Component
//!
//! Social links and company info for one shop, saved together.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::form::controller::failure_message;
use crate::form::{Navigator, Notifier};
use crate::models::{CompanyInfo, ShopRecord, SocialLinks, ToastKind};
use crate::routes::Route;
use crate::settings::{normalize_company_info, normalize_social_links, ShopSettingsPatch, SocialNetwork};

#[component]
fn SocialLinksForm(links: RwSignal<SocialLinks>) -> impl IntoView {
    view! {
        <fieldset class="social-links">
            <legend>"Social media"</legend>
            {SocialNetwork::ALL.into_iter().map(|network| {
                let icon = network.icon();
                view! {
                    <label class="form-field with-icon">
                        <span class="icon" aria-hidden="true">{icon.glyph()}</span>
                        <span>{icon.label()}</span>
                        <input
                            type="text"
                            placeholder=network.placeholder()
                            prop:value=move || links.with(|l| network.get(l).unwrap_or_default().to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                links.update(|l| network.set(l, Some(value)));
                            }
                        />
                    </label>
                }
            }).collect_view()}
        </fieldset>
    }
}

/// Which company text field an input edits
#[derive(Clone, Copy)]
enum CompanyField {
    Description,
    Address,
    Phone,
    Email,
    OpeningHours,
}

impl CompanyField {
    fn get(self, info: &CompanyInfo) -> &str {
        let value = match self {
            CompanyField::Description => &info.description,
            CompanyField::Address => &info.address,
            CompanyField::Phone => &info.phone,
            CompanyField::Email => &info.email,
            CompanyField::OpeningHours => &info.opening_hours,
        };
        value.as_deref().unwrap_or_default()
    }

    fn slot(self, info: &mut CompanyInfo) -> &mut Option<String> {
        match self {
            CompanyField::Description => &mut info.description,
            CompanyField::Address => &mut info.address,
            CompanyField::Phone => &mut info.phone,
            CompanyField::Email => &mut info.email,
            CompanyField::OpeningHours => &mut info.opening_hours,
        }
    }
}

#[component]
fn CompanyInfoForm(company: RwSignal<CompanyInfo>) -> impl IntoView {
    let optional_input = move |field: CompanyField, label: &'static str, input_type: &'static str| {
        view! {
            <label class="form-field">
                <span>{label}</span>
                <input
                    type=input_type
                    prop:value=move || company.with(|c| field.get(c).to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        company.update(|c| *field.slot(c) = Some(value));
                    }
                />
            </label>
        }
    };

    view! {
        <fieldset class="company-info">
            <legend>"Company"</legend>
            <label class="form-field">
                <span>"Name"</span>
                <input
                    type="text"
                    required=true
                    prop:value=move || company.with(|c| c.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        company.update(|c| c.name = value);
                    }
                />
            </label>
            {optional_input(CompanyField::Description, "Description", "text")}
            {optional_input(CompanyField::Address, "Address", "text")}
            {optional_input(CompanyField::Phone, "Phone", "tel")}
            {optional_input(CompanyField::Email, "Email", "email")}
            {optional_input(CompanyField::OpeningHours, "Opening hours", "text")}
        </fieldset>
    }
}

#[component]
pub fn ShopSettingsPage(#[prop(into)] username: String) -> impl IntoView {
    let ctx = use_app_context();
    let shop = RwSignal::new(None::<ShopRecord>);
    let links = RwSignal::new(SocialLinks::default());
    let company = RwSignal::new(CompanyInfo::default());
    let saving = RwSignal::new(false);

    spawn_local(async move {
        let notifier = ctx.notifier();
        match commands::fetch_shop_by_username(&username).await {
            Ok(Some(record)) => {
                let _ = links.try_set(record.social_links.clone());
                let _ = company.try_set(record.company_info.clone());
                let _ = shop.try_set(Some(record));
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

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let Some(shop_id) = shop.with_untracked(|s| s.as_ref().map(|s| s.id.clone())) else {
            return;
        };
        let notifier = ctx.notifier();
        let social_links = links.with_untracked(normalize_social_links);
        let company_info = match company.with_untracked(normalize_company_info) {
            Ok(info) => info,
            Err(e) => {
                notifier.notify(ToastKind::Error, "Please check the settings", e.message());
                return;
            }
        };
        let patch = ShopSettingsPatch {
            social_links: Some(social_links),
            company_info: Some(company_info),
        };

        saving.set(true);
        spawn_local(async move {
            let result = commands::update_shop_settings(&shop_id, &patch).await;
            let _ = saving.try_set(false);
            match result {
                Ok(()) => {
                    log::info!("[SETTINGS] saved shop {}", shop_id);
                    if let (Some(links_value), Some(company_value)) = (patch.social_links, patch.company_info) {
                        let _ = links.try_set(links_value);
                        let _ = company.try_set(company_value);
                    }
                    notifier.notify(ToastKind::Success, "Settings saved", "");
                }
                Err(message) => {
                    notifier.notify(ToastKind::Error, "Could not save settings", failure_message(&message));
                }
            }
        });
    };

    view! {
        <section class="shop-settings">
            <h2>"Shop settings"</h2>
            <Show when=move || shop.with(Option::is_some) fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <form on:submit=on_submit>
                    <SocialLinksForm links=links />
                    <CompanyInfoForm company=company />
                    <div class="form-actions">
                        <button type="submit" class="primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save settings" }}
                        </button>
                    </div>
                </form>
            </Show>
        </section>
    }
}
