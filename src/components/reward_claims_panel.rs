//! Reward Claims Panel Component
//!
//! Lists a shop's reward claims by status. Pending claims can be approved
//! with one click or rejected after an inline confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::commands;
use crate::components::ConfirmButton;
use crate::context::{use_app_context, AppContext};
use crate::form::controller::failure_message;
use crate::form::{Navigator, Notifier};
use crate::icons::Icon;
use crate::models::{ClaimStatus, RewardClaim, ToastKind};
use crate::rewards::{check_decidable, claim_row_key, count_with, mirror_decision, visible_claims, ClaimDecision};
use crate::routes::Route;

fn status_icon(status: ClaimStatus) -> Icon {
    match status {
        ClaimStatus::Pending => Icon::Pending,
        ClaimStatus::Approved => Icon::Approved,
        ClaimStatus::Rejected => Icon::Rejected,
    }
}

fn format_date(millis: Option<i64>) -> String {
    match millis {
        Some(ms) => js_sys::Date::new(&JsValue::from_f64(ms as f64))
            .to_locale_date_string("default", &JsValue::UNDEFINED)
            .into(),
        None => String::new(),
    }
}

/// Send a decision to the store and mirror it locally
fn decide(ctx: AppContext, claims: RwSignal<Vec<RewardClaim>>, busy: RwSignal<Option<String>>, claim_id: String, decision: ClaimDecision) {
    let notifier = ctx.notifier();
    let checked = claims.with_untracked(|all| match all.iter().find(|c| c.id == claim_id) {
        Some(claim) => check_decidable(claim),
        None => Ok(()),
    });
    if let Err(e) = checked {
        log::warn!("[REWARDS] {}", e);
        notifier.notify(ToastKind::Error, "Claim already decided", e.message());
        return;
    }

    busy.set(Some(claim_id.clone()));
    spawn_local(async move {
        let result = commands::decide_reward_claim(&claim_id, decision).await;
        let _ = busy.try_set(None);
        match result {
            Ok(()) => {
                claims.try_update(|all| mirror_decision(all, &claim_id, decision));
                let title = match decision {
                    ClaimDecision::Approve => "Claim approved",
                    ClaimDecision::Reject => "Claim rejected",
                };
                notifier.notify(ToastKind::Success, title, "");
            }
            Err(message) => {
                notifier.notify(ToastKind::Error, "Could not update claim", failure_message(&message));
            }
        }
    });
}

#[component]
pub fn RewardClaimsPanel(#[prop(into)] username: String) -> impl IntoView {
    let ctx = use_app_context();
    let claims = RwSignal::new(Vec::<RewardClaim>::new());
    let filter = RwSignal::new(ClaimStatus::Pending);
    let loaded = RwSignal::new(false);
    // Claim with a decision in flight
    let busy = RwSignal::new(None::<String>);

    spawn_local(async move {
        let notifier = ctx.notifier();
        let shop = match commands::fetch_shop_by_username(&username).await {
            Ok(Some(shop)) => shop,
            Ok(None) => {
                notifier.notify(ToastKind::Error, "Shop not found", &format!("No shop named \"{}\"", username));
                ctx.navigator().navigate_to(&Route::Home);
                return;
            }
            Err(message) => {
                notifier.notify(ToastKind::Error, "Could not load shop", failure_message(&message));
                ctx.navigator().navigate_to(&Route::Home);
                return;
            }
        };
        match commands::list_reward_claims(&shop.id).await {
            Ok(list) => {
                log::info!("[REWARDS] {} claims for {}", list.len(), shop.username);
                let _ = claims.try_set(list);
            }
            Err(message) => {
                notifier.notify(ToastKind::Error, "Could not load claims", failure_message(&message));
            }
        }
        let _ = loaded.try_set(true);
    });

    let shown = move || claims.with(|all| visible_claims(all, filter.get()));

    view! {
        <section class="reward-claims">
            <h2>"Reward claims"</h2>

            <div class="claim-filters" role="tablist">
                {ClaimStatus::ALL.into_iter().map(|status| {
                    let count = move || claims.with(|all| count_with(all, status));
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class=move || if filter.get() == status { "claim-filter active" } else { "claim-filter" }
                            on:click=move |_| filter.set(status)
                        >
                            {status.label()} " (" {count} ")"
                        </button>
                    }
                }).collect_view()}
            </div>

            <Show when=move || loaded.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <Show
                    when=move || !shown().is_empty()
                    fallback=move || view! {
                        <p class="claims-empty">{move || format!("No {} claims.", filter.get().label().to_lowercase())}</p>
                    }
                >
                    <ul class="claim-list">
                        <For
                            each=shown
                            key=claim_row_key
                            children=move |claim| {
                                let icon = status_icon(claim.status);
                                let pending = claim.status == ClaimStatus::Pending;
                                let id = StoredValue::new(claim.id.clone());
                                let is_busy = Signal::derive(move || id.with_value(|id| busy.with(|b| b.as_ref() == Some(id))));
                                view! {
                                    <li class="claim-row">
                                        <span class="claim-status" title=claim.status.label()>{icon.glyph()}</span>
                                        <div class="claim-body">
                                            <strong>{claim.reward_title.clone()}</strong>
                                            <span class="claim-customer">{claim.customer_name.clone()}</span>
                                            <span class="claim-points">{format!("{} pts", claim.points_cost)}</span>
                                            <time class="claim-date">{format_date(claim.created_at)}</time>
                                        </div>
                                        <Show when=move || pending>
                                            <div class="claim-actions">
                                                <button
                                                    type="button"
                                                    class="approve-btn"
                                                    disabled=move || is_busy.get()
                                                    on:click=move |_| decide(ctx, claims, busy, id.get_value(), ClaimDecision::Approve)
                                                >
                                                    "Approve"
                                                </button>
                                                <ConfirmButton
                                                    label="Reject"
                                                    question="Reject this claim?"
                                                    button_class="reject-btn"
                                                    disabled=is_busy
                                                    on_confirm=move |_| decide(ctx, claims, busy, id.get_value(), ClaimDecision::Reject)
                                                />
                                            </div>
                                        </Show>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
