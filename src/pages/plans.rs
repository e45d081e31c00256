//! Membership tiers page with checkout hand-off.
//!
//! Upgrading creates a server-side checkout session and redirects the whole
//! page to the hosted payment URL; the result comes back through the payment
//! result routes.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use leptos::prelude::*;

use crate::net::types::Plan;
use crate::state::auth::AuthSession;
use crate::util::plan_catalog::{can_upgrade, catalog};

/// Button caption for a tier given the member's current plan.
fn tier_label(current: Plan, tier: Plan) -> String {
    if tier == current {
        "Current Plan".to_owned()
    } else if tier == Plan::Free {
        "Basic Plan".to_owned()
    } else {
        let name = tier.as_str();
        let mut label = String::from("Upgrade to ");
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            label.extend(first.to_uppercase());
            label.push_str(chars.as_str());
        }
        label
    }
}

#[component]
pub fn PlansPage() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let current_plan = move || auth.state().user.map_or(Plan::Free, |u| u.plan);

    let on_upgrade = move |target: Plan| {
        if busy.get() || !can_upgrade(current_plan(), target) {
            return;
        }
        busy.set(true);
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_checkout(target).await {
                Ok(session) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&session.url);
                    }
                }
                Err(err) => {
                    error.set(err.message_or("Payment initialization failed.").to_owned());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    view! {
        <div class="plans-page">
            <header class="plans-page__header">
                <h2>"Membership Tiers"</h2>
                <h1>"Choose Your Clearance Level"</h1>
                <p>
                    "Unlock more slots, exclusive badges, and extended session times. \
                     Upgrade your arsenal today."
                </p>
            </header>

            <Show when=move || !error.get().is_empty()>
                <p class="plans-page__error">{move || error.get()}</p>
            </Show>

            <div class="plans-page__grid">
                {catalog()
                    .into_iter()
                    .map(|tier| {
                        let target = tier.plan;
                        view! {
                            <div class="plan-tier" class:plan-tier--popular=tier.popular>
                                <Show when=move || tier.popular>
                                    <span class="plan-tier__ribbon">"Most Popular"</span>
                                </Show>
                                <h3>{tier.name}</h3>
                                <p class="plan-tier__price">
                                    <span>{tier.price}</span>
                                    <span class="plan-tier__period">"/month"</span>
                                </p>
                                <p class="plan-tier__description">{tier.description}</p>
                                <ul class="plan-tier__features">
                                    {tier
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <button
                                    class="plan-tier__action"
                                    disabled=move || {
                                        busy.get() || !can_upgrade(current_plan(), target)
                                    }
                                    on:click=move |_| on_upgrade(target)
                                >
                                    {move || tier_label(current_plan(), target)}
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <p class="plans-page__footnote">
                "Secure payment via Stripe. Cancel anytime from your profile settings."
            </p>
        </div>
    }
}
