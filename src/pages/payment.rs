//! Payment result routes reached by redirect from the hosted checkout.
//!
//! Success verifies the checkout session server-side, refreshes the user so
//! the new plan is visible everywhere, then moves on to the dashboard.
//! Cancel is a static off-ramp back to the plans page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthSession;
use crate::util::query::query_param;

#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let location = use_location();
    let navigate = use_navigate();
    let status = RwSignal::new("Verifying payment...".to_owned());

    let verified = RwSignal::new(false);
    Effect::new({
        let navigate = navigate.clone();
        move || {
            if verified.get() {
                return;
            }
            verified.set(true);
            let session_id = query_param(&location.search.get_untracked(), "session_id");
            let _navigate = navigate.clone();
            let Some(session_id) = session_id else {
                status.set("No session ID found.".to_owned());
                return;
            };
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::verify_payment(&session_id).await {
                    Ok(()) => {
                        status.set("Payment Successful! Upgrading your account...".to_owned());
                        // Pull the fresh plan before landing on the dashboard.
                        auth.refresh_user().await;
                        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                        _navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(_err) => {
                        log::warn!("payment verification failed: {_err}");
                        status.set(
                            "Payment verification failed. Please contact support.".to_owned(),
                        );
                    }
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (auth, session_id);
        }
    });

    view! {
        <div class="payment-page">
            <div class="payment-page__glyph">"🎉"</div>
            <h1>"Payment Complete"</h1>
            <p class="payment-page__status">{move || status.get()}</p>
        </div>
    }
}

#[component]
pub fn PaymentCancelPage() -> impl IntoView {
    view! {
        <div class="payment-page">
            <div class="payment-page__glyph">"❌"</div>
            <h1>"Payment Cancelled"</h1>
            <p class="payment-page__status">"You have not been charged."</p>
            <a class="btn btn--primary" href="/plans">
                "Return to Plans"
            </a>
        </div>
    }
}
