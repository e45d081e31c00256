//! Holding screen for accounts that have not confirmed their email yet.
//!
//! The guard routes unverified users here; once a refresh shows the flag
//! flipped, the page moves on to the dashboard by itself.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthSession;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let navigate = use_navigate();
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Leave as soon as the account turns verified.
    Effect::new({
        let navigate = navigate.clone();
        move || {
            if auth.state().is_verified() {
                navigate("/dashboard", NavigateOptions::default());
            }
        }
    });

    let on_check = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        message.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            auth.refresh_user().await;
            if !auth.state_untracked().is_verified() {
                message.set("Email still not verified. Please check your inbox.".to_owned());
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    let email = move || {
        auth.state()
            .user
            .map_or_else(|| "your inbox".to_owned(), |u| u.email)
    };

    view! {
        <div class="verify-page">
            <h1>"Please Verify Your Email"</h1>
            <p>"A verification link was sent to " <strong>{email}</strong> "."</p>
            <Show when=move || !message.get().is_empty()>
                <p class="verify-page__notice">{move || message.get()}</p>
            </Show>
            <button class="btn btn--primary" on:click=on_check disabled=move || busy.get()>
                "I've Verified My Email"
            </button>
        </div>
    }
}
