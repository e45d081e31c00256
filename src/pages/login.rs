//! Login page: credential form plus external OAuth redirect buttons.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::error::ApiError;
use crate::net::types::{Role, User};
use crate::state::auth::AuthSession;
use crate::util::query::query_param;

/// Message shown above the form for a failed login attempt. Status picks the
/// wording: 401 is bad credentials, 403 an unverified address.
fn login_error_message(err: &ApiError) -> &'static str {
    if err.is_unauthorized() {
        "Invalid email or password."
    } else if err.is_forbidden() {
        "Please verify your email before logging in."
    } else {
        "Something went wrong. Please try again later."
    }
}

/// Post-login destination: admins land on user management; everyone else
/// returns to the originally requested path (when it is a safe local path)
/// or the dashboard.
fn post_login_destination(user: &User, from: Option<&str>) -> String {
    if user.role == Role::Admin {
        return "/admin/users".to_owned();
    }
    from.filter(|path| path.starts_with('/'))
        .map_or_else(|| "/dashboard".to_owned(), str::to_owned)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let location = use_location();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let email_value = email.get().trim().to_owned();
            let password_value = password.get();
            if email_value.is_empty() || password_value.is_empty() {
                error.set("Enter email and password.".to_owned());
                return;
            }
            busy.set(true);
            error.set(String::new());
            let from = query_param(&location.search.get_untracked(), "from");
            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match auth.login(&email_value, &password_value).await {
                        Ok(user) => {
                            let destination = post_login_destination(&user, from.as_deref());
                            navigate(&destination, NavigateOptions::default());
                        }
                        Err(err) => {
                            error.set(login_error_message(&err).to_owned());
                            busy.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&navigate, from);
                busy.set(false);
            }
        }
    };

    let oauth_redirect = |provider: &'static str| {
        move |_ev: leptos::ev::MouseEvent| {
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .location()
                        .set_href(&crate::net::api::oauth_url(provider));
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = provider;
            }
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Login"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-card__error">{move || error.get()}</p>
                </Show>
                <input
                    class="auth-card__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-card__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
                <div class="auth-card__divider"></div>
                <button
                    class="auth-card__oauth auth-card__oauth--google"
                    type="button"
                    on:click=oauth_redirect("google")
                >
                    "Continue with Google"
                </button>
                <button
                    class="auth-card__oauth auth-card__oauth--facebook"
                    type="button"
                    on:click=oauth_redirect("facebook")
                >
                    "Continue with Facebook"
                </button>
                <p class="auth-card__footer">
                    "Don't have an account? " <a href="/signup">"Sign Up"</a>
                </p>
            </form>
        </div>
    }
}
