//! Floating navigation bar shown on every screen except the auth forms.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthSession;
use crate::state::profile::ProfileSlot;

/// The bar stays hidden while the session is still restoring and on the
/// login/signup screens, which render their own chrome.
fn should_hide(path: &str, loading: bool) -> bool {
    loading || matches!(path, "/login" | "/signup")
}

/// Short display name for the signed-in account: the local part of the
/// email address.
fn display_name(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Single-character avatar fallback derived from the email.
fn avatar_initial(email: &str) -> String {
    email
        .chars()
        .find(|c| c.is_alphanumeric())
        .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let profile = expect_context::<RwSignal<ProfileSlot>>();
    let location = use_location();

    let hidden = move || {
        let state = auth.state();
        should_hide(&location.pathname.get(), state.loading)
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                auth.logout().await;
                profile.set(ProfileSlot::Unknown);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = profile;
    };

    view! {
        <Show when=move || !hidden()>
            <nav class="navbar">
                <a class="navbar__brand" href="/">
                    "GamePro"
                </a>
                <Show
                    when=move || auth.state().is_authenticated()
                    fallback=|| {
                        view! {
                            <div class="navbar__links">
                                <a class="navbar__link" href="/login">
                                    "Login"
                                </a>
                                <a class="navbar__link navbar__link--primary" href="/signup">
                                    "Sign Up"
                                </a>
                            </div>
                        }
                    }
                >
                    <div class="navbar__links">
                        <a class="navbar__link" href="/dashboard">
                            "Dashboard"
                        </a>
                        <a class="navbar__link" href="/plans">
                            "Plans"
                        </a>
                        <Show when=move || auth.state().is_admin()>
                            <a class="navbar__link" href="/admin/users">
                                "Users"
                            </a>
                        </Show>
                        <a class="navbar__identity" href="/profile">
                            <span class="navbar__avatar" aria-hidden="true">
                                {move || {
                                    auth.state()
                                        .user
                                        .map(|u| avatar_initial(&u.email))
                                        .unwrap_or_default()
                                }}
                            </span>
                            <span class="navbar__name">
                                {move || {
                                    auth.state()
                                        .user
                                        .map(|u| display_name(&u.email).to_owned())
                                        .unwrap_or_default()
                                }}
                            </span>
                        </a>
                        <button class="navbar__logout" on:click=on_logout title="Logout">
                            "Logout"
                        </button>
                    </div>
                </Show>
            </nav>
        </Show>
    }
}
