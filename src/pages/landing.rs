//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthSession;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<AuthSession>();

    view! {
        <div class="landing-page">
            <h1>"GamePro"</h1>
            <p class="landing-page__tagline">
                "Build your gaming identity. Collect your favorite games and \
                 characters, find other players, and climb the tiers."
            </p>
            <div class="landing-page__actions">
                <Show
                    when=move || auth.state().is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="btn btn--primary" href="/signup">
                                "Create Account"
                            </a>
                            <a class="btn" href="/login">
                                "Login"
                            </a>
                        }
                    }
                >
                    <a class="btn btn--primary" href="/dashboard">
                        "Go to Dashboard"
                    </a>
                </Show>
            </div>
        </div>
    }
}
