//! Signup page with client-side confirmation check and OAuth shortcuts.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

/// Validate the signup form. Returns the trimmed email and the password, or
/// the message to show inline.
fn validate_signup(
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter email and password.");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let validated = validate_signup(&email.get(), &password.get(), &confirm.get());
        let (email_value, password_value) = match validated {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&email_value, &password_value).await {
                Ok(()) => success.set(true),
                Err(err) => {
                    error.set(err.message_or("Signup failed. Please try again.").to_owned());
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
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
            <Show
                when=move || !success.get()
                fallback=move || {
                    view! {
                        <div class="auth-card auth-card--success">
                            <h1>"Check Your Email!"</h1>
                            <p>
                                "A verification link has been sent to "
                                <strong>{move || email.get()}</strong>
                                ". Please verify your account before logging in."
                            </p>
                            <a href="/login">"Go to Login"</a>
                        </div>
                    }
                }
            >
                <form class="auth-card" on:submit=on_submit>
                    <h1>"Create Account"</h1>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-card__error">{move || error.get()}</p>
                    </Show>
                    <label class="auth-card__label">
                        "Email Address"
                        <input
                            class="auth-card__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                        />
                    </label>
                    <label class="auth-card__label">
                        "Password"
                        <input
                            class="auth-card__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                        />
                    </label>
                    <label class="auth-card__label">
                        "Confirm Password"
                        <input
                            class="auth-card__input"
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| {
                                confirm.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                        />
                    </label>
                    <button class="auth-card__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Sign Up" }}
                    </button>
                    <div class="auth-card__divider">"OR"</div>
                    <button
                        class="auth-card__oauth auth-card__oauth--google"
                        type="button"
                        on:click=oauth_redirect("google")
                    >
                        "Sign up with Google"
                    </button>
                    <button
                        class="auth-card__oauth auth-card__oauth--facebook"
                        type="button"
                        on:click=oauth_redirect("facebook")
                    >
                        "Sign up with Facebook"
                    </button>
                    <p class="auth-card__footer">
                        "Already have an account? " <a href="/login">"Log in"</a>
                    </p>
                </form>
            </Show>
        </div>
    }
}
