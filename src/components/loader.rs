//! Full-screen neutral waiting state.
//!
//! Shown by the route guard while auth or the profile probe is unresolved,
//! and by pages during their initial fetch.

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader">
            <div class="loader__spinner" aria-hidden="true"></div>
            <p class="loader__label">"Loading System..."</p>
        </div>
    }
}
