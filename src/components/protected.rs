//! Route-guard wrapper applying [`crate::util::guard::decide`] to children.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard itself is a pure function; this component wires it to the
//! router: it issues the profile-existence probe on demand, caches the
//! result in shared state, and turns `Redirect` decisions into navigation
//! side effects. Pages never probe on their own.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loader::Loader;
use crate::state::auth::AuthSession;
use crate::state::profile::ProfileSlot;
use crate::util::guard::{RouteDecision, RouteRequirements, decide};

#[component]
pub fn Protected(
    children: ChildrenFn,
    /// Only admin accounts may enter.
    #[prop(optional)]
    admin_only: bool,
    /// Non-admin users must have a completed profile.
    #[prop(optional)]
    requires_profile: bool,
) -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let profile = expect_context::<RwSignal<ProfileSlot>>();
    let location = use_location();
    let navigate = use_navigate();
    let requirements = RouteRequirements {
        admin_only,
        requires_profile,
    };

    // Issue the profile probe once per session when this route needs it.
    // Scoped to verified non-admin users; admins have no profile concept.
    Effect::new(move || {
        if !requirements.requires_profile {
            return;
        }
        let state = auth.state();
        if state.loading || !state.is_authenticated() || state.is_admin() {
            return;
        }
        if profile.get() != ProfileSlot::Unknown {
            return;
        }
        profile.set(ProfileSlot::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_my_profile().await {
                Ok(Some(found)) => profile.set(ProfileSlot::Present(found)),
                Ok(None) => profile.set(ProfileSlot::Missing),
                Err(_err) => {
                    log::warn!("profile probe failed: {_err}");
                    profile.set(ProfileSlot::Failed);
                }
            }
        });
    });

    let decision = Memo::new(move |_| {
        decide(
            &auth.state(),
            requirements,
            &profile.get(),
            &location.pathname.get(),
        )
    });

    // Redirects are navigation side effects mirroring the pure decision.
    Effect::new({
        let navigate = navigate.clone();
        move || {
            if let RouteDecision::Redirect(path) = decision.get() {
                navigate(
                    &path,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        }
    });

    view! {
        <Show
            when=move || decision.get() == RouteDecision::Allow
            fallback=move || view! { <Loader/> }
        >
            {children()}
        </Show>
    }
}
