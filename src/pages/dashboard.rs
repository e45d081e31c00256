//! Dashboard: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the member's plan tile and a paginated grid of other players'
//! profiles. The saved set is bulk-fetched once per page load so each card
//! can render Saved/Save without its own request. Reactions bump counters
//! optimistically and reconcile to the server's totals when the mutation
//! resolves; stale in-flight responses are simply overwritten by the most
//! recent state write.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::comments_panel::CommentsPanel;
use crate::components::profile_card::ProfileCard;
use crate::net::types::{ProfileCard as CardData, Reaction, ReactionCounts};
use crate::state::auth::AuthSession;

/// Bump the targeted card's counter while the reaction request is in flight.
fn apply_optimistic_reaction(cards: &mut [CardData], id: &str, reaction: Reaction) {
    if let Some(card) = cards.iter_mut().find(|c| c.id == id) {
        match reaction {
            Reaction::Like => card.likes += 1,
            Reaction::Dislike => card.dislikes += 1,
        }
    }
}

/// Replace optimistic counters with the authoritative server totals.
fn apply_server_counts(cards: &mut [CardData], id: &str, counts: ReactionCounts) {
    if let Some(card) = cards.iter_mut().find(|c| c.id == id) {
        card.likes = counts.likes;
        card.dislikes = counts.dislikes;
    }
}

/// Record saved-set membership for a profile id.
fn set_membership(saved: &mut Vec<String>, id: &str, member: bool) {
    let present = saved.iter().any(|s| s == id);
    if member && !present {
        saved.push(id.to_owned());
    } else if !member && present {
        saved.retain(|s| s != id);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthSession>();

    let profiles = RwSignal::new(Vec::<CardData>::new());
    let saved_ids = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let current_page = RwSignal::new(1u32);
    let total_pages = RwSignal::new(1u32);
    let comments_for = RwSignal::new(None::<(String, String)>);

    // Profile grid: refetch whenever the page changes (and once auth is
    // ready). The latest response wins; superseded ones are overwritten.
    Effect::new(move || {
        let state = auth.state();
        if state.loading || !state.is_authenticated() {
            return;
        }
        let page_number = current_page.get();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_profiles(page_number).await {
                Ok(page) => {
                    profiles.set(page.data);
                    total_pages.set(page.pagination.total_pages);
                    error.set(String::new());
                }
                Err(err) => {
                    error.set(err.message_or("Failed to load player profiles.").to_owned());
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = page_number;
    });

    // Saved set: one bulk fetch per page load.
    let saved_requested = RwSignal::new(false);
    Effect::new(move || {
        if saved_requested.get() {
            return;
        }
        let state = auth.state();
        if state.loading || !state.is_authenticated() {
            return;
        }
        saved_requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_saved_profiles().await {
                Ok(cards) => {
                    saved_ids.set(cards.into_iter().map(|c| c.id).collect());
                }
                Err(_err) => log::warn!("saved-set fetch failed: {_err}"),
            }
        });
    });

    let on_toggle_save = Callback::new(move |id: String| {
        let currently_saved = saved_ids.with_untracked(|s| s.iter().any(|v| v == &id));
        saved_ids.update(|s| set_membership(s, &id, !currently_saved));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::toggle_saved(&id).await {
                Ok(toggle) => saved_ids.update(|s| set_membership(s, &id, toggle.saved)),
                Err(_err) => {
                    log::warn!("save toggle failed: {_err}");
                    // Roll the optimistic flip back.
                    saved_ids.update(|s| set_membership(s, &id, currently_saved));
                }
            }
        });
    });

    let on_react = Callback::new(move |(id, reaction): (String, Reaction)| {
        profiles.update(|cards| apply_optimistic_reaction(cards, &id, reaction));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::react(&id, reaction).await {
                Ok(counts) => profiles.update(|cards| apply_server_counts(cards, &id, counts)),
                Err(_err) => log::warn!("reaction failed: {_err}"),
            }
        });
    });

    let on_comments = Callback::new(move |target: (String, String)| {
        comments_for.set(Some(target));
    });
    let on_comments_close = Callback::new(move |()| comments_for.set(None));

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            auth.logout().await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        });
    };

    let welcome = move || {
        auth.state()
            .user
            .map_or_else(String::new, |u| format!("Welcome, {}!", u.email))
    };
    let plan_label = move || {
        auth.state()
            .user
            .map_or("free", |u| u.plan.as_str())
            .to_owned()
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{welcome}</h1>
                <button class="btn btn--danger" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            <div class="dashboard-page__tiles">
                <div class="dashboard-page__tile">
                    <h3>"Subscription Plan"</h3>
                    <p class="dashboard-page__plan">{plan_label}</p>
                    <a href="/plans">"Manage plan"</a>
                </div>
            </div>

            <h2>"Explore Player Profiles"</h2>

            <Show when=move || !error.get().is_empty()>
                <p class="dashboard-page__error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Loading player profiles..."</p> }
            >
                <Show
                    when=move || !profiles.get().is_empty()
                    fallback=|| view! { <p>"No other player profiles found."</p> }
                >
                    <div class="dashboard-page__grid">
                        {move || {
                            profiles
                                .get()
                                .into_iter()
                                .map(|card| {
                                    let saved = saved_ids.get().iter().any(|id| id == &card.id);
                                    view! {
                                        <ProfileCard
                                            card=card
                                            saved=saved
                                            on_toggle_save=on_toggle_save
                                            on_react=on_react
                                            on_comments=on_comments
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <div class="dashboard-page__pager">
                <button
                    class="btn"
                    disabled=move || current_page.get() <= 1
                    on:click=move |_| current_page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span>{move || format!("Page {} of {}", current_page.get(), total_pages.get())}</span>
                <button
                    class="btn"
                    disabled=move || current_page.get() >= total_pages.get()
                    on:click=move |_| current_page.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </div>

            <Show when=move || comments_for.get().is_some()>
                {move || {
                    comments_for
                        .get()
                        .map(|(profile_id, username)| {
                            view! {
                                <CommentsPanel
                                    profile_id=profile_id
                                    username=username
                                    on_close=on_comments_close
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}
