//! Own-profile page: identity column, plan badge, favorite games and
//! characters with plan-based slot locking, and the saved-profiles panel.
//!
//! The profile itself comes from the guard's probe cache — this page never
//! re-fetches it.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::{Plan, Profile, ProfileCard as CardData};
use crate::state::auth::AuthSession;
use crate::state::profile::ProfileSlot;
use crate::util::plan_catalog::{self, PlanLimits};
use crate::util::query::encode_component;

/// Avatar URL with a generated-initials fallback for profiles without one.
fn avatar_source(profile: &Profile) -> String {
    profile.avatar.clone().unwrap_or_else(|| {
        format!(
            "https://ui-avatars.com/api/?name={}&background=random",
            encode_component(&profile.username)
        )
    })
}

/// Location line with the privacy fallback.
fn location_line(profile: &Profile) -> String {
    profile
        .address
        .clone()
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| "Location Hidden".to_owned())
}

/// Games heading like `Top Games (2 / 3)`.
fn games_heading(count: usize, limits: PlanLimits) -> String {
    format!("Top Games ({count} / {})", limits.games)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let slot = expect_context::<RwSignal<ProfileSlot>>();

    let saved = RwSignal::new(Vec::<CardData>::new());
    let saved_loading = RwSignal::new(true);

    // The saved panel is page-local; the profile itself is guard-cached.
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
                Ok(cards) => saved.set(cards),
                Err(_err) => log::warn!("saved-profiles fetch failed: {_err}"),
            }
            saved_loading.set(false);
        });
    });

    let on_unsave = move |id: String| {
        saved.update(|cards| cards.retain(|c| c.id != id));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(_err) = crate::net::api::toggle_saved(&id).await {
                log::warn!("unsave failed: {_err}");
            }
        });
    };

    let plan = move || auth.state().user.map_or(Plan::Free, |u| u.plan);

    view! {
        <div class="profile-page">
            {move || {
                let current_plan = plan();
                let limits = plan_catalog::limits(current_plan);
                let badge = plan_catalog::badge(current_plan);
                slot.get()
                    .profile()
                    .map(|profile| {
                        let avatar = avatar_source(profile);
                        let username = profile.username.clone();
                        let location = location_line(profile);
                        let games = profile.games.clone();
                        let characters = profile.characters.clone();
                        let heading = games_heading(games.len(), limits);
                        view! {
                            <div class="profile-page__layout">
                                <aside class="profile-page__identity">
                                    <img class="profile-page__avatar" src=avatar alt="Avatar"/>
                                    <span class="profile-page__badge">
                                        {badge.emoji} " " {badge.label}
                                    </span>
                                    <h2>{username}</h2>
                                    <p class="profile-page__location">{location}</p>
                                    <a class="btn" href="/create-profile">
                                        "Edit Profile"
                                    </a>
                                </aside>

                                <section class="profile-page__games">
                                    <span class="profile-page__section-title">{heading}</span>
                                    <div class="profile-page__strip">
                                        {games
                                            .into_iter()
                                            .enumerate()
                                            .map(|(index, game)| {
                                                let locked =
                                                    plan_catalog::is_locked(index, limits.games);
                                                view! {
                                                    <div
                                                        class="game-tile"
                                                        class:game-tile--locked=locked
                                                    >
                                                        <img
                                                            class="game-tile__cover"
                                                            src=game.cover_url.unwrap_or_default()
                                                            alt=game.name.clone()
                                                        />
                                                        <span class="game-tile__name">
                                                            {game.name}
                                                        </span>
                                                        <Show when=move || locked>
                                                            <span class="game-tile__lock">"🔒"</span>
                                                        </Show>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </section>

                                <section class="profile-page__characters">
                                    <span class="profile-page__section-title">
                                        "Favorite Characters"
                                    </span>
                                    <div class="profile-page__strip">
                                        {characters
                                            .into_iter()
                                            .map(|character| {
                                                view! {
                                                    <div class="character-tile">
                                                        <img
                                                            class="character-tile__image"
                                                            src=character.image_url.unwrap_or_default()
                                                            alt=character.name.clone()
                                                        />
                                                        <span class="character-tile__name">
                                                            {character.name}
                                                        </span>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </section>

                                <section class="profile-page__saved">
                                    <span class="profile-page__section-title">
                                        {format!("Saved Profiles ({} Slots)", limits.saved_profiles)}
                                    </span>
                                    <Show
                                        when=move || !saved_loading.get()
                                        fallback=|| view! { <p>"Loading saved profiles..."</p> }
                                    >
                                        <ul class="profile-page__saved-list">
                                            {move || {
                                                saved
                                                    .get()
                                                    .into_iter()
                                                    .map(|card| {
                                                        let id = card.id.clone();
                                                        let name = card
                                                            .username
                                                            .unwrap_or_else(|| "Anonymous Player".to_owned());
                                                        view! {
                                                            <li class="profile-page__saved-item">
                                                                <span>{name}</span>
                                                                <button
                                                                    class="btn"
                                                                    on:click=move |_| on_unsave(id.clone())
                                                                >
                                                                    "Unsave"
                                                                </button>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()
                                            }}
                                        </ul>
                                    </Show>
                                </section>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
