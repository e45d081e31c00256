//! Create/edit-profile form: identity fields plus dynamic favorite-game and
//! favorite-character rows.
//!
//! The only place a profile is ever written from. On success the guard's
//! probe cache is updated in place so profile-gated routes unlock without a
//! second probe.

#[cfg(test)]
#[path = "create_profile_test.rs"]
mod create_profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{FavoriteCharacter, FavoriteGame, Profile};
use crate::state::profile::ProfileSlot;

/// Assemble the profile to save from the form fields. Blank game/character
/// rows are dropped; a missing username is the only hard failure.
fn build_profile(
    username: &str,
    avatar: &str,
    address: &str,
    games: &[FavoriteGame],
    characters: &[FavoriteCharacter],
) -> Result<Profile, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Pick a username first.");
    }
    let optional = |raw: &str| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    };
    Ok(Profile {
        username: username.to_owned(),
        avatar: optional(avatar),
        address: optional(address),
        games: games
            .iter()
            .filter(|g| !g.name.trim().is_empty())
            .cloned()
            .collect(),
        characters: characters
            .iter()
            .filter(|c| !c.name.trim().is_empty())
            .cloned()
            .collect(),
    })
}

#[component]
pub fn CreateProfilePage() -> impl IntoView {
    let slot = expect_context::<RwSignal<ProfileSlot>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let avatar = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let games = RwSignal::new(Vec::<FavoriteGame>::new());
    let characters = RwSignal::new(Vec::<FavoriteCharacter>::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    // Row lists re-render only on structural changes (add/remove/seed), not
    // on keystrokes, so inputs keep focus while typing.
    let rows_version = RwSignal::new(0u32);

    // Editing an existing profile starts from the cached copy.
    let seeded = RwSignal::new(false);
    Effect::new(move || {
        if seeded.get() {
            return;
        }
        if let Some(existing) = slot.get().profile() {
            username.set(existing.username.clone());
            avatar.set(existing.avatar.clone().unwrap_or_default());
            address.set(existing.address.clone().unwrap_or_default());
            games.set(existing.games.clone());
            characters.set(existing.characters.clone());
            seeded.set(true);
            rows_version.update(|v| *v += 1);
        }
    });

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let built = games.with(|g| {
                characters.with(|c| {
                    build_profile(&username.get(), &avatar.get(), &address.get(), g, c)
                })
            });
            let profile = match built {
                Ok(profile) => profile,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
            busy.set(true);
            error.set(String::new());
            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::save_profile(&profile).await {
                        Ok(saved) => {
                            slot.set(ProfileSlot::Present(saved));
                            navigate("/dashboard", NavigateOptions::default());
                        }
                        Err(err) => {
                            error.set(
                                err.message_or("Failed to save profile. Please try again.")
                                    .to_owned(),
                            );
                            busy.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&navigate, profile);
                busy.set(false);
            }
        }
    };

    let add_game = move |_| {
        games.update(|g| g.push(FavoriteGame::default()));
        rows_version.update(|v| *v += 1);
    };
    let add_character = move |_| {
        characters.update(|c| c.push(FavoriteCharacter::default()));
        rows_version.update(|v| *v += 1);
    };

    view! {
        <div class="create-profile-page">
            <form class="create-profile-page__card" on:submit=on_submit>
                <h2>"Complete Your Profile"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="create-profile-page__error">{move || error.get()}</p>
                </Show>

                <label class="form-field">
                    "Username"
                    <input
                        type="text"
                        placeholder="GamerTag123"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Avatar URL"
                    <input
                        type="url"
                        placeholder="https://..."
                        prop:value=move || avatar.get()
                        on:input=move |ev| avatar.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    "Location"
                    <input
                        type="text"
                        placeholder="City, Country"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />
                </label>

                <fieldset class="form-rows">
                    <legend>"Favorite Games"</legend>
                    {move || {
                        rows_version.get();
                        games
                            .get_untracked()
                            .into_iter()
                            .enumerate()
                            .map(|(index, game)| {
                                view! {
                                    <div class="form-rows__row">
                                        <input
                                            type="text"
                                            placeholder="Game name"
                                            prop:value=game.name.clone()
                                            on:input=move |ev| {
                                                games.update(|g| {
                                                    if let Some(entry) = g.get_mut(index) {
                                                        entry.name = event_target_value(&ev);
                                                    }
                                                });
                                            }
                                        />
                                        <input
                                            type="url"
                                            placeholder="Cover image URL"
                                            prop:value=game.cover_url.clone().unwrap_or_default()
                                            on:input=move |ev| {
                                                games.update(|g| {
                                                    if let Some(entry) = g.get_mut(index) {
                                                        let value = event_target_value(&ev);
                                                        entry.cover_url =
                                                            (!value.is_empty()).then_some(value);
                                                    }
                                                });
                                            }
                                        />
                                        <input
                                            type="text"
                                            placeholder="Platform"
                                            prop:value=game.platform.clone().unwrap_or_default()
                                            on:input=move |ev| {
                                                games.update(|g| {
                                                    if let Some(entry) = g.get_mut(index) {
                                                        let value = event_target_value(&ev);
                                                        entry.platform =
                                                            (!value.is_empty()).then_some(value);
                                                    }
                                                });
                                            }
                                        />
                                        <input
                                            type="text"
                                            placeholder="Skill"
                                            prop:value=game.skill.clone().unwrap_or_default()
                                            on:input=move |ev| {
                                                games.update(|g| {
                                                    if let Some(entry) = g.get_mut(index) {
                                                        let value = event_target_value(&ev);
                                                        entry.skill =
                                                            (!value.is_empty()).then_some(value);
                                                    }
                                                });
                                            }
                                        />
                                        <button
                                            class="btn"
                                            type="button"
                                            on:click=move |_| {
                                                games.update(|g| {
                                                    if index < g.len() {
                                                        g.remove(index);
                                                    }
                                                });
                                                rows_version.update(|v| *v += 1);
                                            }
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <button class="btn" type="button" on:click=add_game>
                        "+ Add Game"
                    </button>
                </fieldset>

                <fieldset class="form-rows">
                    <legend>"Favorite Characters"</legend>
                    {move || {
                        rows_version.get();
                        characters
                            .get_untracked()
                            .into_iter()
                            .enumerate()
                            .map(|(index, character)| {
                                view! {
                                    <div class="form-rows__row">
                                        <input
                                            type="text"
                                            placeholder="Character name"
                                            prop:value=character.name.clone()
                                            on:input=move |ev| {
                                                characters.update(|c| {
                                                    if let Some(entry) = c.get_mut(index) {
                                                        entry.name = event_target_value(&ev);
                                                    }
                                                });
                                            }
                                        />
                                        <input
                                            type="url"
                                            placeholder="Image URL"
                                            prop:value=character.image_url.clone().unwrap_or_default()
                                            on:input=move |ev| {
                                                characters.update(|c| {
                                                    if let Some(entry) = c.get_mut(index) {
                                                        let value = event_target_value(&ev);
                                                        entry.image_url =
                                                            (!value.is_empty()).then_some(value);
                                                    }
                                                });
                                            }
                                        />
                                        <button
                                            class="btn"
                                            type="button"
                                            on:click=move |_| {
                                                characters.update(|c| {
                                                    if index < c.len() {
                                                        c.remove(index);
                                                    }
                                                });
                                                rows_version.update(|v| *v += 1);
                                            }
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <button class="btn" type="button" on:click=add_character>
                        "+ Add Character"
                    </button>
                </fieldset>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Start Gaming" }}
                </button>
            </form>
        </div>
    }
}
