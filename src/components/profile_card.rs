//! Card component for another player's profile on the dashboard grid.
//!
//! DESIGN
//! ======
//! Presentation only: save/react/comment intents are raised to the page via
//! callbacks so the page owns the optimistic updates and server
//! reconciliation.

#[cfg(test)]
#[path = "profile_card_test.rs"]
mod profile_card_test;

use leptos::prelude::*;

use crate::net::types::{ProfileCard as CardData, Reaction};

/// Single-character placeholder when no avatar image is set.
fn initial_for(username: Option<&str>) -> String {
    username
        .and_then(|name| name.chars().next())
        .map_or_else(|| "P".to_owned(), |c| c.to_uppercase().collect())
}

/// Display name with the same fallback the rest of the grid uses.
fn name_for(username: Option<&str>) -> String {
    match username {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => "Anonymous Player".to_owned(),
    }
}

#[component]
pub fn ProfileCard(
    card: CardData,
    saved: bool,
    on_toggle_save: Callback<String>,
    on_react: Callback<(String, Reaction)>,
    on_comments: Callback<(String, String)>,
) -> impl IntoView {
    let name = name_for(card.username.as_deref());
    let initial = initial_for(card.username.as_deref());
    let games_count = card.games.len();
    let id = card.id.clone();

    let save_id = id.clone();
    let like_id = id.clone();
    let dislike_id = id.clone();
    let comments_id = id.clone();
    let comments_name = name.clone();

    view! {
        <div class="profile-card">
            <div class="profile-card__header">
                <Show
                    when={
                        let avatar = card.avatar.clone();
                        move || avatar.is_some()
                    }
                    fallback={
                        let initial = initial.clone();
                        move || {
                            view! {
                                <span class="profile-card__initial" aria-hidden="true">
                                    {initial.clone()}
                                </span>
                            }
                        }
                    }
                >
                    <img
                        class="profile-card__avatar"
                        src=card.avatar.clone().unwrap_or_default()
                        alt="Avatar"
                    />
                </Show>
                <h4 class="profile-card__name">{name.clone()}</h4>
            </div>

            <p class="profile-card__games">{format!("Games Collected: {games_count}")}</p>

            <div class="profile-card__reactions">
                <button
                    class="profile-card__react profile-card__react--like"
                    on:click=move |_| on_react.run((like_id.clone(), Reaction::Like))
                >
                    {format!("👍 {} Likes", card.likes)}
                </button>
                <button
                    class="profile-card__react profile-card__react--dislike"
                    on:click=move |_| on_react.run((dislike_id.clone(), Reaction::Dislike))
                >
                    {format!("👎 {} Dislikes", card.dislikes)}
                </button>
            </div>

            <div class="profile-card__actions">
                <button
                    class="profile-card__save"
                    class:profile-card__save--active=saved
                    on:click=move |_| on_toggle_save.run(save_id.clone())
                >
                    {if saved { "Saved" } else { "Save" }}
                </button>
                <button
                    class="profile-card__comments"
                    on:click=move |_| on_comments.run((comments_id.clone(), comments_name.clone()))
                >
                    "Comments"
                </button>
            </div>
        </div>
    }
}
