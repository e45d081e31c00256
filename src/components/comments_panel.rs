//! Modal comment thread for a single profile.
//!
//! The server is the source of truth: every successful post returns the
//! refreshed list, which replaces the local one wholesale — no client-side
//! reconciliation.

#[cfg(test)]
#[path = "comments_panel_test.rs"]
mod comments_panel_test;

use leptos::prelude::*;

use crate::net::types::Comment;

/// Trimmed draft ready to submit, or `None` when there is nothing to post.
fn prepare_comment(draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

#[component]
pub fn CommentsPanel(
    profile_id: String,
    username: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let comments = RwSignal::new(Vec::<Comment>::new());
    let draft = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(true);

    {
        let profile_id = profile_id.clone();
        Effect::new(move || {
            let _profile_id = profile_id.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_comments(&_profile_id).await {
                    Ok(list) => comments.set(list),
                    Err(err) => error.set(err.message_or("Could not load comments.").to_owned()),
                }
                loading.set(false);
            });
        });
    }

    let post_id = profile_id.clone();
    let on_post = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(text) = prepare_comment(&draft.get()) else {
            return;
        };
        busy.set(true);
        error.set(String::new());
        let _profile_id = post_id.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::post_comment(&_profile_id, &text).await {
                Ok(list) => {
                    comments.set(list);
                    draft.set(String::new());
                }
                Err(err) => error.set(err.message_or("Could not post comment.").to_owned()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Comments on {username}")}</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p>"Loading comments..."</p> }
                >
                    <ul class="comments">
                        {move || {
                            let items = comments.get();
                            if items.is_empty() {
                                view! { <li class="comments__empty">"No comments yet."</li> }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|comment| {
                                        view! {
                                            <li class="comments__item">
                                                <span class="comments__author">
                                                    {comment.author.unwrap_or_else(|| "Anonymous".to_owned())}
                                                </span>
                                                <span class="comments__text">{comment.text}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        }}
                    </ul>
                </Show>
                <form class="comments__form" on:submit=on_post>
                    <input
                        class="comments__input"
                        type="text"
                        placeholder="Add a comment..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Post"
                    </button>
                </form>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
