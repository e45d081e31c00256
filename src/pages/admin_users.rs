//! Admin user management: debounced search, plan filter, pagination and
//! block/unblock actions.
//!
//! Re-fetches are debounced 300 ms so typing into the search box does not
//! flood the backend; a superseded fetch is dropped by generation check
//! rather than cancelled.

#[cfg(test)]
#[path = "admin_users_test.rs"]
mod admin_users_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::components::loader::Loader;
use crate::net::types::{AdminUser, Pagination, Plan, Role};

/// Parse the plan-filter select value; the empty option means "all plans".
fn plan_filter_from_value(raw: &str) -> Option<Plan> {
    Plan::parse(raw)
}

/// Wire name of a role for the identity column.
fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Admin => "admin",
    }
}

/// Badge text for the verification column.
fn verification_label(verified: bool) -> &'static str {
    if verified { "Verified" } else { "Pending" }
}

/// Caption for the block/unblock action.
fn block_action_label(blocked: bool) -> &'static str {
    if blocked { "Unblock" } else { "Block" }
}

/// Expiry column text. Free accounts have nothing to expire.
fn expiry_label(plan: Plan, expires_at: Option<&str>) -> String {
    match (plan, expires_at) {
        (Plan::Free, _) => "-".to_owned(),
        (_, Some(timestamp)) => format!("Expires {timestamp}"),
        (_, None) => "No expiry".to_owned(),
    }
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let users = RwSignal::new(Vec::<AdminUser>::new());
    let pagination = RwSignal::new(Pagination::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let search = RwSignal::new(String::new());
    let plan_filter = RwSignal::new(None::<Plan>);
    let page = RwSignal::new(1u32);
    let refresh = RwSignal::new(0u32);

    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::new(AtomicBool::new(true));
        let generation = Arc::new(AtomicU64::new(0));
        {
            let alive = alive.clone();
            let generation = generation.clone();
            Effect::new(move || {
                let search_value = search.get();
                let plan_value = plan_filter.get();
                let page_value = page.get();
                let _ = refresh.get();
                let my_generation = generation.fetch_add(1, Ordering::Relaxed) + 1;
                let alive = alive.clone();
                let generation = generation.clone();
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(300)).await;
                    if !alive.load(Ordering::Relaxed)
                        || generation.load(Ordering::Relaxed) != my_generation
                    {
                        return;
                    }
                    loading.set(true);
                    match crate::net::api::fetch_admin_users(&search_value, plan_value, page_value)
                        .await
                    {
                        Ok(data) => {
                            users.set(data.users);
                            pagination.set(data.pagination);
                            error.set(String::new());
                        }
                        Err(err) => {
                            error.set(err.message_or("Error fetching users.").to_owned());
                        }
                    }
                    loading.set(false);
                });
            });
        }
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_toggle_block = move |user_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::toggle_user_status(&user_id).await {
                Ok(()) => refresh.update(|n| *n += 1),
                Err(_err) => {
                    log::warn!("status toggle failed: {_err}");
                    error.set("Failed to update status".to_owned());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (user_id, refresh);
    };

    view! {
        <div class="admin-users-page">
            <h1>"Manage Users"</h1>

            <div class="admin-users-page__filters">
                <input
                    class="admin-users-page__search"
                    type="text"
                    placeholder="Search by email or username..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        search.set(event_target_value(&ev));
                        page.set(1);
                    }
                />
                <select
                    class="admin-users-page__plan"
                    on:change=move |ev| {
                        plan_filter.set(plan_filter_from_value(&event_target_value(&ev)));
                        page.set(1);
                    }
                >
                    <option value="">"All Plans"</option>
                    <option value="free">"Free"</option>
                    <option value="silver">"Silver"</option>
                    <option value="gold">"Gold"</option>
                </select>
            </div>

            <Show when=move || !error.get().is_empty()>
                <p class="admin-users-page__error">{move || error.get()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=move || view! { <Loader/> }>
                <table class="admin-users-page__table">
                    <thead>
                        <tr>
                            <th>"User Identity"</th>
                            <th>"Verification"</th>
                            <th>"Current Plan"</th>
                            <th>"Expiry Status"</th>
                            <th>"Joined Date"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let id = user.id.clone();
                                    let blocked = user.is_blocked;
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="admin-users-page__email">
                                                    {user.email.clone()}
                                                </div>
                                                <div class="admin-users-page__role">
                                                    {format!("Role: {}", role_label(user.role))}
                                                </div>
                                            </td>
                                            <td>
                                                <span
                                                    class="badge"
                                                    class:badge--ok=user.is_email_verified
                                                >
                                                    {verification_label(user.is_email_verified)}
                                                </span>
                                            </td>
                                            <td>{user.plan.as_str()}</td>
                                            <td>
                                                {expiry_label(
                                                    user.plan,
                                                    user.plan_expires_at.as_deref(),
                                                )}
                                            </td>
                                            <td>
                                                {user
                                                    .created_at
                                                    .clone()
                                                    .unwrap_or_else(|| "-".to_owned())}
                                            </td>
                                            <td>
                                                <button
                                                    class="btn"
                                                    class:btn--danger=!blocked
                                                    on:click=move |_| on_toggle_block(id.clone())
                                                >
                                                    {block_action_label(blocked)}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>

            <div class="admin-users-page__pager">
                <button
                    class="btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span>
                    {move || {
                        format!("Page {} of {}", pagination.get().page, pagination.get().total_pages)
                    }}
                </span>
                <button
                    class="btn"
                    disabled=move || page.get() >= pagination.get().total_pages
                    on:click=move |_| page.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
