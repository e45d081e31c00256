//! REST client for the platform backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning a network error since these endpoints are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! This is the single point of HTTP egress. The request path attaches the
//! stored bearer token; the response path logs 401/403 and network failures
//! but never redirects and never clears the session — that belongs to auth
//! state and the route guard so optional probes (like the profile-existence
//! check that legitimately 404s) cannot trigger redirect loops. No call is
//! ever retried automatically.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::{Envelope, ErrorBody};
use super::types::{
    AdminUsersData, CheckoutSession, Comment, LoginData, MeData, PageOf, Plan, Profile,
    ProfileCard, Reaction, ReactionCounts, SaveToggle, User,
};
use crate::config;

/// Page size used by the dashboard profile grid.
const DASHBOARD_PAGE_SIZE: u32 = 12;

/// Page size used by the admin user table.
const ADMIN_PAGE_SIZE: u32 = 10;

/// Absolute URL for an API path.
fn endpoint(path: &str) -> String {
    format!("{}{path}", config::api_base())
}

/// `Authorization` header value for a stored token.
#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Interpret a received response: unwrap the success envelope on 2xx,
/// otherwise surface the status with any server-provided message.
#[cfg(any(test, feature = "hydrate"))]
fn parse_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        match serde_json::from_str::<Envelope<T>>(body) {
            Ok(envelope) => Ok(envelope.data),
            Err(err) => Err(ApiError::Decode(err.to_string())),
        }
    } else {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message);
        Err(ApiError::Status { status, message })
    }
}

/// Query string for the admin users listing.
fn users_query(search: &str, plan: Option<Plan>, page: u32) -> String {
    let mut query = format!("?page={page}&limit={ADMIN_PAGE_SIZE}");
    if !search.is_empty() {
        query.push_str("&search=");
        query.push_str(&crate::util::query::encode_component(search));
    }
    if let Some(plan) = plan {
        query.push_str("&plan=");
        query.push_str(plan.as_str());
    }
    query
}

/// Response-side observation hook: log authorization failures, decide nothing.
#[cfg(feature = "hydrate")]
fn observe_status(method: &str, path: &str, status: u16) {
    match status {
        401 => log::warn!("{method} {path}: unauthorized"),
        403 => log::warn!("{method} {path}: forbidden"),
        _ => {}
    }
}

/// Send a request with the bearer token attached when one is stored, and
/// return the raw status + body for [`parse_body`].
#[cfg(feature = "hydrate")]
async fn send(
    method: &'static str,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<(u16, String), ApiError> {
    let url = endpoint(path);
    let mut builder = match method {
        "POST" => gloo_net::http::Request::post(&url),
        "PATCH" => gloo_net::http::Request::patch(&url),
        _ => gloo_net::http::Request::get(&url),
    }
    .credentials(web_sys::RequestCredentials::Include);

    if let Some(token) = crate::util::session::token() {
        builder = builder.header("Authorization", &bearer(&token));
    }

    let request = match body {
        Some(json) => builder
            .json(json)
            .map_err(|err| ApiError::Decode(err.to_string()))?,
        None => builder
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?,
    };

    let response = request.send().await.map_err(|err| {
        log::error!("{method} {path}: network error: {err}");
        ApiError::Network(err.to_string())
    })?;

    let status = response.status();
    observe_status(method, path, status);
    let text = response.text().await.unwrap_or_default();
    Ok((status, text))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = send("GET", path, None).await?;
        parse_body(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

async fn post_json<T: DeserializeOwned>(
    path: &str,
    body: &impl Serialize,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let value = serde_json::to_value(body).map_err(|err| ApiError::Decode(err.to_string()))?;
        let (status, text) = send("POST", path, Some(&value)).await?;
        parse_body(status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

async fn patch_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = send("PATCH", path, None).await?;
        parse_body(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the authenticated account from `GET /auth/me`.
///
/// # Errors
///
/// 401 means the session is stale or absent; callers decide what to clear.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    get_json::<MeData>("/auth/me").await.map(|data| data.user)
}

/// Authenticate with credentials via `POST /auth/login`.
///
/// # Errors
///
/// 401 = invalid credentials, 403 = email not verified; both carry any
/// server message for inline display.
pub async fn login(email: &str, password: &str) -> Result<LoginData, ApiError> {
    post_json(
        "/auth/login",
        &serde_json::json!({ "email": email, "password": password }),
    )
    .await
}

/// Register a new account via `POST /auth/signup`.
///
/// # Errors
///
/// Validation failures surface the backend message verbatim.
pub async fn signup(email: &str, password: &str) -> Result<(), ApiError> {
    post_json::<serde_json::Value>(
        "/auth/signup",
        &serde_json::json!({ "email": email, "password": password }),
    )
    .await
    .map(|_| ())
}

/// Invalidate the server-side session via `POST /auth/logout`.
///
/// # Errors
///
/// Callers treat failure as best-effort; local state is cleared regardless.
pub async fn logout() -> Result<(), ApiError> {
    post_json::<serde_json::Value>("/auth/logout", &serde_json::json!({}))
        .await
        .map(|_| ())
}

/// Probe for the current user's profile via `GET /profile/me`.
///
/// A 404 is the expected "no profile yet" state for fresh accounts and maps
/// to `Ok(None)` rather than an error.
///
/// # Errors
///
/// Any non-404 failure propagates; the guard degrades to a waiting state.
pub async fn fetch_my_profile() -> Result<Option<Profile>, ApiError> {
    match get_json::<Profile>("/profile/me").await {
        Ok(profile) => Ok(Some(profile)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

/// Create or update the current user's profile via `POST /profiles`.
///
/// # Errors
///
/// Validation failures carry the backend message.
pub async fn save_profile(profile: &Profile) -> Result<Profile, ApiError> {
    post_json("/profiles", profile).await
}

/// Fetch a page of other players' profiles for the dashboard grid.
///
/// # Errors
///
/// Propagates transport and status failures unchanged.
pub async fn fetch_profiles(page: u32) -> Result<PageOf<ProfileCard>, ApiError> {
    get_json(&format!(
        "/dashboard/profiles?page={page}&limit={DASHBOARD_PAGE_SIZE}"
    ))
    .await
}

/// Fetch the full saved set once per page load; membership drives the
/// Saved/Save state on cards.
///
/// # Errors
///
/// Propagates transport and status failures unchanged.
pub async fn fetch_saved_profiles() -> Result<Vec<ProfileCard>, ApiError> {
    get_json("/profiles/saved").await
}

/// Toggle the saved state of another player's profile.
///
/// # Errors
///
/// Propagates transport and status failures unchanged.
pub async fn toggle_saved(profile_id: &str) -> Result<SaveToggle, ApiError> {
    post_json(&format!("/profiles/{profile_id}/save"), &serde_json::json!({})).await
}

/// React to a profile; the response carries authoritative totals that
/// replace any optimistic local bump.
///
/// # Errors
///
/// Propagates transport and status failures unchanged.
pub async fn react(profile_id: &str, reaction: Reaction) -> Result<ReactionCounts, ApiError> {
    post_json(
        &format!("/profiles/{profile_id}/react"),
        &serde_json::json!({ "reaction": reaction }),
    )
    .await
}

/// Fetch the comment list for a profile.
///
/// # Errors
///
/// Propagates transport and status failures unchanged.
pub async fn fetch_comments(profile_id: &str) -> Result<Vec<Comment>, ApiError> {
    get_json(&format!("/profiles/{profile_id}/comments")).await
}

/// Append a comment; the server returns the refreshed list, which replaces
/// the local one wholesale.
///
/// # Errors
///
/// Propagates transport and status failures unchanged.
pub async fn post_comment(profile_id: &str, text: &str) -> Result<Vec<Comment>, ApiError> {
    post_json(
        &format!("/profiles/{profile_id}/comments"),
        &serde_json::json!({ "text": text }),
    )
    .await
}

/// Start a checkout for a paid tier via `POST /payment/create-session`.
///
/// # Errors
///
/// Failures carry the backend message for inline display.
pub async fn create_checkout(plan: Plan) -> Result<CheckoutSession, ApiError> {
    post_json("/payment/create-session", &serde_json::json!({ "planId": plan })).await
}

/// Confirm a completed checkout via `POST /payment/verify`.
///
/// # Errors
///
/// Propagates transport and status failures unchanged.
pub async fn verify_payment(session_id: &str) -> Result<(), ApiError> {
    post_json::<serde_json::Value>(
        "/payment/verify",
        &serde_json::json!({ "session_id": session_id }),
    )
    .await
    .map(|_| ())
}

/// Fetch a filtered, paginated user listing for the admin screen.
///
/// # Errors
///
/// Propagates transport and status failures unchanged.
pub async fn fetch_admin_users(
    search: &str,
    plan: Option<Plan>,
    page: u32,
) -> Result<AdminUsersData, ApiError> {
    get_json(&format!("/admin/users{}", users_query(search, plan, page))).await
}

/// Block or unblock an account via `PATCH /admin/users/{id}/status`.
///
/// # Errors
///
/// Propagates transport and status failures unchanged.
pub async fn toggle_user_status(user_id: &str) -> Result<(), ApiError> {
    patch_json::<serde_json::Value>(&format!("/admin/users/{user_id}/status"))
        .await
        .map(|_| ())
}

/// Backend URL that starts an external OAuth login; the whole page navigates
/// there and returns with a one-time `?token=` on the landing URL.
pub fn oauth_url(provider: &str) -> String {
    endpoint(&format!("/auth/{provider}"))
}
