//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON (with Mongo-style `_id`
//! identifiers) so serde handles the boundary without hand-written mapping.
//! Unknown or missing optional fields default rather than fail — the client
//! must tolerate older/newer server payloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Success envelope: every 2xx body is `{ "success": true, "data": ... }`.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: T,
}

/// Error body shape for non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Account role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Subscription tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Silver,
    Gold,
}

impl Plan {
    /// Wire/display name of the tier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Silver => "silver",
            Self::Gold => "gold",
        }
    }

    /// Parse a wire name; unknown values map to `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "free" => Some(Self::Free),
            "silver" => Some(Self::Silver),
            "gold" => Some(Self::Gold),
            _ => None,
        }
    }
}

/// The authenticated account as returned by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_email_verified: bool,
    #[serde(default)]
    pub plan: Plan,
    #[serde(default)]
    pub plan_expires_at: Option<String>,
}

/// Payload of `GET /auth/me`.
#[derive(Clone, Debug, Deserialize)]
pub struct MeData {
    pub user: User,
}

/// Payload of a successful `POST /auth/login`. The token is optional because
/// cookie-based sessions may not return one.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginData {
    pub user: User,
    #[serde(default)]
    pub token: Option<String>,
}

/// A favorite game entry on a profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteGame {
    pub name: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub skill: Option<String>,
}

/// A favorite character entry on a profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteCharacter {
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// The gaming identity attached to an account, created lazily after signup.
/// Distinct from [`User`]; its absence drives the create-profile redirect.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub games: Vec<FavoriteGame>,
    #[serde(default)]
    pub characters: Vec<FavoriteCharacter>,
}

/// Another player's profile as listed on the dashboard grid.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCard {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub games: Vec<FavoriteGame>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
}

/// Pagination metadata returned by list endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page")]
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
        }
    }
}

fn default_page() -> u32 {
    1
}

/// Paginated list payload: `{ data: [...], pagination: {...} }` inside the
/// envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct PageOf<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Like/dislike reaction on another player's profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Dislike,
}

/// Authoritative reaction totals returned after a reaction mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ReactionCounts {
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
}

/// Result of toggling the saved state of a profile.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct SaveToggle {
    pub saved: bool,
}

/// A comment left on a profile.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub author: Option<String>,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A managed account row on the admin users screen.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_email_verified: bool,
    #[serde(default)]
    pub plan: Plan,
    #[serde(default)]
    pub plan_expires_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_blocked: bool,
}

/// Payload of `GET /admin/users`.
#[derive(Clone, Debug, Deserialize)]
pub struct AdminUsersData {
    #[serde(default)]
    pub users: Vec<AdminUser>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Payload of `POST /payment/create-session`: the hosted checkout URL the
/// browser is redirected to.
#[derive(Clone, Debug, Deserialize)]
pub struct CheckoutSession {
    pub url: String,
}
