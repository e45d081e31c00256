//! Client-side mirror of the backend plan catalog.
//!
//! Quota limits and tier descriptions shown on the plans and profile pages.
//! Authoritative enforcement lives server-side; these values only drive UI
//! affordances (locked slots, upgrade buttons).

#[cfg(test)]
#[path = "plan_catalog_test.rs"]
mod plan_catalog_test;

use crate::net::types::Plan;

/// Quota limits attached to a tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanLimits {
    pub games: usize,
    pub saved_profiles: usize,
}

/// One sellable tier as shown on the plans page.
#[derive(Clone, Copy, Debug)]
pub struct PlanTier {
    pub plan: Plan,
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

/// Badge shown next to a member's identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanBadge {
    pub emoji: &'static str,
    pub label: &'static str,
}

/// Quota limits for a tier.
pub fn limits(plan: Plan) -> PlanLimits {
    match plan {
        Plan::Free => PlanLimits {
            games: 3,
            saved_profiles: 3,
        },
        Plan::Silver => PlanLimits {
            games: 5,
            saved_profiles: 5,
        },
        Plan::Gold => PlanLimits {
            games: 10,
            saved_profiles: 10,
        },
    }
}

/// Identity badge for a tier.
pub fn badge(plan: Plan) -> PlanBadge {
    match plan {
        Plan::Free => PlanBadge {
            emoji: "💪",
            label: "Free Member",
        },
        Plan::Silver => PlanBadge {
            emoji: "⚔️",
            label: "Silver Member",
        },
        Plan::Gold => PlanBadge {
            emoji: "👑",
            label: "Gold Member",
        },
    }
}

/// The full catalog in display order.
pub fn catalog() -> [PlanTier; 3] {
    [
        PlanTier {
            plan: Plan::Free,
            name: "Free Agent",
            price: "$0",
            description: "Basic access to the command center.",
            features: &[
                "3 Games in Library",
                "3 Saved Profiles",
                "Standard Support",
                "Community Access",
            ],
            popular: false,
        },
        PlanTier {
            plan: Plan::Silver,
            name: "Silver Operative",
            price: "$9.99",
            description: "Enhanced clearance for serious players.",
            features: &[
                "5 Games in Library",
                "5 Saved Profiles",
                "Priority Support",
                "30-Minute Sessions",
                "Profile Badge ⚔️",
            ],
            popular: false,
        },
        PlanTier {
            plan: Plan::Gold,
            name: "Gold Commander",
            price: "$19.99",
            description: "Top-tier access with maximum limits.",
            features: &[
                "10 Games in Library",
                "10 Saved Profiles",
                "VIP 24/7 Support",
                "1-Hour Sessions",
                "Profile Badge 👑",
                "Early Access Features",
            ],
            popular: true,
        },
    ]
}

/// Whether the upgrade button for `target` is actionable for a member
/// currently on `current`. The free tier is never purchasable and the
/// current tier is a no-op.
pub fn can_upgrade(current: Plan, target: Plan) -> bool {
    target != Plan::Free && target != current
}

/// Entries at or past the limit render locked.
pub fn is_locked(index: usize, limit: usize) -> bool {
    index >= limit
}
