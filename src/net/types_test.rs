use super::*;

#[test]
fn user_deserializes_backend_json() {
    let raw = r#"{
        "_id": "66f1a2",
        "email": "ana@example.com",
        "role": "admin",
        "isEmailVerified": true,
        "plan": "gold",
        "planExpiresAt": "2026-09-01T00:00:00Z"
    }"#;
    let user: User = serde_json::from_str(raw).expect("user json");
    assert_eq!(user.id, "66f1a2");
    assert_eq!(user.role, Role::Admin);
    assert!(user.is_email_verified);
    assert_eq!(user.plan, Plan::Gold);
    assert_eq!(user.plan_expires_at.as_deref(), Some("2026-09-01T00:00:00Z"));
}

#[test]
fn user_defaults_role_plan_and_verification() {
    let raw = r#"{ "_id": "66f1a2", "email": "ana@example.com" }"#;
    let user: User = serde_json::from_str(raw).expect("user json");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.plan, Plan::Free);
    assert!(!user.is_email_verified);
    assert_eq!(user.plan_expires_at, None);
}

#[test]
fn plan_wire_names_round_trip() {
    for plan in [Plan::Free, Plan::Silver, Plan::Gold] {
        assert_eq!(Plan::parse(plan.as_str()), Some(plan));
        let json = serde_json::to_string(&plan).expect("plan json");
        assert_eq!(json, format!("\"{}\"", plan.as_str()));
    }
    assert_eq!(Plan::parse("platinum"), None);
}

#[test]
fn plans_order_by_tier() {
    assert!(Plan::Free < Plan::Silver);
    assert!(Plan::Silver < Plan::Gold);
}

#[test]
fn profile_defaults_optional_collections() {
    let raw = r#"{ "username": "GamerTag" }"#;
    let profile: Profile = serde_json::from_str(raw).expect("profile json");
    assert!(profile.games.is_empty());
    assert!(profile.characters.is_empty());
    assert_eq!(profile.avatar, None);
}

#[test]
fn profile_serializes_camel_case_game_fields() {
    let profile = Profile {
        username: "GamerTag".to_owned(),
        games: vec![FavoriteGame {
            name: "Hollow Knight".to_owned(),
            cover_url: Some("https://img.example/hk.png".to_owned()),
            platform: Some("pc".to_owned()),
            skill: Some("expert".to_owned()),
        }],
        ..Profile::default()
    };
    let value = serde_json::to_value(&profile).expect("profile value");
    assert_eq!(
        value["games"][0]["coverUrl"],
        serde_json::json!("https://img.example/hk.png")
    );
}

#[test]
fn profile_card_reads_mongo_id_and_counts() {
    let raw = r#"{ "_id": "p1", "username": "Rex", "likes": 4, "dislikes": 1 }"#;
    let card: ProfileCard = serde_json::from_str(raw).expect("card json");
    assert_eq!(card.id, "p1");
    assert_eq!(card.likes, 4);
    assert_eq!(card.dislikes, 1);
    assert!(card.games.is_empty());
}

#[test]
fn page_of_defaults_pagination() {
    let raw = r#"{ "data": [] }"#;
    let page: PageOf<ProfileCard> = serde_json::from_str(raw).expect("page json");
    assert_eq!(page.pagination, Pagination::default());
    assert_eq!(page.pagination.page, 1);
}

#[test]
fn reaction_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&Reaction::Like).expect("reaction json"),
        "\"like\""
    );
    assert_eq!(
        serde_json::to_string(&Reaction::Dislike).expect("reaction json"),
        "\"dislike\""
    );
}

#[test]
fn envelope_unwraps_data() {
    let raw = r#"{ "success": true, "data": { "user": { "_id": "u1", "email": "a@b.c" } } }"#;
    let envelope: Envelope<MeData> = serde_json::from_str(raw).expect("envelope json");
    assert!(envelope.success);
    assert_eq!(envelope.data.user.id, "u1");
}
