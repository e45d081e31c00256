use super::*;

#[test]
fn build_profile_trims_and_keeps_filled_rows() {
    let games = vec![
        FavoriteGame {
            name: "Hollow Knight".to_owned(),
            ..FavoriteGame::default()
        },
        FavoriteGame::default(),
    ];
    let characters = vec![FavoriteCharacter {
        name: "Hornet".to_owned(),
        ..FavoriteCharacter::default()
    }];
    let profile = build_profile("  GamerTag ", "", " Lisbon ", &games, &characters)
        .expect("valid profile");
    assert_eq!(profile.username, "GamerTag");
    assert_eq!(profile.avatar, None);
    assert_eq!(profile.address.as_deref(), Some("Lisbon"));
    assert_eq!(profile.games.len(), 1);
    assert_eq!(profile.characters.len(), 1);
}

#[test]
fn build_profile_requires_username() {
    assert_eq!(
        build_profile("   ", "", "", &[], &[]),
        Err("Pick a username first.")
    );
}

#[test]
fn build_profile_drops_blank_name_rows() {
    let games = vec![FavoriteGame {
        name: "   ".to_owned(),
        cover_url: Some("https://img.example/x.png".to_owned()),
        ..FavoriteGame::default()
    }];
    let profile = build_profile("Rex", "", "", &games, &[]).expect("valid profile");
    assert!(profile.games.is_empty());
}
