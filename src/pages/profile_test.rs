use super::*;

#[test]
fn avatar_source_prefers_uploaded_image() {
    let profile = Profile {
        username: "Rex".to_owned(),
        avatar: Some("https://img.example/rex.png".to_owned()),
        ..Profile::default()
    };
    assert_eq!(avatar_source(&profile), "https://img.example/rex.png");
}

#[test]
fn avatar_source_generates_initials_fallback() {
    let profile = Profile {
        username: "Rex The Red".to_owned(),
        ..Profile::default()
    };
    assert_eq!(
        avatar_source(&profile),
        "https://ui-avatars.com/api/?name=Rex%20The%20Red&background=random"
    );
}

#[test]
fn location_line_hides_missing_addresses() {
    let hidden = Profile {
        username: "Rex".to_owned(),
        ..Profile::default()
    };
    let empty = Profile {
        username: "Rex".to_owned(),
        address: Some(String::new()),
        ..Profile::default()
    };
    let shown = Profile {
        username: "Rex".to_owned(),
        address: Some("Lisbon".to_owned()),
        ..Profile::default()
    };
    assert_eq!(location_line(&hidden), "Location Hidden");
    assert_eq!(location_line(&empty), "Location Hidden");
    assert_eq!(location_line(&shown), "Lisbon");
}

#[test]
fn games_heading_shows_count_against_limit() {
    assert_eq!(
        games_heading(2, PlanLimits { games: 3, saved_profiles: 3 }),
        "Top Games (2 / 3)"
    );
}
