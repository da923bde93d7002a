use pgr_core::model::{Credentials, DEMO_PASSWORD, DEMO_USERNAME};
use services::SessionStore;

#[test]
fn wrong_pairs_never_sign_in() {
    let store = SessionStore::demo();
    let attempts = [
        ("admin", "admin"),
        ("ADMIN", "admin123"),
        ("admin", "Admin123"),
        ("admin ", "admin123"),
        ("user", "admin123"),
        ("", "admin123"),
        ("admin", ""),
        ("", ""),
    ];

    for (username, password) in attempts {
        assert!(
            !store.sign_in(&Credentials::new(username, password)),
            "{username:?}/{password:?} should be rejected"
        );
        assert!(!store.is_signed_in());
        assert_eq!(store.current_user(), None);
    }
}

#[test]
fn demo_pair_signs_in_as_admin() {
    let store = SessionStore::demo();
    assert!(store.sign_in(&Credentials::new(DEMO_USERNAME, DEMO_PASSWORD)));
    assert_eq!(
        store.current_user().map(|identity| identity.to_string()),
        Some(DEMO_USERNAME.to_string())
    );
}

#[test]
fn sign_out_then_sign_in_is_evaluated_fresh() {
    let store = SessionStore::demo();
    assert!(store.sign_in(&Credentials::demo()));
    store.sign_out();
    assert_eq!(store.current_user(), None);

    assert!(!store.sign_in(&Credentials::new("admin", "nope")));
    assert_eq!(store.current_user(), None);

    assert!(store.sign_in(&Credentials::demo()));
    assert!(store.is_signed_in());
}
