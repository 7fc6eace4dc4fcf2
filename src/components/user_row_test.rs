use super::*;

#[test]
fn user_line_joins_name_and_email_with_dash() {
    let user = UserRecord {
        id: 1,
        name: "Ana".to_owned(),
        email: "ana@x.com".to_owned(),
    };
    assert_eq!(user_line(&user), "Ana - ana@x.com");
}

#[test]
fn user_line_passes_text_through_unmodified() {
    let user = UserRecord {
        id: 2,
        name: "José María".to_owned(),
        email: "jose.maria@x.com".to_owned(),
    };
    assert_eq!(user_line(&user), "José María - jose.maria@x.com");
}
