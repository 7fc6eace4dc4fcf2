use super::*;

// =============================================================
// HelloResponse
// =============================================================

#[test]
fn hello_response_deserializes_message_field() {
    let body: HelloResponse = serde_json::from_value(serde_json::json!({
        "message": "hi"
    }))
    .unwrap();
    assert_eq!(body.message, "hi");
}

#[test]
fn hello_response_rejects_missing_message() {
    let result = serde_json::from_value::<HelloResponse>(serde_json::json!({}));
    assert!(result.is_err());
}

// =============================================================
// UserRecord
// =============================================================

#[test]
fn user_record_deserializes_spanish_wire_names() {
    let user: UserRecord = serde_json::from_value(serde_json::json!({
        "id": 1,
        "nombre": "Ana",
        "email": "ana@x.com"
    }))
    .unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana@x.com");
}

#[test]
fn user_record_serializes_back_to_wire_names() {
    let user = UserRecord {
        id: 7,
        name: "Luis".to_owned(),
        email: "luis@x.com".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&user).unwrap(),
        serde_json::json!({ "id": 7, "nombre": "Luis", "email": "luis@x.com" })
    );
}

#[test]
fn user_record_array_keeps_server_order() {
    let users: Vec<UserRecord> = serde_json::from_value(serde_json::json!([
        { "id": 3, "nombre": "Carla", "email": "carla@x.com" },
        { "id": 1, "nombre": "Ana", "email": "ana@x.com" }
    ]))
    .unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, 3);
    assert_eq!(users[1].id, 1);
}
