use shoebox_core::{Entity, User};

#[test]
fn user_new_sets_fields() {
    let user = User::new(1, "Alice", 22);

    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.age, 22);
}

#[test]
fn user_key_is_the_id_field() {
    let user = User::new(7, "Grace", 31);

    assert_eq!(*user.key(), 7);
}

#[test]
fn user_serialization_uses_expected_wire_fields() {
    let user = User::new(1, "Alice", 22);

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["age"], 22);

    let decoded: User = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, user);
}

#[test]
fn user_display_is_single_line_key_value() {
    let user = User::new(2, "Bob", 25);

    assert_eq!(user.to_string(), "user id=2 name=Bob age=25");
}
