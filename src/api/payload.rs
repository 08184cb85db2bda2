// Request payload handling
// Create-field presence checks and the shallow update merge

use serde_json::{Number, Value};
use uuid::Uuid;

use crate::model::User;

/// Fields accepted at creation time, extracted from an arbitrary JSON body.
pub struct NewUser {
    pub username: String,
    pub age: Number,
    pub hobbies: Vec<String>,
}

/// Validate a create payload.
///
/// `username` must be a non-empty string, `age` a number, `hobbies` an array
/// of strings. Any supplied `id` is ignored; the caller assigns a fresh one.
pub fn parse_new_user(body: &Value) -> Option<NewUser> {
    let username = match body.get("username") {
        Some(Value::String(username)) if !username.is_empty() => username.clone(),
        _ => return None,
    };

    let age = match body.get("age") {
        Some(Value::Number(age)) => age.clone(),
        _ => return None,
    };

    let hobbies = string_array(body.get("hobbies")?)?;

    Some(NewUser {
        username,
        age,
        hobbies,
    })
}

/// Shallow-merge a JSON body into an existing record.
///
/// A field present in the body overwrites the stored field when it carries a
/// value of the field's type; everything else is ignored. `id` is overwritten
/// too when the body supplies a parseable UUID.
pub fn merge_user(user: &mut User, body: &Value) {
    if let Some(Value::String(id)) = body.get("id") {
        if let Ok(id) = Uuid::parse_str(id) {
            user.id = id;
        }
    }

    if let Some(Value::String(username)) = body.get("username") {
        user.username = username.clone();
    }

    if let Some(Value::Number(age)) = body.get("age") {
        user.age = age.clone();
    }

    if let Some(hobbies) = body.get("hobbies").and_then(string_array) {
        user.hobbies = hobbies;
    }
}

fn string_array(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(ToString::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            age: Number::from(25),
            hobbies: vec!["chess".to_string()],
        }
    }

    #[test]
    fn valid_payload_is_accepted() {
        let body = json!({"username": "alice", "age": 25, "hobbies": ["chess"]});
        let new_user = parse_new_user(&body).unwrap();
        assert_eq!(new_user.username, "alice");
        assert_eq!(new_user.age, Number::from(25));
        assert_eq!(new_user.hobbies, vec!["chess".to_string()]);
    }

    #[test]
    fn empty_hobbies_are_allowed() {
        let body = json!({"username": "alice", "age": 25, "hobbies": []});
        assert!(parse_new_user(&body).unwrap().hobbies.is_empty());
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert!(parse_new_user(&json!({"username": "bob"})).is_none());
        assert!(parse_new_user(&json!({"age": 25, "hobbies": []})).is_none());
        assert!(parse_new_user(&json!({})).is_none());
    }

    #[test]
    fn empty_username_is_rejected() {
        let body = json!({"username": "", "age": 25, "hobbies": []});
        assert!(parse_new_user(&body).is_none());
    }

    #[test]
    fn wrong_field_types_are_rejected() {
        assert!(parse_new_user(&json!({"username": "a", "age": "25", "hobbies": []})).is_none());
        assert!(parse_new_user(&json!({"username": "a", "age": 25, "hobbies": "chess"})).is_none());
        assert!(parse_new_user(&json!({"username": "a", "age": 25, "hobbies": [1, 2]})).is_none());
    }

    #[test]
    fn merge_overwrites_only_supplied_fields() {
        let mut user = sample_user();
        merge_user(&mut user, &json!({"age": 30}));
        assert_eq!(user.age, Number::from(30));
        assert_eq!(user.username, "alice");
        assert_eq!(user.hobbies, vec!["chess".to_string()]);
    }

    #[test]
    fn merge_accepts_a_supplied_id() {
        let mut user = sample_user();
        let other = Uuid::new_v4();
        merge_user(&mut user, &json!({"id": other.to_string()}));
        assert_eq!(user.id, other);
    }

    #[test]
    fn merge_ignores_unusable_values() {
        let mut user = sample_user();
        let before = user.clone();
        merge_user(
            &mut user,
            &json!({"id": "not-a-uuid", "age": "thirty", "hobbies": [1], "color": "red"}),
        );
        assert_eq!(user, before);
    }

    #[test]
    fn merge_ignores_non_object_bodies() {
        let mut user = sample_user();
        let before = user.clone();
        merge_user(&mut user, &json!("hello"));
        assert_eq!(user, before);
    }
}
