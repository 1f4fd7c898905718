use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single user record, both the stored shape and the API response shape.
///
/// `created_at` is stamped once when the record is created and survives
/// updates; `email` is set at creation and never changed by the update
/// endpoint. Only `display_name` is mutable over the API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub created_at: DateTime<Utc>,
    pub display_name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_created_at_as_rfc3339() {
        let user = User {
            created_at: Utc::now(),
            display_name: "Ada".into(),
            email: "ada@x.io".into(),
        };
        let json = serde_json::to_value(&user).expect("serialize user");
        let ts = json["created_at"].as_str().expect("created_at is a string");
        assert!(DateTime::parse_from_rfc3339(ts).is_ok(), "not RFC3339: {ts}");
        assert_eq!(json["display_name"], "Ada");
        assert_eq!(json["email"], "ada@x.io");
    }

    #[test]
    fn round_trips_through_json() {
        let user = User {
            created_at: Utc::now(),
            display_name: "Grace".into(),
            email: "grace@x.io".into(),
        };
        let bytes = serde_json::to_vec(&user).expect("serialize");
        let back: User = serde_json::from_slice(&bytes).expect("deserialize");
        assert_eq!(back, user);
    }
}
