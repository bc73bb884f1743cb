use serde::{Deserialize, Serialize};

/// Opaque identifier of the account that owns a resource.
/// Every cart and session is keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identifier for a newly registered user.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_inner_value() {
        let user_id = UserId::new("user-123");
        assert_eq!(user_id.as_str(), "user-123");
        assert_eq!(format!("{}", user_id), "user-123");
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        assert_eq!(UserId::new("same-user"), UserId::new("same-user"));
        assert_ne!(UserId::new("same-user"), UserId::new("different-user"));
    }

    #[test]
    fn should_generate_distinct_ids() {
        assert_ne!(UserId::generate(), UserId::generate());
    }

    #[test]
    fn should_convert_from_string_and_str() {
        let from_string: UserId = "from-string".to_string().into();
        let from_str: UserId = "from-str".into();
        assert_eq!(from_string.as_str(), "from-string");
        assert_eq!(from_str.as_str(), "from-str");
    }
}
