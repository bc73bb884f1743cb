use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::domain::cart::model::UserSnapshot;
use crate::domain::shared::validation::{FieldViolation, ViolationList};
use crate::domain::shared::value_objects::UserId;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 6;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Customer,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Customer => write!(f, "customer"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(UserRole::Customer),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewUserProps {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

impl User {
    /// Registration inputs are validated separately (the raw password never
    /// reaches this constructor), so this only assembles the record.
    pub fn new(props: NewUserProps) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::generate(),
            first_name: props.first_name,
            last_name: props.last_name,
            email: props.email,
            password_hash: props.password_hash,
            role: props.role,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: UserId,
        first_name: String,
        last_name: String,
        email: String,
        password_hash: String,
        role: UserRole,
        last_login: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            password_hash,
            role,
            last_login,
            created_at,
            updated_at,
        }
    }

    /// Identity fields as denormalized into a cart.
    pub fn snapshot(&self) -> UserSnapshot {
        UserSnapshot::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
        )
    }
}

/// Validates registration input, reporting every failing field at once.
pub fn validate_registration(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> Result<(), Vec<FieldViolation>> {
    let mut violations = ViolationList::new();
    let first = first_name.trim();
    let last = last_name.trim();

    if first.len() < NAME_MIN || first.len() > NAME_MAX {
        violations.add("first_name", "user.first_name_length");
    }
    if last.len() < NAME_MIN || last.len() > NAME_MAX {
        violations.add("last_name", "user.last_name_length");
    }
    if !email_regex().is_match(email.trim()) {
        violations.add("email", "user.email_invalid");
    }
    if password.len() < PASSWORD_MIN {
        violations.add("password", "user.password_min_length");
    }
    violations.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_customer_with_generated_id() {
        let user = User::new(NewUserProps {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Customer,
        });

        assert!(!user.id.as_str().is_empty());
        assert_eq!(user.role, UserRole::Customer);
        assert!(user.last_login.is_none());
    }

    #[test]
    fn should_expose_snapshot_fields() {
        let user = User::new(NewUserProps {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Customer,
        });

        let snapshot = user.snapshot();
        assert_eq!(snapshot.first_name, "Ann");
        assert_eq!(snapshot.last_name, "Lee");
        assert_eq!(snapshot.email, "a@x.com");
    }

    #[test]
    fn should_accept_valid_registration() {
        assert!(validate_registration("Ann", "Lee", "a@x.com", "secret1").is_ok());
    }

    #[test]
    fn should_collect_all_registration_violations() {
        let violations =
            validate_registration("A", "", "not-an-email", "123").unwrap_err();

        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["first_name", "last_name", "email", "password"]);
    }

    #[test]
    fn should_reject_overlong_name() {
        let long = "x".repeat(51);
        let violations = validate_registration(&long, "Lee", "a@x.com", "secret1").unwrap_err();
        assert_eq!(violations[0].field, "first_name");
    }

    #[test]
    fn should_round_trip_role_strings() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(UserRole::Customer.to_string(), "customer");
        assert!("root".parse::<UserRole>().is_err());
    }
}
