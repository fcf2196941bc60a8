use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::UserId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {raw} (expected student, teacher or admin)")]
pub struct ParseRoleError {
    raw: String,
}

/// The closed set of roles a signed-in user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Student, UserRole::Teacher, UserRole::Admin];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Admin => "admin",
        }
    }

    /// Human-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Teacher => "Teacher",
            UserRole::Admin => "Admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(UserRole::Student),
            "teacher" => Ok(UserRole::Teacher),
            "admin" => Ok(UserRole::Admin),
            _ => Err(ParseRoleError { raw: s.to_owned() }),
        }
    }
}

/// A signed-in user as issued by a `UserDirectory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    role: UserRole,
}

impl User {
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            name: name.into(),
            role,
        }
    }

    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> UserRole {
        self.role
    }
}

/// Identity provider consulted on login.
///
/// Every role maps to exactly one user record, so lookups cannot fail.
pub trait UserDirectory: Send + Sync {
    fn user_for_role(&self, role: UserRole) -> User;

    /// All known users, in role order.
    fn users(&self) -> Vec<User> {
        UserRole::ALL
            .iter()
            .map(|role| self.user_for_role(*role))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_its_name() {
        for role in UserRole::ALL {
            assert_eq!(role.to_string().parse::<UserRole>().unwrap(), role);
        }
    }

    #[test]
    fn role_parse_ignores_case_and_padding() {
        assert_eq!(" Teacher ".parse::<UserRole>().unwrap(), UserRole::Teacher);
    }

    #[test]
    fn role_parse_rejects_unknown_names() {
        let err = "principal".parse::<UserRole>().unwrap_err();
        assert!(err.to_string().contains("principal"));
    }

    struct Fixed;

    impl UserDirectory for Fixed {
        fn user_for_role(&self, role: UserRole) -> User {
            User::new(UserId::new(role.as_str()), role.label(), role)
        }
    }

    #[test]
    fn default_users_lists_every_role() {
        let users = Fixed.users();
        let roles: Vec<_> = users.iter().map(User::role).collect();
        assert_eq!(roles, UserRole::ALL.to_vec());
    }
}
