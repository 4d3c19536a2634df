//! Caller identity handed in by the embedding application.
//!
//! The embedding application decides WHO is calling (sessions, tokens and
//! passwords live out there); this crate only decides WHAT the caller may
//! do. `Caller` therefore carries nothing but the user id. Role and account
//! status are always resolved against the user store at the operation
//! boundary, never trusted from the caller's side.

/// Identity of the user invoking an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Caller {
    pub user_id: String,
}

impl Caller {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl From<&crate::models::User> for Caller {
    fn from(user: &crate::models::User) -> Self {
        Self::new(user.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User, UserStatus};

    #[test]
    fn test_caller_from_user_carries_only_the_id() {
        let user = User {
            id: "2".to_string(),
            email: "student@kiit.ac.in".to_string(),
            name: "John Doe".to_string(),
            role: Role::Student,
            student_id: "KIIT2024001".to_string(),
            phone: "+91 9876543211".to_string(),
            joined_date: "2024-01-10T00:00:00Z".parse().unwrap(),
            status: UserStatus::Active,
        };
        assert_eq!(Caller::from(&user), Caller::new("2"));
    }
}
