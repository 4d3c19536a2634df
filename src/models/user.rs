use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Portal role. Fixed at creation: registration always produces a student,
/// admins come from provisioning (here, the seed dataset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

/// Account state. Suspended accounts keep read access but cannot mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Suspended,
}

/// A registered portal account. Email is unique across the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub student_id: String,
    pub phone: String,
    pub joined_date: DateTime<Utc>,
    pub status: UserStatus,
}

/// Registration input. Role, status, id and join date are assigned by the
/// service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub student_id: String,
    pub phone: String,
}

/// Shallow partial update for an account. Email and role are not editable;
/// status changes are an admin action (suspend / reinstate).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub status: Option<UserStatus>,
}
