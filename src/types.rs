//! Core types for the user directory
//!
//! This module defines the fundamental types used throughout the crate:
//! - [`UserId`]: Unique identifier for user records
//! - [`UserStatus`]: Lifecycle status of a record
//! - [`User`]: The stored record itself

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user record
///
/// Assigned by the directory at creation time. Ids are never reassigned and
/// never reused, not even after [`clear`](crate::UserDirectory::clear):
/// fresh ids are random UUID v4 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Create a new random UserId using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use userdir::UserId;
    ///
    /// let id1 = UserId::new();
    /// let id2 = UserId::new();
    /// assert_ne!(id1, id2); // Each UserId is unique
    /// ```
    pub fn new() -> Self {
        UserId(Uuid::new_v4())
    }

    /// Access the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserId(Uuid::parse_str(s)?))
    }
}

/// Lifecycle status of a user record
///
/// A record starts out `Active`. The only allowed transition is
/// Active → Inactive, performed through
/// [`deactivate_user`](crate::UserDirectory::deactivate_user), and only for
/// non-administrators. There is no reactivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    /// Record is active (default at creation)
    #[serde(rename = "ativo")]
    Active,
    /// Record was deactivated
    #[serde(rename = "inativo")]
    Inactive,
}

impl UserStatus {
    /// Check if the status is active
    pub fn is_active(&self) -> bool {
        matches!(self, UserStatus::Active)
    }

    /// Get the report-facing string representation
    ///
    /// These are the literal words consumers of the report match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ativo",
            UserStatus::Inactive => "inativo",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user record stored in the directory
///
/// `status` is the only field that changes after creation, and only through
/// deactivation. Everything else is fixed for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique record id, assigned at creation
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Contact email (no uniqueness constraint)
    pub email: String,
    /// Age in years, at least the legal minimum
    pub age: u32,
    /// Administrator flag; administrators cannot be deactivated
    pub admin: bool,
    /// Current lifecycle status
    pub status: UserStatus,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new active record with a fresh id
    ///
    /// Age validation happens in the directory, before this runs.
    pub(crate) fn new(name: String, email: String, age: u32, admin: bool) -> Self {
        User {
            id: UserId::new(),
            name,
            email,
            age,
            admin,
            status: UserStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Check if the record is currently active
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
