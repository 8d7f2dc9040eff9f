//! User directory: the in-memory record collection
//!
//! This module provides [`UserDirectory`], the entry point for all
//! operations: creation with validation, lookup, deactivation, and report
//! generation.
//!
//! ## Design
//!
//! - Records live in a plain `Vec` in insertion order. Creation is an
//!   append; lookup, deactivation, and the report are linear in record
//!   count. None of these are hot paths.
//! - The directory defines no locking. A host that shares one instance
//!   across threads serializes access itself; the `&mut self` receivers
//!   make that requirement explicit.

use crate::error::{Error, Result};
use crate::report;
use crate::types::{User, UserId, UserStatus};
use tracing::debug;

/// Minimum age accepted at creation time.
pub const LEGAL_AGE: u32 = 18;

/// The in-memory user directory.
///
/// This is the main entry point. Create one with [`UserDirectory::new`] and
/// call operations on it directly.
///
/// # Example
///
/// ```
/// use userdir::UserDirectory;
///
/// let mut dir = UserDirectory::new();
/// let user = dir.create_user("Alice", "alice@email.com", 28)?;
///
/// assert!(dir.get_user(&user.id).is_some());
/// assert!(dir.deactivate_user(&user.id));
/// # Ok::<(), userdir::Error>(())
/// ```
pub struct UserDirectory {
    /// Records in insertion order
    users: Vec<User>,
}

impl UserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        UserDirectory { users: Vec::new() }
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Create an ordinary (non-administrator) user.
    ///
    /// Fails with [`Error::UnderLegalAge`] when `age` is below
    /// [`LEGAL_AGE`]; validation runs before insertion, so a failed create
    /// leaves the directory unchanged. Name and email are stored as given.
    ///
    /// Returns a clone of the stored record, with its freshly assigned id
    /// and `ativo` status.
    ///
    /// # Example
    ///
    /// ```
    /// use userdir::UserDirectory;
    ///
    /// let mut dir = UserDirectory::new();
    /// let user = dir.create_user("Fulano de Tal", "fulano@teste.com", 25)?;
    /// assert_eq!(user.status.as_str(), "ativo");
    /// # Ok::<(), userdir::Error>(())
    /// ```
    pub fn create_user(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
    ) -> Result<User> {
        self.insert(name.into(), email.into(), age, false)
    }

    /// Create an administrator.
    ///
    /// Administrators pass the same age validation as ordinary users but
    /// are protected from deactivation for the lifetime of the record.
    pub fn create_administrator(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
    ) -> Result<User> {
        self.insert(name.into(), email.into(), age, true)
    }

    fn insert(&mut self, name: String, email: String, age: u32, admin: bool) -> Result<User> {
        if age < LEGAL_AGE {
            return Err(Error::UnderLegalAge { age });
        }

        let user = User::new(name, email, age, admin);
        debug!("user {} created (admin: {})", user.id, admin);
        self.users.push(user.clone());
        Ok(user)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Get a user by id.
    ///
    /// Returns `None` when no record with that id exists. Absence is a
    /// normal outcome, not an error.
    pub fn get_user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == *id)
    }

    // =========================================================================
    // Deactivation
    // =========================================================================

    /// Deactivate a user.
    ///
    /// Returns `true` when the record's status was set to
    /// [`UserStatus::Inactive`]. Returns `false`, touching nothing, when
    /// the id is unknown or the target is an administrator. Both negative
    /// outcomes are policy results, not errors.
    pub fn deactivate_user(&mut self, id: &UserId) -> bool {
        let user = match self.users.iter_mut().find(|user| user.id == *id) {
            Some(user) => user,
            None => return false,
        };

        if user.admin {
            debug!("deactivation of administrator {} refused", user.id);
            return false;
        }

        user.status = UserStatus::Inactive;
        debug!("user {} deactivated", user.id);
        true
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    /// Render the plain-text report of all users.
    ///
    /// Pure function of current state. The report always carries the
    /// "Relatório de Usuários" title; users appear in insertion order with
    /// their name, email, and status word.
    pub fn generate_report(&self) -> String {
        report::render(&self.users)
    }

    // =========================================================================
    // Utility
    // =========================================================================

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All records, in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Remove every record.
    ///
    /// Idempotent. Test setups call this to get a pristine directory
    /// between cases; ids handed out before the clear are never reused.
    pub fn clear(&mut self) {
        self.users.clear();
        debug!("directory cleared");
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UserDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDirectory")
            .field("len", &self.len())
            .finish()
    }
}
