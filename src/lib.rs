//! # Userdir
//!
//! In-memory user directory with validation, lifecycle, and reporting.
//!
//! The directory owns a process-local collection of user records and
//! exposes four operations over it: create (with age validation), fetch by
//! id, deactivate (with an administrator exception), and a plain-text
//! report. There is no persistence, networking, or concurrency control;
//! hosts that share a directory across threads serialize access themselves.
//!
//! ## Quick Start
//!
//! ```
//! use userdir::UserDirectory;
//!
//! let mut dir = UserDirectory::new();
//!
//! // Create records
//! let alice = dir.create_user("Alice", "alice@email.com", 28)?;
//! let admin = dir.create_administrator("Admin", "admin@teste.com", 40)?;
//!
//! // Fetch and deactivate
//! assert!(dir.get_user(&alice.id).is_some());
//! assert!(dir.deactivate_user(&alice.id));
//! assert!(!dir.deactivate_user(&admin.id)); // administrators are protected
//!
//! // Plain-text report
//! let report = dir.generate_report();
//! assert!(report.contains("Relatório de Usuários"));
//! # Ok::<(), userdir::Error>(())
//! ```
//!
//! ## Semantics
//!
//! - Every stored record has an age of at least [`LEGAL_AGE`]; creation
//!   below that fails with the fixed validation message.
//! - Records are created `ativo` and can transition once, to `inativo`.
//!   Administrators never leave `ativo`.
//! - Absence of a record is a normal outcome (`Option` / `bool`), never an
//!   error.
//! - The report always carries the "Relatório de Usuários" title and lists
//!   users in insertion order.

#![warn(missing_docs)]

mod directory;
mod error;
mod report;
mod types;

// Re-export main entry points
pub use directory::{UserDirectory, LEGAL_AGE};
pub use error::{Error, Result};

// Re-export types and report literals
pub use report::{EMPTY_NOTICE, REPORT_TITLE};
pub use types::{User, UserId, UserStatus};
