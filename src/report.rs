//! Plain-text report rendering
//!
//! The title, the empty-directory notice, and the status words are
//! consumer-facing literals; downstream parsers match on them verbatim.

use crate::types::User;
use std::fmt::Write;

/// Report title. Consumers match on this substring.
pub const REPORT_TITLE: &str = "Relatório de Usuários";

/// Line shown when the directory holds no records.
pub const EMPTY_NOTICE: &str = "Nenhum usuário cadastrado.";

/// Render the report for `users`, in the order given.
///
/// The title line is always present. Each user contributes one line with
/// name, email, and current status word.
pub fn render(users: &[User]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", REPORT_TITLE);

    if users.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_NOTICE);
        return out;
    }

    let _ = writeln!(out, "Total de usuários: {}", users.len());
    for user in users {
        let _ = writeln!(out, "- {} <{}> [{}]", user.name, user.email, user.status);
    }

    out
}
