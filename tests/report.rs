//! Report Rendering Tests
//!
//! The report text is a compatibility surface: the title, the status words,
//! and every registered name must appear verbatim.

use userdir::{UserDirectory, EMPTY_NOTICE, REPORT_TITLE};

// ============================================================================
// Title
// ============================================================================

#[test]
fn report_contains_title() {
    let mut dir = UserDirectory::new();
    dir.create_user("Alice", "alice@email.com", 28).unwrap();

    let report = dir.generate_report();

    assert!(report.contains("Relatório de Usuários"));
}

#[test]
fn empty_directory_still_produces_titled_report() {
    let dir = UserDirectory::new();

    let report = dir.generate_report();

    assert!(!report.is_empty());
    assert!(report.contains(REPORT_TITLE));
}

#[test]
fn empty_directory_report_states_no_users() {
    let dir = UserDirectory::new();

    let report = dir.generate_report();

    assert!(report.contains(EMPTY_NOTICE));
}

// ============================================================================
// Contents
// ============================================================================

#[test]
fn report_contains_user_name() {
    let mut dir = UserDirectory::new();
    dir.create_user("Alice", "alice@email.com", 28).unwrap();

    let report = dir.generate_report();

    assert!(report.contains("Alice"));
}

#[test]
fn report_contains_active_status_word() {
    let mut dir = UserDirectory::new();
    dir.create_user("Alice", "alice@email.com", 28).unwrap();

    let report = dir.generate_report();

    assert!(report.contains("ativo"));
}

#[test]
fn report_shows_inactive_status_after_deactivation() {
    let mut dir = UserDirectory::new();
    let user = dir.create_user("Alice", "alice@email.com", 28).unwrap();
    dir.deactivate_user(&user.id);

    let report = dir.generate_report();

    assert!(report.contains("inativo"));
}

#[test]
fn report_lists_every_registered_user() {
    let mut dir = UserDirectory::new();
    let alice = dir.create_user("Alice", "alice@email.com", 28).unwrap();
    let bob = dir.create_user("Bob", "bob@email.com", 32).unwrap();

    let report = dir.generate_report();

    assert!(report.contains(&alice.name));
    assert!(report.contains(&bob.name));
}

#[test]
fn report_counts_registered_users() {
    let mut dir = UserDirectory::new();
    dir.create_user("Alice", "alice@email.com", 28).unwrap();
    dir.create_user("Bob", "bob@email.com", 32).unwrap();

    let report = dir.generate_report();

    assert!(report.contains("Total de usuários: 2"));
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn report_preserves_insertion_order() {
    let mut dir = UserDirectory::new();
    dir.create_user("Bob", "bob@email.com", 32).unwrap();
    dir.create_user("Alice", "alice@email.com", 28).unwrap();

    let report = dir.generate_report();

    let bob = report.find("Bob").unwrap();
    let alice = report.find("Alice").unwrap();
    assert!(bob < alice, "first created user appears first");
}

#[test]
fn report_is_deterministic_for_fixed_creation_sequence() {
    let mut dir = UserDirectory::new();
    dir.create_user("Alice", "alice@email.com", 28).unwrap();
    dir.create_user("Bob", "bob@email.com", 32).unwrap();

    assert_eq!(dir.generate_report(), dir.generate_report());
}
