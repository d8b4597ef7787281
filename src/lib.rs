//! technotes-api
//!
//! REST backend for user and note management:
//! - user CRUD with duplicate-username and referential-integrity guards
//! - bcrypt password hashing
//! - request and error audit logs with a serialized writer

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::audit::AuditLog;
use infrastructure::note::InMemoryNoteRepository;
use infrastructure::user::{BcryptHasher, InMemoryUserRepository, UserService};

/// Create the application state with all services initialized.
///
/// Repositories are constructed here and injected into the service layer;
/// nothing else in the process holds storage handles.
pub fn create_app_state(config: &AppConfig) -> AppState {
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let note_repository = Arc::new(InMemoryNoteRepository::new());
    let password_hasher = Arc::new(BcryptHasher::new());

    let user_service = Arc::new(UserService::new(
        user_repository,
        note_repository,
        password_hasher,
    ));

    let audit_log = AuditLog::new(config.audit.dir.clone());

    AppState::new(user_service, audit_log)
}
