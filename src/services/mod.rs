//! Business logic services
//!
//! Services translate repository presence/absence into domain error kinds.
//! Construction is explicit: repositories in, services out, no registry.

pub mod auth;
pub mod books;
pub mod library;
pub mod users;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub users: users::UsersService,
    pub library: library::LibraryService,
    pub books: books::BooksService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            users: users::UsersService::new(repository.clone()),
            library: library::LibraryService::new(repository.clone()),
            books: books::BooksService::new(repository),
        }
    }
}
