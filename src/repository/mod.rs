//! Repository layer for database operations
//!
//! Repositories speak presence/absence only: `Option<T>` for lookups, `bool`
//! for mutations, and `None` from inserts rejected by a unique constraint.
//! Domain error kinds are attached one layer up, in the services.

pub mod books;
pub mod libraries;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub libraries: libraries::LibrariesRepository,
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            libraries: libraries::LibrariesRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            pool,
        }
    }
}
