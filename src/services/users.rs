//! User account service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{UpdateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        self.repository
            .users
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::UserNotFound(format!("User with id {} not found", id)))
    }

    /// Update a user's own account. Omitted fields are left untouched; a new
    /// password gets a fresh salt.
    pub async fn update(&self, user_id: i32, update: &UpdateUser) -> AppResult<User> {
        update
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(ref username) = update.username {
            if self
                .repository
                .users
                .username_exists(username, Some(user_id))
                .await?
            {
                return Err(AppError::UserAlreadyExists("User already exists".to_string()));
            }
        }

        let (hash, salt) = match update.password {
            Some(ref password) => {
                let salt = SaltString::generate(&mut OsRng);
                let hash = Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
                    .to_string();
                (Some(hash), Some(salt.as_str().to_string()))
            }
            None => (None, None),
        };

        let updated = self
            .repository
            .users
            .update(
                user_id,
                update.username.as_deref(),
                hash.as_deref(),
                salt.as_deref(),
            )
            .await?;

        if !updated {
            return Err(AppError::UserNotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        self.get_by_id(user_id).await
    }

    /// Delete a user's own account, cascading explicitly: books first, then
    /// the library, then the user. The storage schema does not cascade.
    pub async fn delete(&self, user_id: i32) -> AppResult<()> {
        // Existence check up front so a missing user is reported before any
        // partial cleanup.
        self.get_by_id(user_id).await?;

        if let Some(library) = self.repository.libraries.get_by_user_id(user_id).await? {
            let removed = self.repository.books.delete_by_library_id(library.id).await?;
            self.repository.libraries.delete(user_id).await?;
            tracing::info!(
                "Deleted library id={} with {} book(s) for user id={}",
                library.id,
                removed,
                user_id
            );
        }

        self.repository.users.delete(user_id).await?;
        tracing::info!("Deleted user id={}", user_id);
        Ok(())
    }
}
