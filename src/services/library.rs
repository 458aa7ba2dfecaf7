//! Library service: the one-library-per-user invariant lives here

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::library::{CreateLibrary, Library, UpdateLibrary},
    repository::Repository,
};

#[derive(Clone)]
pub struct LibraryService {
    repository: Repository,
}

impl LibraryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get the library owned by a user
    pub async fn get_by_user_id(&self, user_id: i32) -> AppResult<Library> {
        self.repository
            .libraries
            .get_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::LibraryNotFound(format!("No library found for user {}", user_id))
            })
    }

    /// Create a library for a user who does not yet own one
    pub async fn create(&self, user_id: i32, library: &CreateLibrary) -> AppResult<Library> {
        library
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self.repository.users.get_by_id(user_id).await?.is_none() {
            return Err(AppError::UserNotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        // Fast path for a clean error; a concurrent create that slips past
        // this check is stopped by the user_id unique constraint below.
        if self
            .repository
            .libraries
            .get_by_user_id(user_id)
            .await?
            .is_some()
        {
            return Err(AppError::LibraryAlreadyExists(
                "User already has a library".to_string(),
            ));
        }

        let created = self
            .repository
            .libraries
            .create(user_id, library)
            .await?
            .ok_or_else(|| {
                AppError::LibraryAlreadyExists("User already has a library".to_string())
            })?;

        tracing::info!("Created library id={} for user id={}", created.id, user_id);
        Ok(created)
    }

    /// Update a user's library; name overwrites, description merges
    pub async fn update(&self, user_id: i32, library: &UpdateLibrary) -> AppResult<()> {
        library
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let updated = self.repository.libraries.update(user_id, library).await?;
        if !updated {
            return Err(AppError::LibraryNotFound(format!(
                "No library found for user {}",
                user_id
            )));
        }
        Ok(())
    }

    /// Delete a user's library and everything in it. Books go first; the
    /// schema does not cascade.
    pub async fn delete(&self, user_id: i32) -> AppResult<()> {
        let library = self.get_by_user_id(user_id).await?;

        let removed = self
            .repository
            .books
            .delete_by_library_id(library.id)
            .await?;
        self.repository.libraries.delete(user_id).await?;

        tracing::info!(
            "Deleted library id={} with {} book(s) for user id={}",
            library.id,
            removed,
            user_id
        );
        Ok(())
    }
}
