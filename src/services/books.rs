//! Library-scoped book service
//!
//! Every operation first resolves the caller's library by user id and then
//! keys all book access by that library's id. A book id supplied by the
//! caller can therefore only ever match rows in their own library.

use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookFilter, BookQuery, CreateBook, UpdateBook},
        library::Library,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Resolve the caller's library; without one, no book operation proceeds.
    async fn resolve_library(&self, user_id: i32) -> AppResult<Library> {
        self.repository
            .libraries
            .get_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::LibraryNotFound(format!("No library found for user {}", user_id))
            })
    }

    /// Get a book by id within the caller's library
    pub async fn get_by_id(&self, user_id: i32, book_id: i32) -> AppResult<Book> {
        let library = self.resolve_library(user_id).await?;

        self.repository
            .books
            .get_by_id(book_id, library.id)
            .await?
            .ok_or_else(|| AppError::BookNotFound(format!("Book with id {} not found", book_id)))
    }

    /// List the caller's books, applying at most one filter.
    ///
    /// See [`BookQuery::active_filter`] for the precedence when several
    /// filters are supplied.
    pub async fn list(&self, user_id: i32, query: &BookQuery) -> AppResult<Vec<Book>> {
        let library = self.resolve_library(user_id).await?;

        match query.active_filter() {
            Some(BookFilter::Status(status)) => {
                self.repository.books.get_by_status(status, library.id).await
            }
            Some(BookFilter::Genre(genre)) => {
                self.repository.books.get_by_genre(genre, library.id).await
            }
            Some(BookFilter::Rating(rating)) => {
                self.repository.books.get_by_rating(rating, library.id).await
            }
            None => self.repository.books.get_by_library_id(library.id).await,
        }
    }

    /// Add a book to the caller's library
    pub async fn create(&self, user_id: i32, book: &CreateBook) -> AppResult<Book> {
        book.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let library = self.resolve_library(user_id).await?;

        let date_added = book.date_added.unwrap_or_else(Utc::now);
        let created = self
            .repository
            .books
            .create(library.id, book, date_added)
            .await?;

        tracing::info!(
            "Created book id={} in library id={}",
            created.id,
            library.id
        );
        Ok(created)
    }

    /// Update a book in the caller's library. Required fields overwrite,
    /// optional fields merge.
    pub async fn update(&self, user_id: i32, book_id: i32, book: &UpdateBook) -> AppResult<()> {
        book.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let library = self.resolve_library(user_id).await?;

        let updated = self
            .repository
            .books
            .update(book_id, library.id, book)
            .await?;
        if !updated {
            return Err(AppError::BookNotFound(format!(
                "Book with id {} not found",
                book_id
            )));
        }
        Ok(())
    }

    /// Remove a book from the caller's library
    pub async fn delete(&self, user_id: i32, book_id: i32) -> AppResult<()> {
        let library = self.resolve_library(user_id).await?;

        let deleted = self.repository.books.delete(book_id, library.id).await?;
        if !deleted {
            return Err(AppError::BookNotFound(format!(
                "Book with id {} not found",
                book_id
            )));
        }
        Ok(())
    }
}
