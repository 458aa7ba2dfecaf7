//! Books repository for database operations
//!
//! Every single-book query is keyed by (id, library_id), never by id alone,
//! so a resolved library bounds everything a caller can reach.

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        book::{Book, CreateBook, UpdateBook},
        enums::{BookGenre, BookStatus, StarRating},
    },
};

const BOOK_COLUMNS: &str =
    "id, library_id, title, author, status, review, rating, genre, date_added, date_finished";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a book by id within a library
    pub async fn get_by_id(&self, id: i32, library_id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE id = $1 AND library_id = $2",
            BOOK_COLUMNS
        ))
        .bind(id)
        .bind(library_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// List all books in a library
    pub async fn get_by_library_id(&self, library_id: i32) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE library_id = $1 ORDER BY date_added",
            BOOK_COLUMNS
        ))
        .bind(library_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// List books in a library with a given status
    pub async fn get_by_status(&self, status: BookStatus, library_id: i32) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE status = $1 AND library_id = $2 ORDER BY date_added",
            BOOK_COLUMNS
        ))
        .bind(status)
        .bind(library_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// List books in a library with a given genre
    pub async fn get_by_genre(&self, genre: BookGenre, library_id: i32) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE genre = $1 AND library_id = $2 ORDER BY date_added",
            BOOK_COLUMNS
        ))
        .bind(genre)
        .bind(library_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// List books in a library with a given star rating
    pub async fn get_by_rating(&self, rating: StarRating, library_id: i32) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE rating = $1 AND library_id = $2 ORDER BY date_added",
            BOOK_COLUMNS
        ))
        .bind(rating)
        .bind(library_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Insert a new book into a library
    pub async fn create(
        &self,
        library_id: i32,
        book: &CreateBook,
        date_added: DateTime<Utc>,
    ) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(&format!(
            r#"
            INSERT INTO books (library_id, title, author, status, review, rating, genre, date_added)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            BOOK_COLUMNS
        ))
        .bind(library_id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.status)
        .bind(&book.review)
        .bind(book.rating)
        .bind(book.genre)
        .bind(date_added)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Update a book within a library. Required fields overwrite, optional
    /// fields merge via COALESCE. Returns false when no (id, library_id) row
    /// matched.
    pub async fn update(&self, id: i32, library_id: i32, book: &UpdateBook) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE books SET
                title = $1,
                author = $2,
                status = $3,
                review = COALESCE($4, review),
                rating = COALESCE($5, rating),
                genre = COALESCE($6, genre),
                date_finished = COALESCE($7, date_finished)
            WHERE id = $8 AND library_id = $9
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.status)
        .bind(&book.review)
        .bind(book.rating)
        .bind(book.genre)
        .bind(book.date_finished)
        .bind(id)
        .bind(library_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a book within a library. Returns false when no row matched.
    pub async fn delete(&self, id: i32, library_id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1 AND library_id = $2")
            .bind(id)
            .bind(library_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every book in a library, returning the number removed
    pub async fn delete_by_library_id(&self, library_id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM books WHERE library_id = $1")
            .bind(library_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
