//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{BookGenre, BookStatus, StarRating};

/// Book row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub library_id: i32,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    pub review: Option<String>,
    pub rating: Option<StarRating>,
    pub genre: Option<BookGenre>,
    pub date_added: DateTime<Utc>,
    pub date_finished: Option<DateTime<Utc>>,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    pub status: BookStatus,
    pub review: Option<String>,
    pub rating: Option<StarRating>,
    pub genre: Option<BookGenre>,
    /// Defaults to the server clock when omitted
    pub date_added: Option<DateTime<Utc>>,
}

/// Update book request.
///
/// Required fields always overwrite; optional fields merge — an omitted field
/// leaves the stored value untouched.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    pub status: BookStatus,
    pub review: Option<String>,
    pub rating: Option<StarRating>,
    pub genre: Option<BookGenre>,
    pub date_finished: Option<DateTime<Utc>>,
}

/// Book list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    pub status: Option<BookStatus>,
    pub genre: Option<BookGenre>,
    pub rating: Option<StarRating>,
}

/// The single filter a [`BookQuery`] resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookFilter {
    Status(BookStatus),
    Genre(BookGenre),
    Rating(StarRating),
}

impl BookQuery {
    /// Resolve the query to at most one filter.
    ///
    /// Filters are mutually exclusive, not composed: when several are
    /// supplied, status wins over genre, genre over rating. The rest are
    /// ignored.
    pub fn active_filter(&self) -> Option<BookFilter> {
        if let Some(status) = self.status {
            Some(BookFilter::Status(status))
        } else if let Some(genre) = self.genre {
            Some(BookFilter::Genre(genre))
        } else {
            self.rating.map(BookFilter::Rating)
        }
    }
}
