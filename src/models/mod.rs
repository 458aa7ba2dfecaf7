//! Data models for Shelfmark

pub mod book;
pub mod enums;
pub mod library;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookFilter, BookQuery};
pub use enums::{BookGenre, BookStatus, StarRating};
pub use library::Library;
pub use user::{User, UserClaims, UserRead};
