//! Shared domain enums for books
//!
//! All three enums are stored as SMALLINT discriminants in Postgres.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// BookStatus
// ---------------------------------------------------------------------------

/// Reading status of a book
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum BookStatus {
    Unread = 0,
    Reading = 1,
    Finished = 2,
}

impl From<BookStatus> for i16 {
    fn from(s: BookStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookStatus::Unread => "unread",
            BookStatus::Reading => "reading",
            BookStatus::Finished => "finished",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// BookGenre
// ---------------------------------------------------------------------------

/// Genre classification
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum BookGenre {
    Fantasy = 1,
    ScienceFiction = 2,
    Mystery = 3,
    Thriller = 4,
    Romance = 5,
    Horror = 6,
    HistoricalFiction = 7,
    LiteraryFiction = 8,
    NonFiction = 9,
    Biography = 10,
    Poetry = 11,
    SelfHelp = 12,
    Other = 13,
}

impl From<BookGenre> for i16 {
    fn from(g: BookGenre) -> Self {
        g as i16
    }
}

impl std::fmt::Display for BookGenre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookGenre::Fantasy => "fantasy",
            BookGenre::ScienceFiction => "science_fiction",
            BookGenre::Mystery => "mystery",
            BookGenre::Thriller => "thriller",
            BookGenre::Romance => "romance",
            BookGenre::Horror => "horror",
            BookGenre::HistoricalFiction => "historical_fiction",
            BookGenre::LiteraryFiction => "literary_fiction",
            BookGenre::NonFiction => "non_fiction",
            BookGenre::Biography => "biography",
            BookGenre::Poetry => "poetry",
            BookGenre::SelfHelp => "self_help",
            BookGenre::Other => "other",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// StarRating
// ---------------------------------------------------------------------------

/// Discrete 1-5 star rating, serialized as its numeric value
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[serde(try_from = "i16", into = "i16")]
#[repr(i16)]
pub enum StarRating {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

// Hand-written so the documented wire format matches serde: an integer from
// 1 to 5, not the variant names.
impl<'s> ToSchema<'s> for StarRating {
    fn schema() -> (
        &'s str,
        utoipa::openapi::RefOr<utoipa::openapi::schema::Schema>,
    ) {
        (
            "StarRating",
            utoipa::openapi::RefOr::T(utoipa::openapi::Schema::Object(
                utoipa::openapi::ObjectBuilder::new()
                    .schema_type(utoipa::openapi::SchemaType::Integer)
                    .description(Some("Discrete 1-5 star rating"))
                    .enum_values(Some([1, 2, 3, 4, 5]))
                    .minimum(Some(1.0))
                    .maximum(Some(5.0))
                    .build(),
            )),
        )
    }
}

impl TryFrom<i16> for StarRating {
    type Error = String;

    fn try_from(v: i16) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(StarRating::One),
            2 => Ok(StarRating::Two),
            3 => Ok(StarRating::Three),
            4 => Ok(StarRating::Four),
            5 => Ok(StarRating::Five),
            _ => Err(format!("Star rating must be between 1 and 5, got {}", v)),
        }
    }
}

impl From<StarRating> for i16 {
    fn from(r: StarRating) -> Self {
        r as i16
    }
}

impl std::fmt::Display for StarRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as i16)
    }
}
