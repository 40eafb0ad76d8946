//! Book model

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::Genre;

/// Book record. The id is assigned by the caller.
///
/// Integer fields also accept their decimal string form on input. The
/// `validate` rules only run when `store.enforce_field_rules` is set.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Book {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: i64,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    /// Year of first publication
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[validate(range(min = 1, message = "Publication year must be positive"))]
    pub publication_year: i32,
    pub genre: Genre,
}

/// All books keyed by id, in insertion order.
///
/// Serialized as a JSON object whose keys are the ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct BookCatalog(pub IndexMap<i64, Book>);

impl BookCatalog {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.keys().copied()
    }
}

impl Book {
    /// Sample records the store starts with
    pub fn samples() -> Vec<Book> {
        vec![
            Book {
                id: 1,
                title: "The Hobbit".to_string(),
                author: "J.R.R. Tolkien".to_string(),
                publication_year: 1937,
                genre: Genre::SciFi,
            },
            Book {
                id: 2,
                title: "The Lord of the Rings".to_string(),
                author: "J.R.R. Tolkien".to_string(),
                publication_year: 1954,
                genre: Genre::Fantasy,
            },
            Book {
                id: 3,
                title: "The Return of the King".to_string(),
                author: "J.R.R. Tolkien".to_string(),
                publication_year: 1955,
                genre: Genre::Fantasy,
            },
        ]
    }
}
