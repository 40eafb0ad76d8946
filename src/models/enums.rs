//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Genre
// ---------------------------------------------------------------------------

/// Book genre classification.
///
/// Serialized with its display label; the upper-case identifiers are
/// accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Genre {
    #[serde(rename = "Science Fiction", alias = "SCI_FI")]
    SciFi,
    #[serde(rename = "Fantasy", alias = "FANTASY")]
    Fantasy,
    #[serde(rename = "Horror", alias = "HORROR")]
    Horror,
    #[serde(rename = "Mystery", alias = "MYSTERY")]
    Mystery,
    #[serde(rename = "Romance", alias = "ROMANCE")]
    Romance,
    #[serde(rename = "Thriller", alias = "THRILLER")]
    Thriller,
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Genre::SciFi => "Science Fiction",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::Thriller => "Thriller",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_alias() {
        let label: Genre = serde_json::from_str("\"Science Fiction\"").unwrap();
        let alias: Genre = serde_json::from_str("\"SCI_FI\"").unwrap();
        assert_eq!(label, Genre::SciFi);
        assert_eq!(alias, Genre::SciFi);
        assert_eq!(serde_json::to_string(&Genre::Fantasy).unwrap(), "\"Fantasy\"");
    }

    #[test]
    fn test_display_matches_wire_label() {
        for genre in [Genre::SciFi, Genre::Horror, Genre::Thriller] {
            let wire = serde_json::to_string(&genre).unwrap();
            assert_eq!(wire, format!("\"{}\"", genre));
        }
    }

    #[test]
    fn test_unknown_genre() {
        assert!(serde_json::from_str::<Genre>("\"Poetry\"").is_err());
        assert!(serde_json::from_str::<Genre>("\"fantasy\"").is_err());
    }
}
