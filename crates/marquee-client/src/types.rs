//! Catalog data transfer objects
//!
//! Wire names are camelCase (`movieId`, `userName`, `createdAt`, `minRating`)
//! so the same types serve the in-memory catalog and the routing server.

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A movie from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Genre tags, e.g. `["Sci-Fi", "Drama"]`
    pub genre: Vec<String>,
    pub year: i32,
    /// Average audience rating on a 0-10 scale
    pub rating: f64,
    /// Runtime in minutes
    pub duration: u32,
    pub director: String,
    /// Billing order is preserved
    pub cast: Vec<String>,
    /// Poster image URL
    pub poster: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub trending: bool,
}

impl Movie {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre.iter().any(|g| g == genre)
    }
}

/// A user review of a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub movie_id: String,
    pub user_id: String,
    /// Author name at the time of writing
    pub user_name: String,
    /// Stars, 1 to 5
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// A review as submitted, before the catalog assigns `id` and `createdAt`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub movie_id: String,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    pub fn new(
        movie_id: impl Into<String>,
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            movie_id: movie_id.into(),
            user_id: user_id.into(),
            user_name: user_name.into(),
            rating,
            comment: comment.into(),
        }
    }

    /// Check the rating is 1-5 and the comment is not blank
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.rating {
            0 => return Err(ValidationError::MissingRating),
            1..=5 => {}
            other => return Err(ValidationError::RatingOutOfRange(other)),
        }
        if self.comment.trim().is_empty() {
            return Err(ValidationError::EmptyComment);
        }
        Ok(())
    }

    /// Materialize into a stored review
    pub fn into_review(self, id: String, created_at: DateTime<Utc>) -> Review {
        Review {
            id,
            movie_id: self.movie_id,
            user_id: self.user_id,
            user_name: self.user_name,
            rating: self.rating,
            comment: self.comment,
            created_at,
        }
    }
}

/// A user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Movie ids, insertion ordered, never duplicated
    #[serde(default)]
    pub watchlist: Vec<String>,
    /// Ids of reviews authored by this user
    #[serde(default)]
    pub reviews: Vec<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            watchlist: Vec::new(),
            reviews: Vec::new(),
        }
    }
}

/// Active catalog filters, combined with logical AND
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieFilters {
    /// Case-insensitive substring of title or description; empty matches all
    #[serde(default)]
    pub search: String,
    /// Exact genre tag
    #[serde(default)]
    pub genre: Option<String>,
    /// Release year as text, compared exactly
    #[serde(default)]
    pub year: Option<String>,
    /// Minimum rating; 0 means unconstrained
    #[serde(default)]
    pub min_rating: f64,
}

impl MovieFilters {
    /// Check a movie against every active filter
    pub fn matches(&self, movie: &Movie) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !movie.title.to_lowercase().contains(&needle)
                && !movie.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some(genre) = non_empty(&self.genre) {
            if !movie.has_genre(genre) {
                return false;
            }
        }

        if let Some(year) = non_empty(&self.year) {
            if movie.year.to_string() != year {
                return false;
            }
        }

        if self.min_rating > 0.0 && movie.rating < self.min_rating {
            return false;
        }

        true
    }

    /// True when no filter constrains the catalog
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && non_empty(&self.genre).is_none()
            && non_empty(&self.year).is_none()
            && self.min_rating <= 0.0
    }

    /// Shallow-merge a patch; fields absent from the patch keep their value
    pub fn merged(&self, patch: &FilterPatch) -> Self {
        Self {
            search: patch.search.clone().unwrap_or_else(|| self.search.clone()),
            genre: match &patch.genre {
                Some(genre) => normalize(genre.clone()),
                None => self.genre.clone(),
            },
            year: match &patch.year {
                Some(year) => normalize(year.clone()),
                None => self.year.clone(),
            },
            min_rating: patch.min_rating.unwrap_or(self.min_rating),
        }
    }

    /// Query string pairs for the routing server (`minRating` etc.)
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if let Some(genre) = non_empty(&self.genre) {
            pairs.push(("genre", genre.to_string()));
        }
        if let Some(year) = non_empty(&self.year) {
            pairs.push(("year", year.to_string()));
        }
        if self.min_rating > 0.0 {
            pairs.push(("minRating", self.min_rating.to_string()));
        }
        pairs
    }
}

/// Partial update of [`MovieFilters`]
///
/// `None` leaves a field untouched. For the optional fields, `Some(None)`
/// clears the filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub genre: Option<Option<String>>,
    pub year: Option<Option<String>>,
    pub min_rating: Option<f64>,
}

impl FilterPatch {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn genre(mut self, genre: Option<impl Into<String>>) -> Self {
        self.genre = Some(genre.map(Into::into));
        self
    }

    pub fn year(mut self, year: Option<impl Into<String>>) -> Self {
        self.year = Some(year.map(Into::into));
        self
    }

    pub fn min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// An empty selection ("All Genres") means no filter
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn dune() -> Movie {
        Catalog::seeded().movie("1").unwrap()
    }

    #[test]
    fn test_search_matches_title_or_description_case_insensitively() {
        let movie = dune();
        let by_title = MovieFilters {
            search: "DUNE".to_string(),
            ..Default::default()
        };
        let by_description = MovieFilters {
            search: "fremen".to_string(),
            ..Default::default()
        };
        let miss = MovieFilters {
            search: "batman".to_string(),
            ..Default::default()
        };
        assert!(by_title.matches(&movie));
        assert!(by_description.matches(&movie));
        assert!(!miss.matches(&movie));
    }

    #[test]
    fn test_genre_is_exact_membership() {
        let movie = dune();
        let exact = MovieFilters {
            genre: Some("Sci-Fi".to_string()),
            ..Default::default()
        };
        let partial = MovieFilters {
            genre: Some("Sci".to_string()),
            ..Default::default()
        };
        assert!(exact.matches(&movie));
        assert!(!partial.matches(&movie));
    }

    #[test]
    fn test_year_and_min_rating() {
        let movie = dune();
        let year = MovieFilters {
            year: Some("2024".to_string()),
            ..Default::default()
        };
        let wrong_year = MovieFilters {
            year: Some("2023".to_string()),
            ..Default::default()
        };
        let high_bar = MovieFilters {
            min_rating: 9.0,
            ..Default::default()
        };
        let exact_bar = MovieFilters {
            min_rating: 8.8,
            ..Default::default()
        };
        assert!(year.matches(&movie));
        assert!(!wrong_year.matches(&movie));
        assert!(!high_bar.matches(&movie));
        assert!(exact_bar.matches(&movie));
    }

    #[test]
    fn test_merge_keeps_absent_fields() {
        let filters = MovieFilters {
            search: "dune".to_string(),
            genre: Some("Drama".to_string()),
            year: Some("2024".to_string()),
            min_rating: 7.0,
        };

        let merged = filters.merged(&FilterPatch::default().min_rating(8.0));
        assert_eq!(merged.search, "dune");
        assert_eq!(merged.genre.as_deref(), Some("Drama"));
        assert_eq!(merged.year.as_deref(), Some("2024"));
        assert_eq!(merged.min_rating, 8.0);

        let cleared = merged.merged(&FilterPatch::default().genre(None::<String>).search(""));
        assert_eq!(cleared.genre, None);
        assert!(cleared.search.is_empty());
        assert_eq!(cleared.year.as_deref(), Some("2024"));
    }

    #[test]
    fn test_empty_selection_clears_filter() {
        let filters = MovieFilters {
            genre: Some("Drama".to_string()),
            ..Default::default()
        };
        let merged = filters.merged(&FilterPatch::default().genre(Some("")));
        assert_eq!(merged.genre, None);
        assert!(merged.is_unconstrained());
    }

    #[test]
    fn test_query_pairs_skip_unconstrained_fields() {
        assert!(MovieFilters::default().query_pairs().is_empty());

        let filters = MovieFilters {
            search: "war".to_string(),
            genre: None,
            year: Some("2022".to_string()),
            min_rating: 7.5,
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("search", "war".to_string()),
                ("year", "2022".to_string()),
                ("minRating", "7.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_review_validation() {
        let ok = NewReview::new("1", "u1", "Alex", 4, "Loved it");
        assert_eq!(ok.validate(), Ok(()));

        let no_rating = NewReview::new("1", "u1", "Alex", 0, "Loved it");
        assert_eq!(no_rating.validate(), Err(ValidationError::MissingRating));

        let too_high = NewReview::new("1", "u1", "Alex", 6, "Loved it");
        assert_eq!(too_high.validate(), Err(ValidationError::RatingOutOfRange(6)));

        let blank = NewReview::new("1", "u1", "Alex", 3, "   ");
        assert_eq!(blank.validate(), Err(ValidationError::EmptyComment));
    }

    #[test]
    fn test_review_wire_format_is_camel_case() {
        let review = NewReview::new("1", "u1", "Alex", 5, "Epic")
            .into_review("r1".to_string(), chrono::DateTime::<Utc>::default());
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["movieId"], "1");
        assert_eq!(json["userName"], "Alex");
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
    }
}
