//! Movie Card View Model
//!
//! Pre-computes presentation data for one movie in a grid.

use crate::state::AppState;
use marquee_client::Movie;

#[derive(Debug, Clone, PartialEq)]
pub struct MovieCardViewModel {
    pub id: String,
    pub title: String,
    pub year: String,
    /// One decimal, e.g. "8.8"
    pub rating: String,
    /// Minutes with unit, e.g. "166m"
    pub duration: String,
    /// Genre tags joined with ", "
    pub genres: String,
    pub featured: bool,
    pub trending: bool,
    pub in_watchlist: bool,
}

impl MovieCardViewModel {
    pub fn from_movie(movie: &Movie, state: &AppState) -> Self {
        Self {
            id: movie.id.clone(),
            title: movie.title.clone(),
            year: movie.year.to_string(),
            rating: format!("{:.1}", movie.rating),
            duration: format!("{}m", movie.duration),
            genres: movie.genre.join(", "),
            featured: movie.featured,
            trending: movie.trending,
            in_watchlist: state.is_in_watchlist(&movie.id),
        }
    }

    pub fn from_movies(movies: &[Movie], state: &AppState) -> Vec<Self> {
        movies
            .iter()
            .map(|movie| Self::from_movie(movie, state))
            .collect()
    }

    /// Single-line rendering used by the text views
    pub fn line(&self) -> String {
        let heart = if self.in_watchlist { "♥" } else { "♡" };
        let mut line = format!(
            "{} [{}] {} ({}) ★ {} · {} · {}",
            heart, self.id, self.title, self.year, self.rating, self.duration, self.genres
        );
        if self.featured {
            line.push_str(" · featured");
        }
        if self.trending {
            line.push_str(" · trending");
        }
        line
    }
}
