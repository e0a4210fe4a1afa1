use super::{error_panel, heading, review_card, LOADING};
use crate::state::{AppState, FetchStatus};
use marquee_client::Movie;
use std::fmt::Write;

fn render_header(out: &mut String, movie: &Movie, in_watchlist: bool) {
    out.push_str(&heading(&movie.title));
    let _ = writeln!(out, "{}\n", movie.description);
    let _ = writeln!(
        out,
        "{} · {} min · ★ {}/10",
        movie.year, movie.duration, movie.rating
    );
    let _ = writeln!(out, "Genres: {}", movie.genre.join(", "));
    let _ = writeln!(out, "Director: {}", movie.director);
    let _ = writeln!(out, "Cast: {}", movie.cast.join(", "));
    if let Some(trailer) = &movie.trailer {
        let _ = writeln!(out, "Trailer: {}", trailer);
    }
    let button = if in_watchlist {
        "[♥ Remove from Watchlist]"
    } else {
        "[♡ Add to Watchlist]"
    };
    let _ = writeln!(out, "{}\n", button);
}

fn render_reviews(out: &mut String, state: &AppState) {
    match &state.hooks.reviews.status {
        FetchStatus::Idle | FetchStatus::Loading => {
            let _ = writeln!(out, "Reviews\n{LOADING}");
        }
        FetchStatus::Error(message) => {
            let _ = writeln!(out, "Reviews");
            out.push_str(&error_panel(message));
        }
        FetchStatus::Loaded(reviews) => {
            let _ = writeln!(out, "Reviews ({})", reviews.len());
            if reviews.is_empty() {
                out.push_str("  No reviews yet. Be the first to review this movie!\n");
            }
            for review in reviews {
                review_card(out, review);
            }
        }
    }

    if let Some(error) = &state.review_form.error {
        let _ = writeln!(out, "\nReview not submitted: {}", error);
    }
}

pub fn render_movie_detail(state: &AppState) -> String {
    let movie = match &state.hooks.movie.status {
        FetchStatus::Idle | FetchStatus::Loading => return format!("{LOADING}\n"),
        FetchStatus::Error(message) => return error_panel(message),
        FetchStatus::Loaded(None) => return error_panel("Movie not found"),
        FetchStatus::Loaded(Some(movie)) => movie,
    };

    let mut out = String::new();
    render_header(&mut out, movie, state.is_in_watchlist(&movie.id));
    render_reviews(&mut out, state);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_client::Catalog;

    fn with_movie(id: &str) -> AppState {
        let catalog = Catalog::seeded();
        let mut state = AppState::default();
        state.hooks.movie.begin(id.to_string(), 1);
        state.hooks.movie.settle(1, Ok(catalog.movie(id)));
        state.hooks.reviews.begin(id.to_string(), 2);
        state.hooks.reviews.settle(2, Ok(catalog.reviews(id)));
        state
    }

    #[test]
    fn test_detail_with_reviews() {
        let page = render_movie_detail(&with_movie("1"));
        assert!(page.contains("Dune: Part Two\n"));
        assert!(page.contains("2024 · 166 min · ★ 8.8/10"));
        assert!(page.contains("Director: Denis Villeneuve"));
        assert!(page.contains("[♡ Add to Watchlist]"));
        assert!(page.contains("Reviews (2)"));
        assert!(page.contains("★★★★★ Alex Johnson · March 15, 2024"));
        assert!(page.contains("★★★★☆ Sarah Chen · March 14, 2024"));
    }

    #[test]
    fn test_detail_without_reviews() {
        let mut state = with_movie("2");
        state.watchlist.push("2".to_string());
        let page = render_movie_detail(&state);
        assert!(page.contains("[♥ Remove from Watchlist]"));
        assert!(page.contains("No reviews yet"));
    }

    #[test]
    fn test_missing_movie() {
        let page = render_movie_detail(&with_movie("404"));
        assert!(page.contains("Movie not found"));
        assert!(!page.contains("Reviews"));
    }

    #[test]
    fn test_review_form_error_is_shown() {
        let mut state = with_movie("1");
        state.review_form.error = Some("please select a rating".to_string());
        let page = render_movie_detail(&state);
        assert!(page.contains("Review not submitted: please select a rating"));
    }
}
