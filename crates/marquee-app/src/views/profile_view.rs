use super::{error_panel, heading, movie_grid, review_card, LOADING};
use crate::state::{AppState, FetchStatus};
use crate::view_models::{user_reviews, MovieCardViewModel, ProfileStats};
use std::fmt::Write;

pub fn render_profile(state: &AppState) -> String {
    let mut out = match &state.user {
        Some(user) => {
            let mut out = heading(&user.name);
            let _ = writeln!(out, "{}", user.email);
            out
        }
        None => heading("Guest"),
    };

    let stats = ProfileStats::from_state(state);
    let _ = writeln!(
        out,
        "Watchlist: {} · Reviews: {} · Avg Rating: {:.1}\n",
        stats.watchlist_count, stats.review_count, stats.average_rating
    );

    let _ = writeln!(out, "Watchlist ({})", stats.watchlist_count);
    match &state.hooks.watchlist_movies.status {
        FetchStatus::Idle | FetchStatus::Loading => {
            let _ = writeln!(out, "{LOADING}");
        }
        FetchStatus::Error(message) => out.push_str(&error_panel(message)),
        FetchStatus::Loaded(movies) if movies.is_empty() => {
            out.push_str("  Your watchlist is empty\n");
        }
        FetchStatus::Loaded(movies) => {
            movie_grid(&mut out, &MovieCardViewModel::from_movies(movies, state));
        }
    }

    let _ = writeln!(out, "\nReviews ({})", stats.review_count);
    let reviews = user_reviews(state);
    if reviews.is_empty() {
        out.push_str("  You haven't written any reviews yet\n");
    }
    for review in reviews {
        review_card(&mut out, review);
    }
    out
}
