use super::{error_panel, heading, movie_grid, LOADING};
use crate::state::{AppState, FetchStatus};
use crate::view_models::MovieCardViewModel;
use marquee_client::MovieFilters;
use std::fmt::Write;

fn describe_filters(filters: &MovieFilters) -> String {
    if filters.is_unconstrained() {
        return "none".to_string();
    }
    filters
        .query_pairs()
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn found(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Found {count} movie{plural}")
}

pub fn render_movies(state: &AppState) -> String {
    let mut out = heading("All Movies");
    let _ = writeln!(out, "Filters: {}", describe_filters(&state.filters));

    match &state.hooks.movies.status {
        FetchStatus::Idle | FetchStatus::Loading => {
            let _ = writeln!(out, "{LOADING}");
        }
        FetchStatus::Error(message) => out.push_str(&error_panel(message)),
        FetchStatus::Loaded(movies) => {
            let _ = writeln!(out, "{}\n", found(movies.len()));
            if movies.is_empty() {
                out.push_str("No movies match these filters.\n");
            }
            movie_grid(&mut out, &MovieCardViewModel::from_movies(movies, state));
        }
    }
    out
}
