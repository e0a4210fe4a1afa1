//! Text views
//!
//! Each page renders the store's state into a plain-text page. A hook in
//! error replaces the page content with an error panel.

mod home_view;
mod movie_detail_view;
mod movies_view;
mod profile_view;

pub use home_view::render_home;
pub use movie_detail_view::render_movie_detail;
pub use movies_view::render_movies;
pub use profile_view::render_profile;

use crate::view_models::MovieCardViewModel;
use chrono::{DateTime, Utc};
use marquee_client::Review;
use std::fmt::Write;

pub(crate) const LOADING: &str = "Loading...";

/// Inline error panel that stands in for a page or section
pub(crate) fn error_panel(message: &str) -> String {
    let width = message.chars().count() + 4;
    let border = "─".repeat(width);
    format!("┌{border}┐\n│  {message}  │\n└{border}┘\n")
}

pub(crate) fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(title.chars().count()))
}

pub(crate) fn movie_grid(out: &mut String, cards: &[MovieCardViewModel]) {
    for card in cards {
        let _ = writeln!(out, "  {}", card.line());
    }
}

/// "March 15, 2024"
pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub(crate) fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub(crate) fn review_card(out: &mut String, review: &Review) {
    let _ = writeln!(
        out,
        "  {} {} · {}",
        stars(review.rating),
        review.user_name,
        format_date(&review.created_at)
    );
    let _ = writeln!(out, "    {}", review.comment);
}
