pub mod app_reducer;
pub mod fetch_reducer;
pub mod review_form_reducer;
pub mod watchlist_reducer;
