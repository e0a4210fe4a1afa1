pub mod movie_card_view_model;
pub mod profile_stats;

pub use movie_card_view_model::MovieCardViewModel;
pub use profile_stats::{user_reviews, ProfileStats};
