mod app;
mod hooks;
mod resource;
mod review_form;

pub use app::AppState;
pub use hooks::{HomeFeed, HooksState};
pub use resource::{FetchStatus, Resource};
pub use review_form::ReviewFormState;
