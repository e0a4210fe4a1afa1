use super::{error_panel, heading, movie_grid, LOADING};
use crate::state::{AppState, FetchStatus};
use crate::view_models::MovieCardViewModel;

pub fn render_home(state: &AppState) -> String {
    let feed = match &state.hooks.home.status {
        FetchStatus::Idle | FetchStatus::Loading => return format!("{LOADING}\n"),
        FetchStatus::Error(message) => return error_panel(message),
        FetchStatus::Loaded(feed) => feed,
    };

    let mut out = heading("Discover Amazing Movies");
    out.push_str(
        "Your ultimate destination for movie reviews, ratings, and recommendations.\n\n",
    );

    out.push_str(&heading("Featured Movies"));
    movie_grid(&mut out, &MovieCardViewModel::from_movies(&feed.featured, state));
    out.push('\n');

    out.push_str(&heading("Trending Now"));
    movie_grid(&mut out, &MovieCardViewModel::from_movies(&feed.trending, state));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HomeFeed;
    use marquee_client::Catalog;

    #[test]
    fn test_sections() {
        let catalog = Catalog::seeded();
        let mut state = AppState::default();
        state.hooks.home.begin((), 1);
        state.hooks.home.settle(
            1,
            Ok(HomeFeed {
                featured: catalog.featured(),
                trending: catalog.trending(),
            }),
        );

        let page = render_home(&state);
        let featured = page.find("Featured Movies").unwrap();
        let trending = page.find("Trending Now").unwrap();
        assert!(featured < trending);
        assert!(page.contains("Oppenheimer"));
        assert!(page[trending..].contains("The Batman"));
    }

    #[test]
    fn test_error_replaces_content() {
        let mut state = AppState::default();
        state.hooks.home.begin((), 1);
        state
            .hooks
            .home
            .settle(1, Err("Failed to load movies".to_string()));

        let page = render_home(&state);
        assert!(page.contains("Failed to load movies"));
        assert!(!page.contains("Featured"));
    }
}
