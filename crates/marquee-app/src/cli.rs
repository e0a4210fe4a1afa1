//! Command line interface
//!
//! Each command is one page visit: bootstrap the store, request the page's
//! hooks, wait for them to settle and print the page.

use crate::actions::{Action, Query, ReviewFormAction};
use crate::store::Store;
use crate::views;
use clap::{Args, Parser, Subcommand};
use marquee_client::FilterPatch;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "marquee", version, about = "Browse movies, reviews and your watchlist")]
pub struct Cli {
    /// Config file to use instead of .marquee.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Featured and trending movies
    Home,
    /// Browse the catalog
    Movies(MovieFilterArgs),
    /// Movie details and reviews
    Movie {
        /// Movie id
        id: String,
    },
    /// Review a movie
    Review {
        /// Movie id
        id: String,
        /// Stars, 1 to 5
        #[arg(long)]
        rating: u8,
        #[arg(long)]
        comment: String,
    },
    /// Toggle movies on the watchlist, then show the profile
    Watchlist {
        /// Movie ids to add (or remove, if already listed)
        ids: Vec<String>,
    },
    /// Profile with watchlist and reviews
    Profile,
}

#[derive(Debug, Args)]
pub struct MovieFilterArgs {
    /// Substring of title or description
    #[arg(long)]
    pub search: Option<String>,
    /// Exact genre, e.g. "Sci-Fi"
    #[arg(long)]
    pub genre: Option<String>,
    #[arg(long)]
    pub year: Option<String>,
    #[arg(long)]
    pub min_rating: Option<f64>,
}

impl MovieFilterArgs {
    pub fn patch(&self) -> FilterPatch {
        let mut patch = FilterPatch::default();
        if let Some(search) = &self.search {
            patch = patch.search(search.clone());
        }
        if self.genre.is_some() {
            patch = patch.genre(self.genre.clone());
        }
        if self.year.is_some() {
            patch = patch.year(self.year.clone());
        }
        if let Some(min_rating) = self.min_rating {
            patch = patch.min_rating(min_rating);
        }
        patch
    }
}

/// Visit the page `command` names and render it
pub async fn run(store: &mut Store, command: &Command) -> String {
    match command {
        Command::Home => {
            store.dispatch(Action::request(Query::Home));
            store.run_until_idle().await;
            views::render_home(store.state())
        }
        Command::Movies(args) => {
            store.dispatch(Action::SetFilters(args.patch()));
            let filters = store.state().filters.clone();
            store.dispatch(Action::request(Query::Movies(filters)));
            store.run_until_idle().await;
            views::render_movies(store.state())
        }
        Command::Movie { id } => {
            open_movie(store, id).await;
            views::render_movie_detail(store.state())
        }
        Command::Review {
            id,
            rating,
            comment,
        } => {
            open_movie(store, id).await;
            store.dispatch(Action::ReviewForm(ReviewFormAction::Submit {
                movie_id: id.clone(),
                rating: *rating,
                comment: comment.clone(),
            }));
            store.run_until_idle().await;
            views::render_movie_detail(store.state())
        }
        Command::Watchlist { ids } => {
            let watchlist = store.state().watchlist.clone();
            store.dispatch(Action::request(Query::WatchlistMovies(watchlist)));
            for id in ids {
                store.dispatch(Action::ToggleWatchlist(id.clone()));
            }
            store.run_until_idle().await;
            views::render_profile(store.state())
        }
        Command::Profile => {
            let watchlist = store.state().watchlist.clone();
            store.dispatch(Action::request(Query::WatchlistMovies(watchlist)));
            store.run_until_idle().await;
            views::render_profile(store.state())
        }
    }
}

async fn open_movie(store: &mut Store, id: &str) {
    store.dispatch(Action::request(Query::Movie(id.to_string())));
    store.dispatch(Action::request(Query::Reviews(id.to_string())));
    store.run_until_idle().await;
}
