//! Actions for the fetch hooks.

use marquee_client::{Movie, MovieFilters, Review};

/// Identifies one fetch hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookId {
    Movies,
    Movie,
    Reviews,
    Home,
    WatchlistMovies,
}

impl HookId {
    /// Message shown in place of the page content when this hook fails
    pub fn error_message(&self) -> &'static str {
        match self {
            HookId::Movies => "Failed to fetch movies",
            HookId::Movie => "Failed to fetch movie details",
            HookId::Reviews => "Failed to fetch reviews",
            HookId::Home => "Failed to load movies",
            HookId::WatchlistMovies => "Failed to load watchlist",
        }
    }
}

/// A hook's dependency key, i.e. what it should be showing
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Movies(MovieFilters),
    Movie(String),
    Reviews(String),
    Home,
    /// Ids of the movies on the watchlist
    WatchlistMovies(Vec<String>),
}

impl Query {
    pub fn hook(&self) -> HookId {
        match self {
            Query::Movies(_) => HookId::Movies,
            Query::Movie(_) => HookId::Movie,
            Query::Reviews(_) => HookId::Reviews,
            Query::Home => HookId::Home,
            Query::WatchlistMovies(_) => HookId::WatchlistMovies,
        }
    }
}

/// Data a hook's fetch resolved with
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Movies(Vec<Movie>),
    /// `None` when the catalog has no such movie
    Movie(Option<Movie>),
    Reviews(Vec<Review>),
    Home {
        featured: Vec<Movie>,
        trending: Vec<Movie>,
    },
    WatchlistMovies(Vec<Movie>),
}

impl QueryResult {
    pub fn hook(&self) -> HookId {
        match self {
            QueryResult::Movies(_) => HookId::Movies,
            QueryResult::Movie(_) => HookId::Movie,
            QueryResult::Reviews(_) => HookId::Reviews,
            QueryResult::Home { .. } => HookId::Home,
            QueryResult::WatchlistMovies(_) => HookId::WatchlistMovies,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchAction {
    /// Show `query` in its hook; no-op if the hook already shows or loads it
    Request(Query),

    /// Refetch a hook with its current key (re-keyed from the store for
    /// `Movies` and `WatchlistMovies`)
    Reload(HookId),

    /// A fetch for `query` went out, tagged with `generation`
    Started { query: Query, generation: u64 },

    /// A fetch resolved
    Succeeded { generation: u64, result: QueryResult },

    /// A fetch failed; `error` is the display message
    Failed {
        hook: HookId,
        generation: u64,
        error: String,
    },
}
