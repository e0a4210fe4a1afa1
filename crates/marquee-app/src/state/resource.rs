//! Per-hook fetch state machine: idle, loading, loaded or error.

/// Status of a hook's most recent fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus<T> {
    Idle,
    Loading,
    Loaded(T),
    /// Display message; an error never carries data
    Error(String),
}

/// What one hook shows and which request produced it
///
/// `generation` is the tag of the request the hook currently waits on or
/// displays. Results carrying any other tag are stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<K, T> {
    pub key: Option<K>,
    pub generation: u64,
    pub status: FetchStatus<T>,
}

impl<K, T> Default for Resource<K, T> {
    fn default() -> Self {
        Self {
            key: None,
            generation: 0,
            status: FetchStatus::Idle,
        }
    }
}

impl<K: PartialEq, T> Resource<K, T> {
    /// Enter loading for `key` under a new generation
    pub fn begin(&mut self, key: K, generation: u64) {
        self.key = Some(key);
        self.generation = generation;
        self.status = FetchStatus::Loading;
    }

    /// Apply a result if it belongs to the current request
    ///
    /// Returns false (and changes nothing) for stale generations or when the
    /// hook is not loading.
    pub fn settle(&mut self, generation: u64, outcome: Result<T, String>) -> bool {
        if generation != self.generation || !self.is_loading() {
            return false;
        }
        self.status = match outcome {
            Ok(data) => FetchStatus::Loaded(data),
            Err(message) => FetchStatus::Error(message),
        };
        true
    }

    /// True if the hook is already loading or showing `key`
    pub fn covers(&self, key: &K) -> bool {
        self.key.as_ref() == Some(key)
            && matches!(self.status, FetchStatus::Loading | FetchStatus::Loaded(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.status {
            FetchStatus::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match &mut self.status {
            FetchStatus::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}
