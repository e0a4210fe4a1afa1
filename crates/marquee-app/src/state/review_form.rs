/// Review form on the movie detail page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewFormState {
    /// A submission is in flight
    pub submitting: bool,
    /// Why the last submission was refused or failed
    pub error: Option<String>,
}
