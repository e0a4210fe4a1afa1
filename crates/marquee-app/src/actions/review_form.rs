//! Actions for the review form on the movie detail page.

use marquee_client::Review;

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewFormAction {
    /// User pressed "Submit Review"
    Submit {
        movie_id: String,
        rating: u8,
        comment: String,
    },

    /// Draft was refused before any network call
    Rejected(String),

    /// The draft passed validation and is on its way to the catalog
    Submitting,

    /// The catalog stored the review
    Submitted(Review),

    /// The catalog call failed
    SubmitFailed(String),
}
