use crate::actions::ReviewFormAction;
use crate::state::ReviewFormState;

pub fn reduce_review_form(mut state: ReviewFormState, action: &ReviewFormAction) -> ReviewFormState {
    match action {
        ReviewFormAction::Submit { .. } => {
            // Side effect handled by middleware
        }
        ReviewFormAction::Rejected(message) => {
            state.submitting = false;
            state.error = Some(message.clone());
        }
        ReviewFormAction::Submitting => {
            state.submitting = true;
            state.error = None;
        }
        ReviewFormAction::Submitted(_) => {
            state = ReviewFormState::default();
        }
        ReviewFormAction::SubmitFailed(message) => {
            state.submitting = false;
            state.error = Some(message.clone());
        }
    }
    state
}
