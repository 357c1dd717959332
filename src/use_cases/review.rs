use crate::domain::{NewReview, Page, PlacesApi, Route, SessionStore, SessionToken};
use crate::interface_adapters::presenters::ids;
use crate::use_cases::auth_gate::AuthGate;
use crate::use_cases::types::{ReviewForm, SubmitOutcome};

pub const LOGIN_REQUIRED: &str = "You must be logged in to add a review.";
pub const NO_PLACE_SELECTED: &str = "No place selected.";
pub const REVIEW_SUBMITTED: &str = "Review submitted successfully!";
pub const REVIEW_FAILED: &str = "Failed to submit review.";

// Token and place captured when the page loaded.
struct ReviewTarget {
    token: SessionToken,
    place_id: String,
}

// Add-review page controller.
pub struct ReviewController<A, S> {
    pub api: A,
    pub gate: AuthGate<S>,
    target: Option<ReviewTarget>,
}

impl<A, S> ReviewController<A, S>
where
    A: PlacesApi,
    S: SessionStore,
{
    pub fn new(api: A, session: S) -> Self {
        Self {
            api,
            gate: AuthGate { session },
            target: None,
        }
    }

    /// Returns false when the page cannot be used and a redirect home was
    /// requested.
    #[tracing::instrument(name = "review_load", skip_all)]
    pub async fn load<P: Page>(&mut self, page: &mut P) -> bool {
        let place_id = page.location().place_id().map(str::to_string);
        let token = self.gate.render_nav_control(page).await;

        match (token, place_id) {
            (Some(token), Some(place_id)) => {
                self.target = Some(ReviewTarget { token, place_id });
                true
            }
            (None, _) => {
                tracing::debug!("review page requires a session.");
                page.alert(LOGIN_REQUIRED);
                page.navigate(Route::Index);
                false
            }
            (Some(_), None) => {
                tracing::debug!("review page opened without an id.");
                page.alert(NO_PLACE_SELECTED);
                page.navigate(Route::Index);
                false
            }
        }
    }

    #[tracing::instrument(name = "review_submit", skip_all)]
    pub async fn on_submit<P: Page>(&self, page: &mut P, form: ReviewForm) -> SubmitOutcome {
        let Some(target) = &self.target else {
            tracing::warn!("review submitted before the page was ready.");
            return SubmitOutcome::Invalid;
        };

        let review = match NewReview::from_form(&target.place_id, &form.rating, &form.text) {
            Ok(review) => review,
            Err(err) => {
                tracing::debug!(error = %err, "review form rejected.");
                page.alert(&err.to_string());
                return SubmitOutcome::Invalid;
            }
        };

        page.set_disabled(ids::REVIEW_SUBMIT, true);

        let outcome = match self.api.submit_review(&target.token, &review).await {
            Ok(()) => {
                tracing::info!(
                    place_id = %target.place_id,
                    rating = review.rating.value(),
                    "review submitted."
                );
                page.alert(REVIEW_SUBMITTED);
                page.reset_form(ids::REVIEW_FORM);
                page.navigate(Route::place(&target.place_id));
                SubmitOutcome::Submitted
            }
            Err(err) => {
                tracing::warn!(place_id = %target.place_id, error = %err, "review rejected.");
                page.alert(&err.user_message(REVIEW_FAILED));
                SubmitOutcome::Failed
            }
        };

        page.set_disabled(ids::REVIEW_SUBMIT, false);
        outcome
    }
}
