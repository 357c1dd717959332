use crate::domain::{Element, Node, Page, PlacesApi, SessionStore};
use crate::interface_adapters::presenters::{
    ids, render_add_review_link, render_place_detail, render_reviews,
};
use crate::use_cases::auth_gate::AuthGate;

pub const LOAD_PLACE_FAILED: &str = "Failed to load place details.";
pub const NO_PLACE_SELECTED: &str = "No place selected.";

// Place page controller. Anonymous visitors may read details.
pub struct DetailController<A, S> {
    pub api: A,
    pub gate: AuthGate<S>,
}

impl<A, S> DetailController<A, S>
where
    A: PlacesApi,
    S: SessionStore,
{
    pub fn new(api: A, session: S) -> Self {
        Self {
            api,
            gate: AuthGate { session },
        }
    }

    #[tracing::instrument(name = "detail_load", skip_all)]
    pub async fn load<P: Page>(&self, page: &mut P) {
        let place_id = page.location().place_id().map(str::to_string);
        let token = self.gate.render_nav_control(page).await;

        page.set_hidden(ids::ADD_REVIEW, token.is_none());

        let Some(place_id) = place_id else {
            tracing::warn!("place page opened without an id.");
            page.mount(ids::PLACE_DETAILS, vec![error_message(NO_PLACE_SELECTED)]);
            return;
        };

        if token.is_some() {
            page.mount(ids::ADD_REVIEW, render_add_review_link(&place_id));
        }

        match self.api.get_place(&place_id, token.as_ref()).await {
            Ok(place) => {
                tracing::info!(place_id = %place_id, reviews = place.reviews.len(), "place loaded.");
                page.mount(ids::PLACE_DETAILS, render_place_detail(&place));
                page.mount(ids::REVIEWS, render_reviews(&place.reviews));
            }
            Err(err) => {
                tracing::warn!(place_id = %place_id, error = %err, "failed to load place.");
                page.mount(
                    ids::PLACE_DETAILS,
                    vec![error_message(&err.user_message(LOAD_PLACE_FAILED))],
                );
            }
        }
    }
}

fn error_message(text: &str) -> Node {
    Element::new("p").class("error-message").text(text).into()
}
