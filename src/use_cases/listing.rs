use crate::domain::{Element, Page, PlaceSummary, PlacesApi, PriceCeiling, SessionStore};
use crate::interface_adapters::presenters::{
    ids, price_filter_visibility, render_place_list, render_price_filter,
};
use crate::use_cases::auth_gate::AuthGate;

pub const LOAD_PLACES_FAILED: &str = "Failed to load places.";

// Home page controller. Keeps the rendered places so the price filter can
// toggle visibility without fetching again.
pub struct ListingController<A, S> {
    pub api: A,
    pub gate: AuthGate<S>,
    places: Vec<PlaceSummary>,
}

impl<A, S> ListingController<A, S>
where
    A: PlacesApi,
    S: SessionStore,
{
    pub fn new(api: A, session: S) -> Self {
        Self {
            api,
            gate: AuthGate { session },
            places: Vec::new(),
        }
    }

    pub fn places(&self) -> &[PlaceSummary] {
        &self.places
    }

    #[tracing::instrument(name = "listing_load", skip_all)]
    pub async fn load<P: Page>(&mut self, page: &mut P) {
        let Some(token) = self.gate.render_nav_control(page).await else {
            // Anonymous visitors get no listing.
            tracing::debug!("no session; listing not requested.");
            return;
        };

        match self.api.list_places(Some(&token)).await {
            Ok(places) => {
                tracing::info!(count = places.len(), "places loaded.");
                page.mount(ids::PLACES_LIST, render_place_list(&places));
                page.mount(ids::PRICE_FILTER, render_price_filter());
                self.places = places;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load places.");
                page.mount(
                    ids::PLACES_LIST,
                    vec![
                        Element::new("p")
                            .class("error-message")
                            .text(err.user_message(LOAD_PLACES_FAILED))
                            .into(),
                    ],
                );
            }
        }
    }

    /// Handle a change of the price filter control.
    pub fn on_filter_change<P: Page>(&self, page: &mut P, value: &str) {
        let Some(ceiling) = PriceCeiling::parse(value) else {
            tracing::warn!(value, "ignoring unparseable price filter value.");
            return;
        };
        for card in price_filter_visibility(&self.places, ceiling) {
            page.set_hidden(&card.card_id, !card.visible);
        }
    }
}
