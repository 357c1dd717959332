use async_trait::async_trait;

use crate::domain::errors::ApiError;
use crate::domain::place::{PlaceDetail, PlaceSummary};
use crate::domain::review::NewReview;
use crate::domain::route::Route;
use crate::domain::session::SessionToken;
use crate::domain::view::Node;

// Port for the persisted session credential.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get_token(&self) -> Result<Option<SessionToken>, String>;
    async fn set_token(&self, token: SessionToken, ttl_seconds: u64) -> Result<(), String>;
    async fn clear_token(&self) -> Result<(), String>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> u64;
}

// Controllers depend on this trait, not the concrete HTTP client.
// Each call is a single request with no retry.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<SessionToken, ApiError>;

    async fn list_places(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<Vec<PlaceSummary>, ApiError>;

    async fn get_place(
        &self,
        id: &str,
        token: Option<&SessionToken>,
    ) -> Result<PlaceDetail, ApiError>;

    async fn submit_review(&self, token: &SessionToken, review: &NewReview)
    -> Result<(), ApiError>;
}

// Port for the surface hosting the current page. Targets are element ids;
// a missing target is ignored by implementations.
pub trait Page {
    fn location(&self) -> &Route;
    // Replace the children of `target`.
    fn mount(&mut self, target: &str, content: Vec<Node>);
    fn set_text(&mut self, target: &str, text: &str);
    fn set_disabled(&mut self, target: &str, disabled: bool);
    fn set_hidden(&mut self, target: &str, hidden: bool);
    fn reset_form(&mut self, target: &str);
    fn alert(&mut self, message: &str);
    fn navigate(&mut self, route: Route);
    fn reload(&mut self);
}
