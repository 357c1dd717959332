use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{
    ApiError, Clock, NewReview, Person, PlaceDetail, PlaceSummary, PlacesApi, Review,
    ReviewAuthor, Route, SessionStore, SessionToken,
};
use crate::frameworks::pages;
use crate::interface_adapters::document::Document;
use crate::interface_adapters::session_store::MemorySessionStore;

// Shared adjustable time source so expiry assertions are deterministic.
#[derive(Clone)]
pub(crate) struct FixedClock(Arc<AtomicU64>);

impl FixedClock {
    pub(crate) fn new(now: u64) -> Self {
        Self(Arc::new(AtomicU64::new(now)))
    }

    pub(crate) fn set(&self, now: u64) {
        self.0.store(now, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_epoch_seconds(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

pub(crate) fn token(value: &str) -> SessionToken {
    SessionToken::new(value).expect("test token must not be empty")
}

pub(crate) fn empty_store() -> MemorySessionStore<FixedClock> {
    MemorySessionStore::new(FixedClock::new(1_700_000_000))
}

pub(crate) async fn signed_in_store(value: &str) -> MemorySessionStore<FixedClock> {
    let store = empty_store();
    store
        .set_token(token(value), 3600)
        .await
        .expect("memory store set cannot fail");
    store
}

pub(crate) fn page(route: Route) -> Document {
    pages::open(route)
}

pub(crate) fn summary(id: &str, price: f64) -> PlaceSummary {
    PlaceSummary {
        id: id.to_string(),
        title: format!("Place {id}"),
        description: "A nice place".to_string(),
        price,
        location: None,
        latitude: None,
        longitude: None,
    }
}

pub(crate) fn detail(id: &str) -> PlaceDetail {
    PlaceDetail {
        summary: summary(id, 120.0),
        owner: Some(Person {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }),
        amenities: Vec::new(),
        rooms: None,
        capacity: None,
        surface: None,
        reviews: vec![Review {
            text: "Lovely".to_string(),
            rating: 5,
            author: ReviewAuthor::Person("Alan Turing".to_string()),
        }],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiCall {
    Login { email: String, password: String },
    ListPlaces { token: Option<String> },
    GetPlace { id: String, token: Option<String> },
    SubmitReview { token: String, review: NewReview },
}

// Fake API with canned results; records every call it receives.
#[derive(Clone)]
pub(crate) struct RecordingApi {
    calls: Arc<Mutex<Vec<ApiCall>>>,
    login: Result<SessionToken, ApiError>,
    places: Result<Vec<PlaceSummary>, ApiError>,
    place: Result<PlaceDetail, ApiError>,
    review: Result<(), ApiError>,
}

impl RecordingApi {
    pub(crate) fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            login: Ok(token("issued-token")),
            places: Ok(Vec::new()),
            place: Err(ApiError::Application {
                status: 404,
                message: Some("Place not found".to_string()),
            }),
            review: Ok(()),
        }
    }

    pub(crate) fn with_login(mut self, result: Result<SessionToken, ApiError>) -> Self {
        self.login = result;
        self
    }

    pub(crate) fn with_places(mut self, result: Result<Vec<PlaceSummary>, ApiError>) -> Self {
        self.places = result;
        self
    }

    pub(crate) fn with_place(mut self, result: Result<PlaceDetail, ApiError>) -> Self {
        self.place = result;
        self
    }

    pub(crate) fn with_review(mut self, result: Result<(), ApiError>) -> Self {
        self.review = result;
        self
    }

    pub(crate) fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().expect("calls mutex poisoned").push(call);
    }
}

#[async_trait]
impl PlacesApi for RecordingApi {
    async fn login(&self, email: &str, password: &str) -> Result<SessionToken, ApiError> {
        self.record(ApiCall::Login {
            email: email.to_string(),
            password: password.to_string(),
        });
        self.login.clone()
    }

    async fn list_places(
        &self,
        token: Option<&SessionToken>,
    ) -> Result<Vec<PlaceSummary>, ApiError> {
        self.record(ApiCall::ListPlaces {
            token: token.map(|t| t.as_str().to_string()),
        });
        self.places.clone()
    }

    async fn get_place(
        &self,
        id: &str,
        token: Option<&SessionToken>,
    ) -> Result<PlaceDetail, ApiError> {
        self.record(ApiCall::GetPlace {
            id: id.to_string(),
            token: token.map(|t| t.as_str().to_string()),
        });
        self.place.clone()
    }

    async fn submit_review(
        &self,
        token: &SessionToken,
        review: &NewReview,
    ) -> Result<(), ApiError> {
        self.record(ApiCall::SubmitReview {
            token: token.as_str().to_string(),
            review: review.clone(),
        });
        self.review.clone()
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub get: bool,
    pub set: bool,
    pub clear: bool,
}

// Session store whose operations can be made to fail.
#[derive(Clone)]
pub(crate) struct FailingStore {
    inner: MemorySessionStore<FixedClock>,
    failures: FailureFlags,
}

impl FailingStore {
    pub(crate) fn new(inner: MemorySessionStore<FixedClock>, failures: FailureFlags) -> Self {
        Self { inner, failures }
    }
}

#[async_trait]
impl SessionStore for FailingStore {
    async fn get_token(&self) -> Result<Option<SessionToken>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }
        self.inner.get_token().await
    }

    async fn set_token(&self, token: SessionToken, ttl_seconds: u64) -> Result<(), String> {
        if self.failures.set {
            return Err("set failed".to_string());
        }
        self.inner.set_token(token, ttl_seconds).await
    }

    async fn clear_token(&self) -> Result<(), String> {
        if self.failures.clear {
            return Err("clear failed".to_string());
        }
        self.inner.clear_token().await
    }
}
